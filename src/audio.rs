// audio.rs - Ambient track toggle state
//
// User intent (enabled) and resource readiness are tracked separately.
// Playback side effects belong to the wasm layer; a play request only
// ever comes out of an explicit toggle, never from loading state.

/// Side effect requested by a toggle
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Playback {
    Play,
    Pause,
}

pub struct AudioToggle {
    enabled: bool,
    ready: bool,
}

impl AudioToggle {
    pub fn new() -> Self {
        Self {
            enabled: false,
            ready: false,
        }
    }

    /// Flip user intent, returning the playback action to carry out
    pub fn toggle(&mut self) -> Playback {
        self.enabled = !self.enabled;
        if self.enabled { Playback::Play } else { Playback::Pause }
    }

    /// The underlying resource reported it can play
    pub fn can_play(&mut self) {
        self.ready = true;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Button caption for the current state
    pub fn label(&self) -> &'static str {
        if self.enabled {
            "Playing"
        } else if self.ready {
            "Sound"
        } else {
            "Loading"
        }
    }
}
