// audio.rs - Ambient track toggle wiring
//
// The element is created once at mount and never auto-plays. A rejected
// play() is swallowed: the toggle stays enabled and the track stays
// paused, exactly as the environment decided.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlAudioElement};

use crate::audio::{AudioToggle, Playback};
use crate::scene;

const TRACK_VOLUME: f64 = 0.35;

// Keeps rejected play() promises out of the console. A pending play()
// settles after unmount when pause() interrupts it, so the handler must
// outlive every handle.
thread_local! {
    static SWALLOW: Closure<dyn FnMut(JsValue)> =
        Closure::wrap(Box::new(|_rejection: JsValue| {}) as Box<dyn FnMut(JsValue)>);
}

pub struct AudioHandle {
    audio: HtmlAudioElement,
    button: Element,
    on_click: Closure<dyn FnMut()>,
    on_can_play: Closure<dyn FnMut()>,
}

fn refresh(button: &Element, label: &Element, state: &AudioToggle) {
    label.set_text_content(Some(state.label()));
    let _ = button.set_attribute(
        "aria-label",
        if state.enabled() {
            "Pause ambient music"
        } else {
            "Play ambient music"
        },
    );
}

pub fn mount(document: &Document) -> Result<AudioHandle, JsValue> {
    let button = document
        .get_element_by_id("audio-toggle")
        .ok_or("missing #audio-toggle")?;
    let label = document
        .get_element_by_id("audio-label")
        .ok_or("missing #audio-label")?;

    let audio = HtmlAudioElement::new_with_src(scene::TRACK_URL)?;
    audio.set_loop(true);
    audio.set_volume(TRACK_VOLUME);

    let state = Rc::new(RefCell::new(AudioToggle::new()));
    refresh(&button, &label, &state.borrow());

    let on_can_play = {
        let state = state.clone();
        let button = button.clone();
        let label = label.clone();
        Closure::wrap(Box::new(move || {
            let mut state = state.borrow_mut();
            state.can_play();
            refresh(&button, &label, &state);
        }) as Box<dyn FnMut()>)
    };
    audio.add_event_listener_with_callback("canplay", on_can_play.as_ref().unchecked_ref())?;

    let on_click = {
        let state = state.clone();
        let audio = audio.clone();
        let button = button.clone();
        let label = label.clone();
        Closure::wrap(Box::new(move || {
            let action = state.borrow_mut().toggle();
            match action {
                Playback::Play => {
                    if let Ok(request) = audio.play() {
                        SWALLOW.with(|swallow| {
                            let _ = request.catch(swallow);
                        });
                    }
                }
                Playback::Pause => {
                    let _ = audio.pause();
                }
            }
            refresh(&button, &label, &state.borrow());
        }) as Box<dyn FnMut()>)
    };
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    Ok(AudioHandle {
        audio,
        button,
        on_click,
        on_can_play,
    })
}

impl AudioHandle {
    pub fn unmount(self) {
        let _ = self.audio.pause();
        let _ = self
            .audio
            .remove_event_listener_with_callback("canplay", self.on_can_play.as_ref().unchecked_ref());
        let _ = self
            .button
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
    }
}
