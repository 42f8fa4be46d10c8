// ============================================================================
// MOTE ENGINE - Interactive engine behind a quiet, scroll-driven site
// ============================================================================
//
// Pure state lives at the crate root and under sim/ and motion/; the wasm/
// layer binds it to the host page (canvas, audio element, DOM, timers).

pub mod audio;
pub mod journal;
pub mod motion;
pub mod render;
pub mod scene;
pub mod sim;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
