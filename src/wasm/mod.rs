// wasm/ - Browser bindings
//
// Mounts the engine onto the host page at module start and keeps every
// component handle alive until unmount. Anything recurring (animation
// frames, timers, listeners) is owned by a handle and stopped on teardown,
// so a dropped page never keeps painting or ticking.

pub mod audio;
pub mod field;
pub mod journal;
pub mod page;
pub mod scroll;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use page::Page;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let page = Page::mount(&document);
    PAGE.with(|slot| {
        if let Some(old) = slot.borrow_mut().replace(page) {
            old.unmount();
        }
    });
    Ok(())
}

/// Tear the whole page down. Safe to call more than once.
#[wasm_bindgen]
pub fn unmount() {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow_mut().take() {
            page.unmount();
        }
    });
}
