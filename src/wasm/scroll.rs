// scroll.rs - Scroll-linked motion wiring
//
// One window scroll listener maps page progress onto the hero lift and
// the narrative backdrop color. Continuous, no debouncing.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, HtmlElement};

use crate::motion;
use crate::render;

pub struct ScrollHandle {
    on_scroll: Closure<dyn FnMut()>,
}

/// Page scroll progress in [0, 1]
fn page_progress() -> f32 {
    let Some(win) = window() else { return 0.0 };
    let scrolled = win.scroll_y().unwrap_or(0.0);
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let span = win
        .document()
        .and_then(|d| d.document_element())
        .map(|root| root.scroll_height() as f64 - viewport)
        .unwrap_or(0.0);
    motion::progress(scrolled, span)
}

fn apply(hero: &HtmlElement, backdrop: &HtmlElement, t: f32) {
    let lift = motion::HERO_LIFT.map(t);
    let _ = hero
        .style()
        .set_property("transform", &render::translate_y(lift));

    let shade = motion::BACKDROP.map(t);
    let _ = backdrop
        .style()
        .set_property("background-color", &render::background(shade));
}

pub fn mount(document: &Document) -> Result<ScrollHandle, JsValue> {
    let hero: HtmlElement = document
        .get_element_by_id("hero-copy")
        .ok_or("missing #hero-copy")?
        .dyn_into()?;
    let backdrop: HtmlElement = document
        .get_element_by_id("backdrop")
        .ok_or("missing #backdrop")?
        .dyn_into()?;

    // First paint matches wherever the page already sits
    apply(&hero, &backdrop, page_progress());

    let on_scroll = Closure::wrap(Box::new(move || {
        apply(&hero, &backdrop, page_progress());
    }) as Box<dyn FnMut()>);
    window()
        .ok_or("no window")?
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;

    Ok(ScrollHandle { on_scroll })
}

impl ScrollHandle {
    pub fn unmount(self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        }
    }
}
