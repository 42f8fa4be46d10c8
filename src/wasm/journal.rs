// journal.rs - Journal card wiring
//
// Prev/next cycle the entries; every change restarts the typewriter and
// redraws the dot indicators. At most one reveal timer exists at a time,
// cleared before any restart and on unmount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element};

use crate::journal::Journal;
use crate::scene;
use crate::typewriter::Typewriter;

/// Per-character reveal delay for journal entries (ms)
const REVEAL_DELAY_MS: u32 = 30;

struct Card {
    document: Document,
    journal: RefCell<Journal>,
    writer: RefCell<Typewriter>,
    title: Element,
    text: Element,
    dots: Element,
    timer: Cell<Option<i32>>,
    tick_fn: RefCell<Option<Function>>,
}

impl Card {
    fn clear_timer(&self) {
        if let (Some(win), Some(id)) = (window(), self.timer.take()) {
            win.clear_interval_with_handle(id);
        }
    }

    fn start_timer(&self) {
        self.clear_timer();
        let Some(win) = window() else { return };
        let tick = match self.tick_fn.borrow().as_ref() {
            Some(f) => f.clone(),
            None => return,
        };
        let delay = self.writer.borrow().delay_ms() as i32;
        if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(&tick, delay) {
            self.timer.set(Some(id));
        }
    }

    /// Show the current entry from the top: title, emptied text, dots,
    /// fresh reveal timer.
    fn show_current(&self) {
        self.clear_timer();

        let journal = self.journal.borrow();
        let Some(entry) = journal.current() else { return };

        self.title.set_text_content(Some(entry.title));
        self.writer.borrow_mut().restart(entry.lines);
        self.text.set_text_content(Some(""));
        self.redraw_dots(journal.index(), journal.len());
        drop(journal);

        self.start_timer();
    }

    fn redraw_dots(&self, active: usize, len: usize) {
        self.dots.set_inner_html("");
        for i in 0..len {
            if let Ok(dot) = self.document.create_element("span") {
                dot.set_class_name(if i == active { "dot dot-active" } else { "dot" });
                let _ = self.dots.append_child(&dot);
            }
        }
    }

    /// One timer tick: surface one character, stop once everything is out
    fn reveal_tick(&self) {
        let mut writer = self.writer.borrow_mut();
        writer.tick();
        self.text.set_text_content(Some(writer.revealed()));
        let done = writer.is_done();
        drop(writer);

        if done {
            self.clear_timer();
        }
    }
}

pub struct JournalHandle {
    card: Rc<Card>,
    prev: Element,
    next: Element,
    on_prev: Closure<dyn FnMut()>,
    on_next: Closure<dyn FnMut()>,
    on_tick: Closure<dyn FnMut()>,
}

pub fn mount(document: &Document) -> Result<JournalHandle, JsValue> {
    let title = document
        .get_element_by_id("journal-title")
        .ok_or("missing #journal-title")?;
    let text = document
        .get_element_by_id("journal-text")
        .ok_or("missing #journal-text")?;
    let dots = document
        .get_element_by_id("journal-dots")
        .ok_or("missing #journal-dots")?;
    let prev = document
        .get_element_by_id("journal-prev")
        .ok_or("missing #journal-prev")?;
    let next = document
        .get_element_by_id("journal-next")
        .ok_or("missing #journal-next")?;

    let card = Rc::new(Card {
        document: document.clone(),
        journal: RefCell::new(Journal::new(&scene::JOURNAL)),
        writer: RefCell::new(Typewriter::new(&[], REVEAL_DELAY_MS)),
        title,
        text,
        dots,
        timer: Cell::new(None),
        tick_fn: RefCell::new(None),
    });

    let on_tick = {
        let card = card.clone();
        Closure::wrap(Box::new(move || card.reveal_tick()) as Box<dyn FnMut()>)
    };
    card.tick_fn
        .replace(Some(on_tick.as_ref().unchecked_ref::<Function>().clone()));

    let on_prev = {
        let card = card.clone();
        Closure::wrap(Box::new(move || {
            card.journal.borrow_mut().previous();
            card.show_current();
        }) as Box<dyn FnMut()>)
    };
    prev.add_event_listener_with_callback("click", on_prev.as_ref().unchecked_ref())?;

    let on_next = {
        let card = card.clone();
        Closure::wrap(Box::new(move || {
            card.journal.borrow_mut().next();
            card.show_current();
        }) as Box<dyn FnMut()>)
    };
    next.add_event_listener_with_callback("click", on_next.as_ref().unchecked_ref())?;

    card.show_current();

    Ok(JournalHandle {
        card,
        prev,
        next,
        on_prev,
        on_next,
        on_tick,
    })
}

impl JournalHandle {
    pub fn unmount(self) {
        self.card.clear_timer();
        let _ = self
            .prev
            .remove_event_listener_with_callback("click", self.on_prev.as_ref().unchecked_ref());
        let _ = self
            .next
            .remove_event_listener_with_callback("click", self.on_next.as_ref().unchecked_ref());
        self.card.tick_fn.replace(None);
        drop(self.on_tick);
    }
}
