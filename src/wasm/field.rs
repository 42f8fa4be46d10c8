// field.rs - Canvas-backed mote field
//
// Owns the animation-frame loop and the resize listener for one canvas.
// The sim regenerates wholesale whenever the surface changes size.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render;
use crate::sim::MoteField;

pub struct FieldHandle {
    raf_id: Rc<Cell<i32>>,
    active: Rc<Cell<bool>>,
    on_resize: Closure<dyn FnMut()>,
    // The frame closure reschedules itself; it stays alive here, not via
    // forget(), so unmount can actually drop it.
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

/// Match the canvas bitmap to its layout size
fn fit(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let w = canvas.offset_width().max(0) as u32;
    let h = canvas.offset_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

fn draw(ctx: &CanvasRenderingContext2d, field: &MoteField) {
    ctx.clear_rect(0.0, 0.0, field.width() as f64, field.height() as f64);

    let motes = field.motes();
    for i in 0..motes.len() {
        ctx.begin_path();
        if ctx
            .arc(
                motes.x[i] as f64,
                motes.y[i] as f64,
                motes.r[i] as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            ctx.set_fill_style_str(&render::mote_fill(motes.a[i]));
            ctx.set_shadow_color(render::MOTE_GLOW);
            ctx.set_shadow_blur(render::MOTE_GLOW_BLUR);
            ctx.fill();
        }
    }
}

pub fn mount(canvas: HtmlCanvasElement) -> Result<FieldHandle, JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;

    let (w, h) = fit(&canvas);
    let field = Rc::new(RefCell::new(MoteField::new(w, h)));

    let win = window().ok_or("no window")?;

    let on_resize = {
        let canvas = canvas.clone();
        let field = field.clone();
        Closure::wrap(Box::new(move || {
            let (w, h) = fit(&canvas);
            field.borrow_mut().resize(w, h);
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    // `f` holds the animation-frame closure so it can reschedule itself;
    // the Option lets the Closure grab a reference to its own cell.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let raf_id = Rc::new(Cell::new(0));
    let active = Rc::new(Cell::new(true));
    {
        let f = f.clone();
        let raf_id = raf_id.clone();
        let active = active.clone();
        let field = field.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !active.get() {
                return;
            }

            {
                let mut field = field.borrow_mut();
                field.step();
                draw(&ctx, &field);
            }

            // Schedule the next frame
            if let Some(win) = window() {
                if let Some(frame) = f.borrow().as_ref() {
                    if let Ok(id) = win.request_animation_frame(frame.as_ref().unchecked_ref()) {
                        raf_id.set(id);
                    }
                }
            }
        }) as Box<dyn FnMut()>));
    }

    let id = win.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    raf_id.set(id);

    Ok(FieldHandle {
        raf_id,
        active,
        on_resize,
        frame: g,
    })
}

impl FieldHandle {
    /// Stop the loop and detach the listener. Nothing draws after this.
    pub fn unmount(self) {
        self.active.set(false);
        if let Some(win) = window() {
            let _ = win.cancel_animation_frame(self.raf_id.get());
            let _ = win
                .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        }
        self.frame.borrow_mut().take();
    }
}
