// page.rs - Page composition
//
// Mounts the fixed vertical sequence onto the host skeleton: hero (3D
// scene + motes + lifted copy), narrative backdrop, collage, journal,
// outro motes, audio toggle. A missing section is skipped with a console
// warning; the rest of the page still comes up.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, HtmlCanvasElement};

use crate::scene;

use super::{audio, field, journal, scroll};

pub struct Page {
    fields: Vec<field::FieldHandle>,
    scroll: Option<scroll::ScrollHandle>,
    journal: Option<journal::JournalHandle>,
    audio: Option<audio::AudioHandle>,
}

fn warn(section: &str, err: JsValue) {
    console::warn_2(&format!("mote-engine: {section} skipped:").into(), &err);
}

/// Inject the hosted 3D scene viewer into the hero slot
pub fn mount_scene_embed(document: &Document) -> Result<(), JsValue> {
    let slot = document
        .get_element_by_id("hero-scene")
        .ok_or("missing #hero-scene")?;
    let viewer = document.create_element("spline-viewer")?;
    viewer.set_attribute("url", scene::SCENE_URL)?;
    slot.append_child(&viewer)?;
    Ok(())
}

/// Build one figure per collage item
pub fn mount_collage(document: &Document) -> Result<(), JsValue> {
    let grid = document
        .get_element_by_id("collage")
        .ok_or("missing #collage")?;
    for item in &scene::COLLAGE {
        let figure = document.create_element("figure")?;

        let img = document.create_element("img")?;
        img.set_attribute("src", item.src)?;
        img.set_attribute("alt", "")?;
        img.set_attribute("loading", "lazy")?;

        let caption = document.create_element("figcaption")?;
        caption.set_text_content(Some(item.caption));

        figure.append_child(&img)?;
        figure.append_child(&caption)?;
        grid.append_child(&figure)?;
    }
    Ok(())
}

fn mount_field(document: &Document, id: &str) -> Result<field::FieldHandle, JsValue> {
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from(format!("missing #{id}")))?
        .dyn_into()?;
    field::mount(canvas)
}

impl Page {
    pub fn mount(document: &Document) -> Page {
        if let Err(err) = mount_scene_embed(document) {
            warn("3d scene", err);
        }
        if let Err(err) = mount_collage(document) {
            warn("collage", err);
        }

        let mut fields = Vec::new();
        for id in ["hero-motes", "outro-motes"] {
            match mount_field(document, id) {
                Ok(handle) => fields.push(handle),
                Err(err) => warn(id, err),
            }
        }

        let scroll = match scroll::mount(document) {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn("scroll motion", err);
                None
            }
        };
        let journal = match journal::mount(document) {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn("journal", err);
                None
            }
        };
        let audio = match audio::mount(document) {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn("audio toggle", err);
                None
            }
        };

        Page {
            fields,
            scroll,
            journal,
            audio,
        }
    }

    /// Tear every component down in mount order
    pub fn unmount(self) {
        for handle in self.fields {
            handle.unmount();
        }
        if let Some(handle) = self.scroll {
            handle.unmount();
        }
        if let Some(handle) = self.journal {
            handle.unmount();
        }
        if let Some(handle) = self.audio {
            handle.unmount();
        }
    }
}
