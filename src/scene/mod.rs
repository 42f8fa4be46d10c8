// scene/ - Site content
//
// data.rs is generated by the content2scene bin from the sources under
// content/. Edit those and regenerate; never edit data.rs by hand.

mod data;

pub use data::*;

/// One titled journal entry, revealed line by line
pub struct JournalEntry {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// One collage figure: remote image plus caption
pub struct CollageItem {
    pub src: &'static str,
    pub caption: &'static str,
}
