// typewriter.rs - Character-by-character text reveal
//
// Lines join with '\n' and surface one char per tick. Every new text is a
// full restart from empty; the caller owns the timer cadence.

/// Default per-character delay (ms)
pub const DEFAULT_DELAY_MS: u32 = 35;

pub struct Typewriter {
    text: String,
    shown: usize,   // byte offset, always on a char boundary
    delay_ms: u32,
}

impl Typewriter {
    pub fn new(lines: &[&str], delay_ms: u32) -> Self {
        Self {
            text: lines.join("\n"),
            shown: 0,
            delay_ms,
        }
    }

    /// Swap in new lines and reset the reveal to empty
    pub fn restart(&mut self, lines: &[&str]) {
        self.text = lines.join("\n");
        self.shown = 0;
    }

    /// Reveal one more character. Returns false once the full text is out;
    /// extra ticks past the end are no-ops.
    pub fn tick(&mut self) -> bool {
        match self.text[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// The revealed prefix
    pub fn revealed(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.text.len()
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_tick_across_joined_lines() {
        let mut tw = Typewriter::new(&["ab", "c"], DEFAULT_DELAY_MS);
        assert_eq!(tw.revealed(), "");
        assert!(!tw.is_done());

        assert!(tw.tick());
        assert_eq!(tw.revealed(), "a");
        assert!(tw.tick());
        assert_eq!(tw.revealed(), "ab");
        assert!(tw.tick());
        assert_eq!(tw.revealed(), "ab\n");
        assert!(tw.tick());
        assert_eq!(tw.revealed(), "ab\nc");
        assert!(tw.is_done());
    }

    #[test]
    fn ticks_past_the_end_change_nothing() {
        let mut tw = Typewriter::new(&["hi"], DEFAULT_DELAY_MS);
        while tw.tick() {}
        assert_eq!(tw.revealed(), "hi");
        assert!(!tw.tick());
        assert!(!tw.tick());
        assert_eq!(tw.revealed(), "hi");
        assert!(tw.is_done());
    }

    #[test]
    fn restart_resets_a_reveal_in_flight() {
        let mut tw = Typewriter::new(&["the world holds its breath"], 35);
        for _ in 0..9 {
            tw.tick();
        }
        assert_eq!(tw.revealed(), "the world");

        tw.restart(&["quiet"]);
        assert_eq!(tw.revealed(), "");
        assert!(!tw.is_done());
        while tw.tick() {}
        assert_eq!(tw.revealed(), "quiet");
    }

    #[test]
    fn multibyte_chars_surface_whole() {
        let mut tw = Typewriter::new(&["héllo"], 35);
        assert!(tw.tick());
        assert_eq!(tw.revealed(), "h");
        assert!(tw.tick());
        assert_eq!(tw.revealed(), "hé");
        while tw.tick() {}
        assert_eq!(tw.revealed(), "héllo");
    }

    #[test]
    fn empty_lines_join_to_a_bare_newline() {
        let mut tw = Typewriter::new(&["", ""], 35);
        assert!(!tw.is_done());
        assert!(tw.tick());
        assert_eq!(tw.revealed(), "\n");
        assert!(tw.is_done());
    }

    #[test]
    fn no_lines_is_immediately_done() {
        let mut tw = Typewriter::new(&[], 35);
        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.revealed(), "");
    }
}
