// export.rs - Emit src/scene/data.rs
//
// Output is deterministic for a given input, so the committed module can
// be diffed against a fresh run of the committed sources.

use crate::parse::{CollageRow, Entry, SiteResources};

/// Escape for a double-quoted Rust string literal
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out
}

pub fn render_module(journal: &[Entry], collage: &[CollageRow], site: &SiteResources) -> String {
    let mut out = String::new();

    out.push_str("// data.rs - Generated by content2scene. Do not edit.\n");
    out.push_str("//\n");
    out.push_str("// Sources: content/journal.md, content/collage.txt, content/site.txt\n");
    out.push('\n');
    out.push_str("use super::{CollageItem, JournalEntry};\n");
    out.push('\n');

    out.push_str("/// Ambient track streamed by the audio toggle\n");
    out.push_str(&format!(
        "pub const TRACK_URL: &str = \"{}\";\n",
        escape(&site.audio)
    ));
    out.push('\n');
    out.push_str("/// Hosted 3D scene embedded behind the hero copy\n");
    out.push_str(&format!(
        "pub const SCENE_URL: &str = \"{}\";\n",
        escape(&site.scene)
    ));
    out.push('\n');

    out.push_str(&format!(
        "pub static JOURNAL: [JournalEntry; {}] = [\n",
        journal.len()
    ));
    for entry in journal {
        out.push_str("    JournalEntry {\n");
        out.push_str(&format!("        title: \"{}\",\n", escape(&entry.title)));
        out.push_str("        lines: &[\n");
        for line in &entry.lines {
            out.push_str(&format!("            \"{}\",\n", escape(line)));
        }
        out.push_str("        ],\n");
        out.push_str("    },\n");
    }
    out.push_str("];\n");
    out.push('\n');

    out.push_str(&format!(
        "pub static COLLAGE: [CollageItem; {}] = [\n",
        collage.len()
    ));
    for row in collage {
        out.push_str(&format!(
            "    CollageItem {{ src: \"{}\", caption: \"{}\" }},\n",
            escape(&row.src),
            escape(&row.caption)
        ));
    }
    out.push_str("];\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vec<Entry>, Vec<CollageRow>, SiteResources) {
        let journal = vec![Entry {
            title: "A \"quoted\" day".to_string(),
            lines: vec!["first line".to_string(), "second line".to_string()],
        }];
        let collage = vec![CollageRow {
            src: "https://example.com/a.jpg".to_string(),
            caption: "Caption one.".to_string(),
        }];
        let site = SiteResources {
            audio: "https://a.example/track.mp3".to_string(),
            scene: "https://s.example/scene.splinecode".to_string(),
        };
        (journal, collage, site)
    }

    #[test]
    fn escape_handles_quotes_backslashes_newlines() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a \"b\" c"), "a \\\"b\\\" c");
        assert_eq!(escape("back\\slash"), "back\\\\slash");
        assert_eq!(escape("two\nlines"), "two\\nlines");
    }

    #[test]
    fn module_declares_the_statics_with_exact_lengths() {
        let (journal, collage, site) = sample();
        let module = render_module(&journal, &collage, &site);

        assert!(module.starts_with("// data.rs - Generated by content2scene. Do not edit.\n"));
        assert!(module.contains("pub static JOURNAL: [JournalEntry; 1] = [\n"));
        assert!(module.contains("pub static COLLAGE: [CollageItem; 1] = [\n"));
        assert!(module.contains("pub const TRACK_URL: &str = \"https://a.example/track.mp3\";\n"));
        assert!(module.contains("title: \"A \\\"quoted\\\" day\",\n"));
        assert!(module.contains("            \"second line\",\n"));
        assert!(module.ends_with("];\n"));
    }

    #[test]
    fn empty_inputs_still_render_valid_items() {
        let site = SiteResources {
            audio: "a".to_string(),
            scene: "s".to_string(),
        };
        let module = render_module(&[], &[], &site);
        assert!(module.contains("pub static JOURNAL: [JournalEntry; 0] = [\n];\n"));
        assert!(module.contains("pub static COLLAGE: [CollageItem; 0] = [\n];\n"));
    }

    // Catches a data.rs left stale after an edit to the content/ sources
    #[test]
    fn committed_module_matches_the_committed_sources() {
        let journal = crate::parse::journal(include_str!("../../../content/journal.md"));
        let collage = crate::parse::collage(include_str!("../../../content/collage.txt")).unwrap();
        let site = crate::parse::site(include_str!("../../../content/site.txt")).unwrap();

        assert_eq!(
            render_module(&journal, &collage, &site),
            include_str!("../../scene/data.rs")
        );
    }
}
