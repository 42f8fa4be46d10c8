// parse.rs - Content source parsers
//
// journal.md: entries open with a `# Title` heading, one revealed line per
// following non-blank line. collage.txt: `src | caption` rows. site.txt:
// `key = value` rows. In the row formats, `#` opens a comment line.

pub struct Entry {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug)]
pub struct CollageRow {
    pub src: String,
    pub caption: String,
}

pub struct SiteResources {
    pub audio: String,
    pub scene: String,
}

/// Parse journal entries. Text before the first heading is dropped.
pub fn journal(src: &str) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();
    for raw in src.lines() {
        let line = raw.trim();
        if let Some(title) = line.strip_prefix("# ") {
            entries.push(Entry {
                title: title.trim().to_string(),
                lines: Vec::new(),
            });
        } else if line.is_empty() {
            continue;
        } else if let Some(entry) = entries.last_mut() {
            entry.lines.push(line.to_string());
        }
    }
    entries
}

/// Parse `src | caption` rows
pub fn collage(src: &str) -> Result<Vec<CollageRow>, String> {
    let mut rows = Vec::new();
    for (num, raw) in src.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((src_part, caption)) = line.split_once('|') else {
            return Err(format!("collage.txt line {}: expected `src | caption`", num + 1));
        };
        let src_part = src_part.trim();
        let caption = caption.trim();
        if src_part.is_empty() || caption.is_empty() {
            return Err(format!("collage.txt line {}: empty src or caption", num + 1));
        }
        rows.push(CollageRow {
            src: src_part.to_string(),
            caption: caption.to_string(),
        });
    }
    Ok(rows)
}

/// Parse `key = value` resource rows. Both `audio` and `scene` are required.
pub fn site(src: &str) -> Result<SiteResources, String> {
    let mut audio = None;
    let mut scene = None;
    for (num, raw) in src.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(format!("site.txt line {}: expected `key = value`", num + 1));
        };
        match key.trim() {
            "audio" => audio = Some(value.trim().to_string()),
            "scene" => scene = Some(value.trim().to_string()),
            other => {
                return Err(format!("site.txt line {}: unknown key `{other}`", num + 1));
            }
        }
    }
    Ok(SiteResources {
        audio: audio.ok_or("site.txt: missing `audio`")?,
        scene: scene.ok_or("site.txt: missing `scene`")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_splits_on_headings() {
        let src = "# First\nline one\nline two\n\n# Second\nonly line\n";
        let entries = journal(src);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "First");
        assert_eq!(entries[0].lines, vec!["line one", "line two"]);
        assert_eq!(entries[1].title, "Second");
        assert_eq!(entries[1].lines, vec!["only line"]);
    }

    #[test]
    fn journal_drops_preamble_and_blank_lines() {
        let src = "stray text\n\n# Only\nkept\n";
        let entries = journal(src);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].lines, vec!["kept"]);
    }

    #[test]
    fn collage_parses_rows_and_skips_comments() {
        let src = "# a comment\nhttps://example.com/a.jpg | First caption\n\nhttps://example.com/b.jpg | Second | with pipe\n";
        let rows = collage(src).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].src, "https://example.com/a.jpg");
        assert_eq!(rows[0].caption, "First caption");
        assert_eq!(rows[1].caption, "Second | with pipe");
    }

    #[test]
    fn collage_rejects_rows_without_a_pipe() {
        let err = collage("https://example.com/a.jpg no caption\n").unwrap_err();
        assert!(err.contains("line 1"));
    }

    #[test]
    fn site_requires_both_urls() {
        let site = site("audio = https://a.example/x.mp3\nscene = https://s.example/y\n").unwrap();
        assert_eq!(site.audio, "https://a.example/x.mp3");
        assert_eq!(site.scene, "https://s.example/y");

        assert!(super::site("audio = https://a.example/x.mp3\n").is_err());
        assert!(super::site("scene = https://s.example/y\nbogus = 1\n").is_err());
    }
}
