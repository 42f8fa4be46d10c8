// content2scene - Regenerate the site content module from content/ sources
//
// Pipeline:
//   1. Parse journal entries from content/journal.md
//   2. Parse collage rows from content/collage.txt
//   3. Parse resource URLs from content/site.txt
//   4. Export to src/scene/data.rs
//
// The generated module is committed; rerun after editing the sources.
//
// Usage: cargo run --bin content2scene -- [content-dir] [--out PATH]

mod export;
mod parse;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut content_dir = PathBuf::from("content");
    let mut out_path = PathBuf::from("src/scene/data.rs");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                if let Some(path) = args.get(i + 1) {
                    out_path = PathBuf::from(path);
                }
                i += 2;
            }
            dir => {
                content_dir = PathBuf::from(dir);
                i += 1;
            }
        }
    }

    println!(
        "Generating {} from {}...",
        out_path.display(),
        content_dir.display()
    );

    let journal_src = read(&content_dir.join("journal.md"));
    let collage_src = read(&content_dir.join("collage.txt"));
    let site_src = read(&content_dir.join("site.txt"));

    println!("  Parsing journal...");
    let journal = parse::journal(&journal_src);
    println!("    {} entries", journal.len());

    println!("  Parsing collage...");
    let collage = match parse::collage(&collage_src) {
        Ok(rows) => rows,
        Err(err) => fail(&err),
    };
    println!("    {} items", collage.len());

    println!("  Parsing site resources...");
    let site = match parse::site(&site_src) {
        Ok(site) => site,
        Err(err) => fail(&err),
    };

    let module = export::render_module(&journal, &collage, &site);
    if let Err(err) = fs::write(&out_path, module) {
        fail(&format!("Failed to write {}: {err}", out_path.display()));
    }

    println!("Done!");
}

fn read(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => fail(&format!("Failed to read {}: {err}", path.display())),
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    process::exit(1);
}
