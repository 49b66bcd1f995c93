//! Prints the line sequence of a local datasheet PDF and what the extractors
//! make of it.

use anyhow::Context;
use product_datasheet_api::{DatasheetLayout, assemble, pdf_text_lines};
use std::fs;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: dump_datasheet <file.pdf> [product name]")?;
    let name = args.next().unwrap_or_default();

    let bytes = fs::read(&path).with_context(|| format!("reading {path}"))?;
    let lines = pdf_text_lines(&bytes)?;

    println!("=== DATASHEET LINES ===");
    for (i, line) in lines.iter().enumerate() {
        if !line.trim().is_empty() {
            println!("{}: {:?}", i, line);
        }
    }

    let details = assemble(&name, &lines, &DatasheetLayout::default(), &path, "");
    println!("\n=== EXTRACTED ===");
    println!("{}", serde_json::to_string_pretty(&details)?);

    Ok(())
}
