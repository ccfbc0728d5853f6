//! Shared utilities for archive output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

/// Subdirectory holding the unmodified source file.
pub const RAW_DIR: &str = "raw";

/// Create the output directory (and parents) if needed.
pub fn create_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("create output dir: {}", path.display()))
}

/// Copy the unmodified input file into `<output>/raw/` before any
/// processing output is written. Returns the archived path.
pub fn archive_raw_input(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .ok_or_else(|| anyhow!("input has no file name: {}", input.display()))?;
    let raw_dir = output_dir.join(RAW_DIR);
    fs::create_dir_all(&raw_dir).with_context(|| format!("create raw dir: {}", raw_dir.display()))?;
    let target = raw_dir.join(file_name);
    fs::copy(input, &target)
        .with_context(|| format!("archive raw input to {}", target.display()))?;
    debug!(path = %target.display(), "archived raw input");
    Ok(target)
}

/// Write a simple `<name>text</name>` element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
