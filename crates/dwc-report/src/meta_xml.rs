//! Darwin Core Archive descriptor (`meta.xml`).
//!
//! Describes the four CSV files so archive consumers can locate the core,
//! the extensions, and the term behind every column. Field indices come
//! straight from the term tables, which also drive the CSV writers, so the
//! descriptor can never drift from the data files. Output is deterministic.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use tracing::info;

use dwc_model::DwcTable;

use crate::common::write_text_element;

/// Darwin Core text guidelines namespace.
pub const DWC_TEXT_NS: &str = "http://rs.tdwg.org/dwc/text/";

/// Descriptor file name.
pub const META_XML_FILE: &str = "meta.xml";

/// Write `meta.xml` into the output directory.
pub fn write_meta_xml(output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(META_XML_FILE);
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = Writer::new_with_indent(BufWriter::new(file), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    let mut archive = BytesStart::new("archive");
    archive.push_attribute(("xmlns", DWC_TEXT_NS));
    writer.write_event(Event::Start(archive))?;

    for table in DwcTable::ALL {
        write_file_block(&mut writer, table)?;
    }

    writer.write_event(Event::End(BytesEnd::new("archive")))?;
    info!(path = %path.display(), "wrote archive descriptor");
    Ok(path)
}

fn write_file_block<W: std::io::Write>(writer: &mut Writer<W>, table: DwcTable) -> Result<()> {
    let tag = if table.is_core() { "core" } else { "extension" };
    let mut element = BytesStart::new(tag);
    element.push_attribute(("encoding", "UTF-8"));
    element.push_attribute(("fieldsTerminatedBy", ","));
    element.push_attribute(("linesTerminatedBy", "\\n"));
    element.push_attribute(("fieldsEnclosedBy", "\""));
    element.push_attribute(("ignoreHeaderLines", "1"));
    element.push_attribute(("rowType", table.row_type()));
    writer.write_event(Event::Start(element))?;

    writer.write_event(Event::Start(BytesStart::new("files")))?;
    write_text_element(writer, "location", table.file_name())?;
    writer.write_event(Event::End(BytesEnd::new("files")))?;

    // Column 0 is the shared taxon identifier: the record id on the core,
    // the core reference on every extension.
    let id_tag = if table.is_core() { "id" } else { "coreid" };
    let mut id = BytesStart::new(id_tag);
    id.push_attribute(("index", "0"));
    writer.write_event(Event::Empty(id))?;

    let first_field = if table.is_core() { 0 } else { 1 };
    for (index, term) in table.terms().iter().enumerate().skip(first_field) {
        let mut field = BytesStart::new("field");
        field.push_attribute(("index", index.to_string().as_str()));
        field.push_attribute(("term", term.uri));
        writer.write_event(Event::Empty(field))?;
    }

    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
