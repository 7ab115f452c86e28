/*!
 * Output writers for code2text
 *
 * Plain text is written as-is. A .docx is a zip package holding the whole
 * document as a single WordprocessingML paragraph.
 */

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::types::OutputType;

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

/// Writes the final document in the requested format
pub struct OutputWriter {
    output_type: OutputType,
    path: PathBuf,
}

impl OutputWriter {
    pub fn new(output_type: OutputType, path: impl Into<PathBuf>) -> Self {
        Self {
            output_type,
            path: path.into(),
        }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `text` to the destination
    pub fn write(&self, text: &str) -> Result<()> {
        match self.output_type {
            OutputType::Txt => fs::write(&self.path, text)?,
            OutputType::Docx => self.write_docx(text)?,
        }

        tracing::debug!(target: "code2text", path = %self.path.display(), kind = %self.output_type, "document written");
        Ok(())
    }

    fn write_docx(&self, text: &str) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(CONTENT_TYPES.as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(PACKAGE_RELS.as_bytes())?;

        zip.start_file("docProps/core.xml", options)?;
        zip.write_all(&core_properties()?)?;

        zip.start_file("word/document.xml", options)?;
        zip.write_all(&document_xml(text)?)?;

        zip.finish()?.flush()?;
        Ok(())
    }
}

fn core_properties() -> io::Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let root = BytesStart::new("cp:coreProperties").with_attributes([
        (
            "xmlns:cp",
            "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
        ),
        ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
        ("xmlns:dcterms", "http://purl.org/dc/terms/"),
        ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ]);
    writer.write_event(Event::Start(root))?;

    writer.write_event(Event::Start(BytesStart::new("dc:creator")))?;
    writer.write_event(Event::Text(BytesText::new(env!("CARGO_PKG_NAME"))))?;
    writer.write_event(Event::End(BytesEnd::new("dc:creator")))?;

    let created = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let start = BytesStart::new("dcterms:created").with_attributes([("xsi:type", "dcterms:W3CDTF")]);
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(&created)))?;
    writer.write_event(Event::End(BytesEnd::new("dcterms:created")))?;

    writer.write_event(Event::End(BytesEnd::new("cp:coreProperties")))?;
    Ok(writer.into_inner())
}

/// `word/document.xml` with `text` as its only paragraph
fn document_xml(text: &str) -> io::Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    writer.write_event(Event::Start(
        BytesStart::new("w:document").with_attributes([("xmlns:w", WORD_NS)]),
    ))?;
    writer.write_event(Event::Start(BytesStart::new("w:body")))?;
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;
    writer.write_event(Event::Start(BytesStart::new("w:r")))?;

    write_run_content(&mut writer, text)?;

    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    writer.write_event(Event::Empty(BytesStart::new("w:sectPr")))?;
    writer.write_event(Event::End(BytesEnd::new("w:body")))?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;

    Ok(writer.into_inner())
}

/// Line breaks become `<w:br/>`, tabs `<w:tab/>`, the rest goes in `<w:t>` runs
fn write_run_content<W: Write>(writer: &mut Writer<W>, text: &str) -> io::Result<()> {
    let mut pending = String::new();

    for c in text.chars() {
        let marker = match c {
            '\n' | '\r' => "w:br",
            '\t' => "w:tab",
            c if is_xml_char(c) => {
                pending.push(c);
                continue;
            }
            _ => continue,
        };

        flush_text(writer, &mut pending)?;
        writer.write_event(Event::Empty(BytesStart::new(marker)))?;
    }

    flush_text(writer, &mut pending)
}

fn flush_text<W: Write>(writer: &mut Writer<W>, pending: &mut String) -> io::Result<()> {
    if pending.is_empty() {
        return Ok(());
    }

    let start = BytesStart::new("w:t").with_attributes([("xml:space", "preserve")]);
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(pending.as_str())))?;
    writer.write_event(Event::End(BytesEnd::new("w:t")))?;
    pending.clear();
    Ok(())
}

/// Characters allowed in an XML 1.0 document
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
