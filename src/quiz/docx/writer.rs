//! Document writer: styled lines → docx package
//!
//! Emits the minimal OOXML package the generated quiz needs: the content
//! types manifest, the package relationships, and `word/document.xml` with
//! one paragraph per styled line. Every run uses Arial at 14 pt; the color
//! comes from the line's [`LineColor`](super::LineColor).

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::quiz::docx::StyledLine;

/// Run font for every emitted line
const FONT: &str = "Arial";

/// Run size in half-points (14 pt)
const SIZE_HALF_POINTS: u32 = 28;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Errors while writing the generated document
#[derive(Debug)]
pub enum WriteError {
    /// The target file could not be created or written
    Io(std::io::Error),
    /// The zip package could not be serialized
    Container(String),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Io(_) => write!(f, "Failed to write document"),
            WriteError::Container(msg) => {
                write!(f, "Document container serialization failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Io(err) => Some(err),
            WriteError::Container(_) => None,
        }
    }
}

impl From<std::io::Error> for WriteError {
    fn from(err: std::io::Error) -> Self {
        WriteError::Io(err)
    }
}

impl From<zip::result::ZipError> for WriteError {
    fn from(err: zip::result::ZipError) -> Self {
        WriteError::Container(err.to_string())
    }
}

/// Write the styled lines to `path` as a docx package
pub fn write_document(path: &Path, lines: &[StyledLine]) -> Result<(), WriteError> {
    let file = File::create(path)?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    archive.start_file("[Content_Types].xml", options)?;
    archive.write_all(CONTENT_TYPES.as_bytes())?;
    archive.start_file("_rels/.rels", options)?;
    archive.write_all(ROOT_RELS.as_bytes())?;
    archive.start_file("word/document.xml", options)?;
    archive.write_all(document_xml(lines).as_bytes())?;

    archive.finish()?;
    Ok(())
}

/// Render the main document part
fn document_xml(lines: &[StyledLine]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );
    for line in lines {
        xml.push_str(&paragraph_xml(line));
    }
    xml.push_str("</w:body></w:document>");
    xml
}

fn paragraph_xml(line: &StyledLine) -> String {
    format!(
        "<w:p><w:r><w:rPr>\
         <w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/>\
         <w:color w:val=\"{color}\"/>\
         <w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/>\
         </w:rPr><w:t xml:space=\"preserve\">{text}</w:t></w:r></w:p>",
        font = FONT,
        color = line.color.hex(),
        size = SIZE_HALF_POINTS,
        text = escape(&line.text),
    )
}

/// Encode the five predefined XML entities
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
