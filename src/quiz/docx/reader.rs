//! Document reader: docx package → plain text
//!
//! Opens the zip package, pulls `word/document.xml`, and flattens it to one
//! text line per `<w:p>` paragraph. Run text is the concatenation of the
//! paragraph's `<w:t>` elements; everything else in the markup is ignored.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Name of the main document part inside the package
const DOCUMENT_PART: &str = "word/document.xml";

static RUN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").expect("run text pattern"));

/// Errors while reading a quiz document
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be opened or read
    Io(std::io::Error),
    /// The file is not a readable zip package
    Container(String),
    /// The package has no `word/document.xml` part
    MissingDocumentPart,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(_) => write!(f, "Failed to read document"),
            ReadError::Container(msg) => write!(f, "Document container is corrupt: {}", msg),
            ReadError::MissingDocumentPart => {
                write!(f, "Document package has no {} part", DOCUMENT_PART)
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> Self {
        ReadError::Io(err)
    }
}

/// Extract the plain text of a docx file, one line per paragraph
pub fn extract_text(path: &Path) -> Result<String, ReadError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|err| ReadError::Container(err.to_string()))?;
    let mut part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(zip::result::ZipError::FileNotFound) => return Err(ReadError::MissingDocumentPart),
        Err(err) => return Err(ReadError::Container(err.to_string())),
    };
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(document_text(&xml))
}

/// Flatten document markup into plain text lines
fn document_text(xml: &str) -> String {
    let mut lines = Vec::new();
    for chunk in xml.split("</w:p>") {
        // The tail after the last paragraph carries no paragraph open tag
        if !chunk.contains("<w:p") {
            continue;
        }
        let mut line = String::new();
        for capture in RUN_TEXT.captures_iter(chunk) {
            line.push_str(&unescape(&capture[1]));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Decode the five predefined XML entities
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
