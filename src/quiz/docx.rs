//! Minimal docx container support
//!
//! A `.docx` file is a zip package whose main part, `word/document.xml`,
//! holds one `<w:p>` paragraph per logical line. [`reader`] extracts the
//! plain text of those paragraphs; [`writer`] renders styled lines back into
//! a new package. Both deal only with the subset of WordprocessingML this
//! tool produces and consumes.

pub mod reader;
pub mod writer;

pub use reader::{extract_text, ReadError};
pub use writer::{write_document, WriteError};

/// Rendering color of an output line
///
/// The answer-key trailer is written in white so it matches the page
/// background: present in the document, but not normally visible. This is a
/// display convention, not an access control; anyone inspecting the document
/// can recover the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    Visible,
    Hidden,
}

impl LineColor {
    /// Hex RGB value written into the run properties
    pub fn hex(self) -> &'static str {
        match self {
            LineColor::Visible => "000000",
            LineColor::Hidden => "FFFFFF",
        }
    }
}

/// One output paragraph with its rendering color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub color: LineColor,
}

impl StyledLine {
    pub fn visible(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: LineColor::Visible,
        }
    }

    pub fn hidden(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: LineColor::Hidden,
        }
    }
}
