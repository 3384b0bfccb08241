//! End-to-end generation pipeline
//!
//! Read `questions.docx` from the source directory, parse, shuffle,
//! assemble, and write `randoms.docx` next to it. Stages run strictly in
//! sequence; any failure aborts the run before the output file is touched,
//! so either a complete document is written or none is.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::quiz::assemble::assemble;
use crate::quiz::docx::{extract_text, write_document, ReadError, WriteError};
use crate::quiz::parser::parse_document;

/// Fixed input file name inside the source directory
pub const QUESTIONS_FILE: &str = "questions.docx";

/// Fixed output file name inside the source directory
pub const OUTPUT_FILE: &str = "randoms.docx";

/// Errors aborting a generation run
#[derive(Debug)]
pub enum PipelineError {
    /// The source document contained no line matching the question grammar
    NoQuestions(PathBuf),
    Read(ReadError),
    Write(WriteError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::NoQuestions(path) => {
                write!(f, "No valid questions found in {}", path.display())
            }
            PipelineError::Read(err) => write!(f, "{}", err),
            PipelineError::Write(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::NoQuestions(_) => None,
            PipelineError::Read(err) => err.source(),
            PipelineError::Write(err) => err.source(),
        }
    }
}

impl From<ReadError> for PipelineError {
    fn from(err: ReadError) -> Self {
        PipelineError::Read(err)
    }
}

impl From<WriteError> for PipelineError {
    fn from(err: WriteError) -> Self {
        PipelineError::Write(err)
    }
}

/// Outcome of a successful run, for CLI reporting
#[derive(Debug)]
pub struct RunSummary {
    /// Questions parsed out of the source document
    pub parsed: usize,
    /// Questions selected into the output document
    pub selected: usize,
    /// Path of the written document
    pub output: PathBuf,
}

/// Run the whole pipeline against a source directory
pub fn run(dir: &Path, count: usize) -> Result<RunSummary, PipelineError> {
    let input = dir.join(QUESTIONS_FILE);
    let text = extract_text(&input)?;

    let questions = parse_document(&text);
    if questions.is_empty() {
        return Err(PipelineError::NoQuestions(input));
    }

    let mut rng = rand::thread_rng();
    let assembly = assemble(&questions, count, &mut rng);

    let output = dir.join(OUTPUT_FILE);
    write_document(&output, &assembly.lines)?;

    Ok(RunSummary {
        parsed: questions.len(),
        selected: assembly.answers.len(),
        output,
    })
}
