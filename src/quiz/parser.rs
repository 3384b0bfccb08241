//! Whole-document question parser
//!
//! Runs the two lexer stages over every line of a document's extracted text
//! and accumulates question records in source order. Lines that do not match
//! the grammar are dropped silently; parsing is best-effort extraction, not
//! validation. An empty result is valid here, the pipeline decides whether it
//! is fatal.

use crate::quiz::ast::Question;
use crate::quiz::lexer::{extract_choices, match_question_line};

/// Parse the extracted text of a quiz document into question records
pub fn parse_document(text: &str) -> Vec<Question> {
    text.lines()
        .filter_map(match_question_line)
        .map(|line| Question {
            stem: line.stem,
            choices: extract_choices(&line.options),
        })
        .collect()
}
