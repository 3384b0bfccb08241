//! Two-stage lexer for the quiz line grammar
//!
//! Stage 1 ([`line`]) decides whether a line of text encodes a question and
//! splits it into a stem and a raw options segment. Stage 2 ([`options`])
//! decomposes the options segment into individual choices. Both stages are
//! explicit scans over the sentinel-delimited grammar; a line or segment that
//! does not match is skipped silently, never an error.

pub mod line;
pub mod options;

pub use line::{match_question_line, QuestionLine};
pub use options::extract_choices;
