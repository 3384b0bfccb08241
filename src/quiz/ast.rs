//! Data model for parsed quiz documents
//!
//! A [`Question`] owns its [`Choice`]s exclusively; shuffles operate on copies
//! so the parsed structures are never mutated after parsing. Correctness is a
//! flag carried on each choice, never re-derived from position: the flag
//! travels with its owning element through any permutation.

use serde::Serialize;

/// One selectable answer with its correctness flag
///
/// Named `Choice` rather than the source format's "option" to avoid clashing
/// with `std::option::Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Trimmed option body, without its source letter or the `;[*]` sentinel
    pub text: String,
    /// True when the source marked the option with `=`
    pub is_correct: bool,
}

impl Choice {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// One parsed question: the stem plus its choices in source order
///
/// A question may have zero, one, or several correct choices; the parser does
/// not enforce exactly-one-correct. A question whose options segment yielded
/// no extractable choices is still a valid record with an empty `choices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Question text with the leading enumeration stripped
    pub stem: String,
    /// Choices in the order they appeared in the source line
    pub choices: Vec<Choice>,
}

/// One answer-key entry, produced at assembly time
///
/// `letters` holds the post-shuffle letters of the correct choices, joined
/// with `", "` in ascending position order (e.g. `"A, C"`); it is the empty
/// string when the question has no correct choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerEntry {
    /// 1-based display number of the question in the generated document
    pub number: usize,
    /// Comma-joined uppercase letters of the correct choices after shuffling
    pub letters: String,
}
