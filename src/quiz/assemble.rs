//! Selection and assembly of the output document
//!
//! Shuffles the parsed question pool, takes the requested number of
//! questions (silently clamped to the pool size), and produces the final
//! display lines plus one answer-key entry per selected question. The
//! trailer block is emitted in the hidden style so the key matches the page
//! background.

use rand::Rng;

use crate::quiz::answer_key::{position_letter, shuffle_with_letters};
use crate::quiz::ast::{AnswerEntry, Question};
use crate::quiz::docx::StyledLine;
use crate::quiz::lexer::options::OPTION_SENTINEL;
use crate::quiz::shuffle::shuffled;

/// Assembled output: display lines in document order plus the answer key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub lines: Vec<StyledLine>,
    pub answers: Vec<AnswerEntry>,
}

/// Select `count` questions from the pool and build the output document
///
/// Selection order is a fresh shuffle of the whole pool; each selected
/// question gets its own independent option shuffle. A `count` larger than
/// the pool selects every question exactly once.
pub fn assemble<R: Rng>(questions: &[Question], count: usize, rng: &mut R) -> Assembly {
    let pool = shuffled(questions, rng);
    let selected = &pool[..count.min(pool.len())];

    let mut lines = Vec::new();
    let mut answers = Vec::new();
    for (index, question) in selected.iter().enumerate() {
        let number = index + 1;
        let (choices, letters) = shuffle_with_letters(&question.choices, rng);

        let stem = strip_leading_enumeration(&question.stem);
        lines.push(StyledLine::visible(format!("{}. {}", number, stem)));
        for (position, choice) in choices.iter().enumerate() {
            lines.push(StyledLine::visible(format!(
                "{}. {}{}",
                position_letter(position),
                choice.text,
                OPTION_SENTINEL,
            )));
        }
        lines.push(StyledLine::visible(""));

        answers.push(AnswerEntry { number, letters });
    }

    lines.push(StyledLine::hidden("answers:["));
    for entry in &answers {
        lines.push(StyledLine::hidden(format!(
            "{{Q: {}; A: {}}},",
            entry.number, entry.letters
        )));
    }
    lines.push(StyledLine::hidden("]"));

    Assembly { lines, answers }
}

/// Strip a residual `<digits>.` enumeration from a stem before renumbering
fn strip_leading_enumeration(stem: &str) -> &str {
    let digits = stem.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || !stem[digits..].starts_with('.') {
        return stem;
    }
    stem[digits + 1..].trim_start()
}
