//! Option extractor (stage 2)
//!
//! Grammar per option within a matched line's options segment:
//!
//! ```text
//! <LETTER>. <text>;[*]
//! <LETTER>. <text>;[*] =
//! ```
//!
//! Every option ends with the `;[*]` sentinel; a `=` immediately after the
//! sentinel (whitespace allowed) marks the option correct. Options are
//! discovered by a repeated left-to-right scan until no further match is
//! found. The source letters are informational only: option identity is the
//! position in the returned sequence, and output letters are always assigned
//! by post-shuffle position.

use crate::quiz::ast::Choice;

/// Sentinel terminating every option's text
pub const OPTION_SENTINEL: &str = ";[*]";

/// Marker denoting a correct option when it follows the sentinel
pub const CORRECT_MARKER: char = '=';

/// Extract every choice from an options segment, in source order
///
/// A segment with no extractable option yields an empty vector; the caller
/// still emits the parent question in that case.
pub fn extract_choices(segment: &str) -> Vec<Choice> {
    let mut choices = Vec::new();
    let mut cursor = 0;
    while let Some((consumed, choice)) = scan_choice(&segment[cursor..]) {
        choices.push(choice);
        cursor += consumed;
    }
    choices
}

/// Scan the next choice from the start of `rest`
///
/// Returns the number of bytes consumed (through the sentinel and, when
/// present, the correctness marker) together with the parsed choice, or
/// `None` when no further option exists.
fn scan_choice(rest: &str) -> Option<(usize, Choice)> {
    let label = find_option_label(rest)?;
    let body_start = label + 2;
    let sentinel = rest[body_start..].find(OPTION_SENTINEL)? + body_start;
    let text = rest[body_start..sentinel].trim().to_string();

    let mut end = sentinel + OPTION_SENTINEL.len();
    let after = &rest[end..];
    let skipped = after.len() - after.trim_start().len();
    let is_correct = after.trim_start().starts_with(CORRECT_MARKER);
    if is_correct {
        end += skipped + CORRECT_MARKER.len_utf8();
    }
    Some((end, Choice { text, is_correct }))
}

/// Find the earliest `<LETTER>.` label position
fn find_option_label(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    (0..bytes.len().saturating_sub(1))
        .find(|&i| bytes[i].is_ascii_uppercase() && bytes[i + 1] == b'.')
}
