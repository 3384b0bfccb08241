//! Line grammar matcher (stage 1)
//!
//! A line encodes a question when it has the shape:
//!
//! ```text
//! <N>. <stem ending in ? or :> A. <options segment...>
//! ```
//!
//! that is: a leading integer, a period, at least one whitespace character, a
//! stem whose last character is `?` or `:`, optional whitespace, then an
//! options segment anchored on `A.`. The stem split is lazy: the first `?` or
//! `:` from which the remainder of the line (after skipping spaces) starts
//! with `A.` ends the stem. Anything else is noise and yields `None`.

/// A matched question line, split into its stem and raw options segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionLine {
    /// Trimmed stem, without the leading enumeration
    pub stem: String,
    /// Remainder of the line starting at the `A.` anchor
    pub options: String,
}

/// Match one line against the question grammar
///
/// Returns `None` for any line that does not match; non-matching lines are
/// noise (headers, blank lines, footers) and cause no error.
pub fn match_question_line(line: &str) -> Option<QuestionLine> {
    let body = strip_enumeration(line)?;

    // Lazy stem split: take the first ?/: that is followed by the options
    // anchor, so a stem may itself contain earlier ? or : characters.
    for (idx, ch) in body.char_indices() {
        if ch != '?' && ch != ':' {
            continue;
        }
        let stem_end = idx + ch.len_utf8();
        let rest = body[stem_end..].trim_start();
        if rest.starts_with("A.") {
            return Some(QuestionLine {
                stem: body[..stem_end].trim().to_string(),
                options: rest.to_string(),
            });
        }
    }
    None
}

/// Consume `<digits>.<whitespace>` at the start of the line
///
/// Returns the remainder after the enumeration, or `None` when the line does
/// not start with one.
fn strip_enumeration(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || !line[digits..].starts_with('.') {
        return None;
    }
    let after_period = &line[digits + 1..];
    let trimmed = after_period.trim_start();
    // At least one whitespace character must separate the number from the stem
    if trimmed.len() == after_period.len() {
        return None;
    }
    Some(trimmed)
}
