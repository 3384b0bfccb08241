//! # quizmix
//!
//! A parser and randomizer for line-oriented multiple-choice quiz documents.
//!
//! A quiz source is a `.docx` file in which each question occupies one line:
//!
//! ```text
//! 1. What is 2+2? A. 3;[*] B. 4;[*] = C. 5;[*]
//! ```
//!
//! Every option ends with the `;[*]` sentinel; an option followed by `=` is a
//! correct answer. quizmix extracts the questions, shuffles question order and
//! option order independently, selects a requested number of questions, and
//! writes a new document whose trailer is the answer key for the shuffled
//! letters (rendered in white, so it is present but not normally visible).

pub mod quiz;
