//! Answer-key derivation for one question's choices
//!
//! Shuffles a copy of the choices and reads the correct letters off the new
//! order: the choice at 0-based position k gets letter `'A' + k`. The
//! correctness flag travels with its element through the permutation, so the
//! letters are a bijection between originally-correct choices and their
//! post-shuffle positions.

use rand::Rng;

use crate::quiz::ast::Choice;
use crate::quiz::shuffle::shuffled;

/// Shuffle a question's choices and derive the post-shuffle answer letters
///
/// Returns the shuffled choices together with the `", "`-joined letters of
/// every correct choice, in ascending position order. The string is empty
/// when no choice is correct.
pub fn shuffle_with_letters<R: Rng>(choices: &[Choice], rng: &mut R) -> (Vec<Choice>, String) {
    let permuted = shuffled(choices, rng);
    let letters = permuted
        .iter()
        .enumerate()
        .filter(|(_, choice)| choice.is_correct)
        .map(|(position, _)| position_letter(position).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    (permuted, letters)
}

/// Letter assigned to a 0-based position: A, B, C, ...
pub fn position_letter(position: usize) -> char {
    (b'A' + position as u8) as char
}
