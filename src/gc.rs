//! GC-content calculation and alphabet validation.
//!
//! `gc_content` accepts any string and never fails. The interactive loop runs
//! `validate` first and only computes on sequences that pass.

use crate::error::{Error, Result};

/// The accepted nucleotide alphabet (uppercase).
pub const ALPHABET: &str = "ACGT";

/// Count the number of G and C bases in `seq`, ignoring case.
pub fn gc_count(seq: &str) -> usize {
    seq.chars()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'G' | 'C'))
        .count()
}

/// Calculate the GC content of `seq` as a percentage between 0 and 100.
///
/// Case-insensitive. The length is counted in characters, so anything outside
/// the alphabet dilutes the result rather than causing an error. An empty
/// sequence yields `0.0`.
pub fn gc_content(seq: &str) -> f64 {
    let len = seq.chars().count();
    if len == 0 {
        return 0.0;
    }
    100.0 * gc_count(seq) as f64 / len as f64
}

/// Position and value of the first character of `seq` outside the alphabet.
pub fn first_invalid(seq: &str) -> Option<(usize, char)> {
    seq.chars()
        .enumerate()
        .find(|(_, c)| !ALPHABET.contains(c.to_ascii_uppercase()))
}

/// Check that every character of `seq` is one of A, C, G, T (any case).
///
/// # Errors
/// Returns `Error::InvalidBase` for the first character outside the alphabet.
pub fn validate(seq: &str) -> Result<()> {
    match first_invalid(seq) {
        Some((position, base)) => Err(Error::InvalidBase { base, position }),
        None => Ok(()),
    }
}
