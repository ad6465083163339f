//! Error type shared by the calculator and the interactive loop.

use thiserror::Error;

/// Everything that can go wrong in gcscan.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading stdin or writing stdout failed. Fatal for the session.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A character outside {A, C, G, T} at the given 0-based position.
    #[error("invalid base {base:?} at position {position}")]
    InvalidBase { base: char, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
