//! Error types shared across the workspace

use thiserror::Error;

/// Engine errors
///
/// Pure components (matcher, fusion, sanitizer) never fail on well-formed
/// input; only the two external collaborators can, and each failure has one
/// defined fallback at the call site.
#[derive(Error, Debug)]
pub enum Error {
    /// Input text was empty or whitespace-only; rejected before matching
    #[error("empty input text")]
    EmptyInput,

    /// The external classifier could not produce a verdict and no lexical
    /// override applied
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    /// The external generator failed; callers substitute the fixed apology
    #[error("generator unavailable: {0}")]
    GeneratorUnavailable(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
