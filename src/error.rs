use thiserror::Error;

/// Recoverable failures reported by the range algorithms.
///
/// Accessing an empty range is not represented here: that is a broken
/// precondition and panics at the call site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot count occurrences of an empty needle")]
    EmptyNeedle,
    #[error("cannot select an extremum from an empty range")]
    EmptyRange,
    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    MalformedInput { offset: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
