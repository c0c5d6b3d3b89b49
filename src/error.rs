use thiserror::Error;

/// Errors raised by the sequence algorithms.
///
/// Arguments are validated before any work is done, so an `Err` always means
/// nothing was computed. A miss in a binary search is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required input was absent or a range contradicts itself.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A bound lies outside `[0, len]`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
