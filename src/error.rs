//! Error type shared by bit vectors, bit grids and the image tools.

use std::fmt;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures reported by bitplane operations.
///
/// Every variant is a local contract violation surfaced to the direct caller;
/// validation always runs before any storage is touched, so an `Err` never
/// leaves a vector or grid half-modified.
#[derive(Debug)]
pub enum Error {
    /// Malformed or self-inconsistent input.
    InvalidArgument(String),
    /// A bit, row or column index outside `0..len`.
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Exclusive upper bound that was violated
        len: usize,
    },
    /// A detached cursor was advanced after its vector changed.
    InvalidOperation(String),
    /// Requested feature is deliberately not provided.
    Unimplemented(&'static str),
    /// Wrapper around image decode/encode failures.
    Image(image::ImageError),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] with the provided message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::IndexOutOfRange`].
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an [`Error::InvalidOperation`] with the provided message.
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Error::InvalidOperation(msg) => write!(f, "invalid operation: {msg}"),
            Error::Unimplemented(what) => write!(f, "not implemented: {what}"),
            Error::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}
