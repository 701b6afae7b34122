//! Error types.

use core::fmt;

/// Curve group errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Coordinates handed to a validating constructor do not satisfy the
    /// curve equation.
    MalformedPoint,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedPoint => f.write_str("coordinates do not lie on the curve"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type with the `curvegroup` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
