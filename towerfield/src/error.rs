//! Error types.

use core::fmt;

/// Field arithmetic errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to invert (or divide by) the zero element.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type with the `towerfield` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
