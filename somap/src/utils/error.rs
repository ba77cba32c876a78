#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// An error returned when an operation receives an argument it cannot work with: vectors of
/// different length, an index outside of the valid range or malformed network parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidArgument(String);

/// A type alias for result type with `InvalidArgument`.
pub type SomResult<T> = Result<T, InvalidArgument>;

impl InvalidArgument {
    /// Creates an error about two sequences which are expected to have the same length.
    pub fn size_mismatch(what: &str, expected: usize, actual: usize) -> Self {
        Self(format!("{what}: expected size {expected}, got {actual}"))
    }

    /// Creates an error about index outside of `0..size` range.
    pub fn out_of_range(what: &str, index: usize, size: usize) -> Self {
        Self(format!("{what}: index {index} is out of range 0..{size}"))
    }

    /// Returns an error message.
    pub fn message(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl std::error::Error for InvalidArgument {}

impl From<String> for InvalidArgument {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for InvalidArgument {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}
