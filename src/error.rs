//! The `ConvertError` type, returned when text can't be converted to a number.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Errors from the string-to-number conversions in [`crate::convert`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The radix is neither 0 (infer from prefix) nor in `2..=36`.
    #[error("invalid radix {radix}: must be 0 or between 2 and 36")]
    InvalidRadix {
        /// The rejected radix
        radix: u32,
    },

    /// An element isn't an integer in the requested radix.
    #[error("element {index} ({input:?}) is not an integer in radix {radix}: {source}")]
    Int {
        /// Position of the offending element
        index: usize,
        /// The offending element's text
        input: String,
        /// The radix requested by the caller
        radix: u32,
        /// Why the standard library parser rejected it
        #[source]
        source: ParseIntError,
    },

    /// An element isn't a floating point number.
    #[error("element {index} ({input:?}) is not a floating point number: {source}")]
    Float {
        /// Position of the offending element
        index: usize,
        /// The offending element's text
        input: String,
        /// Why the standard library parser rejected it
        #[source]
        source: ParseFloatError,
    },
}

/// Result type for the conversions in [`crate::convert`].
pub type Result<T> = std::result::Result<T, ConvertError>;
