//! Error types for tagged text encoding and decoding.
//!
//! The codec reports a small, closed set of failures:
//!
//! - **Encode-time**: [`Error::UnsupportedType`] when a Serde type has no counterpart in the
//!   four-variant [`Value`](crate::Value) model, [`Error::AmbiguousDelimiter`] when ambiguity
//!   rejection is enabled and a payload would corrupt decode boundaries.
//! - **Decode-time**: [`Error::MalformedInteger`] for an `int(..)` whose interior is not an
//!   `i64`, [`Error::MalformedStructure`] for unrecognized shapes in strict mode.
//! - **Both directions**: [`Error::DepthExceeded`] once nesting passes the configured limit.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tagtext::{decode, Error};
//!
//! let err = decode("int(abc)").unwrap_err();
//! assert!(matches!(err, Error::MalformedInteger { .. }));
//! assert!(err.to_string().contains("abc"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding or decoding tagged text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A type with no representation in the value model was handed to the encoder
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// The interior of an `int(..)` fragment is not a valid integer literal
    #[error("Malformed integer literal: int({literal})")]
    MalformedInteger { literal: String },

    /// Strict decoding met a fragment matching none of the tagged shapes
    #[error("Malformed structure: {fragment:?} does not match any tagged shape")]
    MalformedStructure { fragment: String },

    /// A payload contains a delimiter that would corrupt sibling boundaries on decode
    #[error("Ambiguous delimiter in payload {text:?}")]
    AmbiguousDelimiter { text: String },

    /// Nesting went past the configured limit
    #[error("Nesting depth exceeded the limit of {limit}")]
    DepthExceeded { limit: usize },

    /// A value of one variant was requested as another
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for types that cannot be represented as a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tagtext::Error;
    ///
    /// let err = Error::unsupported_type("bool");
    /// assert_eq!(err.to_string(), "Unsupported type: bool");
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a malformed integer error carrying the offending `int(..)` interior.
    pub fn malformed_integer(literal: &str) -> Self {
        Error::MalformedInteger {
            literal: literal.to_string(),
        }
    }

    /// Creates a malformed structure error carrying the rejected fragment.
    pub fn malformed_structure(fragment: &str) -> Self {
        Error::MalformedStructure {
            fragment: fragment.to_string(),
        }
    }

    /// Creates an ambiguous delimiter error carrying the offending payload.
    pub fn ambiguous_delimiter(text: &str) -> Self {
        Error::AmbiguousDelimiter {
            text: text.to_string(),
        }
    }

    /// Creates a depth error for the given limit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tagtext::Error;
    ///
    /// let err = Error::depth_exceeded(8);
    /// assert!(err.to_string().contains("limit of 8"));
    /// ```
    pub fn depth_exceeded(limit: usize) -> Self {
        Error::DepthExceeded { limit }
    }

    /// Creates a type mismatch error when a value is requested as the wrong variant.
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
