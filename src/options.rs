//! Configuration options for tagged text encoding and decoding.
//!
//! This module provides types to tune how strictly the codec treats its input:
//!
//! - [`Options`]: Main configuration struct, shared by the encoder and the decoder
//! - [`Splitting`]: How the decoder finds item and element boundaries
//!
//! ## Examples
//!
//! ```rust
//! use serde_tagtext::{decode_with_options, Options, Splitting};
//!
//! // Reject anything that is not tagged data
//! let options = Options::strict();
//! assert!(decode_with_options("hello", &options).is_err());
//!
//! // Reproduce the plain delimiter splitting of older producers
//! let options = Options::new().with_splitting(Splitting::Literal);
//! let value = decode_with_options("L:[int(1);int(2);]", &options).unwrap();
//! assert_eq!(value.as_sequence().map(|s| s.len()), Some(2));
//! ```

/// Default nesting limit for both directions.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Boundary detection strategy for mapping items and sequence elements.
///
/// - **Nested**: Default. Delimiters only count at nesting level zero; the payloads of
///   `int(..)`/`str(..)` are opaque up to their closing `)`.
/// - **Literal**: Every occurrence of `"; "` (items) or `;` (elements) is a boundary, and the
///   key ends at the first `":v:"`. Nested multi-element containers and payloads holding
///   delimiters decode into a different tree than was encoded.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::Splitting;
///
/// assert_eq!(Splitting::default(), Splitting::Nested);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Splitting {
    #[default]
    Nested,
    Literal,
}

/// Configuration options for the codec.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::{Options, Splitting};
///
/// let options = Options::new()
///     .with_max_depth(16)
///     .with_strict(true)
///     .with_reject_ambiguous(true);
/// assert_eq!(options.max_depth, 16);
/// assert_eq!(options.splitting, Splitting::Nested);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub max_depth: usize,
    pub splitting: Splitting,
    pub strict: bool,
    pub reject_ambiguous: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: DEFAULT_MAX_DEPTH,
            splitting: Splitting::default(),
            strict: false,
            reject_ambiguous: false,
        }
    }
}

impl Options {
    /// Creates default options (nested splitting, permissive decode, depth limit 128).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tagtext::Options;
    ///
    /// let options = Options::new();
    /// assert_eq!(options.max_depth, 128);
    /// assert!(!options.strict);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject untagged fragments and ambiguous payloads.
    #[must_use]
    pub fn strict() -> Self {
        Options {
            strict: true,
            reject_ambiguous: true,
            ..Default::default()
        }
    }

    /// Creates options matching the plain delimiter-splitting decoder: literal boundaries and
    /// permissive fallback to text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tagtext::{Options, Splitting};
    ///
    /// let options = Options::legacy();
    /// assert_eq!(options.splitting, Splitting::Literal);
    /// assert!(!options.strict);
    /// ```
    #[must_use]
    pub fn legacy() -> Self {
        Options {
            splitting: Splitting::Literal,
            ..Default::default()
        }
    }

    /// Sets the maximum container nesting accepted in either direction.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the boundary detection strategy used by the decoder.
    #[must_use]
    pub fn with_splitting(mut self, splitting: Splitting) -> Self {
        self.splitting = splitting;
        self
    }

    /// When set, the decoder raises `MalformedStructure` instead of falling back to text.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// When set, the encoder raises `AmbiguousDelimiter` for payloads that would not decode
    /// back under the configured splitting.
    #[must_use]
    pub fn with_reject_ambiguous(mut self, reject_ambiguous: bool) -> Self {
        self.reject_ambiguous = reject_ambiguous;
        self
    }
}
