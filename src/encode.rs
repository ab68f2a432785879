//! Tagged text encoding.
//!
//! This module provides the [`Encoder`] that renders a [`Value`] tree into the wire grammar
//! described in [`grammar`](crate::grammar).
//!
//! ## Usage
//!
//! ```rust
//! use serde_tagtext::{encode, tagtext};
//!
//! let record = tagtext!({ "name": "Boot", "price": 450 });
//! assert_eq!(
//!     encode(&record).unwrap(),
//!     "D:{k:str(name):v:str(Boot); k:str(price):v:int(450)}"
//! );
//! ```
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use serde_tagtext::{Encoder, Options, Value};
//!
//! let options = Options::new();
//! let mut encoder = Encoder::new(&options);
//! encoder.write_value(&Value::Sequence(vec![Value::from(1), Value::from(2)])).unwrap();
//! assert_eq!(encoder.into_inner(), "L:[int(1);int(2);]");
//! ```

use crate::grammar::{
    is_tagged, ELEMENT_TERMINATOR, INT_OPEN, ITEM_SEPARATOR, KEY_OPEN, LEAF_CLOSE, MAP_CLOSE,
    MAP_OPEN, SEQ_CLOSE, SEQ_OPEN, STR_OPEN, VALUE_MARKER,
};
use crate::{Error, Options, Result, Splitting, Value};
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Encode a value with default options.
///
/// # Errors
///
/// Returns [`Error::DepthExceeded`] when the tree nests deeper than the default limit.
pub fn encode(value: &Value) -> Result<String> {
    encode_with_options(value, &Options::default())
}

/// Encode a value with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::{encode_with_options, Error, Options, Value};
///
/// let options = Options::new().with_reject_ambiguous(true);
/// let err = encode_with_options(&Value::from("(a) b"), &options).unwrap_err();
/// assert!(matches!(err, Error::AmbiguousDelimiter { .. }));
/// ```
///
/// # Errors
///
/// Returns [`Error::DepthExceeded`] past `options.max_depth`, and
/// [`Error::AmbiguousDelimiter`] for unsafe payloads when `options.reject_ambiguous` is set.
pub fn encode_with_options(value: &Value, options: &Options) -> Result<String> {
    let mut encoder = Encoder::new(options);
    encoder.write_value(value)?;
    let output = encoder.into_inner();
    trace!(len = output.len(), "encoded value");
    Ok(output)
}

/// Render a mapping key in the text form the grammar requires.
///
/// Text keys are borrowed verbatim, integer keys become their decimal form, and sequence or
/// mapping keys become their own encoded form.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::{encode::key_to_text, Value};
///
/// assert_eq!(key_to_text(&Value::from("name")).unwrap(), "name");
/// assert_eq!(key_to_text(&Value::from(-3)).unwrap(), "-3");
/// assert_eq!(
///     key_to_text(&Value::Sequence(vec![Value::from(1)])).unwrap(),
///     "L:[int(1);]"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::DepthExceeded`] when a composite key nests deeper than the default limit.
pub fn key_to_text(key: &Value) -> Result<Cow<'_, str>> {
    Encoder::new(&Options::default()).key_text(key, 0)
}

/// The tagged text encoder.
///
/// Appends the encoded form of values to an internal buffer.
pub struct Encoder<'o> {
    output: String,
    options: &'o Options,
}

impl<'o> Encoder<'o> {
    pub fn new(options: &'o Options) -> Self {
        Encoder {
            output: String::with_capacity(64),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Append the encoded form of `value`.
    ///
    /// # Errors
    ///
    /// See [`encode_with_options`].
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        self.write_at(value, 0)
    }

    fn write_at(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Integer(i) => {
                self.output.push_str(INT_OPEN);
                self.output.push_str(&i.to_string());
                self.output.push_str(LEAF_CLOSE);
            }
            Value::Text(s) => {
                self.check_payload(s, false)?;
                self.output.push_str(STR_OPEN);
                self.output.push_str(s);
                self.output.push_str(LEAF_CLOSE);
            }
            Value::Sequence(items) => {
                let depth = self.enter(depth)?;
                self.output.push_str(SEQ_OPEN);
                for item in items {
                    let start = self.output.len();
                    self.write_at(item, depth)?;
                    self.check_child(start, ELEMENT_TERMINATOR)?;
                    self.output.push_str(ELEMENT_TERMINATOR);
                }
                self.output.push_str(SEQ_CLOSE);
            }
            Value::Mapping(map) => {
                let depth = self.enter(depth)?;
                let mut seen = HashSet::new();
                self.output.push_str(MAP_OPEN);
                for (index, (key, item)) in map.iter().enumerate() {
                    if index > 0 {
                        self.output.push_str(ITEM_SEPARATOR);
                    }
                    let key = self.key_text(key, depth)?;
                    self.check_payload(&key, true)?;
                    if self.options.reject_ambiguous && !seen.insert(key.clone()) {
                        debug!(len = key.len(), "two keys share one text form");
                        return Err(Error::ambiguous_delimiter(&key));
                    }
                    self.output.push_str(KEY_OPEN);
                    self.output.push_str(&key);
                    self.output.push_str(LEAF_CLOSE);
                    self.output.push_str(VALUE_MARKER);
                    let start = self.output.len();
                    self.write_at(item, depth)?;
                    self.check_child(start, ITEM_SEPARATOR)?;
                }
                self.output.push_str(MAP_CLOSE);
            }
        }
        Ok(())
    }

    fn key_text<'k>(&self, key: &'k Value, depth: usize) -> Result<Cow<'k, str>> {
        match key {
            Value::Text(s) => Ok(Cow::Borrowed(s)),
            Value::Integer(i) => Ok(Cow::Owned(i.to_string())),
            Value::Sequence(_) | Value::Mapping(_) => {
                let mut nested = Encoder::new(self.options);
                nested.write_at(key, depth)?;
                Ok(Cow::Owned(nested.into_inner()))
            }
        }
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let next = depth + 1;
        if next > self.options.max_depth {
            debug!(limit = self.options.max_depth, "encode nesting too deep");
            return Err(Error::depth_exceeded(self.options.max_depth));
        }
        Ok(next)
    }

    // Literal splitting cuts a child at every delimiter it holds, nested or not.
    fn check_child(&self, start: usize, delimiter: &str) -> Result<()> {
        if !self.options.reject_ambiguous || self.options.splitting != Splitting::Literal {
            return Ok(());
        }
        let child = &self.output[start..];
        if child.contains(delimiter) {
            debug!(len = child.len(), "nested container holds a delimiter");
            return Err(Error::ambiguous_delimiter(child));
        }
        Ok(())
    }

    fn check_payload(&self, text: &str, is_key: bool) -> Result<()> {
        if self.options.reject_ambiguous && is_ambiguous(text, self.options.splitting, is_key) {
            debug!(len = text.len(), is_key, "payload holds a grammar delimiter");
            return Err(Error::ambiguous_delimiter(text));
        }
        Ok(())
    }
}

/// Whether `text` would decode into something else once wrapped in `str(..)` or `k:str(..)`.
fn is_ambiguous(text: &str, splitting: Splitting, is_key: bool) -> bool {
    if text.contains(LEAF_CLOSE) {
        return true;
    }
    // Raw key text is decoded again, so a tagged shape turns into another variant.
    if is_key && is_tagged(text) {
        return true;
    }
    match splitting {
        Splitting::Nested => false,
        Splitting::Literal => {
            text.contains(ELEMENT_TERMINATOR) || (is_key && text.contains(VALUE_MARKER))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Map;

    #[test]
    fn test_encode_leaves() {
        assert_eq!(encode(&Value::Integer(0)).unwrap(), "int(0)");
        assert_eq!(encode(&Value::Integer(-42)).unwrap(), "int(-42)");
        assert_eq!(encode(&Value::from("")).unwrap(), "str()");
        assert_eq!(encode(&Value::from("a b")).unwrap(), "str(a b)");
    }

    #[test]
    fn test_sequence_terminates_every_element() {
        let seq = Value::Sequence(vec![Value::from("a"), Value::Integer(2)]);
        assert_eq!(encode(&seq).unwrap(), "L:[str(a);int(2);]");
        assert_eq!(encode(&Value::Sequence(vec![])).unwrap(), "L:[]");
    }

    #[test]
    fn test_mapping_joins_items() {
        let mut map = Map::new();
        map.insert("a", 1);
        map.insert("b", Value::Sequence(vec![]));
        assert_eq!(
            encode(&Value::Mapping(map)).unwrap(),
            "D:{k:str(a):v:int(1); k:str(b):v:L:[]}"
        );
        assert_eq!(encode(&Value::Mapping(Map::new())).unwrap(), "D:{}");
    }

    #[test]
    fn test_non_text_keys_are_coerced() {
        let mut map = Map::new();
        map.insert(7, "seven");
        map.insert(Value::Sequence(vec![Value::from("x")]), 1);
        assert_eq!(
            encode(&Value::Mapping(map)).unwrap(),
            "D:{k:str(7):v:str(seven); k:str(L:[str(x);]):v:int(1)}"
        );
    }

    #[test]
    fn test_depth_limit() {
        let options = Options::new().with_max_depth(2);
        let two = Value::Sequence(vec![Value::Sequence(vec![])]);
        let three = Value::Sequence(vec![two.clone()]);

        assert_eq!(encode_with_options(&two, &options).unwrap(), "L:[L:[];]");
        assert_eq!(
            encode_with_options(&three, &options),
            Err(Error::depth_exceeded(2))
        );
    }

    #[test]
    fn test_zero_depth_still_encodes_leaves() {
        let options = Options::new().with_max_depth(0);
        assert!(encode_with_options(&Value::Integer(1), &options).is_ok());
        assert!(encode_with_options(&Value::Sequence(vec![]), &options).is_err());
    }

    #[test]
    fn test_reject_ambiguous_by_strategy() {
        let nested = Options::new().with_reject_ambiguous(true);
        let literal = Options::legacy().with_reject_ambiguous(true);
        let semicolon = Value::Sequence(vec![Value::from("a; b")]);

        assert!(encode_with_options(&semicolon, &nested).is_ok());
        assert_eq!(
            encode_with_options(&semicolon, &literal),
            Err(Error::ambiguous_delimiter("a; b"))
        );
        assert!(encode_with_options(&Value::from("x)"), &nested).is_err());
    }

    #[test]
    fn test_reject_ambiguous_nested_containers_under_literal() {
        let literal = Options::legacy().with_reject_ambiguous(true);
        let rows = Value::Sequence(vec![Value::Sequence(vec![
            Value::Integer(1),
            Value::Integer(2),
        ])]);
        assert_eq!(
            encode_with_options(&rows, &literal),
            Err(Error::ambiguous_delimiter("L:[int(1);int(2);]"))
        );
        assert!(encode_with_options(&rows, &Options::strict()).is_ok());

        // A sequence inside a mapping holds no "; ", so it survives literal splitting
        let mut flat = Map::new();
        flat.insert("sizes", Value::Sequence(vec![Value::from(40), Value::from(41)]));
        flat.insert("name", "Boot");
        assert!(encode_with_options(&Value::Mapping(flat), &literal).is_ok());

        let mut inner = Map::new();
        inner.insert("a", 1);
        inner.insert("b", 2);
        let mut outer = Map::new();
        outer.insert("pair", inner);
        assert_eq!(
            encode_with_options(&Value::Mapping(outer), &literal),
            Err(Error::ambiguous_delimiter("D:{k:str(a):v:int(1); k:str(b):v:int(2)}"))
        );
    }

    #[test]
    fn test_reject_colliding_keys() {
        let mut map = Map::new();
        map.insert(1, "a");
        map.insert("1", "b");
        let value = Value::Mapping(map);

        assert_eq!(
            encode(&value).unwrap(),
            "D:{k:str(1):v:str(a); k:str(1):v:str(b)}"
        );
        assert_eq!(
            encode_with_options(&value, &Options::strict()),
            Err(Error::ambiguous_delimiter("1"))
        );
    }

    #[test]
    fn test_reject_ambiguous_keys() {
        let options = Options::new().with_reject_ambiguous(true);
        let tagged_key: Value = vec![("L:[]", 1)].into_iter().collect();
        let plain_key: Value = vec![("name:v:x", 1)].into_iter().collect();

        assert!(encode_with_options(&tagged_key, &options).is_err());
        assert!(encode_with_options(&plain_key, &options).is_ok());

        let literal = Options::strict().with_splitting(Splitting::Literal);
        assert!(encode_with_options(&plain_key, &literal).is_err());
    }

    #[test]
    fn test_ambiguous_payloads_pass_by_default() {
        assert_eq!(encode(&Value::from("a) b")).unwrap(), "str(a) b)");
    }
}
