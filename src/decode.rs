//! Tagged text decoding.
//!
//! This module provides the [`Decoder`] that turns tagged text back into a [`Value`] tree.
//!
//! ## Overview
//!
//! The decoder does not tokenize. It sniffs the prefix and suffix of a fragment to pick one
//! of the four shapes, strips the tags, splits container bodies on their delimiters and
//! recurses into every piece:
//!
//! 1. `D:{..}`: split the body into items on `"; "`, split each item at the first `":v:"`,
//!    strip `k:str(..)` from the key and decode both halves
//! 2. `L:[..]`: split the body on `;` and decode every non-empty element
//! 3. `int(..)`: parse the interior as an `i64`
//! 4. `str(..)`: take the interior verbatim
//! 5. anything else: the fragment itself, as text (or an error in strict mode)
//!
//! How delimiters are found is governed by [`Splitting`]: `Nested` ignores delimiters inside
//! nested containers and inside `int(..)`/`str(..)` payloads, `Literal` splits on every
//! occurrence.
//!
//! ## Usage
//!
//! ```rust
//! use serde_tagtext::{decode, Value};
//!
//! let value = decode("L:[int(1);int(2);]").unwrap();
//! assert_eq!(value, Value::Sequence(vec![Value::Integer(1), Value::Integer(2)]));
//!
//! // Untagged text comes back unchanged
//! assert_eq!(decode("hello").unwrap(), Value::from("hello"));
//! ```

use crate::grammar::{
    strip_tags, ELEMENT_TERMINATOR, INT_OPEN, ITEM_SEPARATOR, KEY_OPEN, LEAF_CLOSE, MAP_CLOSE,
    MAP_OPEN, SEQ_CLOSE, SEQ_OPEN, STR_OPEN, VALUE_MARKER,
};
use crate::{Error, Map, Options, Result, Splitting, Value};
use tracing::{debug, trace};

/// Decode tagged text with default options.
///
/// # Errors
///
/// Returns [`Error::MalformedInteger`] when an `int(..)` interior is not an `i64`, and
/// [`Error::DepthExceeded`] past the default nesting limit.
pub fn decode(text: &str) -> Result<Value> {
    decode_with_options(text, &Options::default())
}

/// Decode tagged text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::{decode_with_options, Error, Options};
///
/// let err = decode_with_options("L:[int(1);oops;]", &Options::strict()).unwrap_err();
/// assert_eq!(err, Error::malformed_structure("oops"));
/// ```
///
/// # Errors
///
/// As [`decode`], plus [`Error::MalformedStructure`] for untagged fragments when
/// `options.strict` is set.
pub fn decode_with_options(text: &str, options: &Options) -> Result<Value> {
    trace!(len = text.len(), "decoding value");
    Decoder::new(options).decode(text)
}

/// The tagged text decoder.
pub struct Decoder<'o> {
    options: &'o Options,
}

impl<'o> Decoder<'o> {
    pub fn new(options: &'o Options) -> Self {
        Decoder { options }
    }

    /// Decode a complete payload.
    ///
    /// # Errors
    ///
    /// See [`decode_with_options`].
    pub fn decode(&self, text: &str) -> Result<Value> {
        self.decode_at(text, 0, self.options.strict)
    }

    fn decode_at(&self, text: &str, depth: usize, strict: bool) -> Result<Value> {
        if let Some(body) = strip_tags(text, MAP_OPEN, MAP_CLOSE) {
            return self.decode_mapping(text, body, depth, strict);
        }
        if let Some(body) = strip_tags(text, SEQ_OPEN, SEQ_CLOSE) {
            return self.decode_sequence(body, depth, strict);
        }
        if let Some(literal) = strip_tags(text, INT_OPEN, LEAF_CLOSE) {
            return parse_integer(literal).map(Value::Integer);
        }
        if let Some(payload) = strip_tags(text, STR_OPEN, LEAF_CLOSE) {
            return Ok(Value::Text(payload.to_string()));
        }
        self.untagged(text, strict)
    }

    fn decode_mapping(&self, text: &str, body: &str, depth: usize, strict: bool) -> Result<Value> {
        let depth = self.enter(depth)?;
        let mut map = Map::new();

        for item in self.split(body, ITEM_SEPARATOR) {
            if item.is_empty() {
                continue;
            }
            let Some(at) = self.find(item, VALUE_MARKER) else {
                // Not an item, so the mapping as a whole is unreadable.
                let fragment = if strict { item } else { text };
                return self.untagged(fragment, strict);
            };
            let (key_part, value_part) = (&item[..at], &item[at + VALUE_MARKER.len()..]);

            let key = match strip_tags(key_part, KEY_OPEN, LEAF_CLOSE) {
                Some(raw) => self.decode_at(raw, depth, false)?,
                None if strict => return self.untagged(key_part, true),
                None => Value::Text(key_part.to_string()),
            };
            if strict && map.contains_key(key.clone()) {
                debug!(len = item.len(), "rejected repeated key");
                return Err(Error::malformed_structure(item));
            }
            let value = self.decode_at(value_part, depth, strict)?;
            map.insert(key, value);
        }

        Ok(Value::Mapping(map))
    }

    fn decode_sequence(&self, body: &str, depth: usize, strict: bool) -> Result<Value> {
        let depth = self.enter(depth)?;
        self.split(body, ELEMENT_TERMINATOR)
            .into_iter()
            .filter(|element| !element.is_empty())
            .map(|element| self.decode_at(element, depth, strict))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence)
    }

    fn untagged(&self, text: &str, strict: bool) -> Result<Value> {
        if strict {
            debug!(len = text.len(), "rejected untagged fragment");
            return Err(Error::malformed_structure(text));
        }
        debug!(len = text.len(), "untagged fragment kept as text");
        Ok(Value::Text(text.to_string()))
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let next = depth + 1;
        if next > self.options.max_depth {
            debug!(limit = self.options.max_depth, "decode nesting too deep");
            return Err(Error::depth_exceeded(self.options.max_depth));
        }
        Ok(next)
    }

    fn split<'t>(&self, body: &'t str, delimiter: &str) -> Vec<&'t str> {
        match self.options.splitting {
            Splitting::Literal => body.split(delimiter).collect(),
            Splitting::Nested => {
                let mut parts = Vec::new();
                let mut start = 0;
                for at in TopLevel::new(body, delimiter) {
                    parts.push(&body[start..at]);
                    start = at + delimiter.len();
                }
                parts.push(&body[start..]);
                parts
            }
        }
    }

    fn find(&self, item: &str, delimiter: &str) -> Option<usize> {
        match self.options.splitting {
            Splitting::Literal => item.find(delimiter),
            Splitting::Nested => TopLevel::new(item, delimiter).next(),
        }
    }
}

fn parse_integer(literal: &str) -> Result<i64> {
    if literal.starts_with('+') {
        return Err(Error::malformed_integer(literal));
    }
    literal
        .parse::<i64>()
        .map_err(|_| Error::malformed_integer(literal))
}

/// Byte offsets of `delimiter` outside nested containers and leaf payloads.
///
/// All tags and delimiters are ASCII, so every reported offset is a char boundary.
struct TopLevel<'t> {
    bytes: &'t [u8],
    delimiter: &'t [u8],
    pos: usize,
    closers: Vec<u8>,
    in_payload: bool,
}

impl<'t> TopLevel<'t> {
    fn new(text: &'t str, delimiter: &'t str) -> Self {
        TopLevel {
            bytes: text.as_bytes(),
            delimiter: delimiter.as_bytes(),
            pos: 0,
            closers: Vec::new(),
            in_payload: false,
        }
    }
}

impl Iterator for TopLevel<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pos < self.bytes.len() {
            let at = self.pos;
            let rest = &self.bytes[at..];

            if self.in_payload {
                self.in_payload = rest[0] != LEAF_CLOSE.as_bytes()[0];
                self.pos += 1;
                continue;
            }
            if self.closers.is_empty() && rest.starts_with(self.delimiter) {
                self.pos += self.delimiter.len();
                return Some(at);
            }
            if rest.starts_with(INT_OPEN.as_bytes()) || rest.starts_with(STR_OPEN.as_bytes()) {
                self.in_payload = true;
                self.pos += INT_OPEN.len();
                continue;
            }
            if rest.starts_with(SEQ_OPEN.as_bytes()) {
                self.closers.push(SEQ_CLOSE.as_bytes()[0]);
                self.pos += SEQ_OPEN.len();
                continue;
            }
            if rest.starts_with(MAP_OPEN.as_bytes()) {
                self.closers.push(MAP_CLOSE.as_bytes()[0]);
                self.pos += MAP_OPEN.len();
                continue;
            }
            if self.closers.last() == Some(&rest[0]) {
                self.closers.pop();
            }
            self.pos += 1;
        }
        None
    }
}
