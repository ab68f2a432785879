//! Tagged Text Format
//!
//! This module documents the wire grammar implemented by this library and holds the literal
//! tags shared by the encoder and the decoder.
//!
//! # Overview
//!
//! Every value carries its own type tag, so a payload can be decoded without a schema:
//!
//! ```text
//! Integer  ::= "int(" <decimal digits, optional leading '-'> ")"
//! Text     ::= "str(" <raw characters> ")"
//! Sequence ::= "L:[" (V ";")* "]"
//! Mapping  ::= "D:{" (Item ("; " Item)*)? "}"
//! Item     ::= "k:str(" <raw key characters> "):v:" V
//! ```
//!
//! Whitespace is never significant except for the single space of the `"; "` item
//! separator, which is written and matched exactly.
//!
//! # Examples
//!
//! | Value | Encoded |
//! |-------|---------|
//! | `42` | `int(42)` |
//! | `"Boot"` | `str(Boot)` |
//! | `[1, 2]` | `L:[int(1);int(2);]` |
//! | `[]` | `L:[]` |
//! | `{name: "Boot", price: 450}` | `D:{k:str(name):v:str(Boot); k:str(price):v:int(450)}` |
//! | `{}` | `D:{}` |
//!
//! # Keys
//!
//! A key is always written in the text form, whatever its variant:
//!
//! - Text keys are written verbatim
//! - Integer keys are written as their decimal form
//! - Sequence and mapping keys are written as their own encoded form
//!
//! On decode, the raw key characters go back through the decoder entry point, so a plain
//! key comes back as text. Integer keys therefore come back as text as well.
//!
//! # Payloads Are Not Escaped
//!
//! Text payloads are written verbatim. A payload holding grammar delimiters can move the
//! boundaries the decoder finds:
//!
//! - `)` closes a payload early under either splitting strategy
//! - `;` and `"; "` split a sequence or a mapping under
//!   [`Splitting::Literal`](crate::Splitting::Literal)
//! - `:v:` inside a key moves the key/value boundary under `Splitting::Literal`
//! - a nested container whose encoding holds `;` (inside a sequence) or `"; "` (inside a
//!   mapping) is cut apart under `Splitting::Literal`
//!
//! [`Splitting::Nested`](crate::Splitting::Nested) skips over `int(..)`/`str(..)`
//! payloads and nested containers while looking for delimiters, which leaves `)` as the
//! only hazard. Set [`Options::reject_ambiguous`](crate::Options) to have the encoder refuse
//! such payloads instead of producing text that decodes into a different tree.
//!
//! Distinct keys can also share one text form (`1` and `"1"` both become `k:str(1)`). By
//! default the decoder keeps the last value at the first key's position. With
//! `reject_ambiguous` the encoder refuses the mapping, and strict decoding rejects the
//! repeated key.
//!
//! # Unrecognized Input
//!
//! Text matching none of the tagged shapes decodes to a text value holding the input
//! unchanged. [`Options::strict`](crate::Options) turns that into a
//! [`MalformedStructure`](crate::Error::MalformedStructure) error for every value position.

pub const INT_OPEN: &str = "int(";
pub const STR_OPEN: &str = "str(";
pub const LEAF_CLOSE: &str = ")";

pub const SEQ_OPEN: &str = "L:[";
pub const SEQ_CLOSE: &str = "]";
pub const ELEMENT_TERMINATOR: &str = ";";

pub const MAP_OPEN: &str = "D:{";
pub const MAP_CLOSE: &str = "}";
pub const ITEM_SEPARATOR: &str = "; ";
pub const KEY_OPEN: &str = "k:str(";
pub const VALUE_MARKER: &str = ":v:";

/// Returns the text between `prefix` and `suffix` when `text` has both, without overlap.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::grammar::{strip_tags, INT_OPEN, LEAF_CLOSE};
///
/// assert_eq!(strip_tags("int(42)", INT_OPEN, LEAF_CLOSE), Some("42"));
/// assert_eq!(strip_tags("int(", INT_OPEN, LEAF_CLOSE), None);
/// ```
#[must_use]
pub fn strip_tags<'t>(text: &'t str, prefix: &str, suffix: &str) -> Option<&'t str> {
    if text.len() < prefix.len() + suffix.len() {
        return None;
    }
    text.strip_prefix(prefix)?.strip_suffix(suffix)
}

/// Returns `true` when `text` has the outer shape of one of the four tagged forms.
#[must_use]
pub fn is_tagged(text: &str) -> bool {
    strip_tags(text, MAP_OPEN, MAP_CLOSE).is_some()
        || strip_tags(text, SEQ_OPEN, SEQ_CLOSE).is_some()
        || strip_tags(text, INT_OPEN, LEAF_CLOSE).is_some()
        || strip_tags(text, STR_OPEN, LEAF_CLOSE).is_some()
}
