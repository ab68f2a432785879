//! # serde_tagtext
//!
//! A Serde-compatible codec for a self-describing, tagged text format.
//!
//! ## What is Tagged Text?
//!
//! Every value carries its own type tag, so a payload can be read back without a schema:
//!
//! ```text
//! int(450)                                    an integer
//! str(Boot)                                   a text
//! L:[int(1);int(2);]                          a sequence
//! D:{k:str(name):v:str(Boot); k:str(price):v:int(450)}   a mapping
//! ```
//!
//! The full grammar, and the payloads it cannot carry unambiguously, are documented in
//! [`grammar`].
//!
//! ## Key Features
//!
//! - **Closed Value Model**: [`Value`] has exactly four variants; every traversal is an
//!   exhaustive match
//! - **Serde Compatible**: Works with `#[derive(Serialize, Deserialize)]` types; types the model
//!   cannot hold are rejected with [`Error::UnsupportedType`] instead of being coerced
//! - **Bounded Recursion**: Both directions stop with [`Error::DepthExceeded`] instead of
//!   exhausting the stack
//! - **Configurable Strictness**: Permissive fallback to text by default, strict rejection and
//!   ambiguity checks through [`Options`]
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_tagtext::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Product {
//!     name: String,
//!     price: i64,
//!     link: String,
//! }
//!
//! let boot = Product {
//!     name: "Boot".to_string(),
//!     price: 450,
//!     link: "https://shop.example/boot".to_string(),
//! };
//!
//! let text = to_string(&boot).unwrap();
//! assert_eq!(
//!     text,
//!     "D:{k:str(name):v:str(Boot); k:str(price):v:int(450); k:str(link):v:str(https://shop.example/boot)}"
//! );
//!
//! let back: Product = from_str(&text).unwrap();
//! assert_eq!(back, boot);
//! ```
//!
//! ### Dynamic Values with the tagtext! Macro
//!
//! ```rust
//! use serde_tagtext::{decode, encode, tagtext};
//!
//! let summary = tagtext!({
//!     "products": [{ "name": "Boot", "price": 450 }],
//!     "total_price": 450
//! });
//!
//! let text = encode(&summary).unwrap();
//! assert_eq!(decode(&text).unwrap(), summary);
//! ```
//!
//! ## Concurrency
//!
//! Encoding and decoding are pure functions of their input with no shared state; independent
//! calls can run on any number of threads at once.

pub mod de;
pub mod decode;
pub mod encode;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::{from_value, ValueDeserializer};
pub use decode::{decode, decode_with_options, Decoder};
pub use encode::{encode, encode_with_options, Encoder};
pub use error::{Error, Result};
pub use map::Map;
pub use options::{Options, Splitting};
pub use ser::{to_value, ValueSerializer};
pub use value::Value;

use serde::{de::DeserializeOwned, Serialize};
use std::io;

/// Serialize any `T: Serialize` to tagged text.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::to_string;
///
/// assert_eq!(to_string(&vec![1, 2]).unwrap(), "L:[int(1);int(2);]");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the value holds a type outside the value model.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &Options::default())
}

/// Serialize any `T: Serialize` to tagged text with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be represented or fails the checks in `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &Options) -> Result<String>
where
    T: ?Sized + Serialize,
{
    encode_with_options(&to_value(value)?, options)
}

/// Serialize any `T: Serialize` to a writer as tagged text.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &("a", 1)).unwrap();
/// assert_eq!(buffer, b"L:[str(a);int(1);]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from tagged text.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::from_str;
///
/// let numbers: Vec<i32> = from_str("L:[int(1);int(2);int(3);]").unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if decoding fails or the tree does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &Options::default())
}

/// Deserialize an instance of type `T` from tagged text with custom options.
///
/// # Errors
///
/// Returns an error if decoding fails or the tree does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &Options) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode_with_options(s, options)?)
}

/// Deserialize an instance of type `T` from an I/O stream of tagged text.
///
/// # Errors
///
/// Returns an error if reading fails, decoding fails, or the tree does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of tagged text.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::from_slice;
///
/// let name: String = from_slice(b"str(Boot)").unwrap();
/// assert_eq!(name, "Boot");
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or cannot be decoded into `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
