//! Dynamic value representation for tagged text data.
//!
//! This module provides the [`Value`] enum, the closed four-variant tree the codec encodes
//! and decodes. Every traversal in the crate is an exhaustive `match` over these variants.
//!
//! ## Core Types
//!
//! - [`Value`]: An integer, a text, an ordered sequence or an ordered mapping
//! - [`Map`]: The insertion-ordered mapping payload
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_tagtext::{tagtext, Value};
//!
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let items: Value = vec![Value::from(1), Value::from(2)].into();
//!
//! let record = tagtext!({
//!     "name": "Boot",
//!     "price": 450
//! });
//! assert!(record.is_mapping());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use serde_tagtext::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from(42);
//! assert_eq!(value.as_i64(), Some(42));
//! assert_eq!(i64::try_from(value).unwrap(), 42);
//! ```
//!
//! ### Encoded Form
//!
//! `Display` renders the wire form:
//!
//! ```rust
//! use serde_tagtext::Value;
//!
//! let value = Value::Sequence(vec![Value::from(1), Value::from(2)]);
//! assert_eq!(value.to_string(), "L:[int(1);int(2);]");
//! ```

use crate::{Error, Map};
use chrono::{DateTime, Utc};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Timestamp layout used when a UTC instant is turned into text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A dynamically-typed tree of tagged text data.
///
/// Sequences and mappings may nest any variant to any depth; the codec bounds the depth it
/// accepts through [`Options::max_depth`](crate::Options).
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::{Map, Value};
///
/// let text = Value::Text("hello".to_string());
/// let list = Value::Sequence(vec![Value::Integer(1)]);
/// let map = Value::Mapping(Map::new());
///
/// assert!(text.is_text());
/// assert!(list.is_sequence());
/// assert!(map.is_mapping());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Integer(i64),
    Text(String),
    Sequence(Vec<Value>),
    Mapping(Map),
}

impl Value {
    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if the value is a text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if the value is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Returns `true` if the value is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Name of the variant, as used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a text, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tagtext::Value;
    ///
    /// assert_eq!(Value::from("hi").as_str(), Some("hi"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a sequence, returns its elements. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a mapping, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Map> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a text key in a mapping. Returns `None` for other variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tagtext::tagtext;
    ///
    /// let record = tagtext!({ "price": 450 });
    /// assert_eq!(record.get("price").and_then(|v| v.as_i64()), Some(450));
    /// assert!(record.get("name").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Builds a text value from a UTC instant, formatted as `YYYY-MM-DDTHH:MM:SSZ`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use serde_tagtext::Value;
    ///
    /// let at = Utc.with_ymd_and_hms(2024, 10, 1, 12, 30, 5).unwrap();
    /// assert_eq!(Value::timestamp(&at).as_str(), Some("2024-10-01T12:30:05Z"));
    /// ```
    #[must_use]
    pub fn timestamp(at: &DateTime<Utc>) -> Self {
        Value::Text(at.format(TIMESTAMP_FORMAT).to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = crate::encode(self).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer, a string, a sequence or a map")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Value::Integer)
                    .map_err(|_| E::custom(format!("integer {} out of i64 range", value)))
            }

            fn visit_char<E>(self, value: char) -> Result<Value, E> {
                Ok(Value::Text(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Value, E> {
                Ok(Value::Text(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Value, E> {
                Ok(Value::Text(value))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Sequence(items))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<Value, Value>()? {
                    map.insert(key, value);
                }
                Ok(Value::Mapping(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(Error::type_mismatch("integer", other.kind())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(Error::type_mismatch("text", other.kind())),
        }
    }
}

impl TryFrom<Value> for Map {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Mapping(map) => Ok(map),
            other => Err(Error::type_mismatch("mapping", other.kind())),
        }
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Mapping(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::timestamp(&value)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}

impl<K, V> FromIterator<(K, V)> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Value::Mapping(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tryfrom_i64() {
        assert_eq!(i64::try_from(Value::Integer(-7)).unwrap(), -7);

        let err = i64::try_from(Value::from("7")).unwrap_err();
        assert_eq!(err, Error::type_mismatch("integer", "text"));
    }

    #[test]
    fn test_tryfrom_string() {
        assert_eq!(String::try_from(Value::from("hi")).unwrap(), "hi");
        assert!(String::try_from(Value::Sequence(vec![])).is_err());
    }

    #[test]
    fn test_tryfrom_map() {
        assert!(Map::try_from(Value::Mapping(Map::new())).unwrap().is_empty());
        assert!(Map::try_from(Value::Integer(1)).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(42i8), Value::Integer(42));
        assert_eq!(Value::from(42u32), Value::Integer(42));
        assert_eq!(Value::from(i64::MIN), Value::Integer(i64::MIN));
        assert_eq!(Value::from('x'), Value::Text("x".to_string()));
        assert_eq!(
            Value::from(String::from("owned")),
            Value::Text("owned".to_string())
        );
    }

    #[test]
    fn test_from_iterators() {
        let seq: Value = (1..=3).map(Value::from).collect();
        assert_eq!(seq.as_sequence().map(Vec::len), Some(3));

        let map: Value = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.get("b"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_kind_and_predicates() {
        assert_eq!(Value::Integer(1).kind(), "integer");
        assert_eq!(Value::from("x").kind(), "text");
        assert_eq!(Value::Sequence(vec![]).kind(), "sequence");
        assert_eq!(Value::Mapping(Map::new()).kind(), "mapping");

        let int = Value::Integer(3);
        assert!(int.is_integer());
        assert!(!int.is_text());
        assert!(!int.is_sequence());
    }

    #[test]
    fn test_timestamp_text() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(Value::from(at), Value::Text("2024-01-15T10:30:00Z".to_string()));
    }

    #[test]
    fn test_display_uses_wire_form() {
        let value: Value = vec![("price", Value::Integer(450))].into_iter().collect();
        assert_eq!(value.to_string(), "D:{k:str(price):v:int(450)}");
    }

    #[test]
    fn test_get_on_non_mapping() {
        assert!(Value::from("text").get("key").is_none());
    }
}
