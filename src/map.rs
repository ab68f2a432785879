//! Ordered map type for mapping values.
//!
//! This module provides [`Map`], a wrapper around [`IndexMap`] keyed by [`Value`]. The wire
//! grammar writes items in the order they appear, so iteration order is insertion order and
//! two maps are only equal when their entries match position by position.
//!
//! Keys are full values, but the encoder always renders a key as text
//! (see [`key_to_text`](crate::encode::key_to_text)), so a decoded map only ever holds
//! [`Value::Text`] keys.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tagtext::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("name", "Boot");
//! map.insert("price", 450);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Boot"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::hash::{Hash, Hasher};

/// An insertion-ordered map of values to values.
///
/// Inserting a key that is already present replaces its value and keeps its position.
///
/// # Examples
///
/// ```rust
/// use serde_tagtext::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("first", 1);
/// map.insert("second", 2);
///
/// let keys: Vec<_> = map.keys().filter_map(Value::as_str).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Map(IndexMap<Value, Value>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the entry keeps
    /// its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tagtext::Map;
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key", 42).is_none());
    /// assert!(map.insert("key", 43).is_some());
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        self.0.insert(key.into(), value.into())
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tagtext::Map;
    ///
    /// let mut map = Map::new();
    /// map.insert("key", 42);
    /// map.insert(7, "seven");
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(42));
    /// assert_eq!(map.get(7).and_then(|v| v.as_str()), Some("seven"));
    /// ```
    #[must_use]
    pub fn get<K: Into<Value>>(&self, key: K) -> Option<&Value> {
        self.0.get(&key.into())
    }

    /// Returns `true` if the map holds an entry for `key`.
    #[must_use]
    pub fn contains_key<K: Into<Value>>(&self, key: K) -> bool {
        self.0.contains_key(&key.into())
    }

    /// Removes `key`, shifting later entries down so the remaining order is kept.
    pub fn remove<K: Into<Value>>(&mut self, key: K) -> Option<Value> {
        self.0.shift_remove(&key.into())
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Value, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Value, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Value, Value> {
        self.0.iter()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Map {}

impl Hash for Map {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.len().hash(state);
        for (key, value) in &self.0 {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl IntoIterator for Map {
    type Item = (Value, Value);
    type IntoIter = indexmap::map::IntoIter<Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Value, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Map(iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}
