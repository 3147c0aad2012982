//! Ordered map type for HOCON objects.
//!
//! This module provides [`HoconMap`], a wrapper around [`IndexMap`] that keeps
//! keys in document order. When a key repeats, the later value wins but the
//! key keeps the position of its first appearance.
//!
//! ## Examples
//!
//! ```rust
//! use serde_hocon::{from_str, HoconMap, Value};
//!
//! let map: HoconMap = from_str("zeta = 1\nalpha = 2\nzeta = 3").unwrap();
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["zeta", "alpha"]);
//! assert_eq!(map.get("zeta"), Some(&Value::from(3)));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;

/// An ordered map of string keys to document values.
///
/// # Examples
///
/// ```rust
/// use serde_hocon::{HoconMap, Value};
///
/// let mut map = HoconMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoconMap(IndexMap<String, Value>);

impl HoconMap {
    #[must_use]
    pub fn new() -> Self {
        HoconMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        HoconMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in document order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in document order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for HoconMap {
    fn from(map: HashMap<String, Value>) -> Self {
        HoconMap(map.into_iter().collect())
    }
}

impl From<HoconMap> for HashMap<String, Value> {
    fn from(map: HoconMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for HoconMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HoconMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for HoconMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        HoconMap(IndexMap::from_iter(iter))
    }
}

impl<'de> Deserialize<'de> for HoconMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HoconMapVisitor;

        impl<'de> Visitor<'de> for HoconMapVisitor {
            type Value = HoconMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a HOCON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut values = HoconMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    values.insert(key, value);
                }
                Ok(values)
            }
        }

        deserializer.deserialize_map(HoconMapVisitor)
    }
}

impl serde::Serialize for HoconMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}
