//! String-keyed property bags.
//!
//! A [`PropertyBag`] is the unit of configuration everywhere in Quadrille:
//! grid-wide defaults, per-column overrides, row properties and cell-own
//! properties are all bags, layered by the resolver. Bags nest through
//! [`Value::Map`], which is how row metadata carries per-cell bags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// An unordered collection of named [`Value`]s.
///
/// Serializes transparently as a JSON object. Merging is always shallow: a
/// merged key replaces the previous value wholesale, nested bags are not
/// merged recursively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    entries: HashMap<String, Value>,
}

impl PropertyBag {
    /// Creates a new empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bag has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns the boolean value for `key`, if present and a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Returns the integer value for `key`, if present and an integer.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    /// Returns the float value for `key`, if present and numeric.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_float)
    }

    /// Returns the string value for `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Sets `key` to `value`, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns true if the bag contains `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Shallow-merges `other` into this bag. Keys present in `other` replace
    /// keys in `self`; keys absent from `other` are left untouched.
    pub fn merge(&mut self, other: &PropertyBag) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Removes every listed key. Used to strip session-only keys before a
    /// bag is exported.
    pub fn strip_keys(&mut self, keys: &[&str]) {
        for key in keys {
            self.entries.remove(*key);
        }
    }

    /// Returns a copy of this bag with the listed keys removed.
    pub fn without_keys(&self, keys: &[&str]) -> PropertyBag {
        let mut copy = self.clone();
        copy.strip_keys(keys);
        copy
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Iterates over keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl From<HashMap<String, Value>> for PropertyBag {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PropertyBag {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
