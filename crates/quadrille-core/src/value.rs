//! Property and cell value model.
//!
//! Grid configuration and cell data flow through a single JSON-isomorphic
//! value type, [`Value`], so that anything a property bag can hold can also
//! round-trip through a serialized state snapshot unchanged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::property::PropertyBag;

/// A dynamically typed value stored in property bags and returned by data
/// models.
///
/// The variant set mirrors JSON, so serialization never loses information.
/// For complex types, use serde serialization into [`Value::Map`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A null/empty value.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating point number.
    Float(f64),
    /// A string value.
    String(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A nested property bag.
    Map(PropertyBag),
}

impl Value {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns this value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns this value as a float, if it is one.
    /// Also converts integers to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns this value as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns this value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// Returns this value as a nested bag, if it is one.
    pub fn as_map(&self) -> Option<&PropertyBag> {
        match self {
            Value::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Returns this value as a mutable nested bag, if it is one.
    pub fn as_map_mut(&mut self) -> Option<&mut PropertyBag> {
        match self {
            Value::Map(v) => Some(v),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<PropertyBag> for Value {
    fn from(v: PropertyBag) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(v: HashMap<String, Value>) -> Self {
        Value::Map(PropertyBag::from(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(7_i32), Value::Int(7));
        assert_eq!(Value::from(7_u32), Value::Int(7));
        assert_eq!(Value::from(1.5_f64), Value::Float(1.5));
        assert_eq!(Value::from("abc"), Value::String("abc".to_string()));
        assert_eq!(
            Value::from(vec![1, 2, 3]),
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(3).as_int(), Some(3));
        assert_eq!(Value::Int(3).as_float(), Some(3.0));
        assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
        assert_eq!(Value::Float(2.5).as_int(), None);
        assert_eq!(Value::String("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Bool(true).as_str(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let value = Value::List(vec![
            Value::Null,
            Value::Bool(false),
            Value::Int(-4),
            Value::Float(0.25),
            Value::String("hi".into()),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"[null,false,-4,0.25,"hi"]"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_untagged_integers_stay_integers() {
        let back: Value = serde_json::from_str("12").unwrap();
        assert_eq!(back, Value::Int(12));
        let back: Value = serde_json::from_str("12.5").unwrap();
        assert_eq!(back, Value::Float(12.5));
    }
}
