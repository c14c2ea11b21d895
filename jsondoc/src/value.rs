// SPDX-License-Identifier: Apache-2.0

//! The owned JSON document model.
//!
//! A [`Value`] is a plain recursive enum: containers own their children
//! through `Vec`, so a tree is finite, acyclic and freed as a unit when the
//! root is dropped. Nothing mutates a tree after parsing, which makes it safe
//! to share across threads by reference.

use alloc::string::String;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::slice;

use crate::access_error::AccessError;
use crate::JsonNumber;

/// Which variant a [`Value`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Lowercase JSON type name, for messages.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed JSON value.
///
/// Objects keep their members in input order and keep duplicate keys;
/// lookups return the first member with a matching key.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`
    #[default]
    Null,
    /// JSON `true` / `false`
    Bool(bool),
    /// JSON number in its narrowest lossless representation
    Number(JsonNumber),
    /// JSON string with every escape resolved
    String(String),
    /// JSON array
    Array(Vec<Value>),
    /// JSON object as ordered `(key, value)` members
    Object(Vec<(String, Value)>),
}

impl Value {
    /// The variant this value holds.
    pub fn type_of(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    fn mismatch(&self, expected: Kind) -> AccessError {
        AccessError::TypeMismatch {
            expected,
            found: self.type_of(),
        }
    }

    /// The boolean, or `TypeMismatch` for any other variant.
    pub fn as_bool(&self) -> Result<bool, AccessError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch(Kind::Bool)),
        }
    }

    /// The stored numeric representation, or `TypeMismatch`.
    pub fn as_number(&self) -> Result<JsonNumber, AccessError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch(Kind::Number)),
        }
    }

    /// The decoded string, or `TypeMismatch`.
    pub fn as_str(&self) -> Result<&str, AccessError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(Kind::String)),
        }
    }

    fn elements(&self) -> Result<&[Value], AccessError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    fn members(&self) -> Result<&[(String, Value)], AccessError> {
        match self {
            Value::Object(members) => Ok(members),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    /// Number of array elements.
    pub fn array_len(&self) -> Result<usize, AccessError> {
        self.elements().map(<[Value]>::len)
    }

    /// Element at `index`; `IndexOutOfRange` when `index >= len`.
    pub fn array_get(&self, index: usize) -> Result<&Value, AccessError> {
        let items = self.elements()?;
        items.get(index).ok_or(AccessError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }

    /// Iterate array elements in order.
    pub fn array_iter(&self) -> Result<slice::Iter<'_, Value>, AccessError> {
        self.elements().map(<[Value]>::iter)
    }

    /// Number of object members, duplicates included.
    pub fn object_len(&self) -> Result<usize, AccessError> {
        self.members().map(<[(String, Value)]>::len)
    }

    /// First member whose key equals `key` byte for byte.
    ///
    /// A missing key is `Ok(None)`, not an error.
    pub fn object_get(&self, key: &str) -> Result<Option<&Value>, AccessError> {
        Ok(self
            .members()?
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v))
    }

    /// Members in insertion order. The iterator is `Clone`, so it can be
    /// restarted from any point.
    pub fn object_pairs(&self) -> Result<Pairs<'_>, AccessError> {
        self.members().map(|members| Pairs {
            inner: members.iter(),
        })
    }

    /// Shorthand for `object_get` that folds every failure into `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.object_get(key).ok().flatten()
    }

    /// Shorthand for `array_get` that folds every failure into `None`.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.array_get(index).ok()
    }
}

/// Iterator over the members of an object, in insertion order.
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    inner: slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Pairs<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExactSizeIterator for Pairs<'_> {}

impl FusedIterator for Pairs<'_> {}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(JsonNumber::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(JsonNumber::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(JsonNumber::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(String::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Value {
        Value::Object(vec![
            ("title".into(), Value::from("T")),
            (
                "entries".into(),
                Value::Array(vec![
                    Value::Object(vec![("title".into(), Value::from("x"))]),
                    Value::Object(vec![("title".into(), Value::from("y"))]),
                ]),
            ),
            ("title".into(), Value::from("duplicate")),
        ])
    }

    #[test]
    fn test_type_of() {
        assert_eq!(Value::Null.type_of(), Kind::Null);
        assert_eq!(Value::from(true).type_of(), Kind::Bool);
        assert_eq!(Value::from(1i64).type_of(), Kind::Number);
        assert_eq!(Value::from("s").type_of(), Kind::String);
        assert_eq!(Value::Array(vec![]).type_of(), Kind::Array);
        assert_eq!(Value::Object(vec![]).type_of(), Kind::Object);
    }

    #[test]
    fn test_predicates() {
        assert!(Value::Null.is_null());
        assert!(Value::from(false).is_bool());
        assert!(Value::from(2.5).is_number());
        assert!(Value::from("s").is_string());
        assert!(Value::Array(vec![]).is_array());
        assert!(Value::Object(vec![]).is_object());
        assert!(!Value::Null.is_object());
    }

    #[test]
    fn test_scalar_accessors() {
        assert_eq!(Value::from(true).as_bool(), Ok(true));
        assert_eq!(Value::from(7i64).as_number(), Ok(JsonNumber::Int(7)));
        assert_eq!(Value::from("hi").as_str(), Ok("hi"));
    }

    #[test]
    fn test_type_mismatch() {
        assert_eq!(
            Value::Null.as_bool(),
            Err(AccessError::TypeMismatch {
                expected: Kind::Bool,
                found: Kind::Null
            })
        );
        assert_eq!(
            Value::from("1").as_number(),
            Err(AccessError::TypeMismatch {
                expected: Kind::Number,
                found: Kind::String
            })
        );
        assert!(Value::from(1i64).as_str().is_err());
        assert!(Value::Object(vec![]).array_len().is_err());
        assert!(Value::Array(vec![]).object_get("a").is_err());
        assert!(Value::from(true).object_pairs().is_err());
    }

    #[test]
    fn test_array_access() {
        let value = Value::Array(vec![Value::from(1i64), Value::from(2i64)]);
        assert_eq!(value.array_len(), Ok(2));
        assert_eq!(value.array_get(1), Ok(&Value::from(2i64)));
        assert_eq!(
            value.array_get(2),
            Err(AccessError::IndexOutOfRange { index: 2, len: 2 })
        );
        let collected: Vec<&Value> = value.array_iter().unwrap().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn test_object_get_first_match() {
        let value = sample();
        assert_eq!(value.object_get("title"), Ok(Some(&Value::from("T"))));
        assert_eq!(value.object_get("missing"), Ok(None));
        assert_eq!(value.object_len(), Ok(3));
    }

    #[test]
    fn test_object_get_is_exact() {
        let value = Value::Object(vec![("Title".into(), Value::Null)]);
        assert_eq!(value.object_get("title"), Ok(None));
        assert_eq!(value.object_get("Title"), Ok(Some(&Value::Null)));
    }

    #[test]
    fn test_object_pairs_order_and_restart() {
        let value = sample();
        let pairs = value.object_pairs().unwrap();
        let keys: Vec<&str> = pairs.clone().map(|(k, _)| k).collect();
        assert_eq!(keys, ["title", "entries", "title"]);

        // A cloned iterator restarts independently
        let mut partial = pairs.clone();
        partial.next();
        let rest: Vec<&str> = partial.clone().map(|(k, _)| k).collect();
        assert_eq!(rest, ["entries", "title"]);
        assert_eq!(pairs.len(), 3);
        assert_eq!(partial.len(), 2);
    }

    #[test]
    fn test_get_shorthands() {
        let value = sample();
        let entries = value.get("entries").unwrap();
        assert_eq!(
            entries.get_index(1).and_then(|e| e.get("title")),
            Some(&Value::from("y"))
        );
        assert_eq!(entries.get_index(5), None);
        assert_eq!(value.get_index(0), None);
        assert_eq!(Value::Null.get("title"), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Bool.to_string(), "boolean");
        assert_eq!(Kind::Object.name(), "object");
    }
}
