//! Ordered document model for manifest data.
//!
//! This module provides [`Document`], a wrapper around [`IndexMap`] that
//! maintains insertion order. One type plays two roles: the whole file (a
//! map of section name → section table) and a single table (a map of key →
//! value); the difference is only nesting depth.
//!
//! ## Why IndexMap?
//!
//! Insertion order is the only thing distinguishing sections from one
//! another and is meaningful to a human reading the file, so it must survive
//! a parse/write cycle. `IndexMap` preserves it; on re-assignment of an
//! existing key the value is replaced but the key keeps its original
//! position (last assignment wins).
//!
//! ## Key normalization
//!
//! Key names containing `-` are rewritten to `_` at the moment they are
//! inserted, so `env-name` always materializes as `env_name` whether it came
//! from a parsed file or from code building a document by hand.
//!
//! ## Examples
//!
//! ```rust
//! use tomlet::{Document, Value};
//!
//! let mut doc = Document::new();
//! let project = doc.ensure_table("project");
//! project.insert("name".to_string(), Value::from("demo"));
//! project.insert("version".to_string(), Value::Bare("0.1.0".to_string()));
//!
//! assert_eq!(
//!     doc.get_path(&["project", "name"]).and_then(Value::as_str),
//!     Some("demo"),
//! );
//! ```

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::value::Value;

fn normalize(key: String) -> String {
    if key.contains('-') {
        key.replace('-', "_")
    } else {
        key
    }
}

/// An ordered map of string keys to manifest values.
///
/// Produced by the parser for reading, or created fresh by the caller for
/// writing; it carries no background state and is discarded after use.
///
/// Equality compares entries without regard to order (the `IndexMap`
/// semantics): two documents with the same key-value pairs in different
/// insertion orders are equal. Compare [`Document::keys`] when order
/// matters.
///
/// # Examples
///
/// ```rust
/// use tomlet::{Document, Value};
///
/// let mut doc = Document::new();
/// doc.insert("first".to_string(), Value::from(1));
/// doc.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order.
/// let keys: Vec<_> = doc.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(IndexMap<String, Value>);

impl Document {
    /// Creates an empty `Document`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlet::Document;
    ///
    /// let doc = Document::new();
    /// assert!(doc.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Document(IndexMap::new())
    }

    /// Creates an empty `Document` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Document(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, normalizing `-` to `_` in the key.
    ///
    /// If the document already contained this key, the old value is returned
    /// and the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlet::{Document, Value};
    ///
    /// let mut doc = Document::new();
    /// assert!(doc.insert("env-name".to_string(), Value::from("env")).is_none());
    /// assert!(doc.get("env_name").is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(normalize(key), value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// Never creates anything: looking up a missing key is side-effect free.
    /// Keys are stored in normalized form, so look up `env_name`, not
    /// `env-name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlet::{Document, Value};
    ///
    /// let mut doc = Document::new();
    /// doc.insert("key".to_string(), Value::from(42));
    /// assert_eq!(doc.get("key").and_then(Value::as_bare), Some("42"));
    /// assert!(doc.get("missing").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Walks a path of keys through nested tables.
    ///
    /// Returns `None` as soon as a key is missing or an intermediate value
    /// is not a table. Like [`Document::get`], this never mutates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlet::{from_str, Value};
    ///
    /// let doc = from_str("[project]\nname=\"demo\"\n").unwrap();
    /// assert_eq!(
    ///     doc.get_path(&["project", "name"]).and_then(Value::as_str),
    ///     Some("demo"),
    /// );
    /// assert!(doc.get_path(&["project", "missing"]).is_none());
    /// assert!(doc.get_path(&["tools", "env_name"]).is_none());
    /// ```
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut value = self.get(first)?;
        for key in rest {
            value = value.as_table()?.get(key)?;
        }
        Some(value)
    }

    /// Returns the nested table under `key`, inserting an empty one if the
    /// key is missing or holds a non-table value.
    ///
    /// This is the explicit, mutating counterpart of [`Document::get`]: use
    /// it only when about to populate the result. Chains naturally for
    /// deeper paths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlet::{Document, Value};
    ///
    /// let mut doc = Document::new();
    /// assert!(doc.get("project").is_none());
    ///
    /// doc.ensure_table("project")
    ///     .insert("dependencies".to_string(), Value::List(vec![]));
    ///
    /// // The intermediate table was created as a side effect.
    /// assert!(doc.get("project").is_some());
    /// ```
    pub fn ensure_table(&mut self, key: &str) -> &mut Document {
        let key = normalize(key.to_string());
        let slot = self
            .0
            .entry(key)
            .or_insert_with(|| Value::Table(Document::new()));
        if !slot.is_table() {
            *slot = Value::Table(Document::new());
        }
        match slot {
            Value::Table(table) => table,
            _ => unreachable!("slot was just set to a table"),
        }
    }

    /// Returns `true` if the document contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// The order of the remaining entries is preserved (this is
    /// `IndexMap::shift_remove`, O(n)).
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut doc = Document::new();
        for (key, value) in iter {
            doc.insert(key, value);
        }
        doc
    }
}

/// Parses manifest text, equivalent to [`from_str`](crate::from_str).
///
/// # Examples
///
/// ```rust
/// use tomlet::Document;
///
/// let doc: Document = "[a]\nb=\"c\"\n".parse().unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::from_str(s)
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};
        use std::fmt;

        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = Document;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of string keys to values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut doc = Document::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry()? {
                    doc.insert(key, value);
                }
                Ok(doc)
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
