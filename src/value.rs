//! Dynamic value representation for manifest data.
//!
//! This module provides the [`Value`] enum which represents any value a
//! manifest document can hold. The dialect is deliberately small: there is
//! no numeric variant (numeric-looking text stays [`Value::Bare`]) and no
//! boolean variant (the literals `True`/`False` are bare words that a
//! consumer may coerce with [`Value::as_bool`]).
//!
//! ## Core Types
//!
//! - [`Value`]: quoted string, bare word, list, or nested table
//! - [`Document`]: the ordered map behind both whole files and tables
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use tomlet::Value;
//!
//! let text = Value::from("hello");
//! let flag = Value::from(true);
//! let version = Value::from(42);
//!
//! assert_eq!(text, Value::Str("hello".to_string()));
//! assert_eq!(flag, Value::Bare("True".to_string()));
//! assert_eq!(version, Value::Bare("42".to_string()));
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use tomlet::Value;
//!
//! let value = Value::Bare("True".to_string());
//! assert!(value.is_bare());
//! assert_eq!(value.as_bool(), Some(true));
//! assert_eq!(value.as_str(), None);
//! ```
//!
//! ### Serde Interop
//!
//! [`Value`] and [`Document`] implement `Serialize`/`Deserialize`, so parsed
//! manifests convert to other formats. Bare words cross the boundary as
//! plain strings; the distinction is specific to this dialect.
//!
//! ```rust
//! use tomlet::tomlet;
//!
//! let value = tomlet!({"name": "demo", "debug": true});
//! let json = serde_json::to_string(&value).unwrap();
//! assert_eq!(json, r#"{"name":"demo","debug":"True"}"#);
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Document;

/// A single manifest value.
///
/// Values nest arbitrarily: a list may hold inline tables, an inline table
/// may hold further lists, and so on. The top level of a parsed document is
/// not a [`Value`] but a [`Document`] whose entries are all
/// [`Value::Table`]s.
///
/// # Examples
///
/// ```rust
/// use tomlet::{Document, Value};
///
/// let entry = Value::Table({
///     let mut t = Document::new();
///     t.insert("name".to_string(), Value::from("requests"));
///     t.insert("new_packages".to_string(), Value::List(vec![]));
///     t
/// });
///
/// assert!(entry.is_table());
/// assert_eq!(
///     entry.as_table().and_then(|t| t.get("name")).and_then(Value::as_str),
///     Some("requests"),
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A quoted string. Quotes themselves are not part of the value.
    Str(String),
    /// An unquoted run of non-special characters: identifiers, version
    /// numbers, the literals `True`/`False`. Numbers are never parsed into
    /// a numeric type; they stay here as opaque text.
    Bare(String),
    /// A `[...]` list of values.
    List(Vec<Value>),
    /// A `{...}` inline table.
    Table(Document),
}

impl Value {
    /// Returns `true` if the value is a quoted string.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if the value is a bare word.
    #[inline]
    #[must_use]
    pub const fn is_bare(&self) -> bool {
        matches!(self, Value::Bare(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` if the value is a table.
    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// If the value is a quoted string, returns it. Otherwise returns `None`.
    ///
    /// Bare words are deliberately excluded; use [`Value::as_bare`] for
    /// those.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlet::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::Bare("hello".to_string()).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a bare word, returns its text. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bare(&self) -> Option<&str> {
        match self {
            Value::Bare(word) => Some(word),
            _ => None,
        }
    }

    /// Coerces the bare words `True`/`False` (capitalized, as the dialect
    /// writes them) to a boolean. Everything else returns `None`.
    ///
    /// The parser itself never performs this coercion; interpreting
    /// boolean-looking words is a consumer decision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlet::Value;
    ///
    /// assert_eq!(Value::Bare("True".to_string()).as_bool(), Some(true));
    /// assert_eq!(Value::Bare("False".to_string()).as_bool(), Some(false));
    /// assert_eq!(Value::Bare("true".to_string()).as_bool(), None);
    /// assert_eq!(Value::Str("True".to_string()).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bare(word) if word == "True" => Some(true),
            Value::Bare(word) if word == "False" => Some(false),
            _ => None,
        }
    }

    /// If the value is a list, returns its elements. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a list, returns a mutable reference to its elements.
    ///
    /// This is how consumers append to `project.dependencies` in place.
    #[inline]
    #[must_use]
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a table, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Document> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    /// If the value is a table, returns a mutable reference to it.
    #[inline]
    #[must_use]
    pub fn as_table_mut(&mut self) -> Option<&mut Document> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Renders the value in the inline grammar, for diagnostics.
///
/// This is best-effort: a string containing both quote characters has no
/// faithful rendering and falls back to double quotes. Use
/// [`to_string`](crate::to_string) when the output must re-parse.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => {
                if s.contains('"') && !s.contains('\'') {
                    write!(f, "'{s}'")
                } else {
                    write!(f, "\"{s}\"")
                }
            }
            Value::Bare(word) => f.write_str(word),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Table(table) => {
                f.write_str("{")?;
                for (i, (key, value)) in table.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Str(s) | Value::Bare(s) => serializer.serialize_str(s),
            Value::List(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Table(table) => table.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, boolean, number, sequence or map")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Bare(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Bare(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Bare(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::Str(value))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut table = Document::new();
                while let Some((key, value)) = map.next_entry()? {
                    table.insert(key, value);
                }
                Ok(Value::Table(table))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// From implementations for building values programmatically. Booleans and
// numbers become bare words, matching what the parser would have produced
// for the same text.
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bare(if value { "True" } else { "False" }.to_string())
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Bare(value.to_string())
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Bare(value.to_string())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Bare(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Bare(value.to_string())
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Bare(value.to_string())
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Bare(value.to_string())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Bare(value.to_string())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Bare(value.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Bare(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Table(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bare("True".to_string()));
        assert_eq!(Value::from(false), Value::Bare("False".to_string()));
        assert_eq!(Value::from(42i32), Value::Bare("42".to_string()));
        assert_eq!(Value::from(42u64), Value::Bare("42".to_string()));
        assert_eq!(Value::from(3.5f64), Value::Bare("3.5".to_string()));
        assert_eq!(Value::from("test"), Value::Str("test".to_string()));
        assert_eq!(
            Value::from("test".to_string()),
            Value::Str("test".to_string())
        );
    }

    #[test]
    fn test_from_collections() {
        let items = vec![Value::from(1i32), Value::from(2i32)];
        assert_eq!(Value::from(items.clone()), Value::List(items));

        let mut table = Document::new();
        table.insert("key".to_string(), Value::from(42i32));
        assert_eq!(Value::from(table.clone()), Value::Table(table));
    }

    #[test]
    fn test_accessors() {
        let s = Value::from("hello");
        assert!(s.is_str());
        assert_eq!(s.as_str(), Some("hello"));
        assert_eq!(s.as_bare(), None);

        let word = Value::Bare("0.1.0".to_string());
        assert!(word.is_bare());
        assert_eq!(word.as_bare(), Some("0.1.0"));
        assert_eq!(word.as_bool(), None);

        let list = Value::List(vec![Value::from("a")]);
        assert!(list.is_list());
        assert_eq!(list.as_list().map(<[Value]>::len), Some(1));
        assert!(list.as_table().is_none());
    }

    #[test]
    fn test_bool_coercion_is_strict() {
        assert_eq!(Value::Bare("True".to_string()).as_bool(), Some(true));
        assert_eq!(Value::Bare("False".to_string()).as_bool(), Some(false));
        // Lowercase and quoted forms are not booleans to this dialect.
        assert_eq!(Value::Bare("true".to_string()).as_bool(), None);
        assert_eq!(Value::Str("True".to_string()).as_bool(), None);
    }

    #[test]
    fn test_list_mut_access() {
        let mut deps = Value::List(vec![]);
        deps.as_list_mut()
            .unwrap()
            .push(Value::Bare("requests".to_string()));
        assert_eq!(deps.as_list().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_display_inline_grammar() {
        let list = Value::List(vec![Value::from("a"), Value::from(1)]);
        assert_eq!(list.to_string(), r#"["a", 1]"#);

        let mut table = Document::new();
        table.insert("x".to_string(), Value::from("1"));
        table.insert("y".to_string(), Value::from(true));
        assert_eq!(Value::Table(table).to_string(), r#"{x="1", y=True}"#);

        // Strings containing a double quote switch to single quotes.
        assert_eq!(Value::from(r#"say "hi""#).to_string(), r#"'say "hi"'"#);
        assert_eq!(Value::from("it's").to_string(), r#""it's""#);
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_bare(v: &Value) -> bool {
            v.is_bare()
        }

        assert!(check_bare(&Value::Bare(String::new())));
    }

    #[test]
    fn test_serde_round_trip_through_json() {
        let mut table = Document::new();
        table.insert("name".to_string(), Value::from("demo"));
        table.insert("count".to_string(), Value::from(3i32));
        let value = Value::Table(table);

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"name":"demo","count":"3"}"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        // Bare words come back as strings; JSON has no bare-word kind.
        assert_eq!(
            back.as_table().and_then(|t| t.get("count")),
            Some(&Value::Str("3".to_string()))
        );
    }
}
