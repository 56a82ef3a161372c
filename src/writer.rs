//! Serialization from documents back to manifest text.
//!
//! The writer is the inverse of the parser: feeding its output back through
//! [`from_str`](crate::from_str) yields an equal document with keys in the
//! same order. To keep that guarantee it validates as it goes and refuses
//! anything the grammar could not read back, instead of emitting text that
//! silently re-parses to something else.
//!
//! ```rust
//! use tomlet::{Document, Value};
//!
//! let mut doc = Document::new();
//! let project = doc.ensure_table("project");
//! project.insert("name".to_string(), Value::from("demo"));
//! project.insert("version".to_string(), Value::Bare("0.1.0".to_string()));
//!
//! let text = tomlet::to_string(&doc).unwrap();
//! assert_eq!(text, "[project]\nname=\"demo\"\nversion=0.1.0\n");
//! ```

use crate::document::Document;
use crate::error::{Error, Result};
use crate::tokenizer::TokenKind;
use crate::value::Value;

/// Formats a [`Document`] into manifest text, one section per top-level
/// entry.
///
/// The writer accumulates into an internal buffer; nothing reaches disk or
/// any stream until the whole document has been formatted. A failed write
/// therefore never leaves partial output behind.
///
/// # Examples
///
/// ```rust
/// use tomlet::{Document, Value, Writer};
///
/// let mut doc = Document::new();
/// doc.ensure_table("tools")
///     .insert("env_create_tool".to_string(), Value::from("python3 -m venv"));
///
/// let mut writer = Writer::new();
/// writer.write_document(&doc).unwrap();
/// assert_eq!(writer.into_inner(), "[tools]\nenv_create_tool=\"python3 -m venv\"\n");
/// ```
#[derive(Debug)]
pub struct Writer {
    out: String,
}

impl Writer {
    #[must_use]
    pub fn new() -> Writer {
        Writer { out: String::new() }
    }

    /// Formats the whole document into the buffer.
    ///
    /// Every top-level entry becomes a `[section]` header followed by one
    /// `key=value` line per entry, with a blank line between sections.
    ///
    /// # Errors
    ///
    /// - [`Error::SectionNotTable`] if a top-level value is not a table
    /// - [`Error::InvalidKey`] if a key or section name contains reserved
    ///   characters and could not re-parse as one bare run
    /// - [`Error::InvalidBare`] if a bare value contains reserved characters
    /// - [`Error::UnwritableString`] if a string cannot survive a round trip
    pub fn write_document(&mut self, doc: &Document) -> Result<()> {
        for (i, (name, value)) in doc.iter().enumerate() {
            let Value::Table(table) = value else {
                return Err(Error::SectionNotTable(name.clone()));
            };
            if i > 0 {
                self.out.push('\n');
            }
            check_key(name)?;
            self.out.push('[');
            self.out.push_str(name);
            self.out.push_str("]\n");
            for (key, entry) in table.iter() {
                check_key(key)?;
                self.out.push_str(key);
                self.out.push('=');
                self.write_value(entry)?;
                self.out.push('\n');
            }
        }
        Ok(())
    }

    fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Str(s) => self.write_string(s),
            Value::Bare(word) => {
                check_bare(word)?;
                self.out.push_str(word);
                Ok(())
            }
            Value::List(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_value(item)?;
                }
                self.out.push(']');
                Ok(())
            }
            Value::Table(table) => {
                self.out.push('{');
                for (i, (key, item)) in table.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    check_key(key)?;
                    self.out.push_str(key);
                    self.out.push('=');
                    self.write_value(item)?;
                }
                self.out.push('}');
                Ok(())
            }
        }
    }

    fn write_string(&mut self, s: &str) -> Result<()> {
        let delimiter = if s.contains('"') {
            if s.contains('\'') {
                return Err(Error::UnwritableString {
                    reason: "contains both quote characters",
                });
            }
            '\''
        } else {
            '"'
        };
        // Comment filtering runs before tokenization on read. A string that
        // spans lines and whose continuation line starts with `#` would lose
        // that line on re-parse.
        if s.split('\n').skip(1).any(|line| line.starts_with('#')) {
            return Err(Error::UnwritableString {
                reason: "a line inside the string starts with `#`",
            });
        }
        self.out.push(delimiter);
        self.out.push_str(s);
        self.out.push(delimiter);
        Ok(())
    }

    /// Consumes the writer and returns the formatted text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }
}

impl Default for Writer {
    fn default() -> Self {
        Writer::new()
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() || !is_bare_text(key) {
        return Err(Error::InvalidKey(key.to_string()));
    }
    Ok(())
}

fn check_bare(word: &str) -> Result<()> {
    if word.is_empty() || !is_bare_text(word) {
        return Err(Error::InvalidBare(word.to_string()));
    }
    Ok(())
}

// A run is writable bare iff the tokenizer would hand every character back
// as a plain Char token.
fn is_bare_text(text: &str) -> bool {
    text.chars()
        .all(|ch| matches!(TokenKind::classify(ch), TokenKind::Char(_)))
}
