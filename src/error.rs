//! Error types for reading and writing manifest documents.
//!
//! Three things can go wrong in this engine, and each gets its own shape:
//!
//! - **I/O errors**: the file cannot be opened, read or written. These wrap
//!   [`std::io::Error`] and propagate unchanged.
//! - **Syntax errors**: the parser cannot reduce the input per the grammar.
//!   These carry the line and column of the offending token. The parse
//!   aborts; no partial [`Document`](crate::Document) is ever returned.
//! - **Write errors**: the writer was handed a document the grammar cannot
//!   represent (a non-table at the top level, a key with reserved
//!   characters, a string containing both quote characters). The write
//!   aborts before anything touches disk.
//!
//! ## Examples
//!
//! ```rust
//! use tomlet::{from_str, Error};
//!
//! let result = from_str("[project\nname=\"demo\"\n");
//! assert!(matches!(result, Err(Error::Syntax { .. })));
//! ```

use thiserror::Error;

/// Represents all possible errors produced while parsing or writing a
/// manifest document.
#[derive(Debug, Error)]
pub enum Error {
    /// File reading or writing failure, surfaced unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The input does not follow the manifest grammar.
    #[error("Syntax error at line {line}, column {column}: {msg}")]
    Syntax {
        line: usize,
        column: usize,
        msg: String,
    },

    /// A top-level document entry holds something other than a table.
    ///
    /// Only `[section]` tables may appear at the top level of a written
    /// document.
    #[error("Top-level key `{0}` must hold a table")]
    SectionNotTable(String),

    /// A key or section name contains characters that would not re-parse as
    /// a bare identifier.
    #[error("Key `{0}` cannot be written as a bare identifier")]
    InvalidKey(String),

    /// A bare value contains reserved characters and would not re-parse as
    /// written.
    #[error("Bare value `{0}` contains reserved characters")]
    InvalidBare(String),

    /// A string value has no representation in the output grammar.
    #[error("String value cannot be written: {reason}")]
    UnwritableString { reason: &'static str },
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlet::Error;
    ///
    /// let err = Error::syntax(10, 5, "Expected equal sign");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            column,
            msg: msg.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
