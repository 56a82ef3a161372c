//! # tomlet
//!
//! A reader and writer for a small TOML-flavored manifest dialect.
//!
//! ## What is the dialect?
//!
//! A flat, line-oriented configuration format used for application manifests
//! and tool settings: `[section]` headers followed by `key=value` lines,
//! with quoted strings, bare words, `[...]` lists and `{...}` inline tables
//! on the value side. Whole-line `#` comments are dropped on read. The full
//! grammar lives in the [`format`] module.
//!
//! ## Key Features
//!
//! - **Order-preserving**: documents keep insertion order and reproduce it
//!   when written back
//! - **Text-faithful**: numbers and booleans stay as text; nothing is
//!   coerced while parsing
//! - **Positioned errors**: syntax errors carry the 1-based line and column
//!   of the offending token
//! - **Round-trip safe**: the writer refuses anything that would not
//!   re-parse to an equal document, and never leaves partial files behind
//! - **Serde interop**: [`Document`] and [`Value`] implement
//!   `Serialize`/`Deserialize` for conversion to other formats
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tomlet = "0.1"
//! ```
//!
//! ### Reading and Editing a Manifest
//!
//! ```rust
//! use tomlet::{tomlet, Value};
//!
//! let text = r#"
//! ## application manifest
//! [tools]
//! env_create_tool="python3 -m venv"
//!
//! [project]
//! name="demo"
//! version=0.1.0
//! dependencies=[]
//! "#;
//!
//! let mut doc = tomlet::from_str(text).unwrap();
//!
//! // Lookups never create anything.
//! assert_eq!(
//!     doc.get_path(&["project", "name"]).and_then(Value::as_str),
//!     Some("demo"),
//! );
//!
//! // Append a dependency entry and write the manifest back out.
//! let deps = doc
//!     .ensure_table("project")
//!     .get_mut("dependencies")
//!     .and_then(Value::as_list_mut)
//!     .unwrap();
//! deps.push(tomlet!({"name": "requests", "new_packages": []}));
//!
//! let out = tomlet::to_string(&doc).unwrap();
//! assert!(out.contains("dependencies=[{name=\"requests\", new_packages=[]}]"));
//! ```
//!
//! ### Building Documents from Scratch
//!
//! ```rust
//! use tomlet::{Document, Value};
//!
//! let mut doc = Document::new();
//! let project = doc.ensure_table("project");
//! project.insert("name".to_string(), Value::from("demo"));
//! project.insert("local".to_string(), Value::from(true));
//!
//! assert_eq!(
//!     tomlet::to_string(&doc).unwrap(),
//!     "[project]\nname=\"demo\"\nlocal=True\n",
//! );
//! ```
//!
//! ## Pipeline
//!
//! Reading is two explicit stages, both public: [`tokenize`] turns text into
//! positioned tokens (one per character, comment lines removed), and
//! [`Parser`] reduces the tokens to a [`Document`]. [`from_str`] glues them
//! together. Writing goes through [`Writer`], which formats a whole document
//! in memory before anything reaches a file.
//!
//! ## Examples
//!
//! See the `demos/` directory for complete programs:
//!
//! - **`build_manifest.rs`** - create an application manifest from scratch
//! - **`read_manifest.rs`** - load a manifest and walk its entries
//! - **`tool_settings.rs`** - edit a settings file in place
//!
//! Run any of them with: `cargo run --example <name>`

pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod parser;
pub mod tokenizer;
pub mod value;
pub mod writer;

pub use document::Document;
pub use error::{Error, Result};
pub use parser::Parser;
pub use tokenizer::{tokenize, tokenize_file, Token, TokenKind};
pub use value::Value;
pub use writer::Writer;

use std::fs;
use std::io;
use std::path::Path;

/// Parses manifest text into a [`Document`].
///
/// # Examples
///
/// ```rust
/// use tomlet::Value;
///
/// let doc = tomlet::from_str("[project]\nname=\"demo\"\nversion=0.1.0\n").unwrap();
/// let project = doc.get("project").and_then(Value::as_table).unwrap();
/// assert_eq!(project.get("name").and_then(Value::as_str), Some("demo"));
/// assert_eq!(project.get("version").and_then(Value::as_bare), Some("0.1.0"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the line and column of the first token the
/// grammar cannot reduce. No partial document is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    let tokens = tokenize(s);
    Parser::new(&tokens).parse()
}

/// Reads manifest text from an I/O stream and parses it.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"[project]\nname=\"demo\"\n");
/// let doc = tomlet::from_reader(cursor).unwrap();
/// assert!(doc.get("project").is_some());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Syntax`] if the text
/// does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text)
}

/// Reads a manifest file and parses it.
///
/// # Examples
///
/// ```no_run
/// let doc = tomlet::from_file("app.toml").unwrap();
/// println!("{} sections", doc.len());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Syntax`] if
/// its text does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file<P>(path: P) -> Result<Document>
where
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path)?;
    from_str(&text)
}

/// Formats a [`Document`] as manifest text.
///
/// Output is canonical: one `key=value` line per entry, `", "` between list
/// and inline-table elements, a blank line between sections. Parsing the
/// output yields an equal document with keys in the same order.
///
/// # Examples
///
/// ```rust
/// use tomlet::{Document, Value};
///
/// let mut doc = Document::new();
/// doc.ensure_table("project")
///     .insert("name".to_string(), Value::from("demo"));
///
/// assert_eq!(tomlet::to_string(&doc).unwrap(), "[project]\nname=\"demo\"\n");
/// ```
///
/// # Errors
///
/// Returns the first [`Writer`] validation error: a top-level value that is
/// not a table, a key or bare word with reserved characters, or a string no
/// quoting can carry through a round trip.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(doc: &Document) -> Result<String> {
    let mut writer = Writer::new();
    writer.write_document(doc)?;
    Ok(writer.into_inner())
}

/// Formats a [`Document`] and writes the text to an I/O stream.
///
/// The document is fully formatted before the first byte is written, so a
/// validation error writes nothing.
///
/// # Examples
///
/// ```rust
/// use tomlet::{Document, Value};
///
/// let mut doc = Document::new();
/// doc.ensure_table("project")
///     .insert("name".to_string(), Value::from("demo"));
///
/// let mut buffer = Vec::new();
/// tomlet::to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[project]\nname=\"demo\"\n");
/// ```
///
/// # Errors
///
/// Returns a [`Writer`] validation error or [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    let text = to_string(doc)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Formats a [`Document`] and writes the text to a file.
///
/// The document is fully formatted in memory first; on a validation error
/// the file is not created and an existing file is left untouched.
///
/// # Examples
///
/// ```no_run
/// use tomlet::{Document, Value};
///
/// let mut doc = Document::new();
/// doc.ensure_table("project")
///     .insert("name".to_string(), Value::from("demo"));
///
/// tomlet::to_file("app.toml", &doc).unwrap();
/// ```
///
/// # Errors
///
/// Returns a [`Writer`] validation error or [`Error::Io`] if the file cannot
/// be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file<P>(path: P, doc: &Document) -> Result<()>
where
    P: AsRef<Path>,
{
    let text = to_string(doc)?;
    fs::write(path, text)?;
    Ok(())
}
