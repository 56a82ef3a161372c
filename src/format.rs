//! Manifest Format Reference
//!
//! This module documents the manifest dialect as this library reads and
//! writes it.
//!
//! # Overview
//!
//! The dialect is a small, line-oriented cousin of TOML used for application
//! manifests and tool settings files. A document is a flat sequence of
//! `[section]` headers, each followed by `key=value` lines. There is no
//! nesting through headers; structure beyond one level comes from inline
//! `{...}` tables and `[...]` lists on the value side.
//!
//! ```text
//! # application manifest
//! [tools]
//! env_create_tool="python3 -m venv"
//! env_name=env
//!
//! [project]
//! name="demo"
//! version=0.1.0
//! dependencies=[{name="requests", new_packages=[]}]
//! ```
//!
//! ## Design Notes
//!
//! - Every value is text. Numbers and booleans are never converted to native
//!   types while parsing; `42`, `0.1.0` and `True` are all bare words.
//! - Key order is load-bearing. Documents reproduce their sections and keys
//!   in insertion order when written back.
//! - Parsing is all-or-nothing. The first token the grammar cannot reduce
//!   aborts with a positioned error; there are no partial documents.
//!
//! # Core Syntax
//!
//! ## Comments
//!
//! A line whose **first character** is `#` is dropped before tokenization.
//! There are no inline comments, and an indented `#` does not start one:
//!
//! ```text
//! # dropped
//!   # NOT a comment; the leading spaces make this line significant
//! ```
//!
//! ## Sections
//!
//! `[name]` opens a section. The name is one bare run; whitespace is allowed
//! around it but not inside it. Re-declaring a section replaces its table
//! while keeping the section's original position in the document.
//!
//! A dot in a section name is an ordinary character: `[a.b]` is the single
//! top-level key `a.b`, not a nested table.
//!
//! ## Key-Value Pairs
//!
//! `key=value`, one per line by convention, although the grammar only
//! requires whitespace between elements. Keys are bare runs. A key-value
//! pair before the first section header is a syntax error.
//!
//! ## Values
//!
//! | Kind | Syntax | Example |
//! |------|--------|---------|
//! | String | `"..."` or `'...'` | `name="demo"` |
//! | Bare | unquoted run | `version=0.1.0`, `local=True` |
//! | List | `[v, v, ...]` | `authors=["a", "b"]` |
//! | Inline table | `{k=v, k=v}` | `dep={name="requests", new_packages=[]}` |
//!
//! Lists and inline tables nest arbitrarily.
//!
//! ## Strings
//!
//! Both quote styles work. There are **no escape sequences**; a string ends
//! at the next occurrence of the quote character that opened it, and the
//! other quote style may appear freely inside:
//!
//! ```text
//! a="it's fine"
//! b='say "hi"'
//! ```
//!
//! Since nothing but the matching quote ends a string, strings may span
//! lines; the newlines are part of the value. A string still open at end of
//! input is an `Unterminated string` error reported at the opening quote.
//!
//! ## Bare Values
//!
//! A bare run is a maximal sequence of ordinary characters. It cannot
//! contain spaces or any of `= [ ] { } " ' , #`. Tabs and other unlisted
//! characters are ordinary. The conventional boolean spellings are the
//! capitalized words `True` and `False`; the parser does not treat them
//! specially, but [`Value::as_bool`](crate::Value::as_bool) coerces exactly
//! those two.
//!
//! ## Lists
//!
//! Comma-separated values in brackets. A trailing comma is an error
//! (`Unexpected comma`), matching the strictness of the rest of the
//! grammar:
//!
//! ```text
//! ok=[1, 2, 3]
//! also_ok=[]
//! bad=[1, 2,]
//! ```
//!
//! ## Inline Tables
//!
//! Comma-separated `key=value` pairs in braces: `{name="requests",
//! new_packages=[]}`. Same trailing-comma rule as lists. Keys follow the
//! same normalization as section keys.
//!
//! # Key Normalization
//!
//! Every key, wherever it enters a document, has dashes rewritten to
//! underscores: `env-name` and `env_name` are the same key. This applies to
//! section names, key-value lines, inline-table keys, and keys inserted
//! programmatically. The dashed spelling never exists in a parsed document.
//!
//! # Ordering
//!
//! Documents preserve insertion order, and assigning to an existing key
//! replaces the value while keeping the key's original position. Writing a
//! document reproduces its order exactly.
//!
//! # Round Trips
//!
//! `parse(write(doc)) == doc` holds for every document the writer accepts,
//! including key order. To keep that guarantee the writer refuses documents
//! that could not re-parse faithfully:
//!
//! - a top-level value that is not a table (no section to put it in)
//! - keys or bare values containing reserved characters
//! - strings containing both quote characters (no delimiter can hold them)
//! - multi-line strings with a continuation line starting with `#` (the
//!   comment filter would eat that line on re-parse)
//!
//! The full document is formatted in memory before any file is touched, so
//! a refused document leaves existing files untouched.
//!
//! # Errors
//!
//! Syntax errors carry the 1-based line and column of the offending token
//! and one of a small set of messages:
//!
//! ```text
//! Expected equal sign        key not followed by `=`
//! Expected right bracket     unclosed `[...]` list or section header
//! Expected right brace       unclosed `{...}` inline table
//! Expected section name      `[` not followed by a bare run
//! Expected key               `{` or `,` not followed by a bare run
//! Unexpected comma           trailing comma in a list or inline table
//! Unterminated string        quote still open at end of input
//! ```
//!
//! # Edge Cases
//!
//! - Empty input parses to an empty document.
//! - `[section]` with no keys parses to an empty table and writes back as a
//!   bare header.
//! - Assigning a key twice keeps the first position with the last value.
//! - Blank lines and `\r\n` line endings are accepted anywhere between
//!   elements.
//!
//! # Limitations
//!
//! - No dotted headers or arrays of tables; one level of sections only
//! - No escape sequences in strings
//! - No native number, boolean, or date types
//! - No inline comments; comment lines must start at column one

// This module contains only documentation; no implementation code
