//! Recursive-descent parser for manifest tokens.
//!
//! The grammar, after the tokenizer has dropped comment lines:
//!
//! ```text
//! document      := ( section | key_value )*
//! section       := '[' bare_run ']'
//! key_value     := bare_run '=' value
//! value         := string | bare_run | list | inline_table
//! list          := '[' ( value ( ',' value )* )? ']'
//! inline_table  := '{' ( bare_run '=' value ( ',' bare_run '=' value )* )? '}'
//! string        := quote CHAR* matching-quote
//! bare_run      := CHAR+
//! ```
//!
//! Whitespace (spaces, newlines, carriage returns) is skipped between
//! grammar elements, never inside a bare run. A `[section]` header switches
//! the current table; re-declaring a section replaces its table while
//! keeping its original position. A key-value line before any section is a
//! syntax error. Any token the grammar cannot reduce aborts the parse
//! immediately; no partial document is ever returned.

use crate::document::Document;
use crate::error::{Error, Result};
use crate::tokenizer::{Token, TokenKind};
use crate::value::Value;

// `tokenize` always appends an Eof token; this fallback only matters for
// hand-built token slices.
const EOF: Token = Token::new(TokenKind::Eof, 0, 0);

/// A cursor over a token slice.
///
/// All grammar sub-routines share the single position index through
/// `peek`/`advance`/`expect`. One-shot: [`Parser::parse`] consumes the
/// parser.
///
/// # Examples
///
/// ```rust
/// use tomlet::{tokenize, Parser};
///
/// let tokens = tokenize("[project]\nname=\"demo\"\n");
/// let doc = Parser::new(&tokens).parse().unwrap();
/// assert!(doc.get("project").is_some());
/// ```
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Parser<'t> {
        Parser { tokens, pos: 0 }
    }

    /// Parses the whole token sequence into a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] on the first token the grammar cannot
    /// reduce, with the token's line and column.
    pub fn parse(mut self) -> Result<Document> {
        let mut root = Document::new();
        let mut current: Option<(String, Document)> = None;

        loop {
            self.skip_whitespace();
            match self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::LBracket => {
                    let name = self.parse_section_name()?;
                    if let Some((done, table)) = current.take() {
                        root.insert(done, Value::Table(table));
                    }
                    current = Some((name, Document::new()));
                }
                TokenKind::Char(_) => {
                    let Some((_, table)) = current.as_mut() else {
                        return Err(self.error_here("Key-value pair outside of a [section]"));
                    };
                    let key = self.parse_bare_run("Expected key")?;
                    self.skip_whitespace();
                    self.expect(TokenKind::Equal, "Expected equal sign")?;
                    let value = self.parse_value()?;
                    table.insert(key, value);
                }
                other => return Err(self.unexpected(other)),
            }
        }

        if let Some((name, table)) = current.take() {
            root.insert(name, Value::Table(table));
        }
        Ok(root)
    }

    fn parse_section_name(&mut self) -> Result<String> {
        self.advance(); // '['
        self.skip_whitespace();
        let name = self.parse_bare_run("Expected section name")?;
        self.skip_whitespace();
        self.expect(TokenKind::RBracket, "Expected right bracket")?;
        Ok(name)
    }

    /// A maximal run of contiguous `Char` tokens; cannot contain spaces.
    fn parse_bare_run(&mut self, expected: &str) -> Result<String> {
        let mut text = String::new();
        while let TokenKind::Char(ch) = self.peek().kind {
            text.push(ch);
            self.advance();
        }
        if text.is_empty() {
            return Err(self.error_here(expected));
        }
        Ok(text)
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek().kind {
            TokenKind::Quote(_) => self.parse_string(),
            TokenKind::LBracket => self.parse_list(),
            TokenKind::LBrace => self.parse_inline_table(),
            TokenKind::Char(_) => Ok(Value::Bare(self.parse_bare_run("Expected value")?)),
            other => Err(self.unexpected(other)),
        }
    }

    /// Joins every token back to its source character until the quote that
    /// opened the string recurs. The other quote style, and any special
    /// character including newlines, may appear freely inside.
    fn parse_string(&mut self) -> Result<Value> {
        let open = self.advance();
        let TokenKind::Quote(delimiter) = open.kind else {
            return Err(self.unexpected(open.kind));
        };
        let mut text = String::new();
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::Quote(q) if q == delimiter => {
                    self.advance();
                    return Ok(Value::Str(text));
                }
                TokenKind::Eof => {
                    return Err(Error::syntax(open.line, open.column, "Unterminated string"));
                }
                kind => {
                    if let Some(ch) = kind.as_char() {
                        text.push(ch);
                    }
                    self.advance();
                }
            }
        }
    }

    fn parse_list(&mut self) -> Result<Value> {
        self.advance(); // '['
        self.skip_whitespace();
        let mut items = Vec::new();
        if self.peek().kind == TokenKind::RBracket {
            self.advance();
            return Ok(Value::List(items));
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek().kind {
                TokenKind::Comma => {
                    let comma = self.advance();
                    self.skip_whitespace();
                    if self.peek().kind == TokenKind::RBracket {
                        return Err(Error::syntax(comma.line, comma.column, "Unexpected comma"));
                    }
                }
                TokenKind::RBracket => {
                    self.advance();
                    return Ok(Value::List(items));
                }
                _ => return Err(self.error_here("Expected right bracket")),
            }
        }
    }

    fn parse_inline_table(&mut self) -> Result<Value> {
        self.advance(); // '{'
        self.skip_whitespace();
        let mut table = Document::new();
        if self.peek().kind == TokenKind::RBrace {
            self.advance();
            return Ok(Value::Table(table));
        }
        loop {
            let key = self.parse_bare_run("Expected key")?;
            self.skip_whitespace();
            self.expect(TokenKind::Equal, "Expected equal sign")?;
            let value = self.parse_value()?;
            table.insert(key, value);
            self.skip_whitespace();
            match self.peek().kind {
                TokenKind::Comma => {
                    let comma = self.advance();
                    self.skip_whitespace();
                    if self.peek().kind == TokenKind::RBrace {
                        return Err(Error::syntax(comma.line, comma.column, "Unexpected comma"));
                    }
                }
                TokenKind::RBrace => {
                    self.advance();
                    return Ok(Value::Table(table));
                }
                _ => return Err(self.error_here("Expected right brace")),
            }
        }
    }

    fn peek(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(EOF)
    }

    fn advance(&mut self) -> Token {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind, msg: &str) -> Result<Token> {
        let token = self.peek();
        if token.kind == kind {
            Ok(self.advance())
        } else {
            Err(Error::syntax(token.line, token.column, msg))
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().kind.is_whitespace() {
            self.advance();
        }
    }

    fn error_here(&self, msg: impl Into<String>) -> Error {
        let token = self.peek();
        Error::syntax(token.line, token.column, msg)
    }

    fn unexpected(&self, kind: TokenKind) -> Error {
        self.error_here(format!("Unexpected token {kind}"))
    }
}
