//! Character-level tokenization of manifest text.
//!
//! Every character of every surviving line becomes exactly one [`Token`];
//! whole lines whose *first* character is `#` are dropped before any token
//! is produced (comments are line-granular, never inline). The token list
//! always ends with a single [`TokenKind::Eof`].

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// The classification of a single input character.
///
/// [`TokenKind::classify`] is the one authority on which characters are
/// special; the parser and the writer both defer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `=`
    Equal,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `"` or `'`, carrying which one so a string closes only at the
    /// delimiter it opened with.
    Quote(char),
    /// `,`
    Comma,
    /// `#` appearing past the start of a line.
    Comment,
    /// `\n`
    Newline,
    /// `\r`
    CarriageReturn,
    /// A single space.
    Space,
    /// Any other character; the building block of bare runs.
    Char(char),
    /// End of input, appended exactly once.
    Eof,
}

impl TokenKind {
    /// Classifies one character.
    #[must_use]
    pub const fn classify(ch: char) -> TokenKind {
        match ch {
            '=' => TokenKind::Equal,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '"' | '\'' => TokenKind::Quote(ch),
            ',' => TokenKind::Comma,
            '#' => TokenKind::Comment,
            '\n' => TokenKind::Newline,
            '\r' => TokenKind::CarriageReturn,
            ' ' => TokenKind::Space,
            other => TokenKind::Char(other),
        }
    }

    /// The source character this token stands for, `None` for [`TokenKind::Eof`].
    ///
    /// Inside a quoted string the parser reassembles text by joining these,
    /// which is why every kind must round-trip to its character.
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        match self {
            TokenKind::Equal => Some('='),
            TokenKind::LBracket => Some('['),
            TokenKind::RBracket => Some(']'),
            TokenKind::LBrace => Some('{'),
            TokenKind::RBrace => Some('}'),
            TokenKind::Quote(q) => Some(q),
            TokenKind::Comma => Some(','),
            TokenKind::Comment => Some('#'),
            TokenKind::Newline => Some('\n'),
            TokenKind::CarriageReturn => Some('\r'),
            TokenKind::Space => Some(' '),
            TokenKind::Char(c) => Some(c),
            TokenKind::Eof => None,
        }
    }

    /// Whether the parser skips this kind between grammar elements.
    #[must_use]
    pub const fn is_whitespace(self) -> bool {
        matches!(
            self,
            TokenKind::Space | TokenKind::Newline | TokenKind::CarriageReturn
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::CarriageReturn => f.write_str("carriage return"),
            TokenKind::Space => f.write_str("space"),
            TokenKind::Eof => f.write_str("end of input"),
            other => match other.as_char() {
                Some(ch) => write!(f, "`{ch}`"),
                None => f.write_str("end of input"),
            },
        }
    }
}

/// One classified input character with its source position (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, line: usize, column: usize) -> Token {
        Token { kind, line, column }
    }
}

/// Tokenizes manifest text.
///
/// Cannot fail: every character maps to exactly one token. Comment lines
/// still advance the line counter so later diagnostics point at the right
/// place.
///
/// # Examples
///
/// ```rust
/// use tomlet::{tokenize, TokenKind};
///
/// let tokens = tokenize("# header\n[a]\n");
/// assert_eq!(tokens[0].kind, TokenKind::LBracket);
/// assert_eq!(tokens[0].line, 2);
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut column = 1;

    for raw_line in input.split_inclusive('\n') {
        if raw_line.starts_with('#') {
            if raw_line.ends_with('\n') {
                line += 1;
                column = 1;
            }
            continue;
        }
        for ch in raw_line.chars() {
            tokens.push(Token::new(TokenKind::classify(ch), line, column));
            column += 1;
        }
        if raw_line.ends_with('\n') {
            line += 1;
            column = 1;
        }
    }

    tokens.push(Token::new(TokenKind::Eof, line, column));
    tokens
}

/// Reads a file and tokenizes its contents.
///
/// # Errors
///
/// Returns the underlying I/O error unchanged if the file cannot be opened
/// or read; no partial token list is produced.
pub fn tokenize_file<P: AsRef<Path>>(path: P) -> Result<Vec<Token>> {
    let text = fs::read_to_string(path)?;
    Ok(tokenize(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_special_character() {
        assert_eq!(TokenKind::classify('='), TokenKind::Equal);
        assert_eq!(TokenKind::classify('['), TokenKind::LBracket);
        assert_eq!(TokenKind::classify(']'), TokenKind::RBracket);
        assert_eq!(TokenKind::classify('{'), TokenKind::LBrace);
        assert_eq!(TokenKind::classify('}'), TokenKind::RBrace);
        assert_eq!(TokenKind::classify('"'), TokenKind::Quote('"'));
        assert_eq!(TokenKind::classify('\''), TokenKind::Quote('\''));
        assert_eq!(TokenKind::classify(','), TokenKind::Comma);
        assert_eq!(TokenKind::classify('#'), TokenKind::Comment);
        assert_eq!(TokenKind::classify('\n'), TokenKind::Newline);
        assert_eq!(TokenKind::classify('\r'), TokenKind::CarriageReturn);
        assert_eq!(TokenKind::classify(' '), TokenKind::Space);
        assert_eq!(TokenKind::classify('x'), TokenKind::Char('x'));
        assert_eq!(TokenKind::classify('-'), TokenKind::Char('-'));
        assert_eq!(TokenKind::classify('\t'), TokenKind::Char('\t'));
    }

    #[test]
    fn every_character_becomes_one_token() {
        let tokens = tokenize("a=1\n");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Char('a'),
                TokenKind::Equal,
                TokenKind::Char('1'),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn comment_lines_are_dropped_whole() {
        let tokens = tokenize("# a comment with = and [ inside\nx=1\n");
        assert_eq!(tokens[0].kind, TokenKind::Char('x'));
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn indented_hash_is_not_a_comment() {
        // Only a line-initial `#` starts a comment.
        let tokens = tokenize(" # not a comment\n");
        assert_eq!(tokens[0].kind, TokenKind::Space);
        assert_eq!(tokens[1].kind, TokenKind::Comment);
    }

    #[test]
    fn empty_input_yields_only_eof() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenKind::Eof, 1, 1));
    }

    #[test]
    fn positions_are_one_based_per_line() {
        let tokens = tokenize("ab\ncd");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 2));
        assert_eq!((tokens[2].line, tokens[2].column), (1, 3)); // newline
        assert_eq!((tokens[3].line, tokens[3].column), (2, 1));
        let eof = tokens.last().unwrap();
        assert_eq!((eof.kind, eof.line, eof.column), (TokenKind::Eof, 2, 3));
    }

    #[test]
    fn crlf_line_endings_tokenize() {
        let tokens = tokenize("a\r\n");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Char('a'),
                TokenKind::CarriageReturn,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn quote_tokens_remember_their_delimiter() {
        let tokens = tokenize("\"'");
        assert_eq!(tokens[0].kind, TokenKind::Quote('"'));
        assert_eq!(tokens[1].kind, TokenKind::Quote('\''));
    }

    #[test]
    fn whitespace_kinds() {
        assert!(TokenKind::Space.is_whitespace());
        assert!(TokenKind::Newline.is_whitespace());
        assert!(TokenKind::CarriageReturn.is_whitespace());
        assert!(!TokenKind::Comma.is_whitespace());
        assert!(!TokenKind::Eof.is_whitespace());
    }
}
