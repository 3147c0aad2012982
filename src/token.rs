//! Tokens exchanged between the lexer and the binder.
//!
//! A [`Token`] is a classified, located lexeme. Tokens are produced once, in
//! source order, by [`crate::tokenize`] and are never modified afterwards.
//!
//! ## Examples
//!
//! ```rust
//! use serde_hocon::{tokenize, TokenKind};
//!
//! let tokens = tokenize("timeout = 10 seconds").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, vec![TokenKind::Key, TokenKind::Equals, TokenKind::Duration]);
//! assert_eq!(tokens[2].value, "10000000000");
//! ```

use std::fmt;

/// A 1-based line and column position in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::new(1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Float,
    Boolean,
    /// A duration literal, normalized to nanoseconds.
    Duration,
    /// A size literal, normalized to bytes.
    Size,
    Key,
    /// A quoted, multi-line or unquoted string value.
    Text,
    /// A bare word that is neither a key nor a value.
    Identifier,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Equals,
    Colon,
    Comma,
    NewLine,
}

impl TokenKind {
    /// Returns `true` for kinds that carry a scalar value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hocon::TokenKind;
    ///
    /// assert!(TokenKind::Duration.is_value());
    /// assert!(!TokenKind::Key.is_value());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Float
                | TokenKind::Boolean
                | TokenKind::Duration
                | TokenKind::Size
                | TokenKind::Text
        )
    }

    /// Returns `true` for `=` and `:`.
    #[inline]
    #[must_use]
    pub const fn is_assignment(self) -> bool {
        matches!(self, TokenKind::Equals | TokenKind::Colon)
    }

    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Boolean => "boolean",
            TokenKind::Duration => "duration",
            TokenKind::Size => "size",
            TokenKind::Key => "key",
            TokenKind::Text => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Equals => "'='",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::NewLine => "newline",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A classified lexeme with its normalized text and start location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: Location,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, location: Location) -> Self {
        Token {
            kind,
            value: value.into(),
            location,
        }
    }

    pub(crate) fn newline(location: Location) -> Self {
        Token::new(TokenKind::NewLine, "\n", location)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::NewLine => write!(f, "newline at {}", self.location),
            kind => write!(f, "{} `{}` at {}", kind, self.value, self.location),
        }
    }
}
