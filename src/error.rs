//! Error types for HOCON parsing and binding.
//!
//! Every stage of the pipeline (scanning, tokenizing, validation, binding)
//! reports failures through the single [`Error`] enum. The first error of any
//! kind aborts the parse; there is no partial result and no recovery.
//!
//! ## Error Categories
//!
//! - **Lexical**: [`Error::Scanner`], [`Error::InvalidToken`], [`Error::InvalidDuration`],
//!   [`Error::InvalidSize`]
//! - **Structural**: [`Error::UnbalancedParentheses`], [`Error::InvalidArray`], [`Error::Syntax`]
//! - **Binding**: [`Error::InvalidTarget`], [`Error::InvalidInputField`], [`Error::Conversion`]
//! - **Input**: [`Error::SourceNil`], [`Error::Io`]
//!
//! ## Examples
//!
//! ```rust
//! use serde_hocon::{from_str, Error, Value};
//!
//! let result: Result<Value, Error> = from_str("server { port = 80");
//! assert!(matches!(result, Err(Error::UnbalancedParentheses { .. })));
//! ```

use crate::token::Location;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while reading the source
    #[error("IO error: {0}")]
    Io(String),

    /// No source was supplied
    #[error("source is nil: nothing to parse")]
    SourceNil,

    /// Unterminated literal, invalid escape or another character-level failure
    #[error("scanner error at line {line}, column {col}: {msg}")]
    Scanner { line: usize, col: usize, msg: String },

    /// Forbidden character, unrecognized symbol or a token in an illegal position
    #[error("invalid token `{token}` at line {line}, column {col}")]
    InvalidToken {
        line: usize,
        col: usize,
        token: String,
    },

    /// Duration literal with a negative or out-of-range magnitude
    #[error("invalid duration `{value}` at line {line}, column {col}")]
    InvalidDuration {
        line: usize,
        col: usize,
        value: String,
    },

    /// Size literal with a negative or out-of-range magnitude
    #[error("invalid size `{value}` at line {line}, column {col}")]
    InvalidSize {
        line: usize,
        col: usize,
        value: String,
    },

    /// Braces or brackets do not pair up
    #[error("unbalanced parentheses at line {line}, column {col}")]
    UnbalancedParentheses { line: usize, col: usize },

    /// An array literal that does not follow `=` or `:`
    #[error("invalid array at line {line}, column {col}: `[` must follow `=` or `:`")]
    InvalidArray { line: usize, col: usize },

    /// The destination cannot receive a document
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// Strict mode only: a key without a matching destination field
    #[error("unknown field `{field}` at line {line}, column {col}")]
    InvalidInputField {
        line: usize,
        col: usize,
        field: String,
    },

    /// A value token cannot be converted to the destination type
    #[error("cannot convert `{token}` to {expected} at line {line}, column {col}")]
    Conversion {
        line: usize,
        col: usize,
        token: String,
        expected: String,
    },

    /// Token sequence that passed validation but does not form a statement
    #[error("syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// Custom error, usually raised by a `Deserialize` implementation
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a scanner error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hocon::{Error, Location};
    ///
    /// let err = Error::scanner(Location::new(1, 8), "literal not terminated");
    /// assert!(err.to_string().contains("line 1, column 8"));
    /// ```
    pub fn scanner(at: Location, msg: &str) -> Self {
        Error::Scanner {
            line: at.line,
            col: at.column,
            msg: msg.to_string(),
        }
    }

    pub fn invalid_token(at: Location, token: &str) -> Self {
        Error::InvalidToken {
            line: at.line,
            col: at.column,
            token: token.to_string(),
        }
    }

    pub fn invalid_duration(at: Location, value: &str) -> Self {
        Error::InvalidDuration {
            line: at.line,
            col: at.column,
            value: value.to_string(),
        }
    }

    pub fn invalid_size(at: Location, value: &str) -> Self {
        Error::InvalidSize {
            line: at.line,
            col: at.column,
            value: value.to_string(),
        }
    }

    pub fn unbalanced(at: Location) -> Self {
        Error::UnbalancedParentheses {
            line: at.line,
            col: at.column,
        }
    }

    pub fn invalid_array(at: Location) -> Self {
        Error::InvalidArray {
            line: at.line,
            col: at.column,
        }
    }

    pub fn invalid_target(msg: &str) -> Self {
        Error::InvalidTarget(msg.to_string())
    }

    pub fn unknown_field(at: Location, field: &str) -> Self {
        Error::InvalidInputField {
            line: at.line,
            col: at.column,
            field: field.to_string(),
        }
    }

    /// Creates a conversion error naming the offending token text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hocon::{Error, Location};
    ///
    /// let err = Error::conversion(Location::new(3, 10), "ten", "i64");
    /// assert!(err.to_string().contains("`ten` to i64"));
    /// ```
    pub fn conversion(at: Location, token: &str, expected: &str) -> Self {
        Error::Conversion {
            line: at.line,
            col: at.column,
            token: token.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn syntax(at: Location, msg: &str) -> Self {
        Error::Syntax {
            line: at.line,
            col: at.column,
            msg: msg.to_string(),
        }
    }

    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the source location attached to this error, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hocon::{Error, Location};
    ///
    /// assert_eq!(Error::unbalanced(Location::new(4, 2)).location(), Some(Location::new(4, 2)));
    /// assert_eq!(Error::SourceNil.location(), None);
    /// ```
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Error::Scanner { line, col, .. }
            | Error::InvalidToken { line, col, .. }
            | Error::InvalidDuration { line, col, .. }
            | Error::InvalidSize { line, col, .. }
            | Error::UnbalancedParentheses { line, col }
            | Error::InvalidArray { line, col }
            | Error::InvalidInputField { line, col, .. }
            | Error::Conversion { line, col, .. }
            | Error::Syntax { line, col, .. } => Some(Location::new(*line, *col)),
            Error::Io(_) | Error::SourceNil | Error::InvalidTarget(_) | Error::Custom(_) => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
