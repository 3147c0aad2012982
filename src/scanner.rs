//! Character-level scanning.
//!
//! The [`Scanner`] wraps the raw source text and hands out primitive lexical
//! events ([`Primitive`]) with their start location. It knows nothing about
//! keys, values or units; that is the job of [`crate::lexer`].
//!
//! Besides the pull-based [`Scanner::scan`], the scanner exposes rune-level
//! access ([`Scanner::peek`], [`Scanner::next`]) so the lexer can restart
//! scanning character by character, for example while concatenating an
//! unquoted value.
//!
//! ## Errors
//!
//! An unterminated literal or an invalid escape stops the scanner for good:
//! the error is recorded (and passed to the optional handler), and every later
//! call to [`Scanner::scan`] returns [`Primitive::Eof`].
//!
//! ```rust
//! use serde_hocon::scanner::{Primitive, Scanner};
//!
//! let mut scanner = Scanner::new(r#"name = "unterminated"#);
//! assert_eq!(scanner.scan(), Primitive::Ident);
//! assert_eq!(scanner.scan(), Primitive::Char('='));
//! assert_eq!(scanner.scan(), Primitive::Eof);
//! assert!(scanner.take_error().is_some());
//! ```

use crate::error::Error;
use crate::token::Location;
use std::fmt;

/// Primitive lexical categories produced by [`Scanner::scan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// A run of letters, digits (not leading), `-`, `_` and `.`.
    Ident,
    Int,
    Float,
    /// A double-quoted string with backslash escapes.
    String,
    /// A `"""` delimited multi-line string.
    RawString,
    /// Any other single character.
    Char(char),
    Eof,
}

/// A saved scanner position, see [`Scanner::mark`] and [`Scanner::reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    pos: usize,
    location: Location,
}

type ErrorHandler<'a> = Box<dyn FnMut(&Error) + 'a>;

/// Pull-based scanner over a source string.
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    location: Location,
    start: usize,
    start_location: Location,
    literal: String,
    error: Option<Error>,
    on_error: Option<ErrorHandler<'a>>,
}

const RAW_DELIMITER: &str = "\"\"\"";

/// Returns `true` if `ch` may appear at index `i` of an identifier run.
#[inline]
pub fn is_ident_rune(ch: char, i: usize) -> bool {
    ch == '-' || ch == '_' || ch == '.' || ch.is_alphabetic() || (ch.is_numeric() && i > 0)
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Scanner {
            src,
            pos: 0,
            location: Location::default(),
            start: 0,
            start_location: Location::default(),
            literal: String::new(),
            error: None,
            on_error: None,
        }
    }

    /// Installs a callback invoked with the first scanning error.
    ///
    /// The error is recorded either way and can be collected with
    /// [`Scanner::take_error`].
    ///
    /// ```rust
    /// use serde_hocon::scanner::Scanner;
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(0);
    /// let mut scanner = Scanner::new(r#""\q""#).with_error_handler(|_| seen.set(seen.get() + 1));
    /// scanner.scan();
    /// scanner.scan();
    /// assert_eq!(seen.get(), 1);
    /// ```
    #[must_use]
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&Error) + 'a,
    {
        self.on_error = Some(Box::new(handler));
        self
    }

    /// Current position, i.e. the location of the next unread character.
    #[inline]
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Start location of the last scanned primitive.
    #[inline]
    #[must_use]
    pub fn token_location(&self) -> Location {
        self.start_location
    }

    /// Source text of the last scanned primitive.
    #[inline]
    #[must_use]
    pub fn token_text(&self) -> &'a str {
        &self.src[self.start..self.pos]
    }

    /// Decoded contents of the last scanned string or raw string.
    #[inline]
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// The unread remainder of the source.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// First character after any spaces and tabs, without consuming anything.
    #[must_use]
    pub fn peek_non_blank(&self) -> Option<char> {
        self.rest().chars().find(|ch| *ch != ' ' && *ch != '\t')
    }

    /// Returns `true` if only blanks separate the current position from a line break.
    #[must_use]
    pub fn at_line_break(&self) -> bool {
        self.rest()
            .trim_start_matches([' ', '\t', '\r'])
            .starts_with('\n')
    }

    /// Consumes and returns the next character.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }
        Some(ch)
    }

    #[must_use]
    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            location: self.location,
        }
    }

    /// Rewinds (or fast-forwards) to a position saved with [`Scanner::mark`].
    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.location = mark.location;
    }

    /// Takes the recorded scanning error, if any.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Scans the next primitive, skipping whitespace and line breaks.
    pub fn scan(&mut self) -> Primitive {
        if self.has_error() {
            return Primitive::Eof;
        }
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.next();
        }

        self.start = self.pos;
        self.start_location = self.location;

        let Some(ch) = self.peek() else {
            return Primitive::Eof;
        };

        if ch.is_ascii_digit() {
            return self.scan_number();
        }
        if is_ident_rune(ch, 0) {
            self.scan_ident();
            return Primitive::Ident;
        }
        if ch == '"' {
            return if self.rest().starts_with(RAW_DELIMITER) {
                self.scan_raw_string()
            } else {
                self.scan_string()
            };
        }

        self.next();
        Primitive::Char(ch)
    }

    fn scan_ident(&mut self) {
        let mut i = 0;
        while let Some(ch) = self.peek() {
            if !is_ident_rune(ch, i) {
                break;
            }
            self.next();
            i += 1;
        }
    }

    fn scan_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            self.next();
            count += 1;
        }
        count
    }

    fn scan_number(&mut self) -> Primitive {
        self.scan_digits();
        let mut kind = Primitive::Int;

        let mut chars = self.rest().chars();
        if chars.next() == Some('.') && matches!(chars.next(), Some(ch) if ch.is_ascii_digit()) {
            self.next();
            self.scan_digits();
            kind = Primitive::Float;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let mark = self.mark();
            self.next();
            if matches!(self.peek(), Some('+' | '-')) {
                self.next();
            }
            if self.scan_digits() == 0 {
                // Not an exponent after all, leave the letter for the next primitive.
                self.reset(mark);
            } else {
                kind = Primitive::Float;
            }
        }
        kind
    }

    fn scan_string(&mut self) -> Primitive {
        self.next();
        self.literal.clear();

        loop {
            match self.next() {
                None | Some('\n') => return self.fail("literal not terminated"),
                Some('"') => return Primitive::String,
                Some('\\') => {
                    let escaped = match self.next() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('/') => '/',
                        Some('b') => '\u{0008}',
                        Some('f') => '\u{000C}',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('u') => match self.scan_unicode_escape() {
                            Some(ch) => ch,
                            None => return self.fail("invalid unicode escape"),
                        },
                        None => return self.fail("literal not terminated"),
                        Some(_) => return self.fail("invalid char escape"),
                    };
                    self.literal.push(escaped);
                }
                Some(ch) => self.literal.push(ch),
            }
        }
    }

    fn scan_unicode_escape(&mut self) -> Option<char> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self.peek()?.to_digit(16)?;
            self.next();
            code = code * 16 + digit;
        }
        char::from_u32(code)
    }

    fn scan_raw_string(&mut self) -> Primitive {
        for _ in 0..RAW_DELIMITER.len() {
            self.next();
        }
        let Some(end) = self.rest().find(RAW_DELIMITER) else {
            return self.fail("multi-line string not terminated");
        };

        self.literal = self.rest()[..end].replace('\r', "");
        let close = self.pos + end + RAW_DELIMITER.len();
        while self.pos < close {
            self.next();
        }
        Primitive::RawString
    }

    fn fail(&mut self, msg: &str) -> Primitive {
        let err = Error::scanner(self.start_location, msg);
        if let Some(handler) = self.on_error.as_mut() {
            handler(&err);
        }
        self.error = Some(err);
        Primitive::Eof
    }
}

impl fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("pos", &self.pos)
            .field("location", &self.location)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
