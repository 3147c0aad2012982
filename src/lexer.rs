//! Tokenization.
//!
//! The [`Lexer`] turns the scanner's primitives into a flat sequence of
//! [`Token`]s, applying the language rules:
//!
//! - `#` and `//` start a line comment
//! - an identifier followed by `=`, `:` or `{` is a [`TokenKind::Key`]
//! - after `=` or `:` an unquoted value runs to the end of the line, a comment,
//!   or a forbidden character, and is trimmed
//! - unquoted values are classified as boolean, duration, size, integer, float
//!   or text; durations and sizes are rewritten to nanoseconds and bytes
//! - `key = { ... }` may be written `key { ... }`
//!
//! ## Examples
//!
//! ```rust
//! use serde_hocon::{tokenize, TokenKind};
//!
//! let tokens = tokenize("cache { limit = 5 GB }").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Key);
//! assert_eq!(tokens[1].kind, TokenKind::LeftBrace);
//! assert_eq!(tokens[4].kind, TokenKind::Size);
//! assert_eq!(tokens[4].value, "5368709120");
//! ```

use crate::error::{Error, Result};
use crate::scanner::{is_ident_rune, Mark, Primitive, Scanner};
use crate::token::{Location, Token, TokenKind};

/// Duration unit spellings and their length in nanoseconds.
pub const DURATION_UNITS: &[(&str, u64)] = &[
    ("s", SECOND),
    ("second", SECOND),
    ("seconds", SECOND),
    ("ms", MILLISECOND),
    ("milli", MILLISECOND),
    ("millis", MILLISECOND),
    ("millisecond", MILLISECOND),
    ("milliseconds", MILLISECOND),
    ("us", MICROSECOND),
    ("micro", MICROSECOND),
    ("micros", MICROSECOND),
    ("microsecond", MICROSECOND),
    ("microseconds", MICROSECOND),
    ("ns", 1),
    ("nano", 1),
    ("nanos", 1),
    ("nanosecond", 1),
    ("nanoseconds", 1),
    ("m", MINUTE),
    ("minute", MINUTE),
    ("minutes", MINUTE),
    ("h", HOUR),
    ("hour", HOUR),
    ("hours", HOUR),
    ("d", DAY),
    ("day", DAY),
    ("days", DAY),
    ("w", WEEK),
    ("week", WEEK),
    ("weeks", WEEK),
];

/// Size unit spellings and their length in bytes.
pub const SIZE_UNITS: &[(&str, u64)] = &[
    ("B", 1),
    ("b", 1),
    ("byte", 1),
    ("bytes", 1),
    ("kb", KIB),
    ("kB", KIB),
    ("Kb", KIB),
    ("KB", KIB),
    ("kilobyte", KIB),
    ("kilobytes", KIB),
    ("mb", MIB),
    ("mB", MIB),
    ("Mb", MIB),
    ("MB", MIB),
    ("megabyte", MIB),
    ("megabytes", MIB),
    ("gb", GIB),
    ("Gb", GIB),
    ("GB", GIB),
    ("gB", GIB),
    ("gigabyte", GIB),
    ("gigabytes", GIB),
];

const MICROSECOND: u64 = 1_000;
const MILLISECOND: u64 = 1_000_000;
const SECOND: u64 = 1_000_000_000;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Characters that end an unquoted value. `//` ends it as well.
const FORBIDDEN: &[char] = &[
    '$', '"', '{', '}', '[', ']', ':', '=', ',', '+', '#', '`', '^', '?', '!', '@', '*', '&',
];

#[inline]
fn is_forbidden(ch: char) -> bool {
    FORBIDDEN.contains(&ch)
}

/// A number followed by a unit word, e.g. `10 seconds`.
struct UnitLiteral<'s> {
    negative: bool,
    digits: &'s str,
    unit: &'s str,
}

fn split_unit_literal(text: &str) -> Option<UnitLiteral<'_>> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits_end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }
    let unit = unsigned[digits_end..].trim_start();
    if unit.is_empty() {
        return None;
    }
    Some(UnitLiteral {
        negative,
        digits: &unsigned[..digits_end],
        unit,
    })
}

/// Multiplies the literal's magnitude by `scale`. `None` when negative or out of range.
fn scaled(literal: &UnitLiteral<'_>, scale: u64) -> Option<u64> {
    if literal.negative {
        return None;
    }
    literal.digits.parse::<u64>().ok()?.checked_mul(scale)
}

/// Resolves `text` as a duration literal.
///
/// Returns `None` if `text` is not shaped like one, `Some(None)` if it is but
/// the magnitude is negative or overflows, and `Some(Some(nanos))` otherwise.
/// The unit must make up the whole remainder of the text.
#[must_use]
pub fn duration_nanos(text: &str) -> Option<Option<u64>> {
    let literal = split_unit_literal(text)?;
    let (_, scale) = DURATION_UNITS
        .iter()
        .find(|(unit, _)| *unit == literal.unit)?;
    Some(scaled(&literal, *scale))
}

/// Resolves `text` as a size literal, with the same contract as [`duration_nanos`].
///
/// Only the start of the remainder has to spell a unit.
#[must_use]
pub fn size_bytes(text: &str) -> Option<Option<u64>> {
    let literal = split_unit_literal(text)?;
    let (_, scale) = SIZE_UNITS
        .iter()
        .find(|(unit, _)| literal.unit.starts_with(unit))?;
    Some(scaled(&literal, *scale))
}

fn is_unit_literal(text: &str) -> bool {
    duration_nanos(text).is_some() || size_bytes(text).is_some()
}

fn looks_like_float(text: &str) -> bool {
    text.chars().any(|ch| ch.is_ascii_digit())
        && text
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'))
        && text.parse::<f64>().is_ok()
}

/// Classifies a trimmed unquoted value.
fn classify(text: &str, at: Location) -> Result<Token> {
    if text.starts_with("true") || text.starts_with("false") {
        return Ok(Token::new(TokenKind::Boolean, text, at));
    }
    if let Some(nanos) = duration_nanos(text) {
        let nanos = nanos.ok_or_else(|| Error::invalid_duration(at, text))?;
        return Ok(Token::new(TokenKind::Duration, nanos.to_string(), at));
    }
    if let Some(bytes) = size_bytes(text) {
        let bytes = bytes.ok_or_else(|| Error::invalid_size(at, text))?;
        return Ok(Token::new(TokenKind::Size, bytes.to_string(), at));
    }
    let kind = if text.parse::<i64>().is_ok() {
        TokenKind::Integer
    } else if looks_like_float(text) {
        TokenKind::Float
    } else {
        TokenKind::Text
    };
    Ok(Token::new(kind, text, at))
}

/// Converts source text into tokens.
///
/// # Errors
///
/// Returns the first scanner or lexical error encountered.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).run()
}

/// The tokenizer state: scanner, emitted tokens, and open delimiters.
#[derive(Debug)]
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    tokens: Vec<Token>,
    nesting: Vec<TokenKind>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let scanner = Scanner::new(input).with_error_handler(|err| {
            tracing::debug!(%err, "scanner stopped");
        });
        Lexer {
            scanner,
            tokens: Vec::new(),
            nesting: Vec::new(),
        }
    }

    /// Runs the lexer to the end of input.
    ///
    /// # Errors
    ///
    /// Returns the first scanner or lexical error encountered.
    pub fn run(mut self) -> Result<Vec<Token>> {
        loop {
            let primitive = self.scanner.scan();
            if let Some(err) = self.scanner.take_error() {
                return Err(err);
            }
            let at = self.scanner.token_location();

            match primitive {
                Primitive::Eof => break,
                Primitive::Char('#') => {
                    self.skip_comment();
                    continue;
                }
                Primitive::Char('/') if self.scanner.peek() == Some('/') => {
                    self.skip_comment();
                    continue;
                }
                Primitive::Char(ch @ ('=' | ':')) if self.scanner.peek() == Some('{') => {
                    tracing::trace!(%at, %ch, "assignment before block elided");
                    continue;
                }
                Primitive::Char(ch) if !is_forbidden(ch) && self.in_value_position() => {
                    let text = self.scanner.token_text();
                    self.value(text, at)?;
                }
                Primitive::Char(ch) => self.punctuation(ch, at)?,
                Primitive::Ident | Primitive::Int | Primitive::Float => self.word(primitive, at)?,
                Primitive::String | Primitive::RawString => {
                    let text = self.scanner.literal().to_string();
                    self.tokens.push(Token::new(TokenKind::Text, text, at));
                }
            }

            if self.scanner.at_line_break() {
                self.push_newline(self.scanner.location());
            }
        }

        tracing::debug!(count = self.tokens.len(), "tokenized document");
        Ok(self.tokens)
    }

    fn previous(&self) -> Option<TokenKind> {
        self.tokens.last().map(|token| token.kind)
    }

    fn in_array(&self) -> bool {
        self.nesting.last() == Some(&TokenKind::LeftBracket)
    }

    fn in_value_position(&self) -> bool {
        match self.previous() {
            Some(kind) if kind.is_assignment() => true,
            Some(
                TokenKind::LeftBracket
                | TokenKind::Comma
                | TokenKind::NewLine
                | TokenKind::RightBracket
                | TokenKind::RightBrace,
            ) => self.in_array(),
            Some(kind) if kind.is_value() => self.in_array(),
            _ => false,
        }
    }

    fn push_newline(&mut self, at: Location) {
        if self.previous().is_some_and(|kind| kind != TokenKind::NewLine) {
            self.tokens.push(Token::newline(at));
        }
    }

    /// Drops everything up to (not including) the end of the line.
    fn skip_comment(&mut self) {
        while let Some(ch) = self.scanner.peek() {
            if ch == '\n' {
                break;
            }
            self.scanner.next();
        }
        self.push_newline(self.scanner.location());
    }

    fn punctuation(&mut self, ch: char, at: Location) -> Result<()> {
        let kind = match ch {
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '=' => TokenKind::Equals,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            other => return Err(Error::invalid_token(at, &other.to_string())),
        };
        match kind {
            TokenKind::LeftBrace | TokenKind::LeftBracket => self.nesting.push(kind),
            TokenKind::RightBrace | TokenKind::RightBracket => {
                self.nesting.pop();
            }
            _ => {}
        }
        self.tokens.push(Token::new(kind, ch.to_string(), at));
        Ok(())
    }

    fn word(&mut self, primitive: Primitive, at: Location) -> Result<()> {
        let text = self.scanner.token_text();
        if self.in_value_position() {
            return self.value(text, at);
        }

        let kind = match primitive {
            Primitive::Ident => match self.scanner.peek_non_blank() {
                Some('=' | ':' | '{') => TokenKind::Key,
                _ => TokenKind::Identifier,
            },
            Primitive::Float => TokenKind::Float,
            _ => TokenKind::Integer,
        };
        self.tokens.push(Token::new(kind, text, at));
        Ok(())
    }

    /// Concatenates an unquoted value starting with `first`, then classifies it.
    fn value(&mut self, first: &str, at: Location) -> Result<()> {
        let in_array = self.in_array();
        let mut run = String::from(first);
        let mut last_word: Option<(Mark, usize)> = None;

        while let Some(ch) = self.scanner.peek() {
            if ch == '\n' || is_forbidden(ch) || self.scanner.rest().starts_with("//") {
                break;
            }
            if !ch.is_whitespace() && run.ends_with(char::is_whitespace) {
                last_word = Some((self.scanner.mark(), run.len()));
            }
            self.scanner.next();
            run.push(ch);
        }

        // `a = 1 b = 2` on one line: the trailing word belongs to the next statement.
        if !in_array && matches!(self.scanner.peek(), Some('=' | ':' | '{')) {
            if let Some((mark, offset)) = last_word {
                let word = run[offset..].trim_end();
                if word.chars().enumerate().all(|(i, ch)| is_ident_rune(ch, i)) {
                    tracing::trace!(%at, key = word, "value run ends at a key");
                    run.truncate(offset);
                    self.scanner.reset(mark);
                }
            }
        }

        let text = run.trim_end();
        if in_array && text.contains(char::is_whitespace) {
            for (offset, element) in array_elements(text) {
                let element_at = Location::new(at.line, at.column + offset);
                self.tokens.push(classify(element, element_at)?);
            }
            return Ok(());
        }

        self.tokens.push(classify(text, at)?);
        Ok(())
    }
}

/// Splits an array run on whitespace, yielding each element with its column offset.
///
/// An integer followed by a unit word stays one element, so `[1 s 2 s]` holds
/// two durations.
fn array_elements(text: &str) -> Vec<(usize, &str)> {
    let mut words: Vec<(usize, usize, usize)> = Vec::new();
    let mut start: Option<(usize, usize)> = None;
    for (column, (index, ch)) in text.char_indices().enumerate() {
        if ch.is_whitespace() {
            if let Some((offset, begin)) = start.take() {
                words.push((offset, begin, index));
            }
        } else if start.is_none() {
            start = Some((column, index));
        }
    }
    if let Some((offset, begin)) = start {
        words.push((offset, begin, text.len()));
    }

    let mut elements = Vec::with_capacity(words.len());
    let mut rest = words.into_iter().peekable();
    while let Some((offset, begin, end)) = rest.next() {
        let unit_end = rest
            .peek()
            .map(|&(_, _, next_end)| next_end)
            .filter(|&next_end| {
                text[begin..end].parse::<i64>().is_ok() && is_unit_literal(&text[begin..next_end])
            });
        let end = match unit_end {
            Some(next_end) => {
                rest.next();
                next_end
            }
            None => end,
        };
        elements.push((offset, &text[begin..end]));
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    fn values(input: &str) -> Vec<String> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .filter(|token| token.kind != TokenKind::NewLine)
            .map(|token| token.value)
            .collect()
    }

    #[test]
    fn test_key_value_pair() {
        assert_eq!(
            kinds("name = axlrate"),
            vec![TokenKind::Key, TokenKind::Equals, TokenKind::Text]
        );
        assert_eq!(
            kinds("port: 8080"),
            vec![TokenKind::Key, TokenKind::Colon, TokenKind::Integer]
        );
    }

    #[test]
    fn test_unquoted_concatenation_trims_trailing_space() {
        assert_eq!(values("name = axlrate imdg   "), vec!["name", "=", "axlrate imdg"]);
    }

    #[test]
    fn test_comment_terminates_value() {
        assert_eq!(values("x = 10 # trailing comment"), values("x = 10"));
        assert_eq!(values("x = 10 // note"), vec!["x", "=", "10"]);
    }

    #[test]
    fn test_comment_lines_collapse_newlines() {
        assert_eq!(
            kinds("a = 1\n# comment\n// another\nb = 2"),
            vec![
                TokenKind::Key,
                TokenKind::Equals,
                TokenKind::Integer,
                TokenKind::NewLine,
                TokenKind::Key,
                TokenKind::Equals,
                TokenKind::Integer,
            ]
        );
    }

    #[test]
    fn test_assignment_before_brace_is_elided() {
        assert_eq!(
            kinds("a={\nb = 1\n}"),
            vec![
                TokenKind::Key,
                TokenKind::LeftBrace,
                TokenKind::NewLine,
                TokenKind::Key,
                TokenKind::Equals,
                TokenKind::Integer,
                TokenKind::NewLine,
                TokenKind::RightBrace,
            ]
        );
        assert_eq!(kinds("a = {}")[1], TokenKind::Equals);
    }

    #[test]
    fn test_identifier_without_assignment_is_not_a_key() {
        assert_eq!(kinds("orphan\n"), vec![TokenKind::Identifier, TokenKind::NewLine]);
        assert_eq!(kinds("block {}")[0], TokenKind::Key);
    }

    #[test]
    fn test_value_classification() {
        let cases = [
            ("flag = true", TokenKind::Boolean, "true"),
            ("ratio = 0.75", TokenKind::Float, "0.75"),
            ("offset = -12", TokenKind::Integer, "-12"),
            ("wait = 10 seconds", TokenKind::Duration, "10000000000"),
            ("wait = 250ms", TokenKind::Duration, "250000000"),
            ("wait = 2 w", TokenKind::Duration, "1209600000000000"),
            ("limit = 5 GB", TokenKind::Size, "5368709120"),
            ("limit = 512kb", TokenKind::Size, "524288"),
            ("host = 1.2.3.4", TokenKind::Text, "1.2.3.4"),
            ("path = /var/log/app", TokenKind::Text, "/var/log/app"),
        ];
        for (input, kind, value) in cases {
            let tokens = tokenize(input).unwrap();
            assert_eq!(tokens[2].kind, kind, "{}", input);
            assert_eq!(tokens[2].value, value, "{}", input);
        }
    }

    #[test]
    fn test_negative_units_are_rejected() {
        assert!(matches!(
            tokenize("t = -5 seconds"),
            Err(Error::InvalidDuration { line: 1, col: 5, .. })
        ));
        assert!(matches!(
            tokenize("s = -1 MB"),
            Err(Error::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_overflowing_units_are_rejected() {
        assert!(matches!(
            tokenize("t = 99999999999 weeks"),
            Err(Error::InvalidDuration { .. })
        ));
        assert!(matches!(
            tokenize("s = 99999999999 GB"),
            Err(Error::InvalidSize { line: 1, col: 5, .. })
        ));
        assert!(matches!(
            tokenize("s = [1 kb, 99999999999 GB]"),
            Err(Error::InvalidSize { line: 1, col: 12, .. })
        ));
    }

    #[test]
    fn test_quoted_strings_skip_forbidden_check() {
        let tokens = tokenize(r#"motto = "a$b{c}""#).unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Text);
        assert_eq!(tokens[2].value, "a$b{c}");
    }

    #[test]
    fn test_multiline_string() {
        let tokens = tokenize("x = \"\"\"\n\tline1\n\tline2\n\t\"\"\"\n").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Text);
        assert_eq!(tokens[2].value, "\n\tline1\n\tline2\n\t");
    }

    #[test]
    fn test_unrecognized_symbol() {
        let result = tokenize("\n\t{\n\t\t*\n\t\tname = \"axlrate\"\n\t}\n");
        assert_eq!(
            result,
            Err(Error::InvalidToken {
                line: 3,
                col: 3,
                token: "*".to_string()
            })
        );
    }

    #[test]
    fn test_single_line_statements() {
        assert_eq!(
            values("Port = 10080 Timeout = 10 seconds"),
            vec!["Port", "=", "10080", "Timeout", "=", "10000000000"]
        );
        assert_eq!(kinds("Port = 10080 Timeout = 1s")[3], TokenKind::Key);
    }

    #[test]
    fn test_array_elements() {
        assert_eq!(values("X = [1 2 3]"), vec!["X", "=", "[", "1", "2", "3", "]"]);
        assert_eq!(
            values("X = [1,2, 3]"),
            vec!["X", "=", "[", "1", ",", "2", ",", "3", "]"]
        );
        assert_eq!(
            values("X = [10 seconds, 2 MB]"),
            vec!["X", "=", "[", "10000000000", ",", "2097152", "]"]
        );
    }

    #[test]
    fn test_unit_words_group_with_their_number() {
        assert_eq!(
            kinds("X = [1 s 2 s]"),
            vec![
                TokenKind::Key,
                TokenKind::Equals,
                TokenKind::LeftBracket,
                TokenKind::Duration,
                TokenKind::Duration,
                TokenKind::RightBracket,
            ]
        );
        assert_eq!(
            values("X = [1 s 2 s]"),
            vec!["X", "=", "[", "1000000000", "2000000000", "]"]
        );
        assert_eq!(values("X = [5b 10b]"), vec!["X", "=", "[", "5", "10", "]"]);
        assert_eq!(values("X = [1 2 MB]"), vec!["X", "=", "[", "1", "2097152", "]"]);

        let tokens = tokenize("X = [7 a 3 kb]").unwrap();
        let located: Vec<_> = tokens[3..6]
            .iter()
            .map(|t| (t.kind, t.location.column))
            .collect();
        assert_eq!(
            located,
            vec![(TokenKind::Integer, 6), (TokenKind::Text, 8), (TokenKind::Size, 10)]
        );
    }

    #[test]
    fn test_split_element_locations() {
        let tokens = tokenize("X = [a  bb c]").unwrap();
        let columns: Vec<_> = tokens[3..6].iter().map(|t| t.location.column).collect();
        assert_eq!(columns, vec![6, 9, 12]);
    }

    #[test]
    fn test_unit_lookup() {
        assert_eq!(duration_nanos("3 minutes"), Some(Some(180 * SECOND)));
        assert_eq!(duration_nanos("3 fortnights"), None);
        assert_eq!(duration_nanos("-3 h"), Some(None));
        assert_eq!(size_bytes("2 megabytes"), Some(Some(2 * MIB)));
        assert_eq!(size_bytes("2"), None);
    }
}
