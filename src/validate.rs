//! Structural checks over a token sequence.
//!
//! [`validate`] runs before binding and rejects documents whose delimiters do
//! not pair up, whose blocks close in an illegal position, or whose arrays
//! appear outside a value position. Checks run in that order and the first
//! failure is returned.

use crate::error::{Error, Result};
use crate::token::{Location, Token, TokenKind};

/// Validates the structure of a token sequence.
///
/// # Examples
///
/// ```rust
/// use serde_hocon::{tokenize, validate, Error};
///
/// let tokens = tokenize("a { b = 1 }").unwrap();
/// assert!(validate(&tokens).is_ok());
///
/// let tokens = tokenize("a { b = 1 ").unwrap();
/// assert!(matches!(validate(&tokens), Err(Error::UnbalancedParentheses { .. })));
/// ```
///
/// # Errors
///
/// - [`Error::UnbalancedParentheses`] for a closer without an opener, a closer of the
///   wrong kind, or an opener left open at the end of input
/// - [`Error::InvalidToken`] for a `}` directly after a key, an assignment or a comma
/// - [`Error::InvalidArray`] for a `[` that neither follows `=` or `:` nor opens
///   an element of an enclosing array
pub fn validate(tokens: &[Token]) -> Result<()> {
    check_balanced(tokens)?;
    check_closers(tokens)?;
    check_array_openers(tokens)?;
    tracing::trace!(count = tokens.len(), "token sequence is well formed");
    Ok(())
}

fn closer_for(opener: TokenKind) -> Option<TokenKind> {
    match opener {
        TokenKind::LeftBrace => Some(TokenKind::RightBrace),
        TokenKind::LeftBracket => Some(TokenKind::RightBracket),
        _ => None,
    }
}

fn check_balanced(tokens: &[Token]) -> Result<()> {
    let mut open: Vec<(TokenKind, Location)> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LeftBrace | TokenKind::LeftBracket => {
                open.push((token.kind, token.location));
            }
            TokenKind::RightBrace | TokenKind::RightBracket => match open.pop() {
                Some((opener, _)) if closer_for(opener) == Some(token.kind) => {}
                _ => return Err(Error::unbalanced(token.location)),
            },
            _ => {}
        }
    }

    match open.pop() {
        Some((_, at)) => Err(Error::unbalanced(at)),
        None => Ok(()),
    }
}

fn may_precede_brace(kind: TokenKind) -> bool {
    kind.is_value()
        || matches!(
            kind,
            TokenKind::NewLine
                | TokenKind::RightBracket
                | TokenKind::RightBrace
                | TokenKind::LeftBrace
        )
}

fn check_closers(tokens: &[Token]) -> Result<()> {
    for pair in tokens.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.kind == TokenKind::RightBrace && !may_precede_brace(previous.kind) {
            return Err(Error::invalid_token(previous.location, &previous.value));
        }
    }
    Ok(())
}

fn check_array_openers(tokens: &[Token]) -> Result<()> {
    let mut open: Vec<TokenKind> = Vec::new();
    let mut previous: Option<TokenKind> = None;

    for token in tokens {
        match token.kind {
            TokenKind::LeftBracket => {
                let assigned = previous.is_some_and(TokenKind::is_assignment);
                // Inside an array, blanks separate elements as well as commas do.
                let nested = open.last() == Some(&TokenKind::LeftBracket)
                    && previous.is_some_and(|kind| {
                        kind.is_value()
                            || matches!(
                                kind,
                                TokenKind::LeftBracket
                                    | TokenKind::Comma
                                    | TokenKind::NewLine
                                    | TokenKind::RightBracket
                                    | TokenKind::RightBrace
                            )
                    });
                if !assigned && !nested {
                    return Err(Error::invalid_array(token.location));
                }
                open.push(token.kind);
            }
            TokenKind::LeftBrace => open.push(token.kind),
            TokenKind::RightBrace | TokenKind::RightBracket => {
                open.pop();
            }
            _ => {}
        }
        previous = Some(token.kind);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn check(input: &str) -> Result<()> {
        validate(&tokenize(input).unwrap())
    }

    #[test]
    fn test_well_formed_documents() {
        assert!(check("a = 1").is_ok());
        assert!(check("a { b { c = 1 } }").is_ok());
        assert!(check("a {}").is_ok());
        assert!(check("a {\n  list = [1, 2]\n}").is_ok());
        assert!(check("a = [[1, 2], [3]]").is_ok());
        assert!(check("a = [{ x = 1 }, { x = 2 }]").is_ok());
        assert!(check("").is_ok());
    }

    #[test]
    fn test_nested_elements_without_commas() {
        assert!(check("a = [[1] [2]]").is_ok());
        assert!(check("a = [{ x = 1 } [2]]").is_ok());
        assert!(check("a = [one [2]]").is_ok());
        assert!(matches!(
            check("a { b = 1 } [2]"),
            Err(Error::InvalidArray { line: 1, col: 13 })
        ));
    }

    #[test]
    fn test_unclosed_block_reports_opener() {
        assert_eq!(
            check("a {\n  b {\n    c = 1\n  }\n"),
            Err(Error::UnbalancedParentheses { line: 1, col: 3 })
        );
    }

    #[test]
    fn test_stray_closer() {
        assert_eq!(
            check("a = 1\n}"),
            Err(Error::UnbalancedParentheses { line: 2, col: 1 })
        );
    }

    #[test]
    fn test_mismatched_closer() {
        assert!(matches!(
            check("a = [1, 2}"),
            Err(Error::UnbalancedParentheses { line: 1, col: 10 })
        ));
    }

    #[test]
    fn test_brace_after_assignment() {
        let tokens = vec![
            Token::new(TokenKind::Key, "a", Location::new(1, 1)),
            Token::new(TokenKind::LeftBrace, "{", Location::new(1, 3)),
            Token::new(TokenKind::Key, "b", Location::new(1, 5)),
            Token::new(TokenKind::Equals, "=", Location::new(1, 7)),
            Token::new(TokenKind::RightBrace, "}", Location::new(1, 9)),
        ];
        assert_eq!(
            validate(&tokens),
            Err(Error::InvalidToken {
                line: 1,
                col: 7,
                token: "=".to_string()
            })
        );
    }

    #[test]
    fn test_array_outside_value_position() {
        let tokens = vec![
            Token::new(TokenKind::Key, "a", Location::new(1, 1)),
            Token::new(TokenKind::LeftBracket, "[", Location::new(1, 3)),
            Token::new(TokenKind::Integer, "1", Location::new(1, 4)),
            Token::new(TokenKind::RightBracket, "]", Location::new(1, 5)),
        ];
        assert_eq!(
            validate(&tokens),
            Err(Error::InvalidArray { line: 1, col: 3 })
        );
        assert!(matches!(check("[1]"), Err(Error::InvalidArray { line: 1, col: 1 })));
    }

    #[test]
    fn test_balance_is_checked_first() {
        assert!(matches!(
            check("[1\n"),
            Err(Error::UnbalancedParentheses { .. })
        ));
    }
}
