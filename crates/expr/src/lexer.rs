use std::fmt;

use crate::ParseError;

/// A lexical token and its byte offset in the source.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) pos: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    /// Either `^` or `**`.
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number `{value}`"),
            Self::Ident(name) => write!(f, "identifier `{name}`"),
            Self::Plus => write!(f, "`+`"),
            Self::Minus => write!(f, "`-`"),
            Self::Star => write!(f, "`*`"),
            Self::Slash => write!(f, "`/`"),
            Self::Caret => write!(f, "`^`"),
            Self::LParen => write!(f, "`(`"),
            Self::RParen => write!(f, "`)`"),
        }
    }
}

/// Splits source text into tokens.
///
/// # Errors
///
/// Returns an error on characters outside the grammar or malformed numbers.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        let start = pos;

        let kind = match byte {
            b' ' | b'\t' | b'\n' | b'\r' => {
                pos += 1;
                continue;
            }
            b'0'..=b'9' | b'.' => {
                pos = scan_number(bytes, pos);
                let text = &source[start..pos];
                let value = text.parse().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_owned(),
                    pos: start,
                })?;
                TokenKind::Number(value)
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                TokenKind::Ident(source[start..pos].to_owned())
            }
            b'+' => single(&mut pos, TokenKind::Plus),
            b'-' => single(&mut pos, TokenKind::Minus),
            b'/' => single(&mut pos, TokenKind::Slash),
            b'^' => single(&mut pos, TokenKind::Caret),
            b'(' => single(&mut pos, TokenKind::LParen),
            b')' => single(&mut pos, TokenKind::RParen),
            b'*' => {
                if bytes.get(pos + 1) == Some(&b'*') {
                    pos += 2;
                    TokenKind::Caret
                } else {
                    single(&mut pos, TokenKind::Star)
                }
            }
            _ => {
                let ch = source[start..].chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnexpectedChar { ch, pos: start });
            }
        };

        tokens.push(Token { kind, pos: start });
    }

    Ok(tokens)
}

fn single(pos: &mut usize, kind: TokenKind) -> TokenKind {
    *pos += 1;
    kind
}

/// Returns the end of the numeric literal starting at `pos`.
///
/// An exponent is only consumed when digits follow it, so `2e` ends at `2`.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
        pos += 1;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            pos = exp;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("should tokenize")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn tokenizes_operators_and_identifiers() {
        assert_eq!(
            kinds("sin(x) * 2 - y_1"),
            [
                TokenKind::Ident("sin".into()),
                TokenKind::LParen,
                TokenKind::Ident("x".into()),
                TokenKind::RParen,
                TokenKind::Star,
                TokenKind::Number(2.0),
                TokenKind::Minus,
                TokenKind::Ident("y_1".into()),
            ]
        );
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            kinds("x**3^2"),
            [
                TokenKind::Ident("x".into()),
                TokenKind::Caret,
                TokenKind::Number(3.0),
                TokenKind::Caret,
                TokenKind::Number(2.0),
            ]
        );
    }

    #[test]
    fn reads_number_forms() {
        assert_eq!(kinds("1.5"), [TokenKind::Number(1.5)]);
        assert_eq!(kinds(".25"), [TokenKind::Number(0.25)]);
        assert_eq!(kinds("1e-6"), [TokenKind::Number(1e-6)]);
        assert_eq!(kinds("2E+3"), [TokenKind::Number(2000.0)]);
    }

    #[test]
    fn dangling_exponent_is_left_for_the_parser() {
        assert_eq!(
            kinds("2e"),
            [TokenKind::Number(2.0), TokenKind::Ident("e".into())]
        );
    }

    #[test]
    fn records_byte_positions() {
        let tokens = tokenize("  x +  1").expect("should tokenize");
        let positions: Vec<_> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, [2, 4, 7]);
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert_eq!(
            tokenize("1.2.3"),
            Err(ParseError::InvalidNumber {
                text: "1.2.3".into(),
                pos: 0
            })
        );
        assert_eq!(
            tokenize("x + ."),
            Err(ParseError::InvalidNumber {
                text: ".".into(),
                pos: 4
            })
        );
    }

    #[test]
    fn rejects_foreign_characters() {
        assert_eq!(
            tokenize("x; 1"),
            Err(ParseError::UnexpectedChar { ch: ';', pos: 1 })
        );
        assert_eq!(
            tokenize("2·x"),
            Err(ParseError::UnexpectedChar { ch: '·', pos: 1 })
        );
    }
}
