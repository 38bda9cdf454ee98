use thiserror::Error;

/// Errors that can occur when parsing an expression.
///
/// Positions are byte offsets into the source text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character `{ch}` at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number `{text}` at {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown identifier `{name}` at {pos}: the only variable is `x`")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("unknown function `{name}` at {pos}: expected one of {}", crate::Func::names().join(", "))]
    UnknownFunction { name: String, pos: usize },

    #[error("unexpected {found} at {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected trailing input at {pos}")]
    TrailingInput { pos: usize },

    #[error("expression is nested too deeply at {pos}")]
    TooDeep { pos: usize },
}
