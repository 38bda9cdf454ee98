//! Sandboxed arithmetic expressions of one variable.
//!
//! [`Expression::parse`] turns text such as `x^3 - 2*x - 5` into an AST that
//! can be evaluated at any real `x`. Parsed expressions implement
//! [`bisector_core::Function`], so they can be handed straight to a solver.
//!
//! # Grammar
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary (('^' | '**') unary)?
//! primary := number | 'x' | 'pi' | 'e' | func '(' expr ')' | '(' expr ')'
//! ```
//!
//! Power is right-associative and binds tighter than a leading minus, so
//! `-x^2` is `-(x^2)` and `2^3^2` is `2^9`.
//!
//! Only the functions listed by [`Func`] are callable. Nothing else in the
//! input can reach the host: there are no assignments, no attribute access, and
//! no other variables.
//!
//! Evaluation never fails. Domain errors follow IEEE 754, e.g. `ln(-1)` is
//! `NaN` and `1/0` is `inf`.

mod error;
mod expression;
mod lexer;
mod node;
mod parser;

pub use error::ParseError;
pub use expression::Expression;
pub use node::Func;
