use std::{fmt, str::FromStr};

use bisector_core::Function;

use crate::{ParseError, lexer::tokenize, node::Node, parser::parse};

/// A parsed expression in the single variable `x`.
///
/// Parsing happens once; evaluation walks the stored tree and can be repeated
/// as often as needed.
///
/// # Example
///
/// ```
/// use bisector_expr::Expression;
///
/// let f = Expression::parse("x**3 - 2*x - 5").unwrap();
/// assert_eq!(f.eval(2.0), -1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    /// Parses an expression from text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is empty, contains characters or
    /// names outside the grammar, or is not a complete expression.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(source)?;
        let root = parse(&tokens)?;
        Ok(Self {
            source: source.trim().to_owned(),
            root,
        })
    }

    /// Evaluates the expression at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// Returns the trimmed source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Function for Expression {
    fn call(&self, x: f64) -> f64 {
        self.eval(x)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(source: &str, x: f64) -> f64 {
        Expression::parse(source)
            .unwrap_or_else(|err| panic!("`{source}` should parse: {err}"))
            .eval(x)
    }

    #[test]
    fn evaluates_polynomials() {
        assert_relative_eq!(eval("x**3 - 2*x - 5", 2.0), -1.0);
        assert_relative_eq!(eval("x^3 - x - 2", 1.5), -0.125);
        assert_relative_eq!(eval("x^2 + 1", -3.0), 10.0);
    }

    #[test]
    fn follows_precedence() {
        assert_relative_eq!(eval("1 + 2 * 3", 0.0), 7.0);
        assert_relative_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
        assert_relative_eq!(eval("-x^2", 3.0), -9.0);
        assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval("8 / 4 / 2", 0.0), 1.0);
        assert_relative_eq!(eval("2 * -x", 3.0), -6.0);
    }

    #[test]
    fn evaluates_functions_and_constants() {
        assert_relative_eq!(eval("cos(x) - x", 0.0), 1.0);
        assert_relative_eq!(eval("sin(pi / 2)", 0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("ln(e)", 0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("log(e^2)", 0.0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(eval("log10(1000)", 0.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(eval("exp(x) - 2", 2.0_f64.ln()), 0.0, epsilon = 1e-15);
        assert_relative_eq!(eval("sqrt(abs(x))", -16.0), 4.0);
    }

    #[test]
    fn domain_errors_are_non_finite() {
        assert!(eval("1/x", 0.0).is_infinite());
        assert!(eval("ln(x)", -1.0).is_nan());
        assert!(eval("sqrt(x)", -1.0).is_nan());
    }

    #[test]
    fn works_as_a_function() {
        let f: Expression = "x - 3".parse().expect("should parse");
        let g: &dyn Function = &f;
        assert_relative_eq!(g.call(5.0), 2.0);
    }

    #[test]
    fn keeps_trimmed_source() {
        let f = Expression::parse("  x + 1 ").expect("should parse");
        assert_eq!(f.as_str(), "x + 1");
        assert_eq!(f.to_string(), "x + 1");
    }

    #[test]
    fn reports_parse_errors() {
        let err = Expression::parse("x +* 2").expect_err("invalid");
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                found: "`*`".into(),
                pos: 3
            }
        );

        let err = Expression::parse("foo(x)").expect_err("invalid");
        assert!(err.to_string().contains("expected one of sin, cos"));
    }

    #[test]
    fn long_sums_are_rejected_not_overflowed() {
        let source = format!("{}x", "x+".repeat(100_000));
        let err = Expression::parse(&source).expect_err("too deep");
        assert!(matches!(err, ParseError::TooDeep { .. }));

        let f = Expression::parse(&format!("{}x", "x+".repeat(199))).expect("should parse");
        assert_relative_eq!(f.eval(0.5), 100.0);
    }
}
