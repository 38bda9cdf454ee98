use std::f64::consts::{E, PI};

use crate::{
    Func, ParseError,
    lexer::{Token, TokenKind},
    node::{BinOp, Node},
};

/// Maximum depth of the expression tree.
///
/// Parentheses, calls, unary operators, and every folded binary operator
/// each add a level, so evaluating or dropping a parsed tree never recurses
/// deeper than this.
const MAX_DEPTH: usize = 256;

/// Parses a token stream into an expression tree.
///
/// # Errors
///
/// Returns an error if the tokens do not form a complete expression.
pub(crate) fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let node = parser.expression()?;

    match parser.peek() {
        None => Ok(node),
        Some(token) => Err(ParseError::TrailingInput { pos: token.pos }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<&'a Token, ParseError> {
        let token = self.tokens.get(self.pos).ok_or(ParseError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    /// Consumes the next token if it matches `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|token| token.kind == *kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        let token = self.next()?;
        if token.kind == *kind {
            Ok(())
        } else {
            Err(unexpected(token))
        }
    }

    fn descend(&mut self, pos: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { pos });
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn expression(&mut self) -> Result<Node, ParseError> {
        self.chain(Self::term, |kind| match kind {
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Minus => Some(BinOp::Sub),
            _ => None,
        })
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        self.chain(Self::unary, |kind| match kind {
            TokenKind::Star => Some(BinOp::Mul),
            TokenKind::Slash => Some(BinOp::Div),
            _ => None,
        })
    }

    /// Folds a left-associative chain `operand (op operand)*`.
    ///
    /// Each fold deepens the tree by one level on the left.
    fn chain(
        &mut self,
        operand: fn(&mut Self) -> Result<Node, ParseError>,
        op_for: fn(&TokenKind) -> Option<BinOp>,
    ) -> Result<Node, ParseError> {
        let mut node = operand(self)?;
        let mut folded = 0;
        while let Some(token) = self.peek() {
            let Some(op) = op_for(&token.kind) else {
                break;
            };
            self.pos += 1;
            self.descend(token.pos)?;
            folded += 1;
            node = Node::binary(op, node, operand(self)?);
        }
        self.depth -= folded;
        Ok(node)
    }

    fn unary(&mut self) -> Result<Node, ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::UnexpectedEnd);
        };
        let pos = token.pos;

        let negate = match token.kind {
            TokenKind::Minus => true,
            TokenKind::Plus => false,
            _ => return self.power(),
        };
        self.pos += 1;

        self.descend(pos)?;
        let operand = self.unary()?;
        self.ascend();

        Ok(if negate {
            Node::Neg(Box::new(operand))
        } else {
            operand
        })
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;
        if !self.eat(&TokenKind::Caret) {
            return Ok(base);
        }

        let pos = self.tokens[self.pos - 1].pos;
        self.descend(pos)?;
        let exponent = self.unary()?;
        self.ascend();

        Ok(Node::binary(BinOp::Pow, base, exponent))
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let token = self.next()?;
        let pos = token.pos;

        match &token.kind {
            TokenKind::Number(value) => Ok(Node::Const(*value)),
            TokenKind::Ident(name) => {
                let name = name.clone();
                if self.eat(&TokenKind::LParen) {
                    let func = Func::from_name(&name)
                        .ok_or(ParseError::UnknownFunction { name, pos })?;
                    let arg = self.group(pos)?;
                    Ok(Node::Call(func, Box::new(arg)))
                } else {
                    constant(&name).ok_or(ParseError::UnknownIdentifier { name, pos })
                }
            }
            TokenKind::LParen => self.group(pos),
            _ => Err(unexpected(token)),
        }
    }

    /// Parses the rest of a parenthesized group after its `(`.
    fn group(&mut self, pos: usize) -> Result<Node, ParseError> {
        self.descend(pos)?;
        let node = self.expression()?;
        self.expect(&TokenKind::RParen)?;
        self.ascend();
        Ok(node)
    }
}

fn constant(name: &str) -> Option<Node> {
    match name {
        "x" => Some(Node::Var),
        "pi" => Some(Node::Const(PI)),
        "e" => Some(Node::Const(E)),
        _ => None,
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.to_string(),
        pos: token.pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lexer::tokenize;

    fn tree(source: &str) -> Result<Node, ParseError> {
        parse(&tokenize(source).expect("should tokenize"))
    }

    fn pow(lhs: Node, rhs: Node) -> Node {
        Node::binary(BinOp::Pow, lhs, rhs)
    }

    #[test]
    fn power_binds_tighter_than_negation() {
        assert_eq!(
            tree("-x^2"),
            Ok(Node::Neg(Box::new(pow(Node::Var, Node::Const(2.0)))))
        );
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(
            tree("2^3^2"),
            Ok(pow(
                Node::Const(2.0),
                pow(Node::Const(3.0), Node::Const(2.0))
            ))
        );
    }

    #[test]
    fn exponent_may_be_negated() {
        assert_eq!(
            tree("x^-1"),
            Ok(pow(Node::Var, Node::Neg(Box::new(Node::Const(1.0)))))
        );
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(
            tree("x - 1 - 2"),
            Ok(Node::binary(
                BinOp::Sub,
                Node::binary(BinOp::Sub, Node::Var, Node::Const(1.0)),
                Node::Const(2.0),
            ))
        );
    }

    #[test]
    fn resolves_constants_and_calls() {
        assert_eq!(
            tree("cos(pi)"),
            Ok(Node::Call(Func::Cos, Box::new(Node::Const(PI))))
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(tree(""), Err(ParseError::Empty));
        assert_eq!(tree("   "), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            tree("y + 1"),
            Err(ParseError::UnknownIdentifier {
                name: "y".into(),
                pos: 0
            })
        );
        assert_eq!(
            tree("2 * __import__(x)"),
            Err(ParseError::UnknownFunction {
                name: "__import__".into(),
                pos: 4
            })
        );
    }

    #[test]
    fn rejects_incomplete_input() {
        assert_eq!(tree("x +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(tree("sin(x"), Err(ParseError::UnexpectedEnd));
        assert_eq!(
            tree("x * )"),
            Err(ParseError::UnexpectedToken {
                found: "`)`".into(),
                pos: 4
            })
        );
    }

    #[test]
    fn rejects_trailing_input() {
        assert_eq!(tree("x 2"), Err(ParseError::TrailingInput { pos: 2 }));
        assert_eq!(tree("(x))"), Err(ParseError::TrailingInput { pos: 3 }));
    }

    #[test]
    fn rejects_deep_nesting() {
        let source = format!("{}x{}", "(".repeat(500), ")".repeat(500));
        assert!(matches!(tree(&source), Err(ParseError::TooDeep { .. })));

        let source = format!("{}x", "-".repeat(500));
        assert!(matches!(tree(&source), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn rejects_long_flat_chains() {
        let source = format!("{}x", "x+".repeat(100_000));
        // The 257th `+` sits at byte 2 * 257 - 1.
        assert_eq!(tree(&source), Err(ParseError::TooDeep { pos: 513 }));

        let source = format!("{}x", "x*".repeat(100_000));
        assert!(matches!(tree(&source), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn accepts_chains_within_the_limit() {
        let source = format!("{}x", "x + ".repeat(200));
        assert!(tree(&source).is_ok());
    }

    #[test]
    fn chain_depth_is_released_after_each_group() {
        let group = format!("({}x)", "x+".repeat(200));
        let source = vec![group; 50].join("*");
        assert!(tree(&source).is_ok());
    }

    #[test]
    fn accepts_moderate_nesting() {
        let source = format!("{}x{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(tree(&source), Ok(Node::Var));
    }
}
