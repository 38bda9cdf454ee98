/// Functions an expression is allowed to call.
///
/// This list is the whole of the callable surface; any other name in call
/// position is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    /// Natural logarithm, also spelled `log`.
    Ln,
    Log10,
    Log2,
    Sqrt,
    Abs,
}

impl Func {
    const ALL: [Func; 15] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Asin,
        Func::Acos,
        Func::Atan,
        Func::Sinh,
        Func::Cosh,
        Func::Tanh,
        Func::Exp,
        Func::Ln,
        Func::Log10,
        Func::Log2,
        Func::Sqrt,
        Func::Abs,
    ];

    /// Looks up a function by the name used in expressions.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "log" {
            return Some(Func::Ln);
        }
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Returns the name used in expressions.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log10 => "log10",
            Func::Log2 => "log2",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }

    /// Returns every accepted function name, including the `log` alias.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<_> = Self::ALL.into_iter().map(Func::name).collect();
        names.push("log");
        names
    }

    /// Applies the function to a value.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Func::Sin => value.sin(),
            Func::Cos => value.cos(),
            Func::Tan => value.tan(),
            Func::Asin => value.asin(),
            Func::Acos => value.acos(),
            Func::Atan => value.atan(),
            Func::Sinh => value.sinh(),
            Func::Cosh => value.cosh(),
            Func::Tanh => value.tanh(),
            Func::Exp => value.exp(),
            Func::Ln => value.ln(),
            Func::Log10 => value.log10(),
            Func::Log2 => value.log2(),
            Func::Sqrt => value.sqrt(),
            Func::Abs => value.abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
            BinOp::Pow => lhs.powf(rhs),
        }
    }
}

/// A node of a parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Const(f64),
    Var,
    Neg(Box<Node>),
    Binary(BinOp, Box<Node>, Box<Node>),
    Call(Func, Box<Node>),
}

impl Node {
    pub(crate) fn binary(op: BinOp, lhs: Node, rhs: Node) -> Self {
        Node::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Evaluates the tree with the variable bound to `x`.
    pub(crate) fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Const(value) => *value,
            Node::Var => x,
            Node::Neg(inner) => -inner.eval(x),
            Node::Binary(op, lhs, rhs) => op.apply(lhs.eval(x), rhs.eval(x)),
            Node::Call(func, arg) => func.apply(arg.eval(x)),
        }
    }
}
