use crate::error::{GraphError, GraphResult};

use super::token::{FunctionKind, SpannedToken, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// Parsed expression tree over a single free variable.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Number(f64),
    Variable,
    Neg(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(FunctionKind, Box<Expr>),
}

impl Expr {
    /// Evaluates the tree at `x`.
    ///
    /// Never fails: domain violations (division by zero, log of a
    /// non-positive value, sqrt of a negative) and overflow surface as
    /// non-finite IEEE values that callers filter with `is_finite`.
    pub(crate) fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Variable => x,
            Self::Neg(inner) => -inner.eval(x),
            Self::Binary(op, lhs, rhs) => op.apply(lhs.eval(x), rhs.eval(x)),
            Self::Call(function, argument) => function.apply(argument.eval(x)),
        }
    }
}

/// Recursive-descent parser over the token stream.
///
/// Grammar, loosest binding first:
///   expression := term (('+' | '-') term)*
///   term       := unary (('*' | '/') unary)*
///   unary      := '-' unary | power
///   power      := atom ('^' unary)?        (right-associative)
///   atom       := number | 'x' | function '(' expression ')'
///              |  '(' expression ')'
pub(crate) struct Parser<'a> {
    tokens: &'a [SpannedToken],
    cursor: usize,
    input_len: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [SpannedToken], input_len: usize) -> Self {
        Self {
            tokens,
            cursor: 0,
            input_len,
        }
    }

    pub(crate) fn parse(mut self) -> GraphResult<Expr> {
        if self.tokens.is_empty() {
            return Err(GraphError::Parse {
                position: 0,
                message: "empty expression".to_owned(),
            });
        }

        let expr = self.expression()?;
        if let Some(token) = self.peek() {
            return Err(GraphError::Parse {
                position: token.position,
                message: "unexpected trailing input".to_owned(),
            });
        }
        Ok(expr)
    }

    fn expression(&mut self) -> GraphResult<Expr> {
        let mut lhs = self.term()?;
        while let Some(op) = self.match_binary(&[
            (TokenKind::Plus, BinaryOp::Add),
            (TokenKind::Minus, BinaryOp::Sub),
        ]) {
            let rhs = self.term()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn term(&mut self) -> GraphResult<Expr> {
        let mut lhs = self.unary()?;
        while let Some(op) = self.match_binary(&[
            (TokenKind::Star, BinaryOp::Mul),
            (TokenKind::Slash, BinaryOp::Div),
        ]) {
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> GraphResult<Expr> {
        if self.consume_if(TokenKind::Minus) {
            let inner = self.unary()?;
            return Ok(Expr::Neg(Box::new(inner)));
        }
        self.power()
    }

    fn power(&mut self) -> GraphResult<Expr> {
        let base = self.atom()?;
        if self.consume_if(TokenKind::Caret) {
            // Right-associative: the exponent re-enters at unary level so
            // both `2^3^2` and `2^-3` parse.
            let exponent = self.unary()?;
            return Ok(Expr::Binary(
                BinaryOp::Pow,
                Box::new(base),
                Box::new(exponent),
            ));
        }
        Ok(base)
    }

    fn atom(&mut self) -> GraphResult<Expr> {
        let Some(token) = self.peek().copied() else {
            return Err(GraphError::Parse {
                position: self.input_len,
                message: "unexpected end of expression".to_owned(),
            });
        };

        match token.kind {
            TokenKind::Number(value) => {
                self.cursor += 1;
                Ok(Expr::Number(value))
            }
            TokenKind::Variable => {
                self.cursor += 1;
                Ok(Expr::Variable)
            }
            TokenKind::Function(function) => {
                self.cursor += 1;
                self.expect(TokenKind::LParen, function.name())?;
                let argument = self.expression()?;
                self.expect_closing_paren()?;
                Ok(Expr::Call(function, Box::new(argument)))
            }
            TokenKind::LParen => {
                self.cursor += 1;
                let inner = self.expression()?;
                self.expect_closing_paren()?;
                Ok(inner)
            }
            _ => Err(GraphError::Parse {
                position: token.position,
                message: "expected a value".to_owned(),
            }),
        }
    }

    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.cursor)
    }

    fn consume_if(&mut self, kind: TokenKind) -> bool {
        if self.peek().is_some_and(|token| token.kind == kind) {
            self.cursor += 1;
            return true;
        }
        false
    }

    fn match_binary(&mut self, table: &[(TokenKind, BinaryOp)]) -> Option<BinaryOp> {
        let token = self.peek()?;
        for (kind, op) in table {
            if token.kind == *kind {
                self.cursor += 1;
                return Some(*op);
            }
        }
        None
    }

    fn expect(&mut self, kind: TokenKind, function_name: &str) -> GraphResult<()> {
        if self.consume_if(kind) {
            return Ok(());
        }
        let position = self.peek().map_or(self.input_len, |token| token.position);
        Err(GraphError::Parse {
            position,
            message: format!("`{function_name}` requires a parenthesized argument"),
        })
    }

    fn expect_closing_paren(&mut self) -> GraphResult<()> {
        if self.consume_if(TokenKind::RParen) {
            return Ok(());
        }
        let position = self.peek().map_or(self.input_len, |token| token.position);
        Err(GraphError::Parse {
            position,
            message: "unbalanced parentheses".to_owned(),
        })
    }
}
