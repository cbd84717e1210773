//! Self-contained expression evaluation.
//!
//! Expression text is tokenized and parsed into an AST once, then evaluated
//! at arbitrary `x` values with plain IEEE arithmetic. Nothing here hands
//! user input to a general-purpose interpreter: the grammar is closed over
//! numeric literals, `x`, `+ - * / ^`, parentheses, unary minus, the
//! functions `sin cos tan log ln sqrt`, and the constants `pi` and `e`.

mod parser;
mod token;

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{GraphError, GraphResult};

use parser::{Expr, Parser};
use token::tokenize;

/// A parsed, reusable single-variable expression.
///
/// Parsing happens once; callers evaluate the same expression at hundreds of
/// sample points per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    text: String,
    ast: Expr,
}

impl Expression {
    /// Parses expression text into an evaluatable form.
    pub fn parse(text: &str) -> GraphResult<Self> {
        let tokens = tokenize(text)?;
        let ast = Parser::new(&tokens, text.len()).parse()?;
        Ok(Self {
            text: text.to_owned(),
            ast,
        })
    }

    /// Evaluates the expression at `x`.
    ///
    /// Numeric failure (division by zero, log/sqrt domain violations,
    /// overflow) is reported through non-finite results, never a panic or
    /// error: batch samplers must be able to step past bad points silently.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.ast.eval(x)
    }

    /// Evaluates at `x`, filtering non-finite results to `None`.
    #[must_use]
    pub fn eval_finite(&self, x: f64) -> Option<f64> {
        let value = self.eval(x);
        value.is_finite().then_some(value)
    }

    /// The exact source text this expression was parsed from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl FromStr for Expression {
    type Err = GraphError;

    fn from_str(text: &str) -> GraphResult<Self> {
        Self::parse(text)
    }
}

/// Parse-once cache keyed by exact expression text.
///
/// Only successful parses are retained; malformed text is re-reported so the
/// caller decides where the one-time surfacing happens.
#[derive(Debug, Default)]
pub struct ExpressionCache {
    entries: HashMap<String, Expression>,
}

impl ExpressionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_parse(&mut self, text: &str) -> GraphResult<&Expression> {
        if !self.entries.contains_key(text) {
            let parsed = Expression::parse(text)?;
            self.entries.insert(text.to_owned(), parsed);
        }
        Ok(&self.entries[text])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One-shot convenience: parse and evaluate in a single call.
///
/// Prefer [`Expression::parse`] plus repeated [`Expression::eval`] when the
/// same text is evaluated more than once.
pub fn evaluate(text: &str, x: f64) -> GraphResult<f64> {
    Ok(Expression::parse(text)?.eval(x))
}
