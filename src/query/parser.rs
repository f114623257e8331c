//! Recursive-descent parser for rewritten boolean queries.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! or_expr  = and_expr { OR and_expr }
//! and_expr = not_expr { AND not_expr }
//! not_expr = NOT not_expr | primary
//! primary  = term | "(" or_expr ")"
//! ```
//!
//! NOT binds tighter than AND, AND tighter than OR; operators of equal
//! precedence associate left-to-right; parentheses override. The output is
//! a typed expression tree walked by the evaluator — rewritten queries are
//! never executed as source text.

use crate::error::{CallunaError, Result};
use crate::index::inverted::TermId;
use crate::query::lexer::QueryToken;

/// A typed boolean expression over posting-set references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpr {
    /// A term's posting set.
    Term(TermId),
    /// Set complement against the universe.
    Not(Box<QueryExpr>),
    /// Set intersection.
    And(Box<QueryExpr>, Box<QueryExpr>),
    /// Set union.
    Or(Box<QueryExpr>, Box<QueryExpr>),
}

/// Parse a rewritten token sequence into an expression tree.
///
/// Nesting depth is bounded only by memory. Malformed input (unbalanced
/// parentheses, an operator missing an operand, trailing tokens) fails with
/// a descriptive syntax error.
pub fn parse(tokens: &[QueryToken]) -> Result<QueryExpr> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.or_expr()?;
    if let Some(token) = parser.peek() {
        return Err(CallunaError::syntax(format!(
            "unexpected {} after end of expression",
            describe(token)
        )));
    }
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [QueryToken],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a QueryToken> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'a QueryToken> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn or_expr(&mut self) -> Result<QueryExpr> {
        let mut lhs = self.and_expr()?;
        while matches!(self.peek(), Some(QueryToken::Or)) {
            self.bump();
            let rhs = self.and_expr()?;
            lhs = QueryExpr::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn and_expr(&mut self) -> Result<QueryExpr> {
        let mut lhs = self.not_expr()?;
        while matches!(self.peek(), Some(QueryToken::And)) {
            self.bump();
            let rhs = self.not_expr()?;
            lhs = QueryExpr::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn not_expr(&mut self) -> Result<QueryExpr> {
        if matches!(self.peek(), Some(QueryToken::Not)) {
            self.bump();
            let inner = self.not_expr()?;
            return Ok(QueryExpr::Not(Box::new(inner)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<QueryExpr> {
        match self.bump() {
            Some(QueryToken::Term(id)) => Ok(QueryExpr::Term(*id)),
            Some(QueryToken::Open) => {
                let expr = self.or_expr()?;
                match self.bump() {
                    Some(QueryToken::Close) => Ok(expr),
                    Some(token) => Err(CallunaError::syntax(format!(
                        "expected ')', found {}",
                        describe(token)
                    ))),
                    None => Err(CallunaError::syntax("unbalanced parentheses: missing ')'")),
                }
            }
            Some(token) => Err(CallunaError::syntax(format!(
                "expected a term or '(', found {}",
                describe(token)
            ))),
            None => Err(CallunaError::syntax(
                "unexpected end of query: missing operand",
            )),
        }
    }
}

fn describe(token: &QueryToken) -> &'static str {
    match token {
        QueryToken::And => "'AND'",
        QueryToken::Or => "'OR'",
        QueryToken::Not => "'NOT'",
        QueryToken::Open => "'('",
        QueryToken::Close => "')'",
        QueryToken::Term(_) => "a term",
        QueryToken::Unknown(_) => "an unknown term",
    }
}
