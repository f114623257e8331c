//! Unknown-term elision.
//!
//! A query token absent from the vocabulary can never match an indexed
//! document. Rather than failing the whole query, the rewriter resolves it:
//! the query collapses to a sentinel where the unknown term decides the
//! outcome on its own, or the unknown clause is excised together with its
//! one adjacent joining operator and the remainder evaluates normally.
//! Shapes outside this policy are rejected as syntax errors instead of
//! guessing a simplification.

use log::warn;

use crate::error::{CallunaError, Result};
use crate::query::lexer::QueryToken;

/// A query after unknown-term elision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewrittenQuery {
    /// The query cannot match any document.
    NoMatch,
    /// The query matches every document.
    MatchAll,
    /// A token sequence ready for parsing.
    Expr(Vec<QueryToken>),
}

/// Rewrite outcome: the query plus any term-not-found notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// The rewritten query or sentinel.
    pub query: RewrittenQuery,
    /// Unknown terms that were elided or resolved to a sentinel.
    pub warnings: Vec<String>,
}

impl Rewritten {
    fn clean(query: RewrittenQuery) -> Self {
        Rewritten {
            query,
            warnings: Vec::new(),
        }
    }
}

/// Apply the unknown-term elision policy.
///
/// Over the position of the unknown token:
///
/// 1. A single unknown token matches nothing.
/// 2. `NOT <unknown>` alone matches everything: negating a term absent from
///    every document covers the whole corpus.
/// 3. `NOT <unknown>` joined to other clauses is excised together with its
///    one adjacent joining operator; the remaining tokens evaluate as a
///    query of their own.
/// 4. `<unknown>` joined by AND matches nothing.
/// 5. `<unknown>` joined by OR is excised together with the joining OR.
/// 6. Anything else — several unknown terms, an unknown adjacent only to
///    parentheses, `NOT <unknown>` in a three-token query — is outside the
///    policy and fails with a syntax error.
///
/// The operator following the unknown is considered before the operator
/// preceding it. Note that rule 3 deliberately stops short of full boolean
/// algebra: `(NOT <unknown>) OR x` simplifies to `x`, not to match-all.
pub fn rewrite(tokens: Vec<QueryToken>) -> Result<Rewritten> {
    let mut unknowns = tokens
        .iter()
        .enumerate()
        .filter_map(|(position, token)| match token {
            QueryToken::Unknown(term) => Some((position, term.clone())),
            _ => None,
        });

    let Some((idx, term)) = unknowns.next() else {
        return Ok(Rewritten::clean(RewrittenQuery::Expr(tokens)));
    };
    if unknowns.next().is_some() {
        return Err(CallunaError::syntax(
            "query contains more than one unknown term",
        ));
    }

    warn!("term not found: {term}");
    let warnings = vec![format!("term not found: {term}")];
    let resolve = |query: RewrittenQuery| Ok(Rewritten { query, warnings });

    // Rule 1: the whole query is one unknown token.
    if tokens.len() == 1 {
        return resolve(RewrittenQuery::NoMatch);
    }

    // Rules 2 and 3: the unknown is negated.
    if idx > 0 && tokens[idx - 1] == QueryToken::Not {
        if tokens.len() == 2 {
            return resolve(RewrittenQuery::MatchAll);
        }
        if tokens.len() > 3 {
            if idx == 1 && is_joining(&tokens[idx + 1]) {
                return resolve(RewrittenQuery::Expr(tokens[idx + 2..].to_vec()));
            }
            if idx > 2 && is_joining(&tokens[idx - 2]) {
                let mut rest = tokens[..idx - 2].to_vec();
                rest.extend_from_slice(&tokens[idx + 1..]);
                return resolve(RewrittenQuery::Expr(rest));
            }
        }
        return Err(CallunaError::syntax(format!(
            "cannot elide 'NOT {term}' at this position"
        )));
    }

    // Rules 4 and 5: the unknown stands on its own.
    if tokens.len() > 2 {
        if idx < tokens.len() - 1 {
            match tokens[idx + 1] {
                QueryToken::And => return resolve(RewrittenQuery::NoMatch),
                QueryToken::Or => {
                    let mut rest = tokens[..idx].to_vec();
                    rest.extend_from_slice(&tokens[idx + 2..]);
                    return resolve(RewrittenQuery::Expr(rest));
                }
                _ => {}
            }
        }
        if idx > 1 {
            match tokens[idx - 1] {
                QueryToken::And => return resolve(RewrittenQuery::NoMatch),
                QueryToken::Or => {
                    let mut rest = tokens[..idx - 1].to_vec();
                    rest.extend_from_slice(&tokens[idx + 1..]);
                    return resolve(RewrittenQuery::Expr(rest));
                }
                _ => {}
            }
        }
    }

    Err(CallunaError::syntax(format!(
        "unknown term '{term}' cannot be elided from this query"
    )))
}

fn is_joining(token: &QueryToken) -> bool {
    matches!(token, QueryToken::And | QueryToken::Or)
}
