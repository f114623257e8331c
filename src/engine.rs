//! Search engine facade.

use log::debug;
use serde::Serialize;

use crate::corpus::Article;
use crate::error::{CallunaError, Result};
use crate::index::builder::IndexBuilder;
use crate::index::inverted::{DocId, IndexStats, InvertedIndex, doc_ids};
use crate::query::rewrite::RewrittenQuery;
use crate::query::{evaluator, lexer, parser, rewrite};

/// The matching documents of one query.
///
/// The two sentinels stay distinguished from an ordinary (possibly empty)
/// result so the presentation layer can report them differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "docs", rename_all = "snake_case")]
pub enum MatchSet {
    /// The query cannot match any document.
    NoMatch,
    /// The query matches every document; carries the full universe.
    MatchAll(Vec<DocId>),
    /// The documents satisfying the query, in corpus order.
    Docs(Vec<DocId>),
}

impl MatchSet {
    /// Matching document ids regardless of sentinel kind.
    pub fn doc_ids(&self) -> &[DocId] {
        match self {
            MatchSet::NoMatch => &[],
            MatchSet::MatchAll(ids) | MatchSet::Docs(ids) => ids,
        }
    }

    /// Number of matching documents.
    pub fn len(&self) -> usize {
        self.doc_ids().len()
    }

    /// Whether no document matched.
    pub fn is_empty(&self) -> bool {
        self.doc_ids().is_empty()
    }
}

/// Result of one query: the matches plus any term-not-found notices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Matching documents.
    pub matches: MatchSet,
    /// Non-fatal notices, e.g. unknown terms that were elided.
    pub warnings: Vec<String>,
}

/// Boolean retrieval engine over a fixed corpus.
///
/// Owns the articles and the incidence structure built from them. The index
/// is read-only after construction, so [`Engine::search`] can be called
/// concurrently from multiple threads without synchronization.
#[derive(Debug)]
pub struct Engine {
    articles: Vec<Article>,
    index: InvertedIndex,
}

impl Engine {
    /// Index a corpus. Document ids follow `articles` order.
    pub fn from_articles(articles: Vec<Article>) -> Self {
        let texts: Vec<&str> = articles.iter().map(|a| a.text.as_str()).collect();
        let index = IndexBuilder::new().build(&texts);
        debug!(
            "engine ready: {} articles, {} distinct terms",
            articles.len(),
            index.term_count()
        );
        Engine { articles, index }
    }

    /// Run one boolean query end to end.
    ///
    /// Lexing, rewriting, parsing, and evaluation are pure functions of the
    /// query and the index; a failed query leaves the engine fully usable.
    pub fn search(&self, query: &str) -> Result<SearchOutcome> {
        let raw = lexer::split_query(query);
        if raw.is_empty() {
            return Err(CallunaError::syntax("empty query"));
        }
        let tokens = lexer::classify(&raw, &self.index);
        let rewritten = rewrite::rewrite(tokens)?;

        let matches = match rewritten.query {
            RewrittenQuery::NoMatch => MatchSet::NoMatch,
            RewrittenQuery::MatchAll => MatchSet::MatchAll(doc_ids(&self.index.universe())),
            RewrittenQuery::Expr(tokens) => {
                let expr = parser::parse(&tokens)?;
                MatchSet::Docs(doc_ids(&evaluator::evaluate(&expr, &self.index)))
            }
        };

        Ok(SearchOutcome {
            matches,
            warnings: rewritten.warnings,
        })
    }

    /// The article with the given document id.
    pub fn article(&self, doc_id: DocId) -> Option<&Article> {
        self.articles.get(doc_id as usize)
    }

    /// Exact-title lookup.
    pub fn article_by_title(&self, title: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.title == title)
    }

    /// Number of indexed articles.
    pub fn doc_count(&self) -> usize {
        self.articles.len()
    }

    /// Index statistics.
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// The underlying incidence structure.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}
