//! # Calluna
//!
//! A small boolean full-text retrieval library for Rust.
//!
//! Calluna indexes a fixed corpus of text documents into a term-document
//! incidence structure (a vocabulary plus one posting bitset per term) and
//! answers boolean queries combining `AND`, `OR`, `NOT` and parentheses
//! with the set of matching document ids.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Parallel index construction
//! - Whitespace-delimited boolean query syntax with keyword operators
//! - Unknown query terms are elided instead of failing the whole query
//! - Read-only index, safe for concurrent searches
//!
//! ## Example
//!
//! ```
//! use calluna::{Article, Engine, MatchSet};
//!
//! let engine = Engine::from_articles(vec![
//!     Article { title: "Alpha".into(), text: "Rust systems programming".into() },
//!     Article { title: "Beta".into(), text: "Python scripting".into() },
//! ]);
//!
//! let outcome = engine.search("rust AND programming").unwrap();
//! assert_eq!(outcome.matches, MatchSet::Docs(vec![0]));
//! ```

// Core modules
pub mod analysis;
pub mod corpus;
mod engine;
mod error;
pub mod index;
pub mod query;

// Re-exports for the public API
pub use analysis::tokenizer::{TokenStream, Tokenizer, WordTokenizer};
pub use corpus::{Article, load_corpus, parse_articles};
pub use engine::{Engine, MatchSet, SearchOutcome};
pub use error::{CallunaError, Result};
pub use index::builder::IndexBuilder;
pub use index::inverted::{DocId, IndexStats, InvertedIndex, TermId};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
