//! Term-document incidence index.
//!
//! The index is conceptually a boolean term-document matrix: one row per
//! vocabulary term, one column per document, with a bit set where the term
//! occurs in the document. [`builder::IndexBuilder`] constructs it in one
//! pass over the corpus; [`inverted::InvertedIndex`] is the read-only result
//! shared by all query evaluations.

pub mod builder;
pub mod inverted;

// Re-exports
pub use builder::IndexBuilder;
pub use inverted::{DocId, IndexStats, InvertedIndex, TermId};
