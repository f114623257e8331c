//! Index construction.

use ahash::{AHashMap, AHashSet};
use bit_vec::BitVec;
use log::debug;
use rayon::prelude::*;

use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::index::inverted::{InvertedIndex, TermId};

/// Builds an [`InvertedIndex`] from an ordered document sequence.
///
/// Document ids are assigned by position in the input. Term ids are assigned
/// first-seen in corpus order, so building the same corpus twice yields an
/// identical index.
pub struct IndexBuilder<T = WordTokenizer> {
    tokenizer: T,
}

impl IndexBuilder<WordTokenizer> {
    /// Create a builder using the standard [`WordTokenizer`].
    pub fn new() -> Self {
        IndexBuilder {
            tokenizer: WordTokenizer::new(),
        }
    }
}

impl Default for IndexBuilder<WordTokenizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer> IndexBuilder<T> {
    /// Create a builder with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: T) -> Self {
        IndexBuilder { tokenizer }
    }

    /// Build the incidence structure for `docs`.
    ///
    /// Tokenization and per-document term deduplication run in parallel
    /// across documents with no shared state; the merge into the shared
    /// posting sets is a sequential reduce in corpus order. An empty input
    /// produces a valid zero-term, zero-document index.
    pub fn build<S: AsRef<str> + Sync>(&self, docs: &[S]) -> InvertedIndex {
        // Map phase: the distinct terms of each document, in first-occurrence
        // order so term-id assignment stays deterministic.
        let doc_terms: Vec<Vec<String>> = docs
            .par_iter()
            .map(|doc| {
                let mut seen = AHashSet::new();
                let mut terms = Vec::new();
                for term in self.tokenizer.tokenize(doc.as_ref()) {
                    if seen.insert(term.clone()) {
                        terms.push(term);
                    }
                }
                terms
            })
            .collect();

        // Reduce phase: assign term ids first-seen and set posting bits.
        let doc_count = docs.len();
        let mut vocabulary: AHashMap<String, TermId> = AHashMap::new();
        let mut postings: Vec<BitVec> = Vec::new();
        for (doc_id, terms) in doc_terms.into_iter().enumerate() {
            for term in terms {
                let next_id = vocabulary.len() as TermId;
                let term_id = *vocabulary.entry(term).or_insert(next_id);
                if term_id as usize == postings.len() {
                    postings.push(BitVec::from_elem(doc_count, false));
                }
                postings[term_id as usize].set(doc_id, true);
            }
        }

        debug!(
            "indexed {} documents into {} distinct terms",
            doc_count,
            vocabulary.len()
        );
        InvertedIndex::new(vocabulary, postings, doc_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::inverted::doc_ids;

    const DOCS: [&str; 3] = [
        "rust is a systems language",
        "rust powers search engines",
        "python is a scripting language",
    ];

    #[test]
    fn test_posting_invariant() {
        // A bit is set iff the term occurs at least once in the document.
        let index = IndexBuilder::new().build(&DOCS);
        assert_eq!(index.docs_for_term("rust"), vec![0, 1]);
        assert_eq!(index.docs_for_term("language"), vec![0, 2]);
        assert_eq!(index.docs_for_term("python"), vec![2]);
        assert_eq!(index.doc_count(), 3);
    }

    #[test]
    fn test_binary_occurrence_not_counts() {
        let index = IndexBuilder::new().build(&["buffalo buffalo buffalo"]);
        assert_eq!(index.term_count(), 1);
        let bits = index.postings(index.term_id("buffalo").unwrap());
        assert_eq!(doc_ids(bits), vec![0]);
    }

    #[test]
    fn test_terms_are_case_folded() {
        let index = IndexBuilder::new().build(&["Rust RUST rust"]);
        assert_eq!(index.term_count(), 1);
        assert!(index.contains_term("rust"));
        assert!(!index.contains_term("Rust"));
    }

    #[test]
    fn test_empty_corpus_builds_valid_empty_index() {
        let docs: [&str; 0] = [];
        let index = IndexBuilder::new().build(&docs);
        assert_eq!(index.doc_count(), 0);
        assert_eq!(index.term_count(), 0);
    }

    #[test]
    fn test_reindexing_is_idempotent() {
        let first = IndexBuilder::new().build(&DOCS);
        let second = IndexBuilder::new().build(&DOCS);
        for term in ["rust", "is", "a", "systems", "language", "python"] {
            assert_eq!(
                first.docs_for_term(term),
                second.docs_for_term(term),
                "posting set differs for {term}"
            );
        }
        assert_eq!(first.term_count(), second.term_count());
    }

    #[test]
    fn test_custom_tokenizer_with_stopwords() {
        let builder = IndexBuilder::with_tokenizer(WordTokenizer::with_stopwords(["is", "a"]));
        let index = builder.build(&DOCS);
        assert!(!index.contains_term("is"));
        assert!(index.contains_term("systems"));
    }
}
