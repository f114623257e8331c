//! In-memory inverted index over a fixed corpus.

use ahash::AHashMap;
use bit_vec::BitVec;
use serde::Serialize;

/// Zero-based document identifier, assigned in corpus order at build time.
pub type DocId = u32;

/// Identifier of a term in the vocabulary.
pub type TermId = u32;

/// Term-document incidence structure.
///
/// Holds the vocabulary (term → [`TermId`]) and one posting bitset per term
/// with exactly `doc_count` bits; bit *d* is set iff the term occurs at
/// least once in document *d* (binary occurrence, not counts). Immutable
/// after construction and safe for unsynchronized concurrent reads.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// Term → term id, O(1) amortized lookup.
    vocabulary: AHashMap<String, TermId>,
    /// Posting bitsets, indexed by term id.
    postings: Vec<BitVec>,
    /// Number of indexed documents.
    doc_count: usize,
}

impl InvertedIndex {
    pub(crate) fn new(
        vocabulary: AHashMap<String, TermId>,
        postings: Vec<BitVec>,
        doc_count: usize,
    ) -> Self {
        debug_assert_eq!(vocabulary.len(), postings.len());
        InvertedIndex {
            vocabulary,
            postings,
            doc_count,
        }
    }

    /// Look up a term's id in the vocabulary.
    ///
    /// Lookup is exact: the vocabulary holds case-folded terms, so callers
    /// normalize first or miss.
    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.vocabulary.get(term).copied()
    }

    /// Whether the vocabulary contains the term.
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// Posting bitset for a term id, one bit per document.
    ///
    /// Term ids are issued by this index's builder; an id from a different
    /// index is out of contract.
    pub fn postings(&self, term: TermId) -> &BitVec {
        &self.postings[term as usize]
    }

    /// Documents containing the given term, in ascending id order.
    pub fn docs_for_term(&self, term: &str) -> Vec<DocId> {
        match self.term_id(term) {
            Some(id) => doc_ids(self.postings(id)),
            None => Vec::new(),
        }
    }

    /// Number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of distinct terms in the vocabulary.
    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// The set of all document ids — the operand of logical NOT.
    pub fn universe(&self) -> BitVec {
        BitVec::from_elem(self.doc_count, true)
    }

    /// Summary statistics for this index.
    pub fn stats(&self) -> IndexStats {
        let posting_bits_set = self
            .postings
            .iter()
            .map(|bits| bits.iter().filter(|bit| *bit).count() as u64)
            .sum();
        IndexStats {
            doc_count: self.doc_count,
            term_count: self.vocabulary.len(),
            posting_bits_set,
        }
    }
}

/// Collect the set bits of a document bitset as ascending document ids.
pub fn doc_ids(bits: &BitVec) -> Vec<DocId> {
    bits.iter()
        .enumerate()
        .filter(|(_, bit)| *bit)
        .map(|(doc, _)| doc as DocId)
        .collect()
}

/// Summary statistics for a built index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Number of indexed documents.
    pub doc_count: usize,
    /// Number of distinct terms.
    pub term_count: usize,
    /// Total (term, document) incidences.
    pub posting_bits_set: u64,
}
