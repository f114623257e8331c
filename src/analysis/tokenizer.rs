//! Word tokenization.
//!
//! Terms are maximal runs of Unicode word characters (letters, digits,
//! underscore), case-folded to lowercase. There is no minimum token length:
//! single-character tokens and alphanumeric stopwords are retained unless an
//! explicit stopword set is configured.

use ahash::AHashSet;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"(?u)\w+").expect("valid regex");
}

/// A source of normalized terms.
///
/// Tokenization is deterministic and total: the same input always yields the
/// same sequence, and empty text yields an empty stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize text into a lazy stream of normalized terms.
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a>;
}

/// Lazy iterator over the normalized terms of one text.
///
/// Restartable by calling [`Tokenizer::tokenize`] again on the same text.
pub struct TokenStream<'a> {
    matches: regex::Matches<'static, 'a>,
    stopwords: Option<&'a AHashSet<String>>,
}

impl Iterator for TokenStream<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for mat in self.matches.by_ref() {
            let term = mat.as_str().to_lowercase();
            if let Some(stopwords) = self.stopwords {
                if stopwords.contains(&term) {
                    continue;
                }
            }
            return Some(term);
        }
        None
    }
}

/// The standard tokenizer.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    stopwords: Option<AHashSet<String>>,
}

impl WordTokenizer {
    /// Create a tokenizer that keeps every word token.
    pub fn new() -> Self {
        WordTokenizer { stopwords: None }
    }

    /// Create a tokenizer that subtracts a stopword set from the stream.
    ///
    /// Stopwords are compared after case folding.
    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stopwords = words
            .into_iter()
            .map(|word| word.into().to_lowercase())
            .collect();
        WordTokenizer {
            stopwords: Some(stopwords),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        TokenStream {
            matches: WORD.find_iter(text),
            stopwords: self.stopwords.as_ref(),
        }
    }
}
