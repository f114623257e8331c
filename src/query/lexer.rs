//! Query lexing: whitespace splitting and token classification.

use crate::index::inverted::{InvertedIndex, TermId};

/// A classified query token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    /// The `and`/`AND` keyword.
    And,
    /// The `or`/`OR` keyword.
    Or,
    /// The `not`/`NOT` keyword.
    Not,
    /// An opening parenthesis.
    Open,
    /// A closing parenthesis.
    Close,
    /// A reference to a vocabulary term's posting set.
    Term(TermId),
    /// A token absent from the vocabulary, carrying its raw spelling.
    Unknown(String),
}

/// Split a raw query into whitespace-delimited tokens.
///
/// The query syntax is whitespace-delimited throughout; parenthesis
/// characters must arrive as standalone tokens, separated from adjacent
/// terms by the caller.
pub fn split_query(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Classify raw tokens against the index vocabulary.
///
/// Operator keywords are recognized in their exact lowercase and uppercase
/// spellings only; `And` is an ordinary term candidate. Vocabulary lookup is
/// exact — the vocabulary holds case-folded terms, so a capitalized query
/// term that is not an operator keyword classifies as unknown.
pub fn classify(tokens: &[&str], index: &InvertedIndex) -> Vec<QueryToken> {
    tokens
        .iter()
        .map(|raw| match *raw {
            "and" | "AND" => QueryToken::And,
            "or" | "OR" => QueryToken::Or,
            "not" | "NOT" => QueryToken::Not,
            "(" => QueryToken::Open,
            ")" => QueryToken::Close,
            term => match index.term_id(term) {
                Some(id) => QueryToken::Term(id),
                None => QueryToken::Unknown(term.to_string()),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::builder::IndexBuilder;

    fn sample_index() -> InvertedIndex {
        IndexBuilder::new().build(&["rust search engine"])
    }

    #[test]
    fn test_split_on_whitespace_only() {
        assert_eq!(
            split_query("  rust AND ( engine OR search ) "),
            vec!["rust", "AND", "(", "engine", "OR", "search", ")"]
        );
        assert!(split_query("").is_empty());
    }

    #[test]
    fn test_operator_keywords_both_spellings() {
        let index = sample_index();
        let tokens = classify(&["and", "AND", "or", "OR", "not", "NOT"], &index);
        assert_eq!(
            tokens,
            vec![
                QueryToken::And,
                QueryToken::And,
                QueryToken::Or,
                QueryToken::Or,
                QueryToken::Not,
                QueryToken::Not,
            ]
        );
    }

    #[test]
    fn test_mixed_case_keyword_is_not_an_operator() {
        let index = sample_index();
        let tokens = classify(&["And"], &index);
        assert_eq!(tokens, vec![QueryToken::Unknown("And".to_string())]);
    }

    #[test]
    fn test_terms_and_unknowns() {
        let index = sample_index();
        let tokens = classify(&["rust", "zzzznotaword", "(", ")"], &index);
        assert_eq!(tokens[0], QueryToken::Term(index.term_id("rust").unwrap()));
        assert_eq!(tokens[1], QueryToken::Unknown("zzzznotaword".to_string()));
        assert_eq!(tokens[2], QueryToken::Open);
        assert_eq!(tokens[3], QueryToken::Close);
    }

    #[test]
    fn test_unseparated_paren_is_unknown() {
        let index = sample_index();
        let tokens = classify(&["(rust"], &index);
        assert_eq!(tokens, vec![QueryToken::Unknown("(rust".to_string())]);
    }
}
