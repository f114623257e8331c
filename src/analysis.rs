//! Text analysis for Calluna.
//!
//! Documents and queries meet at the term level: the tokenizer turns raw
//! text into a stream of normalized terms, and the same normalization rules
//! decide what counts as one vocabulary entry at index time.
//!
//! ```text
//! Text → Tokenizer → Token Stream → normalized terms
//! ```

pub mod tokenizer;

// Re-exports
pub use tokenizer::{TokenStream, Tokenizer, WordTokenizer};
