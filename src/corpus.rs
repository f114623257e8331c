//! Corpus loading for article-delimited text files.
//!
//! The corpus format is a single text file of articles, each wrapped as
//! `<article name="Title"> body </article>`. The loader is a collaborator of
//! the core: it produces the ordered article sequence whose positions become
//! document ids, and it keeps ownership of the raw text.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;

const HEADER_OPEN: &str = "<article name=\"";
const HEADER_CLOSE: &str = "\">";

/// A single corpus document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Title from the header's `name` attribute.
    pub title: String,
    /// Raw article body.
    pub text: String,
}

/// Parse a raw corpus blob into articles.
///
/// Splits on `</article>` and extracts each fragment's header. Fragments
/// without a well-formed header (typically trailing whitespace after the
/// last article) are skipped.
pub fn parse_articles(raw: &str) -> Vec<Article> {
    let mut articles = Vec::new();
    for fragment in raw.split("</article>") {
        let Some(start) = fragment.find(HEADER_OPEN) else {
            if !fragment.trim().is_empty() {
                debug!("skipping corpus fragment without an article header");
            }
            continue;
        };
        let rest = &fragment[start + HEADER_OPEN.len()..];
        let Some(end) = rest.find(HEADER_CLOSE) else {
            debug!("skipping article fragment with an unterminated header");
            continue;
        };
        articles.push(Article {
            title: rest[..end].to_string(),
            text: rest[end + HEADER_CLOSE.len()..].to_string(),
        });
    }
    articles
}

/// Read and parse a corpus file.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Article>> {
    let raw = fs::read_to_string(path)?;
    let articles = parse_articles(&raw);
    debug!("loaded {} articles", articles.len());
    Ok(articles)
}
