use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rustyline::DefaultEditor;

use calluna::{Engine, MatchSet, SearchOutcome, load_corpus};

/// Calluna - boolean document search console
#[derive(Parser)]
#[command(name = "calluna", version, about)]
struct Cli {
    /// Path to the article-delimited corpus file.
    corpus: PathBuf,

    /// Maximum number of excerpts to display per query.
    #[arg(long, default_value_t = 5)]
    limit: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single query and exit.
    Search {
        /// Boolean query: keyword operators and/or/not, spaced parentheses.
        query: String,
    },
    /// Print index statistics and exit.
    Stats,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let articles = load_corpus(&cli.corpus)
        .with_context(|| format!("failed to read corpus {}", cli.corpus.display()))?;
    let engine = Engine::from_articles(articles);

    match cli.command {
        Some(Command::Search { query }) => run_query(&engine, &query, cli.limit, cli.format),
        Some(Command::Stats) => print_stats(&engine, cli.format),
        None => repl(&engine, cli.limit, cli.format),
    }
}

fn repl(engine: &Engine, limit: usize, format: OutputFormat) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!(
        "Calluna search console: {} articles indexed.",
        engine.doc_count()
    );
    println!("Boolean operators: and, or, not; group with spaced parentheses.");
    println!("Commands: read <title>, stats, help, quit. A blank line exits.");

    loop {
        let line = match rl.readline("query> ") {
            Ok(line) => line,
            Err(
                rustyline::error::ReadlineError::Interrupted | rustyline::error::ReadlineError::Eof,
            ) => break,
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() || line == "quit" || line == "exit" {
            break;
        }
        let _ = rl.add_history_entry(line);

        match line {
            "help" => {
                print_help();
                continue;
            }
            "stats" => {
                print_stats(engine, format)?;
                continue;
            }
            _ => {}
        }
        if let Some(title) = line.strip_prefix("read ") {
            read_article(engine, title.trim());
            continue;
        }

        // A query fails on its own; the engine stays usable.
        if let Err(err) = run_query(engine, line, limit, format) {
            eprintln!("Error: {err:#}");
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn print_help() {
    println!(
        "\
Enter a boolean query to search, or one of:
  read <title>     Show the full article with that exact title
  stats            Show index statistics
  help             Show this help
  quit             Exit (a blank line also exits)"
    );
}

fn run_query(engine: &Engine, query: &str, limit: usize, format: OutputFormat) -> Result<()> {
    let outcome = engine.search(query)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => print_matches(engine, &outcome, limit),
    }
    Ok(())
}

fn print_matches(engine: &Engine, outcome: &SearchOutcome, limit: usize) {
    for warning in &outcome.warnings {
        println!("Note: {warning}");
    }
    match &outcome.matches {
        MatchSet::NoMatch => println!("No matches."),
        MatchSet::MatchAll(ids) => {
            println!("The query matches every article.");
            print_excerpts(engine, ids, limit);
        }
        MatchSet::Docs(ids) if ids.is_empty() => println!("No matches."),
        MatchSet::Docs(ids) => print_excerpts(engine, ids, limit),
    }
}

fn print_excerpts(engine: &Engine, ids: &[calluna::DocId], limit: usize) {
    for &doc_id in ids.iter().take(limit) {
        if let Some(article) = engine.article(doc_id) {
            println!("<{}> {}", article.title, excerpt(&article.text, 185));
        }
    }
    if ids.len() > limit {
        println!("Showing the first {limit} of {} matching articles.", ids.len());
    }
}

fn read_article(engine: &Engine, title: &str) {
    match engine.article_by_title(title) {
        Some(article) => {
            println!("*****************************************");
            println!("{}", article.title);
            println!("{}", article.text.trim());
            println!("*****************************************");
        }
        None => println!("No such article found."),
    }
}

fn print_stats(engine: &Engine, format: OutputFormat) -> Result<()> {
    let stats = engine.stats();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => println!(
            "{} articles, {} distinct terms, {} postings",
            stats.doc_count, stats.term_count, stats.posting_bits_set
        ),
    }
    Ok(())
}

/// First `max_chars` characters of the article body, whitespace-flattened.
fn excerpt(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &flat[..idx]),
        None => flat,
    }
}
