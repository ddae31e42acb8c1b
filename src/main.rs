use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use cix::index::{CharIndex, DEFAULT_END, DEFAULT_START};
use cix::{output, server};

#[derive(Parser)]
#[command(name = "cix")]
#[command(about = "Search Unicode characters by the words in their names")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search query (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for characters whose name contains every query word
    Search {
        /// Query words
        query: Vec<String>,

        /// First code point to index (inclusive)
        #[arg(long, default_value_t = DEFAULT_START)]
        start: u32,

        /// Code point to stop at (exclusive)
        #[arg(long, default_value_t = DEFAULT_END)]
        end: u32,

        /// Print results as a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Serve the index over HTTP (JSON results, HTML form fallback)
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// First code point to index (inclusive)
        #[arg(long, default_value_t = DEFAULT_START)]
        start: u32,

        /// Code point to stop at (exclusive)
        #[arg(long, default_value_t = DEFAULT_END)]
        end: u32,
    },
    /// Show index statistics
    Stats {
        /// First code point to index (inclusive)
        #[arg(long, default_value_t = DEFAULT_START)]
        start: u32,

        /// Code point to stop at (exclusive)
        #[arg(long, default_value_t = DEFAULT_END)]
        end: u32,
    },
    /// Run the standalone clock demo server
    Time {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search {
            query,
            start,
            end,
            json,
        }) => {
            run_search(&query.join(" "), start, end, json)?;
        }
        Some(Commands::Serve { port, start, end }) => {
            init_tracing();
            let index = build_with_spinner(start, end)?;
            server::run(index, port).await?;
        }
        Some(Commands::Stats { start, end }) => {
            let index = build_with_spinner(start, end)?;
            cix::index::stats::show_stats(&index);
        }
        Some(Commands::Time { port }) => {
            init_tracing();
            server::time::run(port).await?;
        }
        None => {
            if cli.query.is_empty() {
                eprintln!("No query given. Try 'cix search eight digit' or 'cix serve'.");
            } else {
                // Direct query mode
                run_search(&cli.query.join(" "), DEFAULT_START, DEFAULT_END, false)?;
            }
        }
    }

    Ok(())
}

fn run_search(query: &str, start: u32, end: u32, json: bool) -> Result<()> {
    let index = if json {
        // Keep stdout clean for the JSON consumer.
        CharIndex::build(start, end)?
    } else {
        build_with_spinner(start, end)?
    };

    let hits = index.search_hits(query);
    if json {
        output::print_hits_json(&hits)?;
    } else {
        output::print_hits(&hits, true)?;
    }

    Ok(())
}

/// Build the index with a spinner, since the full range takes a moment.
fn build_with_spinner(start: u32, end: u32) -> Result<CharIndex> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Indexing Unicode character names...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let index = CharIndex::build(start, end)?;

    spinner.finish_with_message(format!(
        "Indexed {} characters ({} tokens)",
        index.char_count(),
        index.token_count()
    ));

    Ok(index)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
