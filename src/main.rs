//! `chordsheet` - turn scraped chord sheets into structured song JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use chordsheet::config::Config;
use chordsheet::constants::http::MAX_LISTED_CANDIDATES;
use chordsheet::services::{fetch_song, TabSearch};
use chordsheet::sheet;
use chordsheet::tab_source::TabClient;
use chordsheet::types::TabKind;

#[derive(Parser)]
#[command(name = "chordsheet", version, about = "Parse chord sheets into sections of chords over lyrics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a document from a file, or stdin when FILE is `-`
    Parse {
        /// Document to parse
        file: PathBuf,
        /// Where the document came from; supplies artist and title
        #[arg(long)]
        locator: Option<String>,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Search for a song, fetch the best tab and parse it
    Fetch {
        /// Artist to search for
        artist: String,
        /// Song title to search for
        title: String,
        /// Kind of document: chords or tabs
        #[arg(long, default_value_t = TabKind::Chords)]
        kind: TabKind,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// List ranked search candidates
    Search {
        /// Artist to search for
        artist: String,
        /// Song title to search for
        title: String,
        /// Kind of document: chords or tabs
        #[arg(long, default_value_t = TabKind::Chords)]
        kind: TabKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Parse { file, locator, compact } => {
            let song = if file.as_os_str() == "-" {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read document from stdin")?;
                sheet::parse(&text, locator.as_deref())
            } else {
                sheet::parse_file(&file, locator.as_deref())
                    .with_context(|| format!("Failed to parse {}", file.display()))?
            };
            print_json(&song, compact)
        }
        Command::Fetch { artist, title, kind, compact } => {
            let client = client()?;
            let song = fetch_song(&client, &client, &artist, &title, kind)
                .await
                .with_context(|| format!("Failed to fetch {kind} for {artist} - {title}"))?;
            print_json(&song, compact)
        }
        Command::Search { artist, title, kind } => {
            let client = client()?;
            let candidates = client
                .search(&artist, &title, kind)
                .await
                .with_context(|| format!("Search for {artist} - {title} failed"))?;

            if candidates.is_empty() {
                println!("No candidates found.");
            }
            for (i, c) in candidates.iter().take(MAX_LISTED_CANDIDATES).enumerate() {
                println!(
                    "{:>2}. {:>7.2}  rating {:.2} ({} votes)  {}",
                    i + 1,
                    c.score,
                    c.rating,
                    c.vote_count,
                    c.locator
                );
            }
            Ok(())
        }
    }
}

fn client() -> Result<TabClient> {
    let config = Config::load().context("Failed to load configuration")?;
    if !config.has_search_endpoint() {
        tracing::warn!("CHORDSHEET_SEARCH_URL is not set; search will fail");
    }
    Ok(TabClient::new(&config))
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}
