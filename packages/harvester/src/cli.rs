//! Command-line interface for the harvester.
//!
//! Query commands build the library fresh from a local folder on every
//! invocation; progress and summaries go to stderr so stdout stays valid
//! JSON for piping.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use gesetze_engine::{DocumentSource, Library};

use crate::config;
use crate::error::Result;
use crate::folder::FolderSource;
use crate::github::GithubSource;

/// Gesetze Harvester - Fetch and query German federal law texts.
#[derive(Parser)]
#[command(name = "gesetze-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download law texts from the GitHub mirror into a local folder.
    Fetch {
        /// Law codes to download (e.g. bgb hgb stgb)
        codes: Vec<String>,

        /// Target folder; the mirror's shard layout is reproduced inside
        #[arg(short, long, default_value = "gesetze")]
        output: PathBuf,
    },

    /// Print one provision, optionally a single Absatz, as JSON.
    Get {
        /// Law code (e.g. BGB, HGB)
        law: String,

        /// Provision number (e.g. 2, 14a)
        provision: String,

        /// Absatz number within the provision
        #[arg(short, long)]
        absatz: Option<String>,

        /// Folder holding the downloaded law texts
        #[arg(short, long, default_value = "gesetze")]
        folder: PathBuf,
    },

    /// List available laws, optionally filtered by an approximate match.
    List {
        /// Search string to match against law codes
        query: Option<String>,

        /// Folder holding the downloaded law texts
        #[arg(short, long, default_value = "gesetze")]
        folder: PathBuf,
    },

    /// Full-text search across all provisions.
    Search {
        /// Text to search for
        query: String,

        /// Restrict the search to these law codes
        #[arg(short, long)]
        law: Vec<String>,

        /// Folder holding the downloaded law texts
        #[arg(short, long, default_value = "gesetze")]
        folder: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { codes, output } => fetch_command(&codes, &output),
        Commands::Get {
            law,
            provision,
            absatz,
            folder,
        } => get_command(&law, &provision, absatz.as_deref(), &folder),
        Commands::List { query, folder } => list_command(query.as_deref(), &folder),
        Commands::Search { query, law, folder } => search_command(&query, &law, &folder),
    }
}

/// Download each law into `<output>/<shard>/<code>/index.md`.
///
/// Individual download failures are reported and counted but do not abort
/// the batch.
fn fetch_command(codes: &[String], output: &Path) -> Result<()> {
    if codes.is_empty() {
        eprintln!("No law codes given (try: fetch bgb hgb stgb)");
        return Ok(());
    }

    // Validates every code before the first request goes out.
    let source = GithubSource::new(codes.iter().cloned())?;

    eprintln!(
        "{} {} laws into {}",
        style("Fetching").bold(),
        codes.len(),
        style(output.display()).cyan()
    );

    let pb = ProgressBar::new(codes.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut failed = 0usize;
    for code in source.list()? {
        pb.set_message(code.clone());

        match source.fetch(&code) {
            Ok(text) => {
                let shard = code.chars().next().map(String::from).unwrap_or_default();
                let dir = output.join(shard).join(&code);
                fs::create_dir_all(&dir)?;
                fs::write(dir.join(config::LAW_FILE_NAME), text)?;
            }
            Err(e) => {
                failed += 1;
                pb.println(format!("{} {code}: {e}", style("Failed").red().bold()));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    eprintln!(
        "{} {} laws ({} failed)",
        style("Fetched").green().bold(),
        codes.len() - failed,
        failed
    );
    Ok(())
}

/// Build a library from a folder of downloaded law texts.
fn load_library(folder: &Path) -> Library {
    let mut library = Library::new();
    let report = library.load_many(&FolderSource::new(folder));
    eprintln!(
        "{} {} laws ({} skipped, {} failed)",
        style("Loaded").bold(),
        report.loaded.len(),
        report.skipped,
        report.failed
    );
    library
}

fn get_command(law: &str, provision: &str, absatz: Option<&str>, folder: &Path) -> Result<()> {
    let library = load_library(folder);
    let record = library.get(law, provision, absatz)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn list_command(query: Option<&str>, folder: &Path) -> Result<()> {
    let library = load_library(folder);
    let listings = library.list_available(query);
    println!("{}", serde_json::to_string_pretty(&listings)?);
    Ok(())
}

fn search_command(query: &str, law_codes: &[String], folder: &Path) -> Result<()> {
    let library = load_library(folder);
    let restriction = if law_codes.is_empty() {
        None
    } else {
        Some(law_codes)
    };
    let hits = library.search(query, restriction);
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}
