//! # answerbank
//!
//! Usage:
//!   answerbank ask "what is your name?"        # one question, exact tiers only
//!   answerbank ask --wait 10 "whats ur name"   # wait for the similarity index first
//!   answerbank complete what                   # autocomplete matches
//!   answerbank sort knowledge_base.json        # rewrite the corpus sorted
//!   answerbank repl                            # read questions from stdin
//!   answerbank status --wait 30                # indexing progress as JSON

mod commands;

use std::path::PathBuf;

use answerbank_core::config::AnswerbankConfig;
use answerbank_resolver::tracing_setup::init_tracing;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "answerbank",
    version,
    about = "Tiered question matching over a JSON knowledge base"
)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Knowledge base JSON file (overrides `knowledge.path`)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer one question
    Ask {
        /// Seconds to wait for the similarity index before answering
        #[arg(long, default_value_t = 0)]
        wait: u64,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
        /// The question
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// List stored questions containing QUERY, case-insensitively
    Complete { query: String },
    /// Rewrite a corpus file in sorted order
    Sort {
        /// Corpus file; defaults to the configured knowledge base
        path: Option<PathBuf>,
    },
    /// Answer questions read line by line from stdin
    Repl,
    /// Print corpus and indexing status as JSON
    Status {
        /// Seconds to wait for indexing to finish
        #[arg(long, default_value_t = 0)]
        wait: u64,
    },
}

fn load_config(cli: &Cli) -> Result<AnswerbankConfig> {
    let mut config = match &cli.config {
        Some(path) => AnswerbankConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnswerbankConfig::default(),
    };
    if let Some(corpus) = &cli.corpus {
        config.knowledge.path = corpus.display().to_string();
    }
    if cli.verbose {
        config.observability.log_level = "debug".to_string();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.observability);

    match cli.command {
        Command::Ask {
            wait,
            json,
            message,
        } => commands::ask(config, &message.join(" "), wait, json),
        Command::Complete { query } => commands::complete(config, &query),
        Command::Sort { path } => commands::sort(&config, path),
        Command::Repl => commands::repl(config),
        Command::Status { wait } => commands::status(config, wait),
    }
}
