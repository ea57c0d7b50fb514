//! Subcommand implementations.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use answerbank_core::config::AnswerbankConfig;
use answerbank_resolver::{AnswerbankRuntime, ChatRequest, SessionIdentity};
use answerbank_store::sort_corpus_file;
use anyhow::{Context, Result};
use tracing::info;

fn start(config: AnswerbankConfig) -> Result<AnswerbankRuntime> {
    let path = config.knowledge.path.clone();
    AnswerbankRuntime::start(config).with_context(|| format!("starting with corpus {path}"))
}

fn wait_for_index(runtime: &AnswerbankRuntime, seconds: u64) {
    if seconds > 0 {
        let ready = runtime.wait_until_ready(Duration::from_secs(seconds));
        info!(ready, "finished waiting for similarity index");
    }
}

pub fn ask(config: AnswerbankConfig, message: &str, wait: u64, json: bool) -> Result<()> {
    let runtime = start(config)?;
    wait_for_index(&runtime, wait);

    let response = runtime
        .chat()
        .chat(Some(&SessionIdentity::guest()), ChatRequest::new(message));

    if json {
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", response.response);
    }
    Ok(())
}

pub fn complete(config: AnswerbankConfig, query: &str) -> Result<()> {
    let runtime = start(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for question in runtime.chat().autocomplete(query).matches {
        writeln!(out, "{question}")?;
    }
    Ok(())
}

pub fn sort(config: &AnswerbankConfig, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(&config.knowledge.path));
    let report =
        sort_corpus_file(&path).with_context(|| format!("sorting corpus {}", path.display()))?;
    if report.already_sorted {
        println!("{}: {} entries, already sorted", path.display(), report.entries);
    } else {
        println!("{}: sorted {} entries", path.display(), report.entries);
    }
    Ok(())
}

pub fn repl(config: AnswerbankConfig) -> Result<()> {
    let runtime = start(config)?;
    let session = SessionIdentity::guest();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in io::stdin().lock().lines() {
        let line = line?;
        let response = runtime
            .chat()
            .chat(Some(&session), ChatRequest::new(line));
        writeln!(out, "{}", response.response)?;
        out.flush()?;
    }
    Ok(())
}

pub fn status(config: AnswerbankConfig, wait: u64) -> Result<()> {
    let runtime = start(config)?;
    wait_for_index(&runtime, wait);
    println!("{}", serde_json::to_string_pretty(&runtime.status())?);
    Ok(())
}
