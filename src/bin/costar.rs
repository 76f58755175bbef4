// src/bin/costar.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use costar_core::error::CostarError;
use costar_core::resolver::{self, Candidate};
use costar_core::search::{self, PathStep};
use costar_core::store::{DatasetStore, LoadOrigin};

#[derive(Parser)]
#[command(name = "costar")]
#[command(about = "Search an actor/movie dataset for degrees of separation")]
struct Cli {
    /// Directory containing people.csv, movies.csv and stars.csv
    #[arg(long, short, default_value = "large")]
    directory: PathBuf,

    /// Search timeout in seconds
    #[arg(long, short, default_value_t = 60)]
    timeout: u64,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    println!("Loading data...");
    let outcome = DatasetStore::load(&cli.directory)?;
    match outcome.origin {
        LoadOrigin::Snapshot => println!("... from cache"),
        LoadOrigin::Csv { snapshot_written } => {
            println!("... from csv");
            if !snapshot_written {
                println!(
                    "{}",
                    "warning: snapshot write failed; the next run will re-parse".yellow()
                );
            }
        }
    }
    println!(
        "Data loaded: {} people, {} movies.",
        outcome.store.person_count(),
        outcome.store.movie_count()
    );

    println!("Welcome. An empty line or Ctrl-C exits.");
    run_session(&outcome.store, Duration::from_secs(cli.timeout))
}

/// Result of one name prompt.
enum Prompted {
    /// EOF or an empty line; the session ends.
    Quit,
    /// The name didn't resolve; re-prompt from the top.
    Retry,
    Id(String),
}

fn run_session(store: &DatasetStore, timeout: Duration) -> Result<()> {
    loop {
        let source = match resolve_prompt(store, "Source Name: ")? {
            Prompted::Quit => return Ok(()),
            Prompted::Retry => continue,
            Prompted::Id(id) => id,
        };
        let target = match resolve_prompt(store, "Target Name: ")? {
            Prompted::Quit => return Ok(()),
            Prompted::Retry => continue,
            Prompted::Id(id) => id,
        };

        match search::shortest_path(store, &source, &target, timeout) {
            Ok(Some(path)) => print_path(store, &source, &path),
            Ok(None) => println!("{}", "Not connected".yellow()),
            Err(CostarError::Timeout { .. }) => {
                println!(
                    "{}",
                    "Timeout expired. Try reversing source and target".yellow()
                );
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn resolve_prompt(store: &DatasetStore, label: &str) -> Result<Prompted> {
    let Some(text) = prompt(label)? else {
        return Ok(Prompted::Quit);
    };
    if text.is_empty() {
        return Ok(Prompted::Quit);
    }
    match resolver::resolve(store, &text, &mut console_select) {
        Ok(id) => Ok(Prompted::Id(id)),
        Err(CostarError::NotFound { .. }) => {
            println!("{}", "Person not found".yellow());
            Ok(Prompted::Retry)
        }
        Err(e) => Err(e.into()),
    }
}

/// Disambiguates by listing the candidates and reading an id from stdin.
fn console_select(candidates: &[Candidate]) -> Option<String> {
    println!("Which person?");
    for c in candidates {
        let birth = c.birth.as_deref().unwrap_or("unknown");
        println!("ID: {}, Name: {}, Birth: {}", c.id, c.name, birth);
    }
    prompt("Intended Person ID: ").ok().flatten()
}

fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_path(store: &DatasetStore, source: &str, path: &[PathStep]) {
    println!(
        "{} degrees of separation.",
        path.len().to_string().green().bold()
    );
    let mut prev = source;
    for (i, (movie_id, person_id)) in path.iter().enumerate() {
        println!(
            "{}: {} and {} starred in {}",
            i + 1,
            person_name(store, prev),
            person_name(store, person_id),
            movie_title(store, movie_id)
        );
        prev = person_id;
    }
}

fn person_name(store: &DatasetStore, id: &str) -> String {
    store
        .person(id)
        .map_or_else(|| id.to_string(), |p| p.name.clone())
}

fn movie_title(store: &DatasetStore, id: &str) -> String {
    store
        .movie(id)
        .map_or_else(|| id.to_string(), |m| m.title.clone())
}
