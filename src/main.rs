use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use gridtown::{render, Config, Session};

/// Text front end for the city grid: feeds pointer and key events from a
/// script file (or stdin) into a session, in place of a windowed event loop.
#[derive(Debug, Parser)]
#[command(author, version, about = "gridtown city builder")]
struct Cli {
    /// Path to a YAML config file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the save file path
    #[arg(long)]
    save_path: Option<PathBuf>,

    /// Override the grid width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Override the grid height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Event script to replay instead of reading stdin.
    /// One event per line: `click PX PY`, `key K`, `map`, `quit`.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(path) = cli.save_path {
        config.save_path = path;
    }
    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }

    let mut session = Session::new(&config)?;

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line?;
        if !apply_event(&mut session, line.trim()) {
            break;
        }
    }

    print!("{}", render::ascii_map(session.grid()));
    println!("selected: {:?}", session.selected());
    Ok(())
}

/// Applies one scripted event. Returns false on `quit`.
fn apply_event(session: &mut Session, line: &str) -> bool {
    let mut words = line.split_whitespace();
    match words.next() {
        None | Some("#") => {}
        Some("click") => {
            let coords = (
                words.next().and_then(|w| w.parse().ok()),
                words.next().and_then(|w| w.parse().ok()),
            );
            match coords {
                (Some(px), Some(py)) => session.handle_pointer_down((px, py)),
                _ => error!(line, "click needs two integer pixel coordinates"),
            }
        }
        Some("key") => match words.next().and_then(|w| w.chars().next()) {
            Some(key) => {
                if let Err(e) = session.handle_key(key) {
                    error!(error = %e, "key command failed");
                }
            }
            None => error!(line, "key needs a character"),
        },
        Some("map") => print!("{}", render::ascii_map(session.grid())),
        Some("quit") => return false,
        Some(other) => error!(event = other, "unknown event"),
    }
    true
}
