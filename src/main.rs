use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use markring::bookmark::BookmarkFiles;
use markring::config::Config;
use markring::file::store::{HistoryStore, SavePolicy};
use markring::history::cursor::Cursor;
use markring::history::ring::HistoryRing;
use markring::jump::coordinator::JumpCoordinator;
use markring::jump::JumpError;
use markring::path::NormalizedPaths;
use markring::ui::highlight::{highlight_spans, render_highlighted};
use markring::ui::message::{Message, StatusSink, StderrStatus};

/// markring - A bounded, cyclable history of bookmark files
#[derive(Parser)]
#[command(name = "markring")]
#[command(version)]
#[command(about = "Jump between bookmark files and cycle through recent ones", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/markring/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// History file, overriding the configured one
    #[arg(long)]
    history: Option<PathBuf>,

    /// Write a log file to the data directory
    #[arg(short, long)]
    log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a bookmark file and record it in the history
    Jump {
        /// Bookmark file to load
        path: String,
    },
    /// Cycle to the next older bookmark file
    Next,
    /// Cycle to the next newer bookmark file
    Prev,
    /// List the history, most recent first
    List,
    /// Highlight known bookmark files in text read from FILE or stdin
    Highlight {
        file: Option<PathBuf>,
    },
}

/// Starts a file logger under `<data dir>/markring/log`.
fn init_log(data_dir: &Path) -> Result<()> {
    let log_dir = data_dir.join("log");
    std::fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_name = format!("{}.log", chrono::Local::now().format("%F-%H-%M-%S"));
    let mut builder = ConfigBuilder::new();
    let log_config = match builder.set_time_offset_to_local() {
        Ok(builder) | Err(builder) => builder.build(),
    };
    let file =
        std::fs::File::create(log_dir.join(log_name)).context("Failed to create log file")?;
    WriteLogger::init(LevelFilter::Info, log_config, file).context("Failed to start logger")?;
    info!("===START===");
    Ok(())
}

type Jumps<S> = JumpCoordinator<BookmarkFiles, HistoryStore, S, NormalizedPaths>;

/// Runs one jump command and writes the history back.
///
/// Only a failed load fails the command. A history that cannot be written
/// is reported as a warning.
fn run_jump<S, F>(
    ring: HistoryRing<NormalizedPaths>,
    cursor: Cursor,
    paths: NormalizedPaths,
    store: HistoryStore,
    status: S,
    action: F,
) -> Result<()>
where
    S: StatusSink,
    F: FnOnce(&mut Jumps<S>) -> Result<(), JumpError>,
{
    let mut jumps = Jumps::new(ring, BookmarkFiles::new(paths), store, status).with_cursor(cursor);
    let result = action(&mut jumps);

    if result.is_ok() {
        if let Some(loaded) = jumps.navigator().current() {
            println!("{}", loaded.record.path.display());
        }
    }

    let (ring, cursor, _, mut store, mut status) = jumps.into_parts();
    let result = match result {
        Err(e) if e.is_informational() => {
            status.notify(Message::info(e.to_string()));
            return Ok(());
        }
        other => other,
    };

    // A failed load still changed the history, and a failed save left it pending
    if result.is_err() || store.pending() > 0 {
        // Kept in `last_error`
        let _ = store.flush(&ring, cursor);
    }
    if let Some(error) = store.last_error() {
        status.notify(Message::warning(format!("History not saved: {}", error)));
    }

    result.map_err(Into::into)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    if cli.log {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
            .join("markring");
        init_log(&data_dir)?;
    }

    let history_path = cli.history.unwrap_or_else(|| config.history_file.clone());
    let paths = NormalizedPaths::from_config(&config);
    let mut store = HistoryStore::new(&history_path, SavePolicy::from_config(&config));
    store.add_observer(|path: &Path| info!("history written to {}", path.display()));

    let (ring, cursor) = store.load(config.capacity, paths.clone())?;

    match cli.command {
        Command::List => {
            for (position, key) in ring.iter().enumerate() {
                let marker = if cursor.position() == Some(position) {
                    '>'
                } else {
                    ' '
                };
                println!("{} {:>2} {}", marker, position, key);
            }
            Ok(())
        }
        Command::Highlight { file } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    io::stdin()
                        .read_to_string(&mut text)
                        .context("Failed to read stdin")?;
                    text
                }
            };
            let keys = ring.to_vec();
            let spans = highlight_spans(&keys, &text);
            print!("{}", render_highlighted(&text, &spans));
            Ok(())
        }
        Command::Jump { path } => run_jump(ring, cursor, paths, store, StderrStatus, |jumps| {
            jumps.jump(&path).map(|_| ())
        }),
        Command::Next => run_jump(ring, cursor, paths, store, StderrStatus, |jumps| {
            jumps.next().map(|_| ())
        }),
        Command::Prev => run_jump(ring, cursor, paths, store, StderrStatus, |jumps| {
            jumps.previous().map(|_| ())
        }),
    }
}
