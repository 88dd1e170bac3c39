//! Daily Wordle - CLI
//!
//! Line-oriented front-end for the daily puzzle. Progress is kept in a JSON
//! slot so a game can be resumed later the same day.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use daily_wordle::{
    commands::{run_play, run_share, run_today},
    config::DEFAULT_STATE_FILE,
    daily::DayKey,
    game::{FileStore, Session},
    wordlists::{
        WordCatalog,
        loader::{embedded_catalog, load_from_file},
    },
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daily-wordle",
    about = "One word puzzle a day, the same for everyone",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word catalog file (one word per line); defaults to the built-in list
    #[arg(short = 'w', long, global = true, env = "DAILY_WORDLE_WORDS")]
    words: Option<PathBuf>,

    /// Where progress is saved
    #[arg(
        short = 's',
        long,
        global = true,
        env = "DAILY_WORDLE_STATE",
        default_value = DEFAULT_STATE_FILE
    )]
    state: PathBuf,

    /// Play the puzzle of a specific day (YYYY-MM-DD) instead of today
    #[arg(short = 'd', long, global = true)]
    date: Option<String>,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle (default)
    Play,

    /// Print the share summary of today's game
    Share,

    /// Show today's puzzle number and date
    Today,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_catalog(words: Option<&Path>) -> Result<WordCatalog> {
    match words {
        Some(path) => load_from_file(path).context("cannot load word catalog"),
        None => embedded_catalog().context("built-in word catalog is invalid"),
    }
}

fn resolve_day(date: Option<&str>) -> Result<DayKey> {
    match date {
        Some(text) => text.parse().context("invalid --date"),
        None => Ok(DayKey::today()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let day = resolve_day(cli.date.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Today => {
            run_today(day);
            Ok(())
        }
        Commands::Share => {
            let catalog = load_catalog(cli.words.as_deref())?;
            run_share(&catalog, FileStore::new(&cli.state), day)
        }
        Commands::Play => {
            let catalog = load_catalog(cli.words.as_deref())?;
            let store = FileStore::new(&cli.state);
            let mut session =
                Session::initialize(&catalog, store, day).context("cannot open today's puzzle")?;
            run_play(&mut session)
        }
    }
}
