//! grumps CLI
//!
//! Command-line frontend for the episode player: parse video titles, manage
//! the list of skipped games, cache the catalog and walk the playback queue.

mod commands;
mod error;
mod logger;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub(crate) use error::CliError;
pub(crate) use logger::log_blank;

use commands::config::{run_config_path, run_config_reset_db, run_config_set_db, run_config_show};
use commands::parse::run_parse;
use commands::playback::{run_next, run_play, run_record};
use commands::skip::{run_skip_add, run_skip_clear, run_skip_list, run_skip_remove};
use commands::videos::{run_videos_count, run_videos_import, run_videos_list};

#[derive(Parser)]
#[command(name = "grumps")]
#[command(about = "Watch a back-catalog in order, skipping whole games", long_about = None)]
struct Cli {
    /// Player database (defaults to the saved setting, then the data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a raw video title into game, title, part and team
    Parse {
        /// The full video title
        title: String,

        /// Video description, to extract its first line
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Manage the games hidden from the queue
    Skip {
        #[command(subcommand)]
        action: SkipAction,
    },

    /// Manage the cached video catalog
    Videos {
        #[command(subcommand)]
        action: VideosAction,
    },

    /// Show the video playback resumes at
    Play,

    /// Advance to the next video that isn't skipped
    Next,

    /// Save the playback position within the current video
    Record {
        /// Position in milliseconds
        position_ms: u64,
    },

    /// Manage player settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum SkipAction {
    /// Skip every episode of a game
    Add {
        /// Game name, exactly as parsed from the titles
        game: String,
    },

    /// Stop skipping a game
    Remove {
        /// Game name, exactly as parsed from the titles
        game: String,
    },

    /// List skipped games
    List,

    /// Stop skipping all games
    Clear,
}

#[derive(Subcommand)]
enum VideosAction {
    /// Import a catalog export (JSON array of video records)
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// List cached videos, newest first
    List {
        /// Include videos of skipped games
        #[arg(short, long)]
        all: bool,

        /// Maximum number of videos to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Count cached and queued videos
    Count,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the settings file and database in use
    Show,

    /// Print the settings file path
    Path,

    /// Save the database location
    SetDb {
        /// Path to the database file
        path: PathBuf,
    },

    /// Go back to the default database location
    ResetDb,
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let db = cli.db;
    let result = match cli.command {
        Commands::Parse { title, description } => {
            run_parse(&title, description);
            Ok(())
        }
        Commands::Skip { action } => match action {
            SkipAction::Add { game } => run_skip_add(db, &game),
            SkipAction::Remove { game } => run_skip_remove(db, &game),
            SkipAction::List => run_skip_list(db),
            SkipAction::Clear => run_skip_clear(db),
        },
        Commands::Videos { action } => match action {
            VideosAction::Import { file } => run_videos_import(db, &file),
            VideosAction::List { all, limit } => run_videos_list(db, all, limit),
            VideosAction::Count => run_videos_count(db),
        },
        Commands::Play => run_play(db),
        Commands::Next => run_next(db),
        Commands::Record { position_ms } => run_record(db, position_ms),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                run_config_show(db);
                Ok(())
            }
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
            ConfigAction::SetDb { path } => run_config_set_db(&path),
            ConfigAction::ResetDb => run_config_reset_db(),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
