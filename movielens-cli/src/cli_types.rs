//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "movielens")]
#[command(about = "Browse and update the MovieLens ratings database", long_about = None)]
pub(crate) struct Cli {
    /// Path to MovieLens.db (overrides $MOVIELENS_DB and settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive menu (commands 1-5, x to exit)
    Menu,

    /// Show movie and review counts
    Stats,

    /// Search movies by title (wildcards _ and % supported)
    Search {
        pattern: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show full details for one movie
    Detail {
        movie_id: i64,

        /// Print the movie as JSON
        #[arg(long)]
        json: bool,
    },

    /// Top N movies by average rating
    Top {
        /// Number of movies to list
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Minimum number of reviews a movie needs to be ranked
        #[arg(allow_negative_numbers = true)]
        min_reviews: i64,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a review (rating 0..10) for a movie
    Review {
        movie_id: i64,

        #[arg(allow_negative_numbers = true)]
        rating: i64,
    },

    /// Set or replace a movie's tagline
    Tagline {
        movie_id: i64,

        /// New tagline; an empty string clears it
        tagline: String,
    },

    /// Manage settings (database location)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and the resolved database path
    Show,

    /// Print the settings file path
    Path,

    /// Remember a database path in settings.toml
    SetDb { path: PathBuf },

    /// Forget the saved database path
    ClearDb,
}
