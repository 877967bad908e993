//! movielens CLI
//!
//! Menu-driven and one-shot access to the MovieLens ratings database.

mod cli_types;
mod commands;
mod error;
mod logger;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Emit an empty info line.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let command = cli.command.unwrap_or(Commands::Menu);

    if let Commands::Config { action } = command {
        return match action {
            ConfigAction::Show => {
                commands::config::run_config_show(cli.db);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetDb { path } => commands::config::run_config_set_db(&path),
            ConfigAction::ClearDb => commands::config::run_config_clear_db(),
        };
    }

    let db_path = settings::resolve_database_path(cli.db);
    let conn = commands::open_connection(&db_path)?;

    match command {
        Commands::Menu => {
            let stdin = std::io::stdin();
            commands::menu::run_menu(&conn, stdin.lock(), std::io::stdout().lock())
        }
        Commands::Stats => {
            commands::stats::run_stats(&conn);
            Ok(())
        }
        Commands::Search { pattern, json } => commands::search::run_search(&conn, &pattern, json),
        Commands::Detail { movie_id, json } => commands::detail::run_detail(&conn, movie_id, json),
        Commands::Top {
            n,
            min_reviews,
            json,
        } => commands::top::run_top(&conn, n, min_reviews, json),
        Commands::Review { movie_id, rating } => {
            commands::review::run_review(&conn, movie_id, rating)
        }
        Commands::Tagline { movie_id, tagline } => {
            commands::tagline::run_tagline(&conn, movie_id, &tagline)
        }
        Commands::Config { .. } => unreachable!("handled above"),
    }
}
