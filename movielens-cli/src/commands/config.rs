use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings;
use crate::CliError;

/// Show the settings file and which database would be opened.
pub(crate) fn run_config_show(cli_db: Option<PathBuf>) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "MovieLens Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = if cli_db.is_some() {
        "--db flag".to_string()
    } else if std::env::var_os(settings::DB_ENV_VAR).is_some_and(|v| !v.is_empty()) {
        format!("${}", settings::DB_ENV_VAR)
    } else {
        "settings or default".to_string()
    };
    let db = settings::resolve_database_path(cli_db);
    let status = if db.is_file() { "(exists)" } else { "(missing)" };
    log::info!("  Database:      {} {} [{}]", db.display(), status, source);

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {line}");
        }
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Save a database path. Relative paths are made absolute first so the
/// setting means the same thing from any working directory.
pub(crate) fn run_config_set_db(path: &Path) -> Result<(), CliError> {
    let absolute = std::path::absolute(path)
        .map_err(|e| CliError::config(format!("Cannot resolve {}: {}", path.display(), e)))?;
    if !absolute.is_file() {
        log::warn!("{} does not exist yet", absolute.display());
    }
    settings::save_database_path(Some(&absolute))
        .map_err(|e| CliError::config(format!("Failed to write settings: {e}")))?;
    log::info!("Database path set to {}", absolute.display());
    Ok(())
}

pub(crate) fn run_config_clear_db() -> Result<(), CliError> {
    settings::save_database_path(None)
        .map_err(|e| CliError::config(format!("Failed to write settings: {e}")))?;
    log::info!("Saved database path cleared");
    Ok(())
}
