//! Settings file handling and database path resolution.
//!
//! Settings live in `~/.config/movielens/settings.toml`:
//!
//! ```toml
//! [database]
//! path = "/data/MovieLens.db"
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the saved database path.
pub(crate) const DB_ENV_VAR: &str = "MOVIELENS_DB";

/// Used when nothing else names a database.
pub(crate) const DEFAULT_DB_FILE: &str = "MovieLens.db";

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("movielens").join("settings.toml")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `$MOVIELENS_DB`
/// 3. Saved `database.path` in `settings.toml`
/// 4. `MovieLens.db` in the current directory
pub(crate) fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    let env = std::env::var_os(DB_ENV_VAR).map(PathBuf::from);
    resolve_with(cli_override, env, &settings_path())
}

fn resolve_with(cli_override: Option<PathBuf>, env: Option<PathBuf>, settings: &Path) -> PathBuf {
    cli_override
        .or(env.filter(|p| !p.as_os_str().is_empty()))
        .or_else(|| load_database_path(settings))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

/// Read `database.path` from a settings file, if set.
fn load_database_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the database path in `settings.toml`.
pub(crate) fn save_database_path(path: Option<&Path>) -> io::Result<()> {
    save_database_path_to(&settings_path(), path)
}

/// Uses `toml::Value` for a surgical update so unrelated keys survive.
fn save_database_path_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;

    match path {
        Some(p) => {
            db_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
