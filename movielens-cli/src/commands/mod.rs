pub(crate) mod config;
pub(crate) mod detail;
pub(crate) mod menu;
pub(crate) mod review;
pub(crate) mod search;
pub(crate) mod stats;
pub(crate) mod tagline;
pub(crate) mod top;

use std::path::Path;

use movielens_db::Connection;
use serde::Serialize;

use crate::CliError;

/// Searches matching more movies than this are summarized, not listed.
pub(crate) const DISPLAY_LIMIT: usize = 100;

/// Open the MovieLens database, mapping failures to a CLI error.
pub(crate) fn open_connection(db_path: &Path) -> Result<Connection, CliError> {
    movielens_db::open_database(db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open MovieLens database {}: {}",
            db_path.display(),
            e
        ))
    })
}

/// Emit rendered lines through the logger.
pub(crate) fn log_lines(lines: &[String]) {
    for line in lines {
        log::info!("{line}");
    }
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::other(format!("Failed to serialize output: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Parse a whole number typed at a prompt.
pub(crate) fn parse_int(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Format an integer with `,` thousands separators.
pub(crate) fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
