//! Console logger backing the `log` macros.
//!
//! Info goes to stdout undecorated, so `log::info!` doubles as normal command
//! output. Warnings and errors go to stderr with a colored prefix. With
//! `--verbose`, debug records are shown too, prefixed with a timestamp.
//! `--logfile` mirrors every emitted line to a file with ANSI codes stripped.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;

struct CliLogger {
    level: LevelFilter,
    verbose: bool,
    logfile: Option<Mutex<File>>,
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record, self.verbose);
        match record.level() {
            Level::Info => println!("{line}"),
            _ => eprintln!("{line}"),
        }

        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

fn format_record(record: &Record<'_>, verbose: bool) -> String {
    let message = match record.level() {
        Level::Error => format!(
            "{} {}",
            "error:".if_supports_color(Stderr, |t| t.red()),
            record.args()
        ),
        Level::Warn => format!(
            "{} {}",
            "warning:".if_supports_color(Stderr, |t| t.yellow()),
            record.args()
        ),
        Level::Info => record.args().to_string(),
        Level::Debug | Level::Trace => format!(
            "{}",
            record.args().if_supports_color(Stderr, |t| t.dimmed())
        ),
    };

    if verbose {
        format!(
            "{} {:<5} {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            message
        )
    } else {
        message
    }
}

/// Pick the level filter for the given flags. `--quiet` wins over `--verbose`.
fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the logger. Call once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let logfile = logfile
        .map(|path| {
            File::create(path).map_err(|e| {
                CliError::config(format!("Cannot open log file {}: {}", path.display(), e))
            })
        })
        .transpose()?
        .map(Mutex::new);

    let level = level_for(quiet, verbose);
    log::set_boxed_logger(Box::new(CliLogger {
        level,
        verbose,
        logfile,
    }))
    .map_err(|e| CliError::other(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
