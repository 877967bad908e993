//! Write operations: adding reviews and setting taglines.

use rusqlite::{params, Connection, Transaction, TransactionBehavior};
use thiserror::Error;

use crate::exec::{perform_action, select_one_row};
use crate::queries::movie_exists;

/// Lowest and highest rating a review may carry.
pub const RATING_RANGE: std::ops::RangeInclusive<i64> = 0..=10;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
    #[error("Rating {rating} is outside 0..=10")]
    RatingOutOfRange { rating: i64 },
}

impl OperationError {
    fn movie_not_found(movie_id: i64) -> Self {
        Self::NotFound {
            entity_type: "movie".to_string(),
            id: movie_id.to_string(),
        }
    }

    /// True for outcomes the caller caused (unknown id, bad rating), as
    /// opposed to failures inside SQLite.
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::Sqlite(_))
    }
}

/// What `set_tagline` did to the tagline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaglineChange {
    Inserted,
    Updated,
}

// ── Review Operations ───────────────────────────────────────────────────────

/// Append one review for a movie.
///
/// The existence check and the insert are a single statement, so a review
/// can never be attached to a movie that does not exist.
pub fn add_review(conn: &Connection, movie_id: i64, rating: i64) -> Result<(), OperationError> {
    if !RATING_RANGE.contains(&rating) {
        return Err(OperationError::RatingOutOfRange { rating });
    }

    let inserted = perform_action(
        conn,
        "INSERT INTO ratings (movie_id, rating)
         SELECT movie_id, ?2 FROM movies WHERE movie_id = ?1",
        params![movie_id, rating],
    )?;
    if inserted == 0 {
        return Err(OperationError::movie_not_found(movie_id));
    }

    log::debug!("Added rating {rating} to movie {movie_id}");
    Ok(())
}

// ── Tagline Operations ──────────────────────────────────────────────────────

/// Set a movie's tagline, replacing any existing one.
///
/// Leaves exactly one tagline row for the movie. The lookup and the
/// insert/update run in one immediate transaction so concurrent writers
/// cannot both take the insert branch. When the caller already has a
/// transaction open, the work joins it instead. An empty tagline is stored
/// as-is.
pub fn set_tagline(
    conn: &Connection,
    movie_id: i64,
    tagline: &str,
) -> Result<TaglineChange, OperationError> {
    let change = if conn.is_autocommit() {
        let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
        let change = write_tagline(&tx, movie_id, tagline)?;
        tx.commit()?;
        change
    } else {
        write_tagline(conn, movie_id, tagline)?
    };

    log::debug!("Tagline for movie {movie_id}: {change:?}");
    Ok(change)
}

/// Insert or update the tagline row. Writes at most one statement, so a
/// failure leaves nothing behind for the enclosing transaction.
fn write_tagline(
    conn: &Connection,
    movie_id: i64,
    tagline: &str,
) -> Result<TaglineChange, OperationError> {
    if !movie_exists(conn, movie_id)? {
        return Err(OperationError::movie_not_found(movie_id));
    }

    let existing = select_one_row(
        conn,
        "SELECT tagline FROM movie_taglines WHERE movie_id = ?1",
        params![movie_id],
        |row| row.get::<_, Option<String>>(0),
    )?;

    let change = match existing {
        None => {
            perform_action(
                conn,
                "INSERT INTO movie_taglines (movie_id, tagline) VALUES (?1, ?2)",
                params![movie_id, tagline],
            )?;
            TaglineChange::Inserted
        }
        Some(_) => {
            perform_action(
                conn,
                "UPDATE movie_taglines SET tagline = ?2 WHERE movie_id = ?1",
                params![movie_id, tagline],
            )?;
            TaglineChange::Updated
        }
    };
    Ok(change)
}
