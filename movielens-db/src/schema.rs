//! Connection setup and schema bootstrap.
//!
//! The MovieLens dataset ships as a pre-built SQLite file; `open_database`
//! only checks that it has the expected shape. `create_schema` exists so
//! tests and fixtures can build an empty database with the same layout.

use std::path::Path;

use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Database file not found: {0}")]
    Missing(String),
    #[error("Database is missing required table '{0}'")]
    MissingTable(&'static str),
}

/// Tables the queries and operations read or write.
pub const REQUIRED_TABLES: [&str; 7] = [
    "movies",
    "ratings",
    "movie_taglines",
    "genres",
    "movie_genres",
    "companies",
    "movie_production_companies",
];

/// Create all tables and indexes if they don't exist.
///
/// Idempotent, so it can run against an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open an existing MovieLens database at the given path.
///
/// Never creates a new file: a missing path is reported as
/// [`SchemaError::Missing`] rather than silently producing an empty database.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    if !path.is_file() {
        return Err(SchemaError::Missing(path.display().to_string()));
    }

    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    verify_schema(&conn)?;

    log::debug!("Opened MovieLens database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Check that every table in [`REQUIRED_TABLES`] exists.
///
/// SQLite identifiers are case-insensitive and the published dataset uses
/// capitalized names (`Movies`, `Movie_Taglines`), so the match ignores case.
pub fn verify_schema(conn: &Connection) -> Result<(), SchemaError> {
    for table in REQUIRED_TABLES {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master
                           WHERE type = 'table' AND name = ?1 COLLATE NOCASE)",
            params![table],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(SchemaError::MissingTable(table));
        }
    }
    Ok(())
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS movies (
    movie_id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    release_date TEXT,
    runtime INTEGER,
    original_language TEXT,
    budget INTEGER,
    revenue INTEGER
);
CREATE INDEX IF NOT EXISTS idx_movies_title ON movies(title);

-- One row per review; append-only
CREATE TABLE IF NOT EXISTS ratings (
    movie_id INTEGER NOT NULL REFERENCES movies(movie_id),
    rating INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_ratings_movie ON ratings(movie_id);

-- Zero or one row per movie, kept that way by set_tagline
CREATE TABLE IF NOT EXISTS movie_taglines (
    movie_id INTEGER NOT NULL REFERENCES movies(movie_id),
    tagline TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_taglines_movie ON movie_taglines(movie_id);

CREATE TABLE IF NOT EXISTS genres (
    genre_id INTEGER PRIMARY KEY,
    genre_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS movie_genres (
    movie_id INTEGER NOT NULL REFERENCES movies(movie_id),
    genre_id INTEGER NOT NULL REFERENCES genres(genre_id),
    PRIMARY KEY (movie_id, genre_id)
);

CREATE TABLE IF NOT EXISTS companies (
    company_id INTEGER PRIMARY KEY,
    company_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS movie_production_companies (
    movie_id INTEGER NOT NULL REFERENCES movies(movie_id),
    company_id INTEGER NOT NULL REFERENCES companies(company_id),
    PRIMARY KEY (movie_id, company_id)
);
"#;
