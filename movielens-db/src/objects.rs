//! Sentinel-valued entry points for the menu front end.
//!
//! Each function wraps the typed query or operation of the same purpose and
//! never returns an error. Failures are logged and collapsed into the value
//! the caller already handles for the nearest expected outcome:
//!
//! - counts return `-1`
//! - list reads return an empty `Vec`
//! - `get_movie_details` returns `None`
//! - writes return `0` (success is `1`)
//!
//! A caller therefore cannot tell "not found" or "no matches" apart from an
//! internal failure here. Use [`crate::queries`] and [`crate::operations`]
//! directly when that distinction matters.

use rusqlite::Connection;

use crate::operations::{self, OperationError};
use crate::queries;
use crate::types::{MovieDetail, MovieRanking, MovieSummary};

/// Returned by [`num_movies`] and [`num_reviews`] on failure.
pub const COUNT_FAILED: i64 = -1;
/// Returned by the write functions on success.
pub const WRITE_OK: i32 = 1;
/// Returned by the write functions when nothing was written.
pub const WRITE_FAILED: i32 = 0;

/// Number of movies, or [`COUNT_FAILED`].
pub fn num_movies(conn: &Connection) -> i64 {
    queries::num_movies(conn).unwrap_or_else(|e| {
        log::error!("num_movies failed: {e}");
        COUNT_FAILED
    })
}

/// Number of reviews, or [`COUNT_FAILED`].
pub fn num_reviews(conn: &Connection) -> i64 {
    queries::num_reviews(conn).unwrap_or_else(|e| {
        log::error!("num_reviews failed: {e}");
        COUNT_FAILED
    })
}

/// Movies whose title is `LIKE` the pattern, ordered by title.
pub fn get_movies(conn: &Connection, pattern: &str) -> Vec<MovieSummary> {
    queries::search_movies(conn, pattern).unwrap_or_else(|e| {
        log::error!("get_movies failed: {e}");
        Vec::new()
    })
}

/// Details for one movie, or `None` if it does not exist or the lookup failed.
pub fn get_movie_details(conn: &Connection, movie_id: i64) -> Option<MovieDetail> {
    queries::movie_detail(conn, movie_id).unwrap_or_else(|e| {
        log::error!("get_movie_details failed: {e}");
        None
    })
}

/// Top `n` movies with at least `min_num_reviews` reviews.
pub fn get_top_n_movies(conn: &Connection, n: u32, min_num_reviews: u32) -> Vec<MovieRanking> {
    queries::top_movies(conn, n, min_num_reviews).unwrap_or_else(|e| {
        log::error!("get_top_n_movies failed: {e}");
        Vec::new()
    })
}

/// Add a review. Returns [`WRITE_OK`] or [`WRITE_FAILED`].
pub fn add_review(conn: &Connection, movie_id: i64, rating: i64) -> i32 {
    write_code("add_review", operations::add_review(conn, movie_id, rating))
}

/// Insert or replace a tagline. Returns [`WRITE_OK`] or [`WRITE_FAILED`].
pub fn set_tagline(conn: &Connection, movie_id: i64, tagline: &str) -> i32 {
    write_code("set_tagline", operations::set_tagline(conn, movie_id, tagline).map(drop))
}

fn write_code(op: &str, result: Result<(), OperationError>) -> i32 {
    match result {
        Ok(()) => WRITE_OK,
        Err(e) if e.is_expected() => {
            log::debug!("{op}: {e}");
            WRITE_FAILED
        }
        Err(e) => {
            log::error!("{op} failed: {e}");
            WRITE_FAILED
        }
    }
}
