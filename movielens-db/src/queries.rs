//! Read queries for the MovieLens database.
//!
//! Provides counts, title search, movie detail, and top-N ranking.

use rusqlite::{params, Connection};

use crate::exec::{select_n_rows, select_one_row};
use crate::operations::OperationError;
use crate::types::{MovieDetail, MovieRanking, MovieSummary};

// ── Statistics ──────────────────────────────────────────────────────────────

/// Total number of movies.
pub fn num_movies(conn: &Connection) -> Result<i64, OperationError> {
    let count = select_one_row(conn, "SELECT COUNT(*) FROM movies", [], |r| r.get(0))?;
    Ok(count.unwrap_or(0))
}

/// Total number of reviews (rating rows) across all movies.
pub fn num_reviews(conn: &Connection) -> Result<i64, OperationError> {
    let count = select_one_row(conn, "SELECT COUNT(*) FROM ratings", [], |r| r.get(0))?;
    Ok(count.unwrap_or(0))
}

// ── Movie Lookups ───────────────────────────────────────────────────────────

/// Whether a movie with this id exists.
pub fn movie_exists(conn: &Connection, movie_id: i64) -> Result<bool, OperationError> {
    let found = select_one_row(
        conn,
        "SELECT movie_id FROM movies WHERE movie_id = ?1",
        params![movie_id],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(found.is_some())
}

/// Search movies whose title matches a SQL `LIKE` pattern.
///
/// `_` matches exactly one character and `%` matches any run, so `"%"`
/// returns every movie. Results are ordered by title using the column's
/// collation; SQLite's default `LIKE` folds ASCII case only. No row limit is
/// applied here.
pub fn search_movies(conn: &Connection, pattern: &str) -> Result<Vec<MovieSummary>, OperationError> {
    let movies = select_n_rows(
        conn,
        "SELECT movie_id, title, strftime('%Y', release_date)
         FROM movies
         WHERE title LIKE ?1
         ORDER BY title",
        params![pattern],
        |row| Ok(MovieSummary::new(row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;
    Ok(movies)
}

/// Fetch full details for one movie, or `None` if no such movie exists.
///
/// Review count, average rating and tagline come from a single grouped row;
/// genres and production companies are fetched separately, each sorted by
/// name.
pub fn movie_detail(conn: &Connection, movie_id: i64) -> Result<Option<MovieDetail>, OperationError> {
    let detail = select_one_row(
        conn,
        "SELECT movies.movie_id, movies.title, date(movies.release_date),
                movies.runtime, movies.original_language, movies.budget,
                movies.revenue, COUNT(ratings.rating), AVG(ratings.rating),
                movie_taglines.tagline
         FROM movies
         LEFT JOIN ratings ON movies.movie_id = ratings.movie_id
         LEFT JOIN movie_taglines ON movies.movie_id = movie_taglines.movie_id
         WHERE movies.movie_id = ?1
         GROUP BY movies.movie_id",
        params![movie_id],
        row_to_detail,
    )?;

    let Some(mut detail) = detail else {
        return Ok(None);
    };

    detail.genres = select_n_rows(
        conn,
        "SELECT DISTINCT genres.genre_name
         FROM movie_genres
         JOIN genres ON movie_genres.genre_id = genres.genre_id
         WHERE movie_genres.movie_id = ?1
         ORDER BY genres.genre_name",
        params![movie_id],
        |row| row.get(0),
    )?;

    detail.production_companies = select_n_rows(
        conn,
        "SELECT DISTINCT companies.company_name
         FROM movie_production_companies
         JOIN companies ON movie_production_companies.company_id = companies.company_id
         WHERE movie_production_companies.movie_id = ?1
         ORDER BY companies.company_name",
        params![movie_id],
        |row| row.get(0),
    )?;

    Ok(Some(detail))
}

// ── Rankings ────────────────────────────────────────────────────────────────

/// The `n` highest-rated movies having at least `min_reviews` reviews.
///
/// Ordered by average rating descending; equal averages fall back to movie
/// id ascending so the order is deterministic. Inputs are not validated:
/// `n == 0` yields an empty list and `min_reviews == 0` behaves like `1`
/// since only movies with ratings take part in the join.
pub fn top_movies(
    conn: &Connection,
    n: u32,
    min_reviews: u32,
) -> Result<Vec<MovieRanking>, OperationError> {
    let movies = select_n_rows(
        conn,
        "SELECT movies.movie_id, movies.title, strftime('%Y', movies.release_date),
                COUNT(ratings.rating), AVG(ratings.rating)
         FROM movies
         JOIN ratings ON movies.movie_id = ratings.movie_id
         GROUP BY movies.movie_id
         HAVING COUNT(ratings.rating) >= ?1
         ORDER BY AVG(ratings.rating) DESC, movies.movie_id ASC
         LIMIT ?2",
        params![min_reviews, n],
        |row| {
            Ok(MovieRanking::new(
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
            ))
        },
    )?;
    Ok(movies)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_detail(row: &rusqlite::Row<'_>) -> rusqlite::Result<MovieDetail> {
    let review_count: Option<i64> = row.get(7)?;
    let review_count = review_count.unwrap_or(0);
    let average_rating: Option<f64> = row.get(8)?;
    // AVG over zero rows is NULL; pin it to 0.0 rather than leaving it absent.
    let average_rating = if review_count == 0 {
        0.0
    } else {
        average_rating.unwrap_or(0.0)
    };

    Ok(MovieDetail {
        id: row.get(0)?,
        title: row.get(1)?,
        release_date: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        runtime_minutes: row.get(3)?,
        original_language: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        budget_usd: row.get::<_, Option<i64>>(5)?.unwrap_or(0),
        revenue_usd: row.get::<_, Option<i64>>(6)?.unwrap_or(0),
        review_count,
        average_rating,
        tagline: row.get::<_, Option<String>>(9)?.unwrap_or_default(),
        genres: Vec::new(),
        production_companies: Vec::new(),
    })
}
