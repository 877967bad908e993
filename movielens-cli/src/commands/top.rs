use movielens_db::{objects, Connection, MovieRanking};

use super::{log_lines, print_json};
use crate::CliError;

/// Reject anything below 1 with the menu's message for `what`.
pub(crate) fn positive(value: Option<i64>, what: &str) -> Result<u32, CliError> {
    value
        .filter(|v| *v >= 1)
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .ok_or_else(|| CliError::input(format!("Please enter a positive value for {what}...")))
}

pub(crate) fn top_lines(movies: &[MovieRanking]) -> Vec<String> {
    movies
        .iter()
        .map(|m| {
            format!(
                "{} : {} ({}), avg rating = {:.2} ({} reviews)",
                m.id(),
                m.title(),
                m.release_year(),
                m.average_rating(),
                m.review_count()
            )
        })
        .collect()
}

pub(crate) fn run_top(conn: &Connection, n: i64, min_reviews: i64, json: bool) -> Result<(), CliError> {
    let n = positive(Some(n), "N")?;
    let min_reviews = positive(Some(min_reviews), "min number of reviews")?;

    let movies = objects::get_top_n_movies(conn, n, min_reviews);
    if json {
        return print_json(&movies);
    }
    log_lines(&top_lines(&movies));
    Ok(())
}
