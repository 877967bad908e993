use movielens_db::{objects, Connection, MovieSummary};

use super::{log_lines, print_json, DISPLAY_LIMIT};
use crate::CliError;

/// Render search results, listing them only when there are at most
/// [`DISPLAY_LIMIT`].
pub(crate) fn search_lines(movies: &[MovieSummary]) -> Vec<String> {
    let mut lines = vec![format!("# of movies found: {}", movies.len())];
    if movies.len() > DISPLAY_LIMIT {
        lines.push(String::new());
        lines.push(
            "There are too many movies to display, please narrow your search and try again..."
                .to_string(),
        );
    } else if !movies.is_empty() {
        lines.push(String::new());
        lines.extend(
            movies
                .iter()
                .map(|m| format!("{} : {} ({})", m.id(), m.title(), m.release_year())),
        );
    }
    lines
}

pub(crate) fn run_search(conn: &Connection, pattern: &str, json: bool) -> Result<(), CliError> {
    let movies = objects::get_movies(conn, pattern);
    if json {
        return print_json(&movies);
    }
    log_lines(&search_lines(&movies));
    Ok(())
}
