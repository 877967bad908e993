use movielens_db::{objects, Connection};

use super::{format_thousands, log_lines};

/// Lines for the "General stats" block.
pub(crate) fn stats_lines(conn: &Connection) -> Vec<String> {
    let movies = objects::num_movies(conn);
    let reviews = objects::num_reviews(conn);
    vec![
        "General stats:".to_string(),
        format!("  # of movies: {}", format_thousands(movies)),
        format!("  # of reviews: {}", format_thousands(reviews)),
    ]
}

pub(crate) fn run_stats(conn: &Connection) {
    log_lines(&stats_lines(conn));
}
