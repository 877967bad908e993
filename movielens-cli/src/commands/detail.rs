use movielens_db::{objects, Connection, MovieDetail};

use super::{format_thousands, log_lines, print_json};
use crate::CliError;

pub(crate) const NO_SUCH_MOVIE: &str = "No such movie...";

/// Render one movie's detail block, or the not-found notice.
pub(crate) fn detail_lines(detail: Option<&MovieDetail>) -> Vec<String> {
    let Some(d) = detail else {
        return vec![NO_SUCH_MOVIE.to_string()];
    };

    let runtime = d
        .runtime_minutes()
        .map_or_else(|| "unknown".to_string(), |m| m.to_string());

    vec![
        format!("{} : {}", d.id(), d.title()),
        format!("  Release date: {}", d.release_date()),
        format!("  Runtime: {runtime} (mins)"),
        format!("  Orig language: {}", d.original_language()),
        format!("  Budget: ${} (USD)", format_thousands(d.budget_usd())),
        format!("  Revenue: ${} (USD)", format_thousands(d.revenue_usd())),
        format!("  Num reviews: {}", d.review_count()),
        format!("  Avg rating: {:.2} (0..10)", d.average_rating()),
        format!("  Genres: {}", comma_list(d.genres())),
        format!("  Production companies: {}", comma_list(d.production_companies())),
        format!("  Tagline: {}", d.tagline()),
    ]
}

/// Each name followed by ", ", matching the menu's long-standing layout.
fn comma_list(names: &[String]) -> String {
    names.iter().map(|n| format!("{n}, ")).collect()
}

pub(crate) fn run_detail(conn: &Connection, movie_id: i64, json: bool) -> Result<(), CliError> {
    let detail = objects::get_movie_details(conn, movie_id);
    // A missing movie is an answer, not a failure: `null` in JSON mode.
    if json {
        return print_json(&detail);
    }
    log_lines(&detail_lines(detail.as_ref()));
    Ok(())
}
