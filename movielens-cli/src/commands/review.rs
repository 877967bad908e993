use movielens_db::{objects, Connection, RATING_RANGE};

use super::detail::NO_SUCH_MOVIE;
use crate::CliError;

/// Check a rating before it is handed to the database.
pub(crate) fn valid_rating(rating: Option<i64>) -> Result<i64, CliError> {
    rating
        .filter(|r| RATING_RANGE.contains(r))
        .ok_or_else(|| CliError::input("Invalid rating..."))
}

/// Add the review and return the message to show.
pub(crate) fn add_review_message(conn: &Connection, movie_id: i64, rating: i64) -> &'static str {
    if objects::add_review(conn, movie_id, rating) == objects::WRITE_OK {
        "Review successfully inserted"
    } else {
        NO_SUCH_MOVIE
    }
}

pub(crate) fn run_review(conn: &Connection, movie_id: i64, rating: i64) -> Result<(), CliError> {
    let rating = valid_rating(Some(rating))?;
    match add_review_message(conn, movie_id, rating) {
        NO_SUCH_MOVIE => Err(CliError::input(NO_SUCH_MOVIE)),
        msg => {
            log::info!("{msg}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::seeded_db;

    #[test]
    fn rating_bounds() {
        assert_eq!(valid_rating(Some(0)).unwrap(), 0);
        assert_eq!(valid_rating(Some(10)).unwrap(), 10);
        assert!(valid_rating(Some(11)).is_err());
        assert!(valid_rating(Some(-1)).is_err());
        assert_eq!(valid_rating(None).unwrap_err().to_string(), "Invalid rating...");
    }

    #[test]
    fn adds_review_to_existing_movie() {
        let conn = seeded_db();
        assert_eq!(add_review_message(&conn, 1, 9), "Review successfully inserted");
        let detail = objects::get_movie_details(&conn, 1).unwrap();
        assert_eq!(detail.review_count(), 4);
        assert!((detail.average_rating() - 7.5).abs() < 1e-9);
    }

    #[test]
    fn missing_movie_is_reported() {
        let conn = seeded_db();
        assert_eq!(add_review_message(&conn, 9999, 5), NO_SUCH_MOVIE);
        assert!(run_review(&conn, 9999, 5).is_err());
        assert_eq!(objects::num_reviews(&conn), 4);
    }

    #[test]
    fn out_of_range_never_reaches_database() {
        let conn = seeded_db();
        let err = run_review(&conn, 1, 42).unwrap_err();
        assert_eq!(err.to_string(), "Invalid rating...");
        assert_eq!(objects::num_reviews(&conn), 4);
    }
}
