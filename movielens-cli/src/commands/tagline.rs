use movielens_db::{objects, Connection};

use super::detail::NO_SUCH_MOVIE;
use crate::CliError;

/// Set the tagline and return the message to show.
pub(crate) fn set_tagline_message(conn: &Connection, movie_id: i64, tagline: &str) -> &'static str {
    if objects::set_tagline(conn, movie_id, tagline) == objects::WRITE_OK {
        "Tagline successfully set"
    } else {
        NO_SUCH_MOVIE
    }
}

pub(crate) fn run_tagline(conn: &Connection, movie_id: i64, tagline: &str) -> Result<(), CliError> {
    match set_tagline_message(conn, movie_id, tagline) {
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
    fn sets_and_replaces() {
        let conn = seeded_db();
        assert_eq!(set_tagline_message(&conn, 1, "Great film"), "Tagline successfully set");
        assert_eq!(objects::get_movie_details(&conn, 1).unwrap().tagline(), "Great film");

        assert_eq!(set_tagline_message(&conn, 2, ""), "Tagline successfully set");
        assert_eq!(objects::get_movie_details(&conn, 2).unwrap().tagline(), "");
    }

    #[test]
    fn missing_movie_is_reported() {
        let conn = seeded_db();
        assert_eq!(set_tagline_message(&conn, 9999, "Ghost"), NO_SUCH_MOVIE);
        assert!(run_tagline(&conn, 9999, "Ghost").is_err());
    }
}
