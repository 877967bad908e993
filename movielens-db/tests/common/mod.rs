use movielens_db::open_memory;
use rusqlite::Connection;

/// In-memory database seeded with a handful of movies:
///
/// | id | title     | reviews | avg | tagline |
/// |----|-----------|---------|-----|---------|
/// | 1  | Zulu      | 2       | 9.0 |         |
/// | 2  | Bravo     | 3       | 9.0 | yes     |
/// | 3  | bravo two | 0       |     |         |
/// | 5  | Alpha     | 3       | 7.0 |         |
/// | 7  | Charlie   | 1       | 4.0 |         |
pub fn setup_db() -> Connection {
    let conn = open_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO movies (movie_id, title, release_date, runtime, original_language, budget, revenue) VALUES
             (1, 'Zulu', '2001-05-04 00:00:00', 95, 'en', 0, 0),
             (2, 'Bravo', '1999-12-31', 110, 'fr', 500, 750),
             (3, 'bravo two', NULL, NULL, NULL, NULL, NULL),
             (5, 'Alpha', '1995-10-30 00:00:00', 120, 'en', 1000000, 2500000),
             (7, 'Charlie', '2010-01-01', 88, 'de', 10, 20);

         INSERT INTO ratings (movie_id, rating) VALUES
             (1, 9), (1, 9),
             (2, 8), (2, 10), (2, 9),
             (5, 6), (5, 7), (5, 8),
             (7, 4);

         INSERT INTO movie_taglines (movie_id, tagline) VALUES (2, 'Existing line');

         INSERT INTO genres (genre_id, genre_name) VALUES (1, 'Drama'), (2, 'Comedy'), (3, 'Action');
         INSERT INTO movie_genres (movie_id, genre_id) VALUES (5, 1), (5, 2), (2, 3);

         INSERT INTO companies (company_id, company_name) VALUES (1, 'Pixar'), (2, 'Acme');
         INSERT INTO movie_production_companies (movie_id, company_id) VALUES (5, 1), (5, 2);",
    )
    .unwrap();
    conn
}

/// Number of rating rows for a movie.
#[allow(dead_code)]
pub fn rating_rows(conn: &Connection, movie_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM ratings WHERE movie_id = ?1",
        [movie_id],
        |row| row.get(0),
    )
    .unwrap()
}

/// Number of tagline rows for a movie.
#[allow(dead_code)]
pub fn tagline_rows(conn: &Connection, movie_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM movie_taglines WHERE movie_id = ?1",
        [movie_id],
        |row| row.get(0),
    )
    .unwrap()
}
