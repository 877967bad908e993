mod common;

use common::{rating_rows, setup_db, tagline_rows};
use movielens_db::*;

// ── Reviews ─────────────────────────────────────────────────────────────────

#[test]
fn add_review_updates_count_and_average() {
    let conn = setup_db();
    add_review(&conn, 5, 9).unwrap();

    let detail = movie_detail(&conn, 5).unwrap().unwrap();
    assert_eq!(detail.review_count(), 4);
    // (6 + 7 + 8 + 9) / 4
    assert!((detail.average_rating() - 7.5).abs() < 1e-9);
    assert_eq!(num_reviews(&conn).unwrap(), 10);
}

#[test]
fn add_review_first_rating_for_unrated_movie() {
    let conn = setup_db();
    add_review(&conn, 3, 0).unwrap();

    let detail = movie_detail(&conn, 3).unwrap().unwrap();
    assert_eq!(detail.review_count(), 1);
    assert_eq!(detail.average_rating(), 0.0);
}

#[test]
fn add_review_missing_movie_is_not_found() {
    let conn = setup_db();
    let err = add_review(&conn, 9999, 5).unwrap_err();
    assert!(matches!(err, OperationError::NotFound { ref id, .. } if id == "9999"));
    assert!(err.is_expected());
    assert_eq!(num_reviews(&conn).unwrap(), 9);
    assert_eq!(rating_rows(&conn, 9999), 0);
}

#[test]
fn add_review_rejects_out_of_range() {
    let conn = setup_db();
    for rating in [-1, 11, 100] {
        let err = add_review(&conn, 5, rating).unwrap_err();
        assert!(matches!(err, OperationError::RatingOutOfRange { rating: r } if r == rating));
    }
    assert_eq!(rating_rows(&conn, 5), 3);
}

#[test]
fn add_review_accepts_range_bounds() {
    let conn = setup_db();
    add_review(&conn, 7, 0).unwrap();
    add_review(&conn, 7, 10).unwrap();
    assert_eq!(rating_rows(&conn, 7), 3);
}

// ── Taglines ────────────────────────────────────────────────────────────────

#[test]
fn set_tagline_inserts_when_absent() {
    let conn = setup_db();
    let change = set_tagline(&conn, 5, "Great film").unwrap();
    assert_eq!(change, TaglineChange::Inserted);
    assert_eq!(tagline_rows(&conn, 5), 1);

    let detail = movie_detail(&conn, 5).unwrap().unwrap();
    assert_eq!(detail.tagline(), "Great film");
}

#[test]
fn set_tagline_updates_in_place() {
    let conn = setup_db();
    set_tagline(&conn, 5, "Great film").unwrap();
    let change = set_tagline(&conn, 5, "Even better").unwrap();
    assert_eq!(change, TaglineChange::Updated);
    assert_eq!(tagline_rows(&conn, 5), 1);

    let detail = movie_detail(&conn, 5).unwrap().unwrap();
    assert_eq!(detail.tagline(), "Even better");
}

#[test]
fn set_tagline_replaces_existing_row() {
    let conn = setup_db();
    let change = set_tagline(&conn, 2, "New line").unwrap();
    assert_eq!(change, TaglineChange::Updated);
    assert_eq!(tagline_rows(&conn, 2), 1);
    assert_eq!(movie_detail(&conn, 2).unwrap().unwrap().tagline(), "New line");
}

#[test]
fn set_tagline_empty_string_is_stored() {
    let conn = setup_db();
    set_tagline(&conn, 5, "Great film").unwrap();
    set_tagline(&conn, 5, "").unwrap();
    assert_eq!(tagline_rows(&conn, 5), 1);

    let stored: String = conn
        .query_row(
            "SELECT tagline FROM movie_taglines WHERE movie_id = 5",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "");
    assert_eq!(movie_detail(&conn, 5).unwrap().unwrap().tagline(), "");
}

#[test]
fn set_tagline_missing_movie_is_not_found() {
    let conn = setup_db();
    let err = set_tagline(&conn, 9999, "Ghost").unwrap_err();
    assert!(matches!(err, OperationError::NotFound { .. }));
    assert_eq!(tagline_rows(&conn, 9999), 0);
}

#[test]
fn set_tagline_leaves_no_open_transaction() {
    let conn = setup_db();
    set_tagline(&conn, 9999, "Ghost").unwrap_err();
    assert!(conn.is_autocommit());
    set_tagline(&conn, 5, "After a failure").unwrap();
    assert!(conn.is_autocommit());
}

#[test]
fn set_tagline_on_file_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        schema::create_schema(&conn).unwrap();
        conn.execute("INSERT INTO movies (movie_id, title) VALUES (1, 'Solo')", [])
            .unwrap();
    }

    let conn = open_database(&path).unwrap();
    set_tagline(&conn, 1, "Persisted").unwrap();
    drop(conn);

    let conn = open_database(&path).unwrap();
    assert_eq!(movie_detail(&conn, 1).unwrap().unwrap().tagline(), "Persisted");
}

#[test]
fn set_tagline_joins_callers_transaction() {
    let conn = setup_db();
    conn.execute_batch("BEGIN").unwrap();

    add_review(&conn, 5, 9).unwrap();
    let change = set_tagline(&conn, 5, "Inside").unwrap();
    assert_eq!(change, TaglineChange::Inserted);
    assert!(!conn.is_autocommit());

    conn.execute_batch("ROLLBACK").unwrap();
    assert_eq!(tagline_rows(&conn, 5), 0);
    assert_eq!(rating_rows(&conn, 5), 3);
}

#[test]
fn set_tagline_in_callers_transaction_missing_movie() {
    let conn = setup_db();
    conn.execute_batch("BEGIN").unwrap();
    let err = set_tagline(&conn, 9999, "Ghost").unwrap_err();
    assert!(matches!(err, OperationError::NotFound { .. }));
    assert!(!conn.is_autocommit());
    conn.execute_batch("COMMIT").unwrap();
}

#[test]
fn concurrent_set_tagline_keeps_one_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        schema::create_schema(&conn).unwrap();
        conn.execute("INSERT INTO movies (movie_id, title) VALUES (1, 'Solo')", [])
            .unwrap();
    }

    let handles: Vec<_> = (0..8)
        .map(|thread| {
            let path = path.clone();
            std::thread::spawn(move || {
                let conn = open_database(&path).unwrap();
                conn.busy_timeout(std::time::Duration::from_secs(30)).unwrap();
                for i in 0..20 {
                    set_tagline(&conn, 1, &format!("thread {thread} write {i}")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let conn = open_database(&path).unwrap();
    assert_eq!(tagline_rows(&conn, 1), 1);
    assert!(movie_detail(&conn, 1).unwrap().unwrap().tagline().starts_with("thread "));
}

// ── Walkthrough ─────────────────────────────────────────────────────────────

#[test]
fn review_and_tagline_walkthrough() {
    let conn = setup_db();

    add_review(&conn, 5, 9).unwrap();
    let detail = movie_detail(&conn, 5).unwrap().unwrap();
    assert_eq!(detail.review_count(), 4);

    set_tagline(&conn, 5, "Great film").unwrap();
    assert_eq!(movie_detail(&conn, 5).unwrap().unwrap().tagline(), "Great film");

    set_tagline(&conn, 5, "").unwrap();
    assert_eq!(movie_detail(&conn, 5).unwrap().unwrap().tagline(), "");

    assert!(add_review(&conn, 9999, 5).is_err());
    assert_eq!(num_reviews(&conn).unwrap(), 10);
}
