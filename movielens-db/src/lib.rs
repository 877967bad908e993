//! SQLite access layer for the MovieLens dataset.
//!
//! Maps query rows into movie value types, and provides the two mutations
//! (adding a review, setting a tagline). [`objects`] exposes the same
//! operations with sentinel return values for callers that never branch on
//! errors.

pub mod exec;
pub mod objects;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod types;

pub use rusqlite::Connection;

pub use operations::{add_review, set_tagline, OperationError, TaglineChange, RATING_RANGE};
pub use queries::{movie_detail, movie_exists, num_movies, num_reviews, search_movies, top_movies};
pub use schema::{open_database, open_memory, SchemaError};
pub use types::{MovieDetail, MovieRanking, MovieSummary};
