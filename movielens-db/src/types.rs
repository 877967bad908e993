//! Value types produced by the movie queries.
//!
//! All three are read-only projections built fresh for each call. Fields are
//! private and exposed through accessors so nothing outside the crate can
//! alter a value after it is mapped from a row.

use serde::Serialize;

// ── Search Result ───────────────────────────────────────────────────────────

/// A movie as returned by a title search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    id: i64,
    title: String,
    release_year: String,
}

impl MovieSummary {
    pub(crate) fn new(id: i64, title: String, release_year: Option<String>) -> Self {
        Self {
            id,
            title,
            release_year: release_year.unwrap_or_default(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Four-digit year, or empty when the movie has no release date.
    pub fn release_year(&self) -> &str {
        &self.release_year
    }
}

// ── Ranking ─────────────────────────────────────────────────────────────────

/// A movie in a top-N ranking, with its aggregate rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRanking {
    id: i64,
    title: String,
    release_year: String,
    review_count: i64,
    average_rating: f64,
}

impl MovieRanking {
    pub(crate) fn new(
        id: i64,
        title: String,
        release_year: Option<String>,
        review_count: i64,
        average_rating: f64,
    ) -> Self {
        Self {
            id,
            title,
            release_year: release_year.unwrap_or_default(),
            review_count,
            average_rating,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_year(&self) -> &str {
        &self.release_year
    }

    pub fn review_count(&self) -> i64 {
        self.review_count
    }

    /// Mean rating on the 0..10 scale.
    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }
}

// ── Detail ──────────────────────────────────────────────────────────────────

/// Everything known about a single movie.
///
/// `average_rating` is exactly `0.0` when `review_count` is zero, so callers
/// that need to tell "unrated" apart from "rated zero" must look at
/// `review_count`. Likewise an empty `tagline` covers both "no tagline row"
/// and "tagline set to the empty string".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) release_date: String,
    pub(crate) runtime_minutes: Option<i64>,
    pub(crate) original_language: String,
    pub(crate) budget_usd: i64,
    pub(crate) revenue_usd: i64,
    pub(crate) review_count: i64,
    pub(crate) average_rating: f64,
    pub(crate) tagline: String,
    pub(crate) genres: Vec<String>,
    pub(crate) production_companies: Vec<String>,
}

impl MovieDetail {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Release date as `YYYY-MM-DD`, without a time component.
    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    pub fn runtime_minutes(&self) -> Option<i64> {
        self.runtime_minutes
    }

    pub fn original_language(&self) -> &str {
        &self.original_language
    }

    pub fn budget_usd(&self) -> i64 {
        self.budget_usd
    }

    pub fn revenue_usd(&self) -> i64 {
        self.revenue_usd
    }

    pub fn review_count(&self) -> i64 {
        self.review_count
    }

    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    /// Genre names, sorted ascending.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Production company names, sorted ascending.
    pub fn production_companies(&self) -> &[String] {
        &self.production_companies
    }
}
