//! Tuning parameters for the hybrid recommender.

use serde::Deserialize;

/// All thresholds and counts used by the two recommendation paths.
///
/// Defaults are tuned for the full MovieLens export; tests and small
/// datasets override them per field.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// A movie needs strictly more ratings than this to stay in the matrix
    pub min_ratings_per_movie: usize,
    /// Another user must share strictly more rated movies than this with
    /// the seed user to be a similarity candidate
    pub min_shared_movies: usize,
    /// Minimum Pearson correlation for a user to count as similar
    pub min_correlation: f64,
    /// Number of user-based recommendations to return
    pub user_based_count: usize,
    /// Number of item-based recommendations to return (after dropping the
    /// reference movie itself)
    pub item_based_count: usize,
    /// Rating value treated as "perfect" when picking the reference movie
    pub perfect_rating: f32,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            min_ratings_per_movie: 1000,
            min_shared_movies: 20,
            min_correlation: 0.65,
            user_based_count: 5,
            item_based_count: 5,
            perfect_rating: 5.0,
        }
    }
}
