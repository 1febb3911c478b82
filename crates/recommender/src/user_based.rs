//! User-based scorer - weighted ratings from similar users.
//!
//! ## Algorithm
//! 1. For each similar user, weight every rating they gave by their
//!    correlation with the seed: weighted_rating = correlation × rating
//! 2. Group by movie id, take the mean weighted rating per movie
//! 3. Sort descending by score, take the top N, map ids to titles
//!
//! The mean in step 2 is over however many similar users rated that movie,
//! deliberately not normalized by the full similar-user count. A movie
//! rated 5.0 by one 0.9-correlated user outranks one rated 4.0 by all of
//! them; that bias toward small, highly-correlated support is part of the
//! scoring model.

use crate::similarity::SimilarUser;
use data_loader::{DataIndex, MovieId};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// One ranked recommendation from the user-based path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    /// Mean weighted rating across the similar users who rated this movie
    pub score: f64,
}

/// Score movies by the weighted ratings of similar users.
///
/// Returns at most `limit` recommendations, best score first, ties broken
/// by ascending movie id. An empty `similar_users` slice yields an empty
/// list.
#[instrument(skip(similar_users, index), fields(similar_users = similar_users.len()))]
pub fn recommend_user_based(
    similar_users: &[SimilarUser],
    index: &DataIndex,
    limit: usize,
) -> Vec<Recommendation> {
    // movie id → (sum of weighted ratings, count of contributing users)
    let mut scores: HashMap<MovieId, (f64, u32)> = HashMap::new();

    for similar in similar_users {
        for rating in index.get_user_ratings(similar.user_id) {
            let weighted = similar.correlation * rating.rating as f64;
            let entry = scores.entry(rating.movie_id).or_insert((0.0, 0));
            entry.0 += weighted;
            entry.1 += 1;
        }
    }

    let mut ranked: Vec<(MovieId, f64)> = scores
        .into_iter()
        .map(|(movie_id, (sum, count))| (movie_id, sum / count as f64))
        .collect();

    // Descending by score, ascending movie id on ties (deterministic)
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(limit);

    // Map ids back to titles; ids missing from the movie table drop out
    let recommendations: Vec<Recommendation> = ranked
        .into_iter()
        .filter_map(|(movie_id, score)| {
            let title = index.get_title(movie_id)?.to_string();
            Some(Recommendation {
                movie_id,
                title,
                score,
            })
        })
        .collect();

    debug!(
        recommendations = recommendations.len(),
        "user-based scoring complete"
    );
    recommendations
}
