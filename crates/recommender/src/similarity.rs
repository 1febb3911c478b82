//! Similarity finder - users who rate like the seed user.
//!
//! ## Algorithm
//! 1. Collect the columns the seed user has rated
//! 2. For every other user, count how many of those columns they also
//!    rated; keep users above the shared-movie threshold
//! 3. Pearson-correlate each survivor against the seed (pairwise-complete,
//!    so the shared columns are exactly the intersection of the two rows)
//! 4. Keep correlations at or above the threshold, drop undefined ones
//! 5. Sort descending by correlation, ties by ascending user id
//!
//! The seed user is never part of its own result. Symmetric (a,b)/(b,a)
//! duplicates cannot arise: only (seed, other) pairs are ever produced.

use crate::error::{RecommendError, Result};
use data_loader::UserId;
use matrix::{RatingMatrix, pearson_sparse};
use serde::Serialize;
use tracing::{debug, instrument};

/// One row of the similarity result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarUser {
    pub user_id: UserId,
    pub correlation: f64,
}

/// Finds users whose rating history correlates with a seed user's
pub struct SimilarityFinder {
    /// Minimum number of co-rated movies (strictly greater than)
    min_shared_movies: usize,
    /// Minimum correlation to keep a user
    min_correlation: f64,
}

impl SimilarityFinder {
    /// Create a finder with the default thresholds (20 shared movies, 0.65)
    pub fn new() -> Self {
        Self {
            min_shared_movies: 20,
            min_correlation: 0.65,
        }
    }

    /// Configure the shared-movie threshold (default: 20)
    pub fn with_min_shared_movies(mut self, min: usize) -> Self {
        self.min_shared_movies = min;
        self
    }

    /// Configure the correlation threshold (default: 0.65)
    pub fn with_min_correlation(mut self, min: f64) -> Self {
        self.min_correlation = min;
        self
    }

    /// Find users similar to `seed_user`, best match first.
    ///
    /// An empty result is not an error: it just means nobody cleared the
    /// thresholds. `UserNotFound` only fires when the seed has no row in
    /// the matrix at all.
    #[instrument(skip(self, matrix))]
    pub fn find_similar_users(
        &self,
        matrix: &RatingMatrix,
        seed_user: UserId,
    ) -> Result<Vec<SimilarUser>> {
        let seed_row = matrix
            .user_row(seed_user)
            .ok_or(RecommendError::UserNotFound { user_id: seed_user })?;

        let mut candidates = 0usize;
        let mut similar: Vec<SimilarUser> = Vec::new();

        for (user_id, row) in matrix.rows() {
            if user_id == seed_user {
                continue;
            }

            // Overlap with the seed's rated columns. Iterating the seed row
            // restricts the count to exactly those columns.
            let shared = seed_row.keys().filter(|col| row.contains_key(col)).count();
            if shared <= self.min_shared_movies {
                continue;
            }
            candidates += 1;

            // Undefined correlation (tiny overlap, flat ratings) drops the
            // pair entirely; it is not a zero.
            let Some(correlation) = pearson_sparse(seed_row, row) else {
                continue;
            };
            if correlation >= self.min_correlation {
                similar.push(SimilarUser {
                    user_id,
                    correlation,
                });
            }
        }

        // Descending by correlation, ascending user id on ties
        similar.sort_by(|a, b| {
            b.correlation
                .partial_cmp(&a.correlation)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        debug!(
            candidates,
            similar = similar.len(),
            "similarity search complete"
        );
        Ok(similar)
    }
}

impl Default for SimilarityFinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{DataIndex, Movie, Rating};
    use matrix::MatrixBuilder;

    fn insert_ratings(index: &mut DataIndex, user_id: u32, ratings: &[(u32, f32)]) {
        for &(movie_id, value) in ratings {
            index.insert_rating(Rating {
                user_id,
                movie_id,
                rating: value,
                timestamp: 0,
            });
        }
    }

    fn create_test_matrix() -> RatingMatrix {
        let mut index = DataIndex::new();
        for movie_id in 1..=4 {
            index.insert_movie(Movie {
                id: movie_id,
                title: format!("Movie {movie_id}"),
                genres: Vec::new(),
            });
        }

        // User 1 (seed) and user 2 rate identically; user 3 rates opposite;
        // user 4 shares only one movie with the seed.
        insert_ratings(&mut index, 1, &[(1, 5.0), (2, 4.0), (3, 1.0)]);
        insert_ratings(&mut index, 2, &[(1, 5.0), (2, 4.0), (3, 1.0)]);
        insert_ratings(&mut index, 3, &[(1, 1.0), (2, 2.0), (3, 5.0)]);
        insert_ratings(&mut index, 4, &[(1, 3.0), (4, 3.0)]);

        MatrixBuilder::new().with_min_ratings(0).build(&index)
    }

    #[test]
    fn test_identical_user_found_with_perfect_correlation() {
        let matrix = create_test_matrix();
        let finder = SimilarityFinder::new()
            .with_min_shared_movies(1)
            .with_min_correlation(0.9);

        let similar = finder.find_similar_users(&matrix, 1).unwrap();
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].user_id, 2);
        assert!((similar[0].correlation - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_seed_user_never_in_own_result() {
        let matrix = create_test_matrix();
        let finder = SimilarityFinder::new()
            .with_min_shared_movies(0)
            .with_min_correlation(-1.0);

        let similar = finder.find_similar_users(&matrix, 1).unwrap();
        assert!(similar.iter().all(|s| s.user_id != 1));
    }

    #[test]
    fn test_anticorrelated_user_filtered_by_threshold() {
        let matrix = create_test_matrix();
        let finder = SimilarityFinder::new()
            .with_min_shared_movies(1)
            .with_min_correlation(0.0);

        let similar = finder.find_similar_users(&matrix, 1).unwrap();
        // User 3 correlates near -1.0 and must be gone
        assert!(similar.iter().all(|s| s.user_id != 3));
    }

    #[test]
    fn test_shared_movie_threshold_is_strict() {
        let matrix = create_test_matrix();
        // User 4 shares exactly one movie with the seed; threshold 1 means
        // "strictly more than 1", so user 4 is not a candidate.
        let finder = SimilarityFinder::new()
            .with_min_shared_movies(1)
            .with_min_correlation(-1.0);

        let similar = finder.find_similar_users(&matrix, 1).unwrap();
        assert!(similar.iter().all(|s| s.user_id != 4));
    }

    #[test]
    fn test_unknown_seed_user() {
        let matrix = create_test_matrix();
        let finder = SimilarityFinder::new();

        let err = finder.find_similar_users(&matrix, 999).unwrap_err();
        assert!(matches!(err, RecommendError::UserNotFound { user_id: 999 }));
    }

    #[test]
    fn test_no_candidates_is_empty_not_error() {
        let matrix = create_test_matrix();
        let finder = SimilarityFinder::new()
            .with_min_shared_movies(50)
            .with_min_correlation(0.65);

        let similar = finder.find_similar_users(&matrix, 1).unwrap();
        assert!(similar.is_empty());
    }

    #[test]
    fn test_sorted_descending_by_correlation() {
        let mut index = DataIndex::new();
        for movie_id in 1..=4 {
            index.insert_movie(Movie {
                id: movie_id,
                title: format!("Movie {movie_id}"),
                genres: Vec::new(),
            });
        }
        insert_ratings(&mut index, 1, &[(1, 5.0), (2, 4.0), (3, 1.0), (4, 2.0)]);
        // Perfect match
        insert_ratings(&mut index, 2, &[(1, 5.0), (2, 4.0), (3, 1.0), (4, 2.0)]);
        // Positive but imperfect match
        insert_ratings(&mut index, 3, &[(1, 5.0), (2, 3.0), (3, 2.0), (4, 2.0)]);

        let matrix = MatrixBuilder::new().with_min_ratings(0).build(&index);
        let finder = SimilarityFinder::new()
            .with_min_shared_movies(2)
            .with_min_correlation(0.5);

        let similar = finder.find_similar_users(&matrix, 1).unwrap();
        assert_eq!(similar.len(), 2);
        assert_eq!(similar[0].user_id, 2);
        assert!(similar[0].correlation >= similar[1].correlation);
    }
}
