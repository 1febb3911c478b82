//! Builds the user×movie matrix from the loaded data.
//!
//! ## Algorithm
//! 1. Join ratings onto movie titles (ratings whose movie id has no title
//!    entry are dropped, left-join semantics)
//! 2. Count total ratings per title
//! 3. Drop titles whose count is at or below the popularity threshold
//! 4. Pivot the surviving ratings into the row/column views
//!
//! The popularity filter runs before the pivot: a near-empty column has
//! zero variance, which makes every correlation against it undefined, so
//! such movies must never enter the matrix in the first place.

use crate::ratings::RatingMatrix;
use data_loader::{DataIndex, Movie, UserId};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Configurable builder for [`RatingMatrix`].
pub struct MatrixBuilder {
    /// Minimum number of ratings a title must exceed to be retained
    min_ratings_per_movie: usize,
}

impl MatrixBuilder {
    /// Create a builder with the default popularity threshold (1000)
    pub fn new() -> Self {
        Self {
            min_ratings_per_movie: 1000,
        }
    }

    /// Configure the popularity threshold (default: 1000).
    ///
    /// A title is kept only when its total rating count is strictly
    /// greater than this value.
    pub fn with_min_ratings(mut self, min: usize) -> Self {
        self.min_ratings_per_movie = min;
        self
    }

    /// Build the matrix from a loaded [`DataIndex`].
    #[instrument(skip(self, index), fields(min_ratings = self.min_ratings_per_movie))]
    pub fn build(&self, index: &DataIndex) -> RatingMatrix {
        // Sort movies by id so column order (and the titles vec) is stable
        // across runs regardless of hash order.
        let mut movies: Vec<&Movie> = index.movies().collect();
        movies.sort_unstable_by_key(|m| m.id);

        // Step 1+2: per-title rating counts. Distinct ids sharing a title
        // fold into one count, the same way a pivot on title would.
        let mut title_counts: HashMap<&str, usize> = HashMap::new();
        for movie in &movies {
            *title_counts.entry(movie.title.as_str()).or_insert(0) +=
                index.rating_count(movie.id);
        }

        let retained = title_counts
            .values()
            .filter(|&&c| c > self.min_ratings_per_movie)
            .count();
        debug!(
            total_titles = title_counts.len(),
            retained, "applied popularity filter"
        );

        // Step 3+4: pivot. A user may have rated the same title more than
        // once (re-rating, or duplicate ids with one title); the cell holds
        // the mean of those ratings.
        let mut matrix = RatingMatrix::new();
        let mut cells: HashMap<(UserId, usize), (f64, u32)> = HashMap::new();

        for movie in &movies {
            if title_counts[movie.title.as_str()] <= self.min_ratings_per_movie {
                continue;
            }
            let title_id = matrix.add_title(&movie.title);
            for rating in index.get_movie_ratings(movie.id) {
                let cell = cells.entry((rating.user_id, title_id)).or_insert((0.0, 0));
                cell.0 += rating.rating as f64;
                cell.1 += 1;
            }
        }

        for ((user_id, title_id), (sum, count)) in cells {
            matrix.set(user_id, title_id, (sum / count as f64) as f32);
        }

        debug!(
            users = matrix.num_users(),
            titles = matrix.num_titles(),
            "rating matrix built"
        );
        matrix
    }
}

impl Default for MatrixBuilder {
    fn default() -> Self {
        Self::new()
    }
}
