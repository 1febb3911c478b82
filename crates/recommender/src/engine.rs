//! Hybrid orchestration - runs both recommendation paths for one user.
//!
//! The user-based path: similarity search, then weighted scoring. The
//! item-based path: pick the user's most recent perfect-rated movie, then
//! correlate its column. Either path may come back empty; only a seed user
//! missing from the matrix aborts the run.

use crate::config::RecommenderConfig;
use crate::error::{RecommendError, Result};
use crate::item_based::{ItemScore, recommend_item_based};
use crate::reference::most_recent_top_movie;
use crate::similarity::{SimilarUser, SimilarityFinder};
use crate::user_based::{Recommendation, recommend_user_based};
use data_loader::{DataIndex, UserId};
use matrix::RatingMatrix;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Result of a full hybrid run for one user
#[derive(Debug, Serialize)]
pub struct HybridRecommendations {
    pub user_id: UserId,
    /// Users whose history correlates with the seed user's
    pub similar_users: Vec<SimilarUser>,
    /// Ranked titles from the user-based path
    pub user_based: Vec<Recommendation>,
    /// Anchor movie for the item-based path, if the user has one
    pub reference_movie: Option<String>,
    /// Ranked titles from the item-based path
    pub item_based: Vec<ItemScore>,
}

/// Wires the similarity finder and the two scorers behind one call
pub struct HybridRecommender {
    config: RecommenderConfig,
}

impl HybridRecommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Run both paths for `user_id` against a prebuilt matrix.
    ///
    /// Recoverable conditions degrade instead of failing: no similar users
    /// or no reference movie each leave their list empty. Only
    /// `UserNotFound` surfaces, since without a row in the matrix neither
    /// path has anything to work with.
    #[instrument(skip(self, index, matrix))]
    pub fn recommend(
        &self,
        index: &DataIndex,
        matrix: &RatingMatrix,
        user_id: UserId,
    ) -> Result<HybridRecommendations> {
        // User-based path
        let finder = SimilarityFinder::new()
            .with_min_shared_movies(self.config.min_shared_movies)
            .with_min_correlation(self.config.min_correlation);
        let similar_users = finder.find_similar_users(matrix, user_id)?;

        let user_based = if similar_users.is_empty() {
            warn!(user_id, "no similar users cleared the thresholds");
            Vec::new()
        } else {
            recommend_user_based(&similar_users, index, self.config.user_based_count)
        };

        // Item-based path, skippable by design
        let (reference_movie, item_based) =
            match most_recent_top_movie(index, user_id, self.config.perfect_rating) {
                Ok(title) => match recommend_item_based(matrix, &title, self.config.item_based_count)
                {
                    Ok(scored) => (Some(title), scored),
                    Err(RecommendError::MovieNotFound { .. }) => {
                        // Reference movie fell to the popularity filter
                        info!(user_id, title = %title, "reference movie not in matrix, skipping item-based path");
                        (Some(title), Vec::new())
                    }
                    Err(other) => return Err(other),
                },
                Err(RecommendError::NoReferenceMovie { .. }) => {
                    info!(user_id, "no perfect-rated movie, skipping item-based path");
                    (None, Vec::new())
                }
                Err(other) => return Err(other),
            };

        Ok(HybridRecommendations {
            user_id,
            similar_users,
            user_based,
            reference_movie,
            item_based,
        })
    }
}
