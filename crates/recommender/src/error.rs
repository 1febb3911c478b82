//! Error types for the recommender crate.
//!
//! All of these are local-recovery conditions: the hybrid run reports or
//! degrades around them, it never crashes. Degenerate correlations are not
//! represented here at all — the correlation kernel returns `None` and the
//! pair is silently dropped.

use data_loader::UserId;
use thiserror::Error;

/// Recoverable domain errors from the recommendation paths
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The seed user does not appear in the rating matrix (unknown id, or
    /// every movie they rated fell to the popularity filter)
    #[error("user {user_id} not found in the rating matrix")]
    UserNotFound { user_id: UserId },

    /// The user has never given a perfect rating, so there is no anchor
    /// movie for the item-based path
    #[error("user {user_id} has no perfect-rated movie to anchor item-based recommendations")]
    NoReferenceMovie { user_id: UserId },

    /// The requested title is not a column of the rating matrix
    #[error("movie {title:?} not found in the rating matrix")]
    MovieNotFound { title: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
