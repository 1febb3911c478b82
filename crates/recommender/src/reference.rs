//! Reference-movie selector for the item-based path.
//!
//! The item-based path anchors on the movie the user most recently rated
//! with a perfect score. No perfect rating means no anchor, which is a
//! domain condition (`NoReferenceMovie`), not a crash.

use crate::error::{RecommendError, Result};
use data_loader::{DataIndex, UserId};
use tracing::debug;

/// Title of the user's most recently perfect-rated movie.
///
/// Ties on the timestamp resolve to the lower movie id so the pick is
/// deterministic.
pub fn most_recent_top_movie(
    index: &DataIndex,
    user_id: UserId,
    perfect_rating: f32,
) -> Result<String> {
    let best = index
        .get_user_ratings(user_id)
        .iter()
        .filter(|r| r.rating == perfect_rating)
        .max_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| b.movie_id.cmp(&a.movie_id))
        })
        .ok_or(RecommendError::NoReferenceMovie { user_id })?;

    // A perfect rating pointing at an id missing from the movie table has
    // no usable title either
    let title = index
        .get_title(best.movie_id)
        .ok_or(RecommendError::NoReferenceMovie { user_id })?;

    debug!(user_id, movie_id = best.movie_id, title, "reference movie selected");
    Ok(title.to_string())
}
