//! Item-based scorer - movies that correlate with a reference movie.
//!
//! ## Algorithm
//! 1. Look up the reference title's column in the matrix
//! 2. Correlate it against every other column (pairwise-complete over the
//!    users who rated both)
//! 3. Drop undefined correlations, sort descending, take the top K
//!
//! Excluding the reference movie itself is an explicit step here (the
//! column is simply never a candidate), not a "self-correlation is always
//! rank 0, slice it off" convention.

use crate::error::{RecommendError, Result};
use matrix::{RatingMatrix, pearson_sparse};
use serde::Serialize;
use tracing::{debug, instrument};

/// One ranked title from the item-based path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemScore {
    pub title: String,
    pub correlation: f64,
}

/// Top `limit` titles most correlated with `title`'s rating column.
///
/// `MovieNotFound` means the title is not a matrix column: either unknown,
/// or dropped by the popularity filter.
#[instrument(skip(matrix))]
pub fn recommend_item_based(
    matrix: &RatingMatrix,
    title: &str,
    limit: usize,
) -> Result<Vec<ItemScore>> {
    let seed_id = matrix
        .title_id(title)
        .ok_or_else(|| RecommendError::MovieNotFound {
            title: title.to_string(),
        })?;
    let seed_column = matrix
        .column(seed_id)
        .ok_or_else(|| RecommendError::MovieNotFound {
            title: title.to_string(),
        })?;

    let mut scored: Vec<ItemScore> = Vec::new();
    for candidate_id in 0..matrix.num_titles() {
        // Explicit self-exclusion: the reference column never competes
        if candidate_id == seed_id {
            continue;
        }
        let Some(column) = matrix.column(candidate_id) else {
            continue;
        };
        let Some(correlation) = pearson_sparse(seed_column, column) else {
            continue;
        };
        scored.push(ItemScore {
            title: matrix.title(candidate_id).to_string(),
            correlation,
        });
    }

    // Descending by correlation, ascending title on ties (deterministic)
    scored.sort_by(|a, b| {
        b.correlation
            .partial_cmp(&a.correlation)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.title.cmp(&b.title))
    });
    scored.truncate(limit);

    debug!(results = scored.len(), "item-based scoring complete");
    Ok(scored)
}
