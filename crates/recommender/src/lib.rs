//! # Recommender Crate
//!
//! Hybrid movie recommendation over the rating matrix: a user-based path
//! (correlated users, weighted ratings) and an item-based path (movies
//! correlated with the user's most recent 5-star pick).
//!
//! ## Components
//!
//! - **similarity**: `SimilarityFinder` — correlated users for a seed user
//! - **user_based**: weighted-mean scoring over similar users' ratings
//! - **reference**: the most recent perfect-rated movie (item-based anchor)
//! - **item_based**: column-vs-column correlation ranking
//! - **engine**: `HybridRecommender` — both paths behind one call
//! - **config**: `RecommenderConfig` thresholds and counts
//! - **error**: recoverable domain errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DataIndex;
//! use matrix::MatrixBuilder;
//! use recommender::{HybridRecommender, RecommenderConfig};
//!
//! let index = DataIndex::load_from_files("data/ml-20m".as_ref())?;
//! let config = RecommenderConfig::default();
//! let matrix = MatrixBuilder::new()
//!     .with_min_ratings(config.min_ratings_per_movie)
//!     .build(&index);
//!
//! let engine = HybridRecommender::new(config);
//! let result = engine.recommend(&index, &matrix, 108170)?;
//!
//! for rec in &result.user_based {
//!     println!("{} ({:.2})", rec.title, rec.score);
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod item_based;
pub mod reference;
pub mod similarity;
pub mod user_based;

// Re-export commonly used types
pub use config::RecommenderConfig;
pub use engine::{HybridRecommendations, HybridRecommender};
pub use error::{RecommendError, Result};
pub use item_based::{ItemScore, recommend_item_based};
pub use reference::most_recent_top_movie;
pub use similarity::{SimilarUser, SimilarityFinder};
pub use user_based::{Recommendation, recommend_user_based};
