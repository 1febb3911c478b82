//! # Data Loader Crate
//!
//! This crate handles loading and indexing the MovieLens CSV export
//! (`movie.csv` + `rating.csv`).
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Rating, DataIndex)
//! - **loader**: Parse the CSV files into Rust structs
//! - **index**: Build the in-memory indices for fast lookups
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DataIndex;
//! use std::path::Path;
//!
//! // Load the entire dataset
//! let index = DataIndex::load_from_files(Path::new("data/ml-20m"))?;
//!
//! // Query data
//! let movie = index.get_movie(1).unwrap();
//! let ratings = index.get_user_ratings(1);
//!
//! println!("{} has {} ratings", movie.title, index.rating_count(1));
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod loader;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataError, Result};
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Core types
    Movie,
    Rating,
    DataIndex,
};
