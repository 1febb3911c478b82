//! # Matrix Crate
//!
//! The sparse user×movie rating matrix and the correlation kernel both
//! recommendation paths are built on.
//!
//! ## Components
//!
//! - **ratings**: `RatingMatrix` with a row view and a column view
//! - **builder**: `MatrixBuilder` — popularity filter + pivot
//! - **correlation**: pairwise-complete Pearson correlation over sparse
//!   vectors
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DataIndex;
//! use matrix::{MatrixBuilder, pearson_sparse};
//!
//! let index = DataIndex::load_from_files("data/ml-20m".as_ref())?;
//! let matrix = MatrixBuilder::new().with_min_ratings(1000).build(&index);
//!
//! let a = matrix.user_row(1).unwrap();
//! let b = matrix.user_row(2).unwrap();
//! if let Some(r) = pearson_sparse(a, b) {
//!     println!("correlation: {r:.3}");
//! }
//! ```

pub mod builder;
pub mod correlation;
pub mod ratings;

pub use builder::MatrixBuilder;
pub use correlation::pearson_sparse;
pub use ratings::{RatingMatrix, TitleId};
