//! DataIndex building from the CSV files.
//!
//! Loads both tables, then populates the primary store and the per-user /
//! per-movie rating indices.

use crate::error::{DataError, Result};
use crate::loader;
use crate::types::DataIndex;
use std::path::Path;
use tracing::info;

impl DataIndex {
    /// Load the dataset from a directory containing `movie.csv` and
    /// `rating.csv`.
    ///
    /// This is the main entry point for loading data. The two files parse
    /// in parallel; everything after that is a sequential index build.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("loading dataset from {}", data_dir.display());

        let movies_path = data_dir.join("movie.csv");
        let ratings_path = data_dir.join("rating.csv");

        // Rayon's `join` runs the two parsers in parallel; the rating file
        // dominates, so the movie table comes back essentially for free.
        let (movies, ratings) = rayon::join(
            || loader::load_movies(&movies_path),
            || loader::load_ratings(&ratings_path),
        );

        // The ? operator works because both return Result<Vec<T>>
        let movies = movies?;
        let ratings = ratings?;

        info!(
            movies = movies.len(),
            ratings = ratings.len(),
            "parsed input files"
        );

        let mut index = DataIndex::new();

        for movie in movies {
            index.insert_movie(movie);
        }

        // This also populates user_ratings and movie_ratings
        for rating in ratings {
            index.insert_rating(rating);
        }

        index.validate()?;

        let (users, movies, ratings) = index.counts();
        info!(users, movies, ratings, "data index built");
        Ok(index)
    }

    /// Sanity checks on the loaded data.
    ///
    /// An empty table means a header-only or truncated file; better to fail
    /// here than to hand an empty matrix to the recommender.
    pub fn validate(&self) -> Result<()> {
        let (users, movies, ratings) = self.counts();
        if movies == 0 {
            return Err(DataError::ValidationError(
                "movie table is empty".to_string(),
            ));
        }
        if ratings == 0 {
            return Err(DataError::ValidationError(
                "rating table is empty".to_string(),
            ));
        }
        if users == 0 {
            return Err(DataError::ValidationError(
                "no users found in rating table".to_string(),
            ));
        }
        Ok(())
    }
}
