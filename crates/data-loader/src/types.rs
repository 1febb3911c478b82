//! Core domain types for the MovieLens rating data.
//!
//! This module defines the fundamental data structures used throughout the
//! system: the raw `Movie` and `Rating` records and the `DataIndex` that
//! holds them in memory with lookup indices on both axes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with movie IDs

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

// =============================================================================
// Movie-related Types
// =============================================================================

/// Represents a movie in the dataset.
///
/// Titles are the display key for everything downstream: the rating matrix
/// pivots on titles, not movie ids, so two ids carrying the same title fold
/// into one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Pipe-separated in the source file ("Adventure|Animation|Children"),
    /// split on load. Carried for display only.
    pub genres: Vec<String>,
}

// =============================================================================
// Rating Type
// =============================================================================

/// A single rating given by one user to one movie.
///
/// Ratings are historical facts: immutable once loaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value from 0.5 to 5.0
    pub rating: f32,
    /// Unix timestamp when the rating was made
    pub timestamp: i64,
}

// =============================================================================
// DataIndex - The Core In-Memory Store
// =============================================================================

/// Holds all loaded data plus lookup indices.
///
/// Ratings are indexed on both axes (by user and by movie) so that the
/// user-based path and the popularity filter each get O(1) access to the
/// slice they need. The index is built once per run and treated as
/// read-only afterward.
#[derive(Debug)]
pub struct DataIndex {
    // Primary data stores
    pub(crate) movies: HashMap<MovieId, Movie>,

    // Rating indices for fast lookups
    /// All ratings made by each user
    pub(crate) user_ratings: HashMap<UserId, Vec<Rating>>,
    /// All ratings received by each movie
    pub(crate) movie_ratings: HashMap<MovieId, Vec<Rating>>,
}

impl DataIndex {
    /// Creates a new, empty DataIndex
    pub fn new() -> Self {
        Self {
            movies: HashMap::new(),
            user_ratings: HashMap::new(),
            movie_ratings: HashMap::new(),
        }
    }

    // Getters - these return references, the index keeps ownership

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Get a movie's title by ID
    pub fn get_title(&self, id: MovieId) -> Option<&str> {
        self.movies.get(&id).map(|m| m.title.as_str())
    }

    /// Iterate over all movies in the index
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// Get all ratings made by a user
    ///
    /// Returns an empty slice if the user has no ratings
    pub fn get_user_ratings(&self, user_id: UserId) -> &[Rating] {
        self.user_ratings
            .get(&user_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get all ratings received by a movie
    pub fn get_movie_ratings(&self, movie_id: MovieId) -> &[Rating] {
        self.movie_ratings
            .get(&movie_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of ratings a movie has received
    pub fn rating_count(&self, movie_id: MovieId) -> usize {
        self.movie_ratings.get(&movie_id).map(|v| v.len()).unwrap_or(0)
    }

    // Mutators - used during data loading

    /// Insert a movie into the index
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// Insert a rating and update both indices
    pub fn insert_rating(&mut self, rating: Rating) {
        // Add to user ratings
        self.user_ratings
            .entry(rating.user_id)
            .or_insert_with(Vec::new)
            .push(rating);

        // Add to movie ratings
        self.movie_ratings
            .entry(rating.movie_id)
            .or_insert_with(Vec::new)
            .push(rating);
    }

    /// Get counts for debugging/validation: (users, movies, ratings)
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_ratings = self.user_ratings.values().map(|v| v.len()).sum();
        (self.user_ratings.len(), self.movies.len(), total_ratings)
    }
}

// Implement Default trait for convenience
impl Default for DataIndex {
    fn default() -> Self {
        Self::new()
    }
}
