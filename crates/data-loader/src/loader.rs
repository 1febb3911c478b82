//! CSV loading for the MovieLens export files.
//!
//! Two files are expected, comma-delimited with a header row:
//! - `movie.csv`: movieId,title,genres
//! - `rating.csv`: userId,movieId,rating,timestamp
//!
//! Records deserialize straight into typed structs via serde, so a missing
//! or mistyped column surfaces as a [`DataError`] with file/line context
//! instead of silently producing garbage rows.

use crate::error::{DataError, Result};
use crate::types::{Movie, MovieId, Rating, UserId};
use serde::Deserialize;
use std::path::Path;

/// Raw movie row as it appears in movie.csv
#[derive(Debug, Deserialize)]
struct MovieRecord {
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    title: String,
    genres: String,
}

/// Raw rating row as it appears in rating.csv
#[derive(Debug, Deserialize)]
struct RatingRecord {
    #[serde(rename = "userId")]
    user_id: UserId,
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    rating: f32,
    timestamp: i64,
}

/// Attach file/line context to a csv error
fn record_error(path: &Path, err: csv::Error) -> DataError {
    let file = path.display().to_string();
    match err.position() {
        Some(pos) => DataError::MalformedRecord {
            file,
            line: pos.line(),
            reason: err.to_string(),
        },
        None => DataError::CsvError {
            file,
            reason: err.to_string(),
        },
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::Reader::from_path(path).map_err(|err| match err.kind() {
        csv::ErrorKind::Io(_) => DataError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataError::CsvError {
            file: path.display().to_string(),
            reason: err.to_string(),
        },
    })
}

/// Load the movie table.
///
/// The genres column is pipe-separated ("Adventure|Animation|Children");
/// the MovieLens placeholder "(no genres listed)" becomes an empty list.
pub fn load_movies(path: &Path) -> Result<Vec<Movie>> {
    let mut reader = open_reader(path)?;
    let mut movies = Vec::new();

    for result in reader.deserialize::<MovieRecord>() {
        let record = result.map_err(|e| record_error(path, e))?;
        let genres = if record.genres == "(no genres listed)" {
            Vec::new()
        } else {
            record
                .genres
                .split('|')
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect()
        };
        movies.push(Movie {
            id: record.movie_id,
            title: record.title,
            genres,
        });
    }

    Ok(movies)
}

/// Load the rating table.
pub fn load_ratings(path: &Path) -> Result<Vec<Rating>> {
    let mut reader = open_reader(path)?;
    let mut ratings = Vec::new();

    for result in reader.deserialize::<RatingRecord>() {
        let record = result.map_err(|e| record_error(path, e))?;
        ratings.push(Rating {
            user_id: record.user_id,
            movie_id: record.movie_id,
            rating: record.rating,
            timestamp: record.timestamp,
        });
    }

    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_movies() {
        let path = write_temp(
            "loader_test_movies.csv",
            "movieId,title,genres\n1,Toy Story (1995),Adventure|Animation\n2,Jumanji (1995),(no genres listed)\n",
        );
        let movies = load_movies(&path).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Toy Story (1995)");
        assert_eq!(movies[0].genres, vec!["Adventure", "Animation"]);
        assert!(movies[1].genres.is_empty());
    }

    #[test]
    fn test_load_ratings() {
        let path = write_temp(
            "loader_test_ratings.csv",
            "userId,movieId,rating,timestamp\n1,2,3.5,1112486027\n",
        );
        let ratings = load_ratings(&path).unwrap();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].user_id, 1);
        assert_eq!(ratings[0].movie_id, 2);
        assert_eq!(ratings[0].rating, 3.5);
    }

    #[test]
    fn test_malformed_record_reports_line() {
        let path = write_temp(
            "loader_test_bad.csv",
            "userId,movieId,rating,timestamp\n1,2,not_a_number,1112486027\n",
        );
        let err = load_ratings(&path).unwrap_err();
        match err {
            DataError::MalformedRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_movies(Path::new("/nonexistent/movie.csv")).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound { .. }));
    }
}
