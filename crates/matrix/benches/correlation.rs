//! Benchmarks for the correlation kernel and matrix build
//!
//! Run with: cargo bench --package matrix
//!
//! Uses synthetic sparse data shaped like a popularity-filtered slice of
//! MovieLens: a few hundred columns, rows covering a third of them.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{DataIndex, Movie, Rating};
use matrix::{MatrixBuilder, pearson_sparse};
use std::collections::HashMap;

/// Deterministic pseudo-random sparse vector over `cols` columns
fn synthetic_row(seed: u64, cols: usize, fill: usize) -> HashMap<usize, f32> {
    let mut state = seed;
    let mut row = HashMap::new();
    while row.len() < fill {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let col = (state as usize) % cols;
        let rating = 0.5 + ((state >> 32) % 10) as f32 * 0.5;
        row.insert(col, rating);
    }
    row
}

fn synthetic_index(users: u32, movies: u32, ratings_per_user: usize) -> DataIndex {
    let mut index = DataIndex::new();
    for movie_id in 1..=movies {
        index.insert_movie(Movie {
            id: movie_id,
            title: format!("Movie {movie_id}"),
            genres: Vec::new(),
        });
    }
    for user_id in 1..=users {
        let row = synthetic_row(user_id as u64 * 2654435761, movies as usize, ratings_per_user);
        for (col, rating) in row {
            index.insert_rating(Rating {
                user_id,
                movie_id: col as u32 + 1,
                rating,
                timestamp: 0,
            });
        }
    }
    index
}

fn bench_pearson_sparse(c: &mut Criterion) {
    let a = synthetic_row(1, 600, 200);
    let b = synthetic_row(2, 600, 200);

    c.bench_function("pearson_sparse_200", |bench| {
        bench.iter(|| pearson_sparse(black_box(&a), black_box(&b)))
    });
}

fn bench_matrix_build(c: &mut Criterion) {
    let index = synthetic_index(500, 300, 100);
    let builder = MatrixBuilder::new().with_min_ratings(50);

    c.bench_function("matrix_build_500x300", |bench| {
        bench.iter(|| {
            let matrix = builder.build(black_box(&index));
            black_box(matrix)
        })
    });
}

criterion_group!(benches, bench_pearson_sparse, bench_matrix_build);
criterion_main!(benches);
