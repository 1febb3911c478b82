use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{DataIndex, UserId};
use matrix::{MatrixBuilder, RatingMatrix};
use recommender::{
    HybridRecommender, RecommenderConfig, SimilarityFinder, recommend_item_based,
};
use std::path::PathBuf;
use std::time::Instant;

/// Hybrid movie recommender over MovieLens rating data
#[derive(Parser)]
#[command(name = "hybrid-recs")]
#[command(about = "User-based + item-based movie recommendations from rating history", long_about = None)]
struct Cli {
    /// Path to the dataset directory (movie.csv + rating.csv)
    #[arg(short, long, default_value = "data/ml-20m")]
    data_dir: PathBuf,

    /// Popularity threshold: a movie needs strictly more ratings than this
    /// to stay in the matrix
    #[arg(long, default_value = "1000")]
    min_ratings: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both recommendation paths for a user
    Recommend {
        /// User ID to recommend for (random matrix user when omitted)
        #[arg(long)]
        user_id: Option<UserId>,

        /// Minimum co-rated movies for a similarity candidate
        #[arg(long, default_value = "20")]
        min_shared_movies: usize,

        /// Minimum Pearson correlation for a similar user
        #[arg(long, default_value = "0.65")]
        min_correlation: f64,

        /// Number of user-based recommendations
        #[arg(long, default_value = "5")]
        user_based_count: usize,

        /// Number of item-based recommendations
        #[arg(long, default_value = "5")]
        item_based_count: usize,

        /// Rating value treated as perfect when picking the reference movie
        #[arg(long, default_value = "5.0")]
        perfect_rating: f32,

        /// Emit the full result as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List users whose ratings correlate with a user's
    Similar {
        /// Seed user ID
        #[arg(long)]
        user_id: UserId,

        /// Minimum co-rated movies for a candidate
        #[arg(long, default_value = "20")]
        min_shared_movies: usize,

        /// Minimum Pearson correlation
        #[arg(long, default_value = "0.65")]
        min_correlation: f64,
    },

    /// Movies most correlated with a given movie
    Item {
        /// Exact movie title, e.g. "Toy Story (1995)"
        #[arg(long)]
        title: String,

        /// Number of titles to return
        #[arg(long, default_value = "5")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load data and build the matrix (this may take a moment)
    println!("Loading dataset from {}...", cli.data_dir.display());
    let start = Instant::now();
    let index = DataIndex::load_from_files(&cli.data_dir).context("Failed to load dataset")?;
    println!("{} Loaded dataset in {:?}", "✓".green(), start.elapsed());

    let start = Instant::now();
    let matrix = MatrixBuilder::new().with_min_ratings(cli.min_ratings).build(&index);
    println!(
        "{} Built {}×{} rating matrix in {:?}",
        "✓".green(),
        matrix.num_users(),
        matrix.num_titles(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            user_id,
            min_shared_movies,
            min_correlation,
            user_based_count,
            item_based_count,
            perfect_rating,
            json,
        } => {
            let config = RecommenderConfig {
                min_ratings_per_movie: cli.min_ratings,
                min_shared_movies,
                min_correlation,
                user_based_count,
                item_based_count,
                perfect_rating,
            };
            handle_recommend(&index, &matrix, config, user_id, json)?
        }
        Commands::Similar {
            user_id,
            min_shared_movies,
            min_correlation,
        } => handle_similar(&matrix, user_id, min_shared_movies, min_correlation)?,
        Commands::Item { title, limit } => handle_item(&matrix, &title, limit)?,
    }

    Ok(())
}

/// Pick a user at random from the matrix rows
fn sample_user(matrix: &RatingMatrix) -> Result<UserId> {
    let users = matrix.user_ids();
    if users.is_empty() {
        return Err(anyhow!("rating matrix has no users"));
    }
    let idx = rand::random::<u32>() as usize % users.len();
    Ok(users[idx])
}

/// Handle the 'recommend' command
fn handle_recommend(
    index: &DataIndex,
    matrix: &RatingMatrix,
    config: RecommenderConfig,
    user_id: Option<UserId>,
    json: bool,
) -> Result<()> {
    let user_id = match user_id {
        Some(id) => id,
        None => {
            let id = sample_user(matrix)?;
            println!("No user given, sampled user {}", id.to_string().cyan());
            id
        }
    };

    let engine = HybridRecommender::new(config);
    let result = engine
        .recommend(index, matrix, user_id)
        .with_context(|| format!("Recommendation failed for user {user_id}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("User-based recommendations for user {user_id}:").bold().blue()
    );
    if result.user_based.is_empty() {
        println!("  (no similar users cleared the thresholds)");
    }
    for (rank, rec) in result.user_based.iter().enumerate() {
        println!(
            "{}. {} - score {:.2}",
            (rank + 1).to_string().green(),
            rec.title,
            rec.score
        );
    }

    match &result.reference_movie {
        Some(title) => {
            println!(
                "{}",
                format!("Item-based recommendations (anchored on {title:?}):").bold().blue()
            );
            for (rank, item) in result.item_based.iter().enumerate() {
                println!(
                    "{}. {} - correlation {:.3}",
                    (rank + 1).to_string().green(),
                    item.title,
                    item.correlation
                );
            }
        }
        None => println!(
            "{}",
            "Item-based path skipped: user has no perfect-rated movie".yellow()
        ),
    }

    Ok(())
}

/// Handle the 'similar' command
fn handle_similar(
    matrix: &RatingMatrix,
    user_id: UserId,
    min_shared_movies: usize,
    min_correlation: f64,
) -> Result<()> {
    let finder = SimilarityFinder::new()
        .with_min_shared_movies(min_shared_movies)
        .with_min_correlation(min_correlation);
    let similar = finder
        .find_similar_users(matrix, user_id)
        .with_context(|| format!("Similarity search failed for user {user_id}"))?;

    println!(
        "{}",
        format!("Users similar to user {user_id}:").bold().blue()
    );
    if similar.is_empty() {
        println!("  (none cleared the thresholds)");
    }
    for s in &similar {
        println!("  {} - correlation {:.3}", s.user_id, s.correlation);
    }
    Ok(())
}

/// Handle the 'item' command
fn handle_item(matrix: &RatingMatrix, title: &str, limit: usize) -> Result<()> {
    let scored = recommend_item_based(matrix, title, limit)
        .with_context(|| format!("Item-based lookup failed for {title:?}"))?;

    println!(
        "{}",
        format!("Movies correlated with {title:?}:").bold().blue()
    );
    for (rank, item) in scored.iter().enumerate() {
        println!(
            "{}. {} - correlation {:.3}",
            (rank + 1).to_string().green(),
            item.title,
            item.correlation
        );
    }
    Ok(())
}
