use anyhow::{Context, Result, anyhow};
use catalog::{Catalog, ContentRecord, ContentType, FeatureTable, MatchKind, Ordinal};
use clap::{Parser, Subcommand};
use colored::Colorize;
use model_client::ModelClient;
use pipeline::FilterCriteria;
use server::{RecommendRequest, RecommendationOrchestrator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// WatchNext - Content Recommendation Engine
#[derive(Parser)]
#[command(name = "watch-next")]
#[command(about = "Similar-title recommendations over a precomputed catalog", long_about = None)]
struct Cli {
    /// Path to the directory holding titles.json and titles_transformed.json
    #[arg(short, long, default_value = "model")]
    data_dir: PathBuf,

    /// Address of the similarity model service
    #[arg(long, default_value = "http://localhost:50051")]
    model_addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get titles similar to a query title
    Recommend {
        /// Title to find recommendations for (case-insensitive)
        #[arg(long)]
        title: Option<String>,

        /// Catalog ordinal of the query title (overrides --title)
        #[arg(long)]
        ordinal: Option<Ordinal>,

        /// Keep only titles with one of these genres (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Keep only titles produced in one of these countries (repeatable)
        #[arg(long = "country")]
        countries: Vec<String>,

        /// Keep only titles released in or after this year
        #[arg(long)]
        min_year: Option<u16>,

        /// Keep only titles released in or before this year
        #[arg(long)]
        max_year: Option<u16>,

        /// Keep only titles with at least this IMDB score
        #[arg(long)]
        min_score: Option<f32>,

        /// Keep only movies or only shows
        #[arg(long)]
        content_type: Option<ContentType>,

        /// Keep only titles with one of these age certifications (repeatable)
        #[arg(long = "certification")]
        certifications: Vec<String>,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Print production countries and age certification for each title
        #[arg(long)]
        explain: bool,
    },

    /// Search the catalog for matching titles
    Search {
        /// Title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Show one catalog record by ordinal
    Show {
        /// Catalog ordinal to display
        #[arg(long)]
        ordinal: Ordinal,
    },

    /// Summarize the catalog vocabulary
    Stats,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog store (this may take a moment)
    println!("Loading catalog store from {}...", cli.data_dir.display());
    let start = Instant::now();
    let (catalog, features) =
        catalog::load_store(&cli.data_dir).context("Failed to load catalog store")?;
    let catalog = Arc::new(catalog);
    let features = Arc::new(features);
    println!(
        "{} Loaded {} titles in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            title,
            ordinal,
            genres,
            countries,
            min_year,
            max_year,
            min_score,
            content_type,
            certifications,
            limit,
            explain,
        } => {
            let criteria = FilterCriteria {
                genres,
                production_countries: countries,
                min_release_year: min_year,
                max_release_year: max_year,
                min_imdb_score: min_score,
                content_type,
                age_certifications: certifications,
            };
            handle_recommend(
                catalog,
                features,
                &cli.model_addr,
                title,
                ordinal,
                criteria,
                limit,
                explain,
            )
            .await?
        }
        Commands::Search { title } => handle_search(&catalog, &title),
        Commands::Show { ordinal } => handle_show(&catalog, &features, ordinal)?,
        Commands::Stats => handle_stats(&catalog, &features),
        Commands::Benchmark { requests } => {
            handle_benchmark(catalog, features, &cli.model_addr, requests).await?
        }
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    features: Arc<FeatureTable>,
    model_addr: &str,
    title: Option<String>,
    ordinal: Option<Ordinal>,
    criteria: FilterCriteria,
    limit: usize,
    explain: bool,
) -> Result<()> {
    // Connect to the similarity model and build the orchestrator
    let model = ModelClient::connect(model_addr)
        .await
        .context("Failed to connect to the similarity model service")?;
    let orchestrator = RecommendationOrchestrator::new(catalog, features, Arc::new(model));

    let request = RecommendRequest {
        title,
        ordinal,
        filters: if criteria.is_unconstrained() {
            None
        } else {
            Some(criteria)
        },
        limit: Some(limit),
    };

    let response = orchestrator.recommend(request).await?;
    print_recommendations(&response.recommendations, explain);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str) {
    let matches = catalog.search(title);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("{}", "No matching titles".yellow());
        return;
    }

    // Display top 20 results with ordinal, title, and match tier
    for (ordinal, kind) in matches.iter().take(20) {
        let record = match catalog.get(*ordinal) {
            Some(record) => record,
            None => continue,
        };
        let tag = match kind {
            MatchKind::Exact => "exact".green(),
            MatchKind::Substring => "substring".cyan(),
        };
        println!(
            "{}: {} ({}) [{}] - {} [{}]",
            ordinal,
            record.title,
            record.release_year,
            record.genres.join(", "),
            record.imdb_score,
            tag,
        );
    }
    if matches.len() > 20 {
        println!("... and {} more", matches.len() - 20);
    }
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, features: &FeatureTable, ordinal: Ordinal) -> Result<()> {
    let record = catalog
        .get(ordinal)
        .ok_or_else(|| anyhow!("Ordinal {} is not in the catalog", ordinal))?;

    println!("{}", format!("Catalog record {}:", ordinal).bold().blue());
    println!("{}Title: {}", "• ".green(), record.title);
    println!("{}Type: {}", "• ".green(), record.content_type);
    println!("{}Released: {}", "• ".green(), record.release_year);
    println!("{}Genres: {}", "• ".green(), record.genres.join(", "));
    println!(
        "{}Countries: {}",
        "• ".green(),
        record.production_countries.join(", ")
    );
    println!("{}IMDB score: {:.1}", "• ".green(), record.imdb_score);
    println!(
        "{}Age certification: {}",
        "• ".green(),
        record.age_certification.as_deref().unwrap_or("none")
    );
    match features.get(ordinal) {
        Some(vector) => println!("{}Feature vector: {} floats", "• ".cyan(), vector.len()),
        None => println!("{}Feature vector: missing", "• ".red()),
    }
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(catalog: &Catalog, features: &FeatureTable) {
    println!("{}", "Catalog statistics:".bold().blue());

    let movies = catalog
        .records()
        .iter()
        .filter(|r| r.content_type == ContentType::Movie)
        .count();
    let shows = catalog.len() - movies;
    println!(
        "{}Titles: {} ({} movies, {} shows)",
        "• ".green(),
        catalog.len(),
        movies,
        shows
    );
    println!("{}Feature dimensions: {}", "• ".green(), features.dim());

    if let Some((earliest, latest)) = catalog.year_span() {
        println!("{}Release years: {} - {}", "• ".cyan(), earliest, latest);
    }
    if let Some(ceiling) = catalog.score_ceiling() {
        println!("{}Highest IMDB score: {:.1}", "• ".cyan(), ceiling);
    }

    let genres = catalog.distinct_genres();
    println!("{}Genres ({}): {}", "• ".cyan(), genres.len(), genres.join(", "));
    let countries = catalog.distinct_countries();
    println!("{}Countries: {}", "• ".cyan(), countries.len());
    let certifications = catalog.distinct_certifications();
    println!(
        "{}Age certifications ({}): {}",
        "• ".cyan(),
        certifications.len(),
        certifications.join(", ")
    );
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<Catalog>,
    features: Arc<FeatureTable>,
    model_addr: &str,
    requests: usize,
) -> Result<()> {
    if catalog.is_empty() {
        return Err(anyhow!("Cannot benchmark an empty catalog"));
    }

    let model = ModelClient::connect(model_addr)
        .await
        .context("Failed to connect to the similarity model service")?;
    let orchestrator =
        RecommendationOrchestrator::new(catalog.clone(), features, Arc::new(model));

    // Pick random query ordinals across the catalog
    let ordinals: Vec<Ordinal> = (0..requests)
        .map(|_| rand::random::<u32>() as usize % catalog.len())
        .collect();

    // Use tokio::spawn to make concurrent requests
    let mut handles = vec![];
    for ordinal in ordinals {
        let orchestrator = orchestrator.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            let request = RecommendRequest {
                ordinal: Some(ordinal),
                limit: Some(20),
                ..Default::default()
            };
            orchestrator.recommend(request).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }

    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[ContentRecord], explain: bool) {
    println!("{}", "Recommendations:".bold().blue());
    if recommendations.is_empty() {
        println!("{}", "No titles matched the query and filters".yellow());
        return;
    }

    for (i, record) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] - {:.1} {}",
            (i + 1).to_string().green(),
            record.title,
            record.release_year,
            record.genres.join(", "),
            record.imdb_score,
            format!("[{}]", record.content_type).dimmed(),
        );
        if explain {
            let countries = if record.production_countries.is_empty() {
                "unknown".to_string()
            } else {
                record.production_countries.join(", ")
            };
            let certification = record
                .age_certification
                .as_deref()
                .unwrap_or("unrated");
            println!(
                "   {}",
                format!("countries: {} | certification: {}", countries, certification)
                    .dimmed()
            );
        }
    }
}
