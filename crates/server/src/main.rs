//! Simple test harness for the recommendation orchestrator.
//!
//! This binary runs one end-to-end request against a live similarity model
//! service. Configure it with two environment variables:
//!
//! - `WATCHNEXT_DATA_DIR`: directory holding `titles.json` and
//!   `titles_transformed.json` (default: `model`)
//! - `WATCHNEXT_MODEL_ADDR`: address of the similarity model service
//!   (default: `http://localhost:50051`)

use std::env;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use model_client::ModelClient;
use server::{RecommendRequest, RecommendationOrchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,catalog=debug,pipeline=debug")
        .init();

    info!("Starting WatchNext server test harness");

    let data_dir = env::var("WATCHNEXT_DATA_DIR").unwrap_or_else(|_| "model".to_string());
    let model_addr =
        env::var("WATCHNEXT_MODEL_ADDR").unwrap_or_else(|_| "http://localhost:50051".to_string());

    info!("Loading catalog store from {}", data_dir);
    let (catalog, features) = catalog::load_store(Path::new(&data_dir))?;
    let catalog = Arc::new(catalog);
    let features = Arc::new(features);
    info!("Catalog store loaded successfully");

    info!("Connecting to similarity model at {}", model_addr);
    let model = ModelClient::connect(model_addr).await?;
    info!("Connected to {}", model.service_address());

    let orchestrator = RecommendationOrchestrator::new(catalog, features, Arc::new(model));

    // One sample request against the live store
    let request = RecommendRequest {
        title: Some("Stranger Things".to_string()),
        limit: Some(10),
        ..Default::default()
    };

    info!("Requesting recommendations for {:?}", request.title);
    let response = orchestrator.recommend(request).await?;

    info!("Received {} recommendations:", response.recommendations.len());
    for (i, record) in response.recommendations.iter().enumerate() {
        info!(
            "{}. {} ({}) - {} [{}]",
            i + 1,
            record.title,
            record.release_year,
            record.imdb_score,
            record.content_type,
        );
        info!("   Genres: {}", record.genres.join(", "));
    }

    Ok(())
}
