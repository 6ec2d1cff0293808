//! Similarity model client for the gRPC ranking service.
//!
//! The similarity model lives behind a network boundary: a service that was
//! trained offline against the same catalog this process loads at startup.
//! This crate provides:
//! - The [`SimilarityModel`] trait, the only surface the recommendation
//!   core sees
//! - [`ModelClient`], the gRPC implementation of that trait
//! - Conversion between protobuf messages and plain Rust types
//!
//! The model is opaque by design. Callers hand over a feature vector and
//! get back ordinals; no scores, weights, or model internals cross this
//! boundary.

use async_trait::async_trait;
use thiserror::Error;
use tonic::transport::Channel;
use tracing::{debug, error, info, instrument};

// Include the generated protobuf code
pub mod similarity {
    tonic::include_proto!("similarity");
}

use similarity::{RankRequest, similarity_index_client::SimilarityIndexClient};

/// Errors that can occur when interacting with the similarity model
#[derive(Error, Debug)]
pub enum ModelClientError {
    #[error("failed to connect to similarity model: {0}")]
    Connection(String),

    #[error("failed to rank query vector: {0}")]
    Rank(String),

    #[error("invalid response from similarity model: {0}")]
    InvalidResponse(String),
}

/// The ranking contract the recommendation core consumes.
///
/// Implementations rank the whole catalog vocabulary by similarity to a
/// query vector, most similar first. By convention the query title itself
/// appears as the first entry of the ranking; the core drops it before
/// filtering.
#[async_trait]
pub trait SimilarityModel: Send + Sync {
    /// Rank every known ordinal against the query vector.
    ///
    /// # Arguments
    /// * `features` - Feature vector of the query title, in model space
    ///
    /// # Returns
    /// Catalog ordinals, most similar first
    async fn rank(&self, features: &[f32]) -> Result<Vec<usize>, ModelClientError>;
}

/// Client for the similarity model service.
///
/// This wraps the auto-generated gRPC client and provides a higher-level
/// interface for ranking query vectors.
pub struct ModelClient {
    client: SimilarityIndexClient<Channel>,
    service_addr: String,
}

impl ModelClient {
    /// Connect to the similarity model service.
    ///
    /// # Arguments
    /// * `addr` - Address of the gRPC service (e.g., "http://localhost:50051")
    ///
    /// # Returns
    /// A connected client ready to rank query vectors
    pub async fn connect(addr: impl Into<String>) -> Result<Self, ModelClientError> {
        let addr = addr.into();
        info!("Connecting to similarity model at {}", addr);

        let channel = Channel::from_shared(addr.clone())
            .map_err(|e| ModelClientError::Connection(e.to_string()))?
            .connect()
            .await
            .map_err(|e| ModelClientError::Connection(e.to_string()))?;

        let client = SimilarityIndexClient::new(channel);
        Ok(ModelClient {
            client,
            service_addr: addr,
        })
    }

    /// Get the address of the model service this client is connected to.
    pub fn service_address(&self) -> &str {
        &self.service_addr
    }
}

#[async_trait]
impl SimilarityModel for ModelClient {
    #[instrument(skip(self, features), fields(dim = features.len()))]
    async fn rank(&self, features: &[f32]) -> Result<Vec<usize>, ModelClientError> {
        debug!("Ranking query vector of dimension {}", features.len());
        let request = tonic::Request::new(RankRequest {
            features: features.to_vec(),
        });

        // The generated client needs &mut self; channel clones are cheap
        let mut client = self.client.clone();
        let response = client.rank(request).await.map_err(|e| {
            error!("gRPC error while ranking: {}", e);
            ModelClientError::Rank(e.to_string())
        })?;

        let ordinals = response.into_inner().ordinals;
        ordinals
            .into_iter()
            .map(|ordinal| {
                usize::try_from(ordinal).map_err(|_| {
                    ModelClientError::InvalidResponse(format!(
                        "ordinal {ordinal} does not fit in usize"
                    ))
                })
            })
            .collect()
    }
}
