//! # Recommendation Orchestrator
//!
//! This module coordinates the entire recommendation flow:
//! 1. Resolve the query (title or explicit ordinal) to a catalog position
//! 2. Look up the precomputed feature vector for that position
//! 3. Rank the whole vocabulary with the similarity model, under a deadline
//! 4. Drop the leading self-match from the ranking
//! 5. Join the surviving ordinals with their catalog records
//! 6. Apply the request's filter criteria
//! 7. Truncate to the requested limit and respond
//!
//! The orchestrator owns no I/O of its own: the catalog was loaded at
//! startup and the model sits behind the [`SimilarityModel`] trait, so the
//! whole flow is deterministic given those two collaborators.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info};

use catalog::{Catalog, ContentRecord, FeatureTable, Ordinal, ResolveError};
use model_client::SimilarityModel;
use pipeline::{FilterCriteria, FilterPipeline, map_ordinals};

use crate::error::RecommendError;

/// Deadline for one model call unless overridden.
pub const DEFAULT_INFERENCE_TIMEOUT: Duration = Duration::from_secs(10);

/// One recommendation request, mirroring the wire shape of the surrounding
/// service. Every field is optional; validation happens in [`recommend`].
///
/// [`recommend`]: RecommendationOrchestrator::recommend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendRequest {
    /// Title query, resolved case-insensitively (exact match, then substring)
    pub title: Option<String>,
    /// Direct catalog position; takes precedence over `title`
    #[serde(alias = "titleId")]
    pub ordinal: Option<Ordinal>,
    /// Metadata constraints on the result list
    pub filters: Option<FilterCriteria>,
    /// Cap on the number of returned records; absent means uncapped
    pub limit: Option<usize>,
}

/// The recommendation list for one request, most similar first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<ContentRecord>,
}

/// Main orchestrator that coordinates the recommendation flow.
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    catalog: Arc<Catalog>,
    features: Arc<FeatureTable>,
    model: Arc<dyn SimilarityModel>,
    inference_timeout: Duration,
}

impl RecommendationOrchestrator {
    /// Create a new orchestrator over an already-loaded store.
    ///
    /// # Arguments
    /// * `catalog` - Title records, in training order
    /// * `features` - Feature vectors, aligned with `catalog`
    /// * `model` - The similarity model, usually a connected gRPC client
    pub fn new(
        catalog: Arc<Catalog>,
        features: Arc<FeatureTable>,
        model: Arc<dyn SimilarityModel>,
    ) -> Self {
        Self {
            catalog,
            features,
            model,
            inference_timeout: DEFAULT_INFERENCE_TIMEOUT,
        }
    }

    /// Override the model deadline (builder pattern).
    pub fn with_inference_timeout(mut self, inference_timeout: Duration) -> Self {
        self.inference_timeout = inference_timeout;
        self
    }

    /// Main entry point: serve one recommendation request.
    ///
    /// # Arguments
    /// * `request` - Query, optional filter criteria, and optional limit
    ///
    /// # Returns
    /// The filtered recommendation list in model order. A query that matches
    /// no catalog title yields an empty response, not an error; everything
    /// else that goes wrong maps to a [`RecommendError`] variant.
    pub async fn recommend(
        &self,
        request: RecommendRequest,
    ) -> Result<RecommendResponse, RecommendError> {
        // Start timing
        let start_time = Instant::now();

        // Resolve the query to a catalog ordinal
        let ordinal = match self
            .catalog
            .resolve(request.title.as_deref(), request.ordinal)
        {
            Ok(ordinal) => ordinal,
            Err(err @ ResolveError::MissingQuery) => {
                return Err(RecommendError::InvalidRequest(err.to_string()));
            }
            Err(ResolveError::NoMatch { query }) => {
                info!(
                    "No catalog title matches {:?}; returning an empty response",
                    query
                );
                return Ok(RecommendResponse::default());
            }
        };

        // Look up the query record and its feature vector
        let (record, features) = self.lookup_query(ordinal)?;
        info!("Resolved query to ordinal {} ({:?})", ordinal, record.title);

        // Rank the whole vocabulary with the model
        let ranked = self.rank_with_model(features).await?;
        info!("Model returned a ranking of {} ordinals", ranked.len());

        // Drop the leading self-match before any filtering
        let ranked = drop_query_echo(ranked);

        // Join with catalog records, filter, and cap
        let recommendations =
            self.select_records(&ranked, request.filters.as_ref(), request.limit)?;
        info!(
            "Returning {} recommendations in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );

        Ok(RecommendResponse { recommendations })
    }

    /// Fetch the record and feature vector for the query ordinal.
    ///
    /// Both lookups fail only for a caller-supplied ordinal outside the
    /// catalog, which is the caller's mistake rather than a store fault.
    fn lookup_query(&self, ordinal: Ordinal) -> Result<(&ContentRecord, &[f32]), RecommendError> {
        let record = self.catalog.get(ordinal).ok_or_else(|| {
            RecommendError::InvalidRequest(format!(
                "ordinal {} is outside the catalog of {} titles",
                ordinal,
                self.catalog.len()
            ))
        })?;
        let features = self.features.get(ordinal).ok_or_else(|| {
            RecommendError::InvalidRequest(format!(
                "no feature vector stored for ordinal {ordinal}"
            ))
        })?;
        Ok((record, features))
    }

    /// Call the model under the configured deadline.
    async fn rank_with_model(&self, features: &[f32]) -> Result<Vec<Ordinal>, RecommendError> {
        match timeout(self.inference_timeout, self.model.rank(features)).await {
            Ok(Ok(ranked)) => Ok(ranked),
            Ok(Err(err)) => Err(RecommendError::InferenceUnavailable(err)),
            Err(_) => Err(RecommendError::InferenceTimeout(self.inference_timeout)),
        }
    }

    /// Join ranked ordinals with records, apply criteria, and cap the list.
    fn select_records(
        &self,
        ranked: &[Ordinal],
        criteria: Option<&FilterCriteria>,
        limit: Option<usize>,
    ) -> Result<Vec<ContentRecord>, RecommendError> {
        let candidates = map_ordinals(ranked, &self.catalog)?;

        let pipeline = match criteria {
            Some(criteria) => FilterPipeline::from_criteria(criteria),
            None => FilterPipeline::default(),
        };
        debug!("Applying {} filter stages", pipeline.len());
        let survivors = pipeline.apply(candidates)?;

        let mut records: Vec<ContentRecord> =
            survivors.into_iter().map(|candidate| candidate.record).collect();
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        Ok(records)
    }
}

/// Drop the model's leading entry, which by convention is the query title
/// itself. Exactly one entry is removed, and it is removed before any
/// filtering so a filtered-out query title cannot shift which entry goes.
fn drop_query_echo(ranked: Vec<Ordinal>) -> Vec<Ordinal> {
    ranked.into_iter().skip(1).collect()
}
