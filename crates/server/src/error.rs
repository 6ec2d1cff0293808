//! Failure taxonomy for recommendation requests.
//!
//! Callers branch on these variants: an invalid request is the caller's
//! fault, an unavailable or timed-out model is a dependency fault, and a
//! corrupt index means the deployed model and catalog disagree. Note that a
//! query matching no title is not an error at all; it produces an empty
//! response.

use model_client::ModelClientError;
use pipeline::SelectionError;
use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong while serving one recommendation request.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The request named neither a title nor an ordinal, or named an
    /// ordinal the catalog does not contain.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The similarity model could not be reached or failed to rank.
    #[error("similarity model unavailable: {0}")]
    InferenceUnavailable(#[from] ModelClientError),

    /// The model call exceeded the configured deadline.
    #[error("similarity model timed out after {0:?}")]
    InferenceTimeout(Duration),

    /// The model emitted an ordinal outside the catalog. The response is
    /// abandoned rather than partially served, since every entry of such a
    /// ranking is suspect.
    #[error("corrupt index: {0}")]
    CorruptIndex(#[from] SelectionError),

    /// A filter stage failed; surfaced as an internal fault.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
