//! Server crate for the WatchNext recommendation engine.
//!
//! This crate contains the orchestrator that coordinates query resolution,
//! model inference, and result filtering, plus the request error taxonomy.

pub mod error;
pub mod orchestrator;

pub use error::RecommendError;
pub use orchestrator::{
    DEFAULT_INFERENCE_TIMEOUT, RecommendRequest, RecommendResponse, RecommendationOrchestrator,
};
