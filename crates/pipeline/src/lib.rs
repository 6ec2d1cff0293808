//! Pipeline for filtering ranked title candidates.
//!
//! This crate provides:
//! - TitleFilter trait and implementations for metadata filtering
//! - FilterPipeline for composing filters from request criteria
//! - Candidate mapping from model ordinals to catalog records
//!
//! ## Architecture
//! The pipeline processes a model ranking in stages:
//! 1. Ranked ordinals are joined with catalog records (out-of-range is fatal)
//! 2. Filters remove candidates failing the request criteria
//! 3. Survivors keep the model's order, including any duplicates
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, FilterCriteria, map_ordinals};
//!
//! // Join the ranking against the catalog
//! let candidates = map_ordinals(&ranked, &catalog)?;
//!
//! // Build and apply the filter pipeline
//! let pipeline = FilterPipeline::from_criteria(&criteria);
//! let survivors = pipeline.apply(candidates)?;
//! ```

pub mod candidate;
pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use candidate::{Candidate, SelectionError, map_ordinals};
pub use criteria::FilterCriteria;
pub use filter_pipeline::FilterPipeline;
pub use traits::TitleFilter;
