//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern. Pipelines are
//! usually built from a [`FilterCriteria`] carried by the request, but
//! individual filters can also be composed by hand.

use crate::criteria::FilterCriteria;
use crate::candidate::Candidate;
use crate::filters::{
    CertificationFilter, ContentTypeFilter, CountryFilter, GenreFilter, MinScoreFilter,
    YearRangeFilter,
};
use crate::traits::TitleFilter;
use anyhow::Result;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// Filters are a conjunction: a candidate survives only by passing every
/// stage. An empty pipeline is the identity and returns its input unchanged,
/// order and duplicates included.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(vec!["drama".to_string()]))
///     .add_filter(MinScoreFilter::new(7.5));
///
/// let survivors = pipeline.apply(candidates)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn TitleFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the TitleFilter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl TitleFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build a pipeline from request criteria, one stage per populated field.
    ///
    /// Unpopulated fields contribute no stage, so unconstrained criteria
    /// produce the empty (identity) pipeline. The year bounds share a single
    /// stage but remain independently optional.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();

        if !criteria.genres.is_empty() {
            pipeline = pipeline.add_filter(GenreFilter::new(criteria.genres.clone()));
        }
        if !criteria.production_countries.is_empty() {
            pipeline =
                pipeline.add_filter(CountryFilter::new(criteria.production_countries.clone()));
        }
        if criteria.min_release_year.is_some() || criteria.max_release_year.is_some() {
            pipeline = pipeline.add_filter(YearRangeFilter::new(
                criteria.min_release_year,
                criteria.max_release_year,
            ));
        }
        if let Some(min_score) = criteria.min_imdb_score {
            pipeline = pipeline.add_filter(MinScoreFilter::new(min_score));
        }
        if let Some(content_type) = criteria.content_type {
            pipeline = pipeline.add_filter(ContentTypeFilter::new(content_type));
        }
        if !criteria.age_certifications.is_empty() {
            pipeline =
                pipeline.add_filter(CertificationFilter::new(criteria.age_certifications.clone()));
        }

        pipeline
    }

    /// Number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when the pipeline has no stages and is therefore the identity.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The candidates surviving every stage
    /// * `Err` - If any filter fails
    pub fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
