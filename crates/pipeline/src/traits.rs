//! Core traits for the filtering pipeline.
//!
//! This module defines the TitleFilter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use crate::candidate::Candidate;
use anyhow::Result;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Filters may drop candidates but never reorder or invent them
pub trait TitleFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The surviving candidates, in input order
    /// * `Err` - If filtering fails
    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>>;
}
