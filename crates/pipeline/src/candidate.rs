//! Candidates: ranked ordinals joined with their catalog records.
//!
//! The similarity model speaks only in ordinals. Before any metadata filter
//! can run, each ranked ordinal is joined with the catalog record it names.
//! A ranked ordinal with no record is not a recoverable condition: it means
//! the model and the catalog disagree about the vocabulary, so every result
//! in the response is suspect.

use catalog::{Catalog, ContentRecord, Ordinal};
use thiserror::Error;

/// One entry of the model ranking, carrying its catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Position in the catalog, as emitted by the model
    pub ordinal: Ordinal,
    /// The record at that position
    pub record: ContentRecord,
}

impl Candidate {
    pub fn new(ordinal: Ordinal, record: ContentRecord) -> Self {
        Self { ordinal, record }
    }
}

/// Errors raised while joining a model ranking against the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The model emitted an ordinal the catalog does not contain.
    #[error(
        "model returned ordinal {ordinal} but the catalog holds only {catalog_len} records; \
         the model and catalog vocabularies disagree"
    )]
    CorruptIndex {
        ordinal: Ordinal,
        catalog_len: usize,
    },
}

/// Join each ranked ordinal with its catalog record, preserving order and
/// duplicates.
///
/// # Arguments
/// * `ordinals` - Model output, most similar first
/// * `catalog` - The catalog the model was trained against
///
/// # Returns
/// * `Ok(Vec<Candidate>)` - Candidates in the same order as `ordinals`
/// * `Err(SelectionError::CorruptIndex)` - Any ordinal out of range; the
///   whole ranking is rejected rather than silently dropping entries
pub fn map_ordinals(
    ordinals: &[Ordinal],
    catalog: &Catalog,
) -> Result<Vec<Candidate>, SelectionError> {
    ordinals
        .iter()
        .map(|&ordinal| {
            catalog
                .get(ordinal)
                .cloned()
                .map(|record| Candidate::new(ordinal, record))
                .ok_or(SelectionError::CorruptIndex {
                    ordinal,
                    catalog_len: catalog.len(),
                })
        })
        .collect()
}
