//! Error types for catalog loading and validation.
//!
//! Parse failures carry the offending path so startup logs point straight at
//! the broken file. Alignment failures are fatal: a catalog whose titles and
//! feature rows disagree can never produce trustworthy recommendations.

use thiserror::Error;

/// Errors that can occur while loading or validating the catalog store.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A data file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A data file was read but did not parse as the expected JSON shape.
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The titles file and the feature file have different lengths.
    #[error("catalog is misaligned: {titles} titles but {vectors} feature vectors")]
    Misaligned { titles: usize, vectors: usize },

    /// One feature row has a different dimensionality than the first row.
    #[error("feature row {ordinal} has {found} values, expected {expected}")]
    RaggedFeatures {
        ordinal: usize,
        expected: usize,
        found: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
