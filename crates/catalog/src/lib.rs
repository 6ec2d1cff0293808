//! # Catalog Crate
//!
//! Loads and serves the title catalog: every film and series the similarity
//! model was trained on, plus the precomputed feature vectors the model
//! consumes. The catalog is positional; a record's ordinal is its identity
//! everywhere else in the system.
//!
//! ## Components
//!
//! - **Types**: [`ContentRecord`], [`Catalog`], [`FeatureTable`], and the
//!   [`Ordinal`] alias used by every downstream crate
//! - **Loader**: one-shot startup parsing of `titles.json` and
//!   `titles_transformed.json`, with alignment validation
//! - **Resolver**: case-insensitive exact-then-substring title resolution
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::load_store;
//! use std::path::Path;
//!
//! let (catalog, features) = load_store(Path::new("model"))?;
//! let ordinal = catalog.resolve(Some("night train"), None)?;
//! let vector = features.get(ordinal).unwrap();
//! ```

pub mod error;
pub mod loader;
pub mod resolver;
pub mod types;

// Re-export the main types for convenience
pub use error::{CatalogError, Result};
pub use loader::{FEATURES_FILE, TITLES_FILE, ensure_aligned, load_catalog, load_features, load_store};
pub use resolver::{MatchKind, ResolveError};
pub use types::{Catalog, ContentRecord, ContentType, FeatureTable, Ordinal};
