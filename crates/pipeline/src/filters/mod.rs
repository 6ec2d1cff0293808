//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod certification;
pub mod content_type;
pub mod country;
pub mod genre;
pub mod min_score;
pub mod year_range;

// Re-export for convenience
pub use certification::CertificationFilter;
pub use content_type::ContentTypeFilter;
pub use country::CountryFilter;
pub use genre::GenreFilter;
pub use min_score::MinScoreFilter;
pub use year_range::YearRangeFilter;
