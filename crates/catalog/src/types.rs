//! Core data structures for the title catalog
//!
//! This module defines the fundamental types shared by every other crate:
//! - [`ContentRecord`]: one film or series with its descriptive metadata
//! - [`Catalog`]: the in-memory store, indexed by ordinal position
//! - [`FeatureTable`]: the precomputed feature vectors, parallel to the catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases for Clarity
// ============================================================================

/// Position of a record in the catalog.
///
/// Ordinals are the only identifier the similarity model knows about: the
/// model's output vocabulary is exactly the set of positions in the catalog
/// it was trained against. Row `i` of the [`FeatureTable`] describes record
/// `i` of the [`Catalog`].
pub type Ordinal = usize;

// ============================================================================
// Catalog Records
// ============================================================================

/// Whether a record is a film or a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Movie,
    Show,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Movie => write!(f, "MOVIE"),
            ContentType::Show => write!(f, "SHOW"),
        }
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MOVIE" | "MOVIES" => Ok(ContentType::Movie),
            "SHOW" | "SHOWS" => Ok(ContentType::Show),
            other => Err(format!("unknown content type: {other}")),
        }
    }
}

/// One title with the metadata the filter stage can constrain on.
///
/// The field names mirror the JSON produced by the offline preprocessing
/// step, so records deserialize straight out of `titles.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Display title, also the target of query resolution
    pub title: String,
    /// Film or series
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Year of first release
    pub release_year: u16,
    /// Genre labels, possibly empty
    #[serde(default)]
    pub genres: Vec<String>,
    /// ISO country codes of the producing countries
    #[serde(default)]
    pub production_countries: Vec<String>,
    /// IMDB rating on the 0-10 scale
    pub imdb_score: f32,
    /// Age rating, absent for unrated titles
    #[serde(default)]
    pub age_certification: Option<String>,
}

// ============================================================================
// Catalog Store
// ============================================================================

/// In-memory store of every known title, in training order.
///
/// The catalog is loaded once at startup and never mutated afterwards. Its
/// ordering is significant: reordering records would silently remap every
/// ordinal the similarity model emits.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ContentRecord>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records already in training order.
    pub fn from_records(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }

    /// Append a record, assigning it the next ordinal.
    pub fn push(&mut self, record: ContentRecord) {
        self.records.push(record);
    }

    /// Look up the record at `ordinal`, if it exists.
    pub fn get(&self, ordinal: Ordinal) -> Option<&ContentRecord> {
        self.records.get(ordinal)
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in ordinal order.
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    // ========================================================================
    // Vocabulary Summaries
    // ========================================================================

    /// Every genre label appearing in the catalog, sorted and deduplicated.
    pub fn distinct_genres(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|r| r.genres.iter().map(String::as_str))
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Every production country code, sorted and deduplicated.
    pub fn distinct_countries(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|r| r.production_countries.iter().map(String::as_str))
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Every age certification in use, sorted; unrated titles contribute nothing.
    pub fn distinct_certifications(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.age_certification.as_deref())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Earliest and latest release years, or `None` for an empty catalog.
    pub fn year_span(&self) -> Option<(u16, u16)> {
        let min = self.records.iter().map(|r| r.release_year).min()?;
        let max = self.records.iter().map(|r| r.release_year).max()?;
        Some((min, max))
    }

    /// Highest IMDB score in the catalog, or `None` for an empty catalog.
    pub fn score_ceiling(&self) -> Option<f32> {
        self.records.iter().map(|r| r.imdb_score).reduce(f32::max)
    }
}

// ============================================================================
// Feature Table
// ============================================================================

/// Precomputed feature vectors, one row per catalog record.
///
/// Row `i` is the model-space representation of catalog record `i`. The
/// vectors are produced offline by the same preprocessing run that built the
/// model, so this crate treats them as opaque floats: it never inspects or
/// recomputes individual features.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    vectors: Vec<Vec<f32>>,
    dim: usize,
}

impl FeatureTable {
    /// Build a table from raw rows, validating that every row has the same
    /// dimensionality.
    pub fn new(vectors: Vec<Vec<f32>>) -> crate::error::Result<Self> {
        let dim = vectors.first().map(Vec::len).unwrap_or(0);
        for (ordinal, row) in vectors.iter().enumerate() {
            if row.len() != dim {
                return Err(crate::error::CatalogError::RaggedFeatures {
                    ordinal,
                    expected: dim,
                    found: row.len(),
                });
            }
        }
        Ok(Self { vectors, dim })
    }

    /// Feature row for the record at `ordinal`, if it exists.
    pub fn get(&self, ordinal: Ordinal) -> Option<&[f32]> {
        self.vectors.get(ordinal).map(Vec::as_slice)
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimensionality shared by every row (0 for an empty table).
    pub fn dim(&self) -> usize {
        self.dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ContentRecord {
        ContentRecord {
            title: title.to_string(),
            content_type: ContentType::Movie,
            release_year: 2020,
            genres: vec!["drama".to_string()],
            production_countries: vec!["US".to_string()],
            imdb_score: 7.0,
            age_certification: None,
        }
    }

    #[test]
    fn test_catalog_ordinals_follow_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.push(record("First"));
        catalog.push(record("Second"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).map(|r| r.title.as_str()), Some("First"));
        assert_eq!(catalog.get(1).map(|r| r.title.as_str()), Some("Second"));
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_record_deserializes_from_preprocessed_json() {
        let json = r#"{
            "title": "Night Train",
            "type": "SHOW",
            "release_year": 1999,
            "genres": ["thriller", "crime"],
            "production_countries": ["GB"],
            "imdb_score": 8.1,
            "age_certification": "TV-MA"
        }"#;

        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.content_type, ContentType::Show);
        assert_eq!(record.genres, vec!["thriller", "crime"]);
        assert_eq!(record.age_certification.as_deref(), Some("TV-MA"));
    }

    #[test]
    fn test_record_tolerates_missing_optional_fields() {
        let json = r#"{
            "title": "Bare",
            "type": "MOVIE",
            "release_year": 2005,
            "imdb_score": 6.2
        }"#;

        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert!(record.genres.is_empty());
        assert!(record.production_countries.is_empty());
        assert!(record.age_certification.is_none());
    }

    #[test]
    fn test_content_type_parses_ui_spellings() {
        assert_eq!("movie".parse::<ContentType>(), Ok(ContentType::Movie));
        assert_eq!("SHOWS".parse::<ContentType>(), Ok(ContentType::Show));
        assert!("documentary".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_vocabulary_summaries_are_sorted_and_deduplicated() {
        let mut catalog = Catalog::new();
        let mut a = record("A");
        a.genres = vec!["drama".to_string(), "comedy".to_string()];
        a.production_countries = vec!["US".to_string(), "GB".to_string()];
        a.age_certification = Some("PG".to_string());
        a.release_year = 1985;
        a.imdb_score = 6.5;
        let mut b = record("B");
        b.genres = vec!["comedy".to_string()];
        b.production_countries = vec!["US".to_string()];
        b.release_year = 2011;
        b.imdb_score = 8.9;
        catalog.push(a);
        catalog.push(b);

        assert_eq!(catalog.distinct_genres(), vec!["comedy", "drama"]);
        assert_eq!(catalog.distinct_countries(), vec!["GB", "US"]);
        assert_eq!(catalog.distinct_certifications(), vec!["PG"]);
        assert_eq!(catalog.year_span(), Some((1985, 2011)));
        assert_eq!(catalog.score_ceiling(), Some(8.9));
    }

    #[test]
    fn test_feature_table_rejects_ragged_rows() {
        let result = FeatureTable::new(vec![vec![0.1, 0.2], vec![0.3]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_feature_table_lookup() {
        let table = FeatureTable::new(vec![vec![0.1, 0.2], vec![0.3, 0.4]]).unwrap();
        assert_eq!(table.dim(), 2);
        assert_eq!(table.get(1), Some(&[0.3f32, 0.4][..]));
        assert!(table.get(2).is_none());
    }

    #[test]
    fn test_empty_feature_table_is_valid() {
        let table = FeatureTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.dim(), 0);
    }
}
