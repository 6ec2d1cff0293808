//! Startup loading of the catalog store from disk
//!
//! The store is two JSON files written by the offline preprocessing run:
//!
//! - `titles.json`: an array of [`ContentRecord`] objects in training order
//! - `titles_transformed.json`: an array of float arrays, row `i` being the
//!   feature vector of title `i`
//!
//! Both files are parsed once at startup via [`load_store`] and held in
//! memory for the lifetime of the process. Nothing is ever re-read or
//! mutated after that.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, ContentRecord, FeatureTable};

/// File name of the title metadata array.
pub const TITLES_FILE: &str = "titles.json";
/// File name of the feature vector array.
pub const FEATURES_FILE: &str = "titles_transformed.json";

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// The preprocessing step writes unrated titles with the literal string
/// "None" instead of omitting the field; fold that back into a real absence.
fn normalize(record: &mut ContentRecord) {
    if record.age_certification.as_deref() == Some("None") {
        record.age_certification = None;
    }
}

/// Load and normalize the title metadata file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let mut records: Vec<ContentRecord> = read_json(path)?;
    for record in &mut records {
        normalize(record);
    }
    debug!("Parsed {} title records from {}", records.len(), path.display());
    Ok(Catalog::from_records(records))
}

/// Load the feature vector file, validating row dimensionality.
pub fn load_features(path: &Path) -> Result<FeatureTable> {
    let vectors: Vec<Vec<f32>> = read_json(path)?;
    let table = FeatureTable::new(vectors)?;
    debug!(
        "Parsed {} feature rows of dimension {} from {}",
        table.len(),
        table.dim(),
        path.display()
    );
    Ok(table)
}

/// Check the positional correspondence between titles and feature rows.
pub fn ensure_aligned(catalog: &Catalog, features: &FeatureTable) -> Result<()> {
    if catalog.len() != features.len() {
        return Err(CatalogError::Misaligned {
            titles: catalog.len(),
            vectors: features.len(),
        });
    }
    Ok(())
}

/// Load the full store from a data directory.
///
/// ## Algorithm
///
/// 1. Parse `titles.json` and `titles_transformed.json` in parallel; the two
///    files are independent until the alignment check.
/// 2. Normalize title records ("None" certifications become real absences).
/// 3. Verify the two arrays have the same length. A mismatch is fatal since
///    every recommendation would join metadata to the wrong vectors.
///
/// # Arguments
///
/// * `data_dir` - Directory holding both data files
///
/// # Returns
///
/// The validated catalog and feature table, ready to serve requests.
pub fn load_store(data_dir: &Path) -> Result<(Catalog, FeatureTable)> {
    let titles_path = data_dir.join(TITLES_FILE);
    let features_path = data_dir.join(FEATURES_FILE);

    let (catalog, features) = rayon::join(
        || load_catalog(&titles_path),
        || load_features(&features_path),
    );
    let catalog = catalog?;
    let features = features?;

    ensure_aligned(&catalog, &features)?;
    info!(
        "Loaded {} titles with {}-dimensional feature vectors from {}",
        catalog.len(),
        features.dim(),
        data_dir.display()
    );
    Ok((catalog, features))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TITLES_JSON: &str = r#"[
        {
            "title": "Night Train",
            "type": "MOVIE",
            "release_year": 1999,
            "genres": ["thriller"],
            "production_countries": ["GB"],
            "imdb_score": 8.1,
            "age_certification": "R"
        },
        {
            "title": "Quiet Harbor",
            "type": "SHOW",
            "release_year": 2015,
            "genres": ["drama"],
            "production_countries": ["US"],
            "imdb_score": 7.4,
            "age_certification": "None"
        }
    ]"#;

    const FEATURES_JSON: &str = "[[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]";

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), TITLES_FILE, TITLES_JSON);
        write_file(dir.path(), FEATURES_FILE, FEATURES_JSON);

        let (catalog, features) = load_store(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(features.len(), 2);
        assert_eq!(features.dim(), 3);
        assert_eq!(catalog.get(0).map(|r| r.title.as_str()), Some("Night Train"));
    }

    #[test]
    fn test_none_certification_becomes_absent() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), TITLES_FILE, TITLES_JSON);

        let catalog = load_catalog(&dir.path().join(TITLES_FILE)).unwrap();
        assert_eq!(catalog.get(0).unwrap().age_certification.as_deref(), Some("R"));
        assert!(catalog.get(1).unwrap().age_certification.is_none());
    }

    #[test]
    fn test_misaligned_store_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), TITLES_FILE, TITLES_JSON);
        write_file(dir.path(), FEATURES_FILE, "[[0.1, 0.2, 0.3]]");

        let result = load_store(dir.path());
        assert!(matches!(
            result,
            Err(CatalogError::Misaligned {
                titles: 2,
                vectors: 1
            })
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(TITLES_FILE);

        let err = load_catalog(&missing).unwrap_err();
        match err {
            CatalogError::Io { path, .. } => assert!(path.contains("titles.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), FEATURES_FILE, "[[0.1], not json");

        let err = load_features(&dir.path().join(FEATURES_FILE)).unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));
    }

    #[test]
    fn test_ragged_feature_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), FEATURES_FILE, "[[0.1, 0.2], [0.3]]");

        let err = load_features(&dir.path().join(FEATURES_FILE)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RaggedFeatures {
                ordinal: 1,
                expected: 2,
                found: 1
            }
        ));
    }
}
