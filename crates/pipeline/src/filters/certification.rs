//! Filter on age certification.
//!
//! Candidates with no certification at all never pass this filter: an
//! unrated title cannot satisfy a caller asking for specific ratings.

use crate::candidate::Candidate;
use crate::traits::TitleFilter;
use anyhow::Result;

/// Keeps candidates carrying any of the requested age certifications.
pub struct CertificationFilter {
    certifications: Vec<String>,
}

impl CertificationFilter {
    /// # Arguments
    /// * `certifications` - Accepted certification labels, e.g. "PG-13", "TV-MA"
    pub fn new(certifications: Vec<String>) -> Self {
        Self { certifications }
    }
}

impl TitleFilter for CertificationFilter {
    fn name(&self) -> &str {
        "CertificationFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                candidate
                    .record
                    .age_certification
                    .as_ref()
                    .is_some_and(|certification| self.certifications.contains(certification))
            })
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ContentRecord, ContentType};

    fn certified(title: &str, certification: Option<&str>) -> Candidate {
        Candidate::new(
            0,
            ContentRecord {
                title: title.to_string(),
                content_type: ContentType::Movie,
                release_year: 2020,
                genres: Vec::new(),
                production_countries: Vec::new(),
                imdb_score: 7.0,
                age_certification: certification.map(str::to_string),
            },
        )
    }

    #[test]
    fn test_keeps_listed_certifications() {
        let candidates = vec![
            certified("Family", Some("PG")),
            certified("Late Night", Some("R")),
            certified("Unrated", None),
        ];

        let filter = CertificationFilter::new(vec!["PG".to_string(), "PG-13".to_string()]);
        let filtered = filter.apply(candidates).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].record.title, "Family");
    }

    #[test]
    fn test_unrated_candidates_never_pass() {
        let candidates = vec![certified("Unrated", None)];
        let filter = CertificationFilter::new(vec!["R".to_string()]);
        assert!(filter.apply(candidates).unwrap().is_empty());
    }
}
