//! Filter on IMDB score.
//!
//! Removes candidates rated below a caller-chosen floor. The bound is
//! inclusive, matching how score thresholds read in the request form.

use crate::candidate::Candidate;
use crate::traits::TitleFilter;
use anyhow::Result;

/// Keeps candidates rated at or above a minimum IMDB score.
pub struct MinScoreFilter {
    min_score: f32,
}

impl MinScoreFilter {
    /// # Arguments
    /// * `min_score` - Minimum accepted score on the 0-10 IMDB scale
    pub fn new(min_score: f32) -> Self {
        Self { min_score }
    }
}

impl TitleFilter for MinScoreFilter {
    fn name(&self) -> &str {
        "MinScoreFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.record.imdb_score >= self.min_score)
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ContentRecord, ContentType};

    fn scored(title: &str, score: f32) -> Candidate {
        Candidate::new(
            0,
            ContentRecord {
                title: title.to_string(),
                content_type: ContentType::Movie,
                release_year: 2020,
                genres: Vec::new(),
                production_countries: Vec::new(),
                imdb_score: score,
                age_certification: None,
            },
        )
    }

    #[test]
    fn test_inclusive_floor() {
        let candidates = vec![
            scored("Great", 8.4),
            scored("Exactly", 7.0),
            scored("Middling", 6.9),
        ];

        let filter = MinScoreFilter::new(7.0);
        let filtered = filter.apply(candidates).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1].record.title, "Exactly");
    }

    #[test]
    fn test_unsatisfiable_floor_empties_the_list() {
        let candidates = vec![scored("Best Known", 9.3)];
        let filter = MinScoreFilter::new(9.9);
        assert!(filter.apply(candidates).unwrap().is_empty());
    }
}
