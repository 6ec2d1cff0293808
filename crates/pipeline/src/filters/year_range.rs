//! Filter on release year.
//!
//! Each bound is independently optional, so callers can ask for "1990 or
//! later" without also naming an upper bound, and vice versa. Bounds are
//! inclusive.

use crate::candidate::Candidate;
use crate::traits::TitleFilter;
use anyhow::Result;
use tracing::warn;

/// Keeps candidates released within an inclusive year range.
pub struct YearRangeFilter {
    min_year: Option<u16>,
    max_year: Option<u16>,
}

impl YearRangeFilter {
    /// # Arguments
    /// * `min_year` - Earliest accepted release year, if any
    /// * `max_year` - Latest accepted release year, if any
    ///
    /// An inverted range (min above max) is legal and rejects everything;
    /// it is logged since it is almost certainly a caller mistake.
    pub fn new(min_year: Option<u16>, max_year: Option<u16>) -> Self {
        if let (Some(min), Some(max)) = (min_year, max_year) {
            if min > max {
                warn!("Year range {}..={} is empty; no candidate can pass", min, max);
            }
        }
        Self { min_year, max_year }
    }
}

impl TitleFilter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                let year = candidate.record.release_year;
                self.min_year.is_none_or(|min| year >= min)
                    && self.max_year.is_none_or(|max| year <= max)
            })
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ContentRecord, ContentType};

    fn released(title: &str, year: u16) -> Candidate {
        Candidate::new(
            0,
            ContentRecord {
                title: title.to_string(),
                content_type: ContentType::Movie,
                release_year: year,
                genres: Vec::new(),
                production_countries: Vec::new(),
                imdb_score: 7.0,
                age_certification: None,
            },
        )
    }

    fn decades() -> Vec<Candidate> {
        vec![
            released("Eighties", 1985),
            released("Nineties", 1994),
            released("Aughts", 2003),
        ]
    }

    #[test]
    fn test_lower_bound_alone() {
        let filter = YearRangeFilter::new(Some(1990), None);
        let filtered = filter.apply(decades()).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].record.title, "Nineties");
    }

    #[test]
    fn test_upper_bound_alone() {
        let filter = YearRangeFilter::new(None, Some(1994));
        let filtered = filter.apply(decades()).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1].record.title, "Nineties");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = YearRangeFilter::new(Some(1994), Some(1994));
        let filtered = filter.apply(decades()).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].record.title, "Nineties");
    }

    #[test]
    fn test_inverted_range_rejects_everything() {
        let filter = YearRangeFilter::new(Some(2000), Some(1990));
        assert!(filter.apply(decades()).unwrap().is_empty());
    }
}
