//! Filter on production countries.

use crate::candidate::Candidate;
use crate::traits::TitleFilter;
use anyhow::Result;

/// Keeps candidates produced in any of the requested countries.
pub struct CountryFilter {
    countries: Vec<String>,
}

impl CountryFilter {
    /// # Arguments
    /// * `countries` - Accepted ISO country codes; one overlap suffices
    pub fn new(countries: Vec<String>) -> Self {
        Self { countries }
    }
}

impl TitleFilter for CountryFilter {
    fn name(&self) -> &str {
        "CountryFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                candidate
                    .record
                    .production_countries
                    .iter()
                    .any(|country| self.countries.contains(country))
            })
            .collect();

        Ok(filtered)
    }
}
