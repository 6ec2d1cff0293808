//! Filter on genre labels.
//!
//! Keeps candidates sharing at least one genre with the requested set.

use crate::candidate::Candidate;
use crate::traits::TitleFilter;
use anyhow::Result;

/// Keeps candidates tagged with any of the requested genres.
pub struct GenreFilter {
    genres: Vec<String>,
}

impl GenreFilter {
    /// # Arguments
    /// * `genres` - Accepted genre labels; a candidate needs only one of them
    pub fn new(genres: Vec<String>) -> Self {
        Self { genres }
    }
}

impl TitleFilter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                candidate
                    .record
                    .genres
                    .iter()
                    .any(|genre| self.genres.contains(genre))
            })
            .collect();

        Ok(filtered)
    }
}
