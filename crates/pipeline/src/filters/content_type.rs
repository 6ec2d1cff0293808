//! Filter on record kind (film or series).

use crate::candidate::Candidate;
use crate::traits::TitleFilter;
use anyhow::Result;
use catalog::ContentType;

/// Keeps only films, or only series.
pub struct ContentTypeFilter {
    content_type: ContentType,
}

impl ContentTypeFilter {
    pub fn new(content_type: ContentType) -> Self {
        Self { content_type }
    }
}

impl TitleFilter for ContentTypeFilter {
    fn name(&self) -> &str {
        "ContentTypeFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.record.content_type == self.content_type)
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::ContentRecord;

    fn of_kind(title: &str, content_type: ContentType) -> Candidate {
        Candidate::new(
            0,
            ContentRecord {
                title: title.to_string(),
                content_type,
                release_year: 2020,
                genres: Vec::new(),
                production_countries: Vec::new(),
                imdb_score: 7.0,
                age_certification: None,
            },
        )
    }

    #[test]
    fn test_keeps_only_requested_kind() {
        let candidates = vec![
            of_kind("A Film", ContentType::Movie),
            of_kind("A Series", ContentType::Show),
            of_kind("Another Film", ContentType::Movie),
        ];

        let filter = ContentTypeFilter::new(ContentType::Show);
        let filtered = filter.apply(candidates).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].record.title, "A Series");
    }
}
