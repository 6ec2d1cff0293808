//! Query resolution: mapping a user-supplied title to a catalog ordinal
//!
//! Callers can name a title either directly by ordinal or by (part of) its
//! display title. Title matching is case-insensitive and runs in two passes:
//! an exact pass over the whole catalog, then a substring pass. The two-pass
//! split keeps short queries honest: "Alpha" resolves to the record titled
//! "Alpha" even when "Alpha Centauri" appears earlier in the catalog.

use crate::types::{Catalog, Ordinal};
use thiserror::Error;

/// Why a query failed to resolve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The request carried neither a title nor an ordinal.
    #[error("either a title or an ordinal must be provided")]
    MissingQuery,

    /// No catalog title matched the query in either pass.
    #[error("no catalog title matches {query:?}")]
    NoMatch { query: String },
}

/// Which pass a search hit came from. Exact hits sort before substring hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    Exact,
    Substring,
}

impl Catalog {
    /// Resolve a query to a single ordinal.
    ///
    /// ## Algorithm
    ///
    /// 1. If `ordinal` is given it wins outright; the title is ignored.
    /// 2. Otherwise lowercase the title and scan the whole catalog for an
    ///    exact match, taking the first hit in catalog order.
    /// 3. If no title matched exactly, scan again accepting any record whose
    ///    title contains the query as a substring.
    ///
    /// A blank or whitespace-only title counts as absent, so `resolve(None,
    /// None)` and `resolve(Some("  "), None)` both fail the same way.
    ///
    /// # Arguments
    ///
    /// * `title` - Case-insensitive title query, matched in two passes
    /// * `ordinal` - Direct catalog position, taking precedence over `title`
    ///
    /// # Returns
    ///
    /// The resolved ordinal, or a [`ResolveError`] describing why resolution
    /// was impossible. An ordinal passed in is returned as-is without a range
    /// check; callers that need the record go through [`Catalog::get`].
    pub fn resolve(
        &self,
        title: Option<&str>,
        ordinal: Option<Ordinal>,
    ) -> Result<Ordinal, ResolveError> {
        if let Some(ordinal) = ordinal {
            return Ok(ordinal);
        }

        let query = title
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or(ResolveError::MissingQuery)?;
        let needle = query.to_lowercase();

        // Exact pass first, over the whole catalog
        if let Some(ordinal) = self
            .records()
            .iter()
            .position(|r| r.title.to_lowercase() == needle)
        {
            return Ok(ordinal);
        }

        // Substring pass: the record title must contain the query, never the
        // other way around
        if let Some(ordinal) = self
            .records()
            .iter()
            .position(|r| r.title.to_lowercase().contains(&needle))
        {
            return Ok(ordinal);
        }

        Err(ResolveError::NoMatch {
            query: query.to_string(),
        })
    }

    /// List every record matching the query, exact hits first.
    ///
    /// Within each tier, hits keep catalog order. [`Catalog::resolve`] with
    /// the same query returns the ordinal of the first entry of this listing.
    pub fn search(&self, query: &str) -> Vec<(Ordinal, MatchKind)> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(Ordinal, MatchKind)> = Vec::new();
        for (ordinal, record) in self.records().iter().enumerate() {
            let lowered = record.title.to_lowercase();
            if lowered == needle {
                matches.push((ordinal, MatchKind::Exact));
            } else if lowered.contains(&needle) {
                matches.push((ordinal, MatchKind::Substring));
            }
        }

        // Stable sort: exact tier first, catalog order preserved within tiers
        matches.sort_by_key(|&(_, kind)| kind);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentRecord, ContentType};

    fn titled(title: &str) -> ContentRecord {
        ContentRecord {
            title: title.to_string(),
            content_type: ContentType::Movie,
            release_year: 2020,
            genres: Vec::new(),
            production_countries: Vec::new(),
            imdb_score: 7.0,
            age_certification: None,
        }
    }

    fn build_catalog(titles: &[&str]) -> Catalog {
        Catalog::from_records(titles.iter().map(|t| titled(t)).collect())
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let catalog = build_catalog(&["Night Train", "Day Bus"]);
        assert_eq!(catalog.resolve(Some("night train"), None), Ok(0));
        assert_eq!(catalog.resolve(Some("DAY BUS"), None), Ok(1));
    }

    #[test]
    fn test_exact_match_beats_earlier_substring_match() {
        // "Alpha Centauri" sits first and contains "alpha", but the exact
        // pass runs over the whole catalog before any substring is accepted.
        let catalog = build_catalog(&["Alpha Centauri", "Alpha"]);
        assert_eq!(catalog.resolve(Some("alpha"), None), Ok(1));
    }

    #[test]
    fn test_substring_match_takes_first_in_catalog_order() {
        let catalog = build_catalog(&["Zodiac", "The Long Night", "Night Shift"]);
        assert_eq!(catalog.resolve(Some("night"), None), Ok(1));
    }

    #[test]
    fn test_query_containing_the_title_does_not_match() {
        // The record title must contain the query; a query that merely
        // contains a title resolves to nothing.
        let catalog = build_catalog(&["Alpha"]);
        let result = catalog.resolve(Some("Alpha Centauri Chronicles"), None);
        assert_eq!(
            result,
            Err(ResolveError::NoMatch {
                query: "Alpha Centauri Chronicles".to_string()
            })
        );
    }

    #[test]
    fn test_ordinal_takes_precedence_over_title() {
        let catalog = build_catalog(&["Zero", "One", "Two"]);
        assert_eq!(catalog.resolve(Some("Zero"), Some(2)), Ok(2));
    }

    #[test]
    fn test_out_of_range_ordinal_is_passed_through() {
        // Range checking belongs to the record lookup, not resolution.
        let catalog = build_catalog(&["Only"]);
        assert_eq!(catalog.resolve(None, Some(9)), Ok(9));
        assert!(catalog.get(9).is_none());
    }

    #[test]
    fn test_missing_query_is_rejected() {
        let catalog = build_catalog(&["Anything"]);
        assert_eq!(catalog.resolve(None, None), Err(ResolveError::MissingQuery));
        assert_eq!(
            catalog.resolve(Some("   "), None),
            Err(ResolveError::MissingQuery)
        );
    }

    #[test]
    fn test_no_match_reports_the_original_query() {
        let catalog = build_catalog(&["Something Else"]);
        assert_eq!(
            catalog.resolve(Some("Unfindable"), None),
            Err(ResolveError::NoMatch {
                query: "Unfindable".to_string()
            })
        );
    }

    #[test]
    fn test_search_lists_exact_tier_before_substring_tier() {
        let catalog = build_catalog(&["Night Shift", "Night", "Good Night Moon"]);
        let matches = catalog.search("night");
        assert_eq!(
            matches,
            vec![
                (1, MatchKind::Exact),
                (0, MatchKind::Substring),
                (2, MatchKind::Substring),
            ]
        );
    }

    #[test]
    fn test_resolve_agrees_with_first_search_hit() {
        let catalog = build_catalog(&["Alpha Centauri", "Alpha", "Alphaville"]);
        let first = catalog.search("alpha")[0].0;
        assert_eq!(catalog.resolve(Some("alpha"), None), Ok(first));
    }

    #[test]
    fn test_search_with_blank_query_is_empty() {
        let catalog = build_catalog(&["Anything"]);
        assert!(catalog.search("  ").is_empty());
    }
}
