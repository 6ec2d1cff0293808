//! User-supplied filter criteria.
//!
//! Every field is optional and absent fields constrain nothing, so the
//! zero value accepts every candidate. List-valued criteria are
//! disjunctions (any listed value passes); the criteria as a whole are a
//! conjunction.

use catalog::ContentType;
use serde::{Deserialize, Serialize};

/// Constraints a caller can place on the recommendation list.
///
/// Deserializes from the request body of the surrounding service, so the
/// field names are part of the wire shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Keep candidates sharing at least one of these genres
    pub genres: Vec<String>,
    /// Keep candidates produced in at least one of these countries
    pub production_countries: Vec<String>,
    /// Keep candidates released in or after this year
    pub min_release_year: Option<u16>,
    /// Keep candidates released in or before this year
    pub max_release_year: Option<u16>,
    /// Keep candidates rated at or above this IMDB score
    pub min_imdb_score: Option<f32>,
    /// Keep only films, or only series
    pub content_type: Option<ContentType>,
    /// Keep candidates carrying one of these age certifications
    pub age_certifications: Vec<String>,
}

impl FilterCriteria {
    /// True when no field constrains anything; such criteria are an identity
    /// over any candidate list.
    pub fn is_unconstrained(&self) -> bool {
        self.genres.is_empty()
            && self.production_countries.is_empty()
            && self.min_release_year.is_none()
            && self.max_release_year.is_none()
            && self.min_imdb_score.is_none()
            && self.content_type.is_none()
            && self.age_certifications.is_empty()
    }
}
