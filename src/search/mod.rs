//! Fuzzy city-name search
//!
//! Scores every catalog entry against a query with the Indel normalized
//! similarity (2 * LCS / total length), keeps entries at or above the
//! threshold and orders them by `(country, state, name, id)`.

use rapidfuzz::distance::indel;
use std::cmp::Ordering;

use crate::catalog::{Catalog, CityRecord};
use crate::error::{ClockError, Result};

/// Searches matching more cities than this are rejected
pub const MAX_MATCHES: usize = 50;

/// Default `--similarity` threshold
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// A catalog entry paired with its similarity to the query
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub city: &'a CityRecord,
    pub score: f64,
}

/// Similarity between a normalized query and a city name, in [0.0, 1.0]
///
/// A non-empty query contained in the name scores 1.0.
pub fn similarity(query: &str, name: &str) -> f64 {
    let name = name.to_lowercase();

    if !query.is_empty() && name.contains(query) {
        return 1.0;
    }

    indel::normalized_similarity(query.chars(), name.chars())
}

/// Lowercase and trim a raw search query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Find cities whose name is similar enough to `query`
///
/// Fails with `TooManyMatches` when more than [`MAX_MATCHES`] cities qualify.
pub fn find_matches<'a>(
    catalog: &'a Catalog,
    query: &str,
    threshold: f64,
) -> Result<Vec<MatchResult<'a>>> {
    let query = normalize_query(query);

    let mut matches: Vec<MatchResult<'a>> = catalog
        .iter()
        .map(|city| MatchResult {
            city,
            score: similarity(&query, &city.name),
        })
        .filter(|m| m.score >= threshold)
        .collect();

    if matches.len() > MAX_MATCHES {
        return Err(ClockError::TooManyMatches(matches.len()));
    }

    matches.sort_by(|a, b| collate(a.city, b.city));
    Ok(matches)
}

/// Case-insensitive `(country, state, name)` order, ties broken by id
fn collate(a: &CityRecord, b: &CityRecord) -> Ordering {
    a.country
        .to_lowercase()
        .cmp(&b.country.to_lowercase())
        .then_with(|| {
            a.state_or_empty()
                .to_lowercase()
                .cmp(&b.state_or_empty().to_lowercase())
        })
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}
