//! Dataset loading and enrichment
//!
//! Reads the raw Steam CSV export, derives the per-game metrics
//! (average owners, total ratings, positive rate) and applies the
//! reliability floor. Everything downstream works on the enriched,
//! already-filtered `Record` set and never mutates it.

use crate::error::{ParadoxError, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::path::Path;

/// Reliability floor: a game needs strictly more than this many total
/// ratings before its positive rate means anything.
pub const MIN_TOTAL_RATINGS: u32 = 100;

/// A raw CSV row. Extra columns in the export (appid, price, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub name: String,
    /// Ownership band as reported by the store, e.g. "20000-50000"
    #[serde(default)]
    pub owners: Option<String>,
    pub positive_ratings: u32,
    pub negative_ratings: u32,
    #[serde(default)]
    pub genres: String,
}

/// An enriched game record. Only constructed for rows that pass the
/// reliability floor, so `positive_rate` is always defined.
#[derive(Debug, Clone)]
pub struct Record {
    pub name: String,
    /// Midpoint of the owners band; 0.0 when the band was absent or malformed
    pub average_owners: f64,
    pub positive_ratings: u32,
    pub negative_ratings: u32,
    pub total_ratings: u32,
    /// Percentage of ratings that are positive, 0..=100
    pub positive_rate: f64,
    /// Semicolon-separated genre tags, e.g. "Action;Indie"
    pub genres: String,
}

/// Parse an owners band like "20000-50000" into its midpoint.
///
/// Returns 0.0 for a missing value, a value without exactly one separator,
/// or halves that are not integers. The zero sentinel means "unknown
/// ownership" and deliberately flows through later comparisons unchanged,
/// which lands such games in the Hidden Gems segment if they are otherwise
/// reliable. That fallback is intended behavior, not an error.
pub fn parse_owner_range(raw: Option<&str>) -> f64 {
    let Some(text) = raw else {
        return 0.0;
    };

    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 2 {
        return 0.0;
    }

    match (
        parts[0].trim().parse::<u64>(),
        parts[1].trim().parse::<u64>(),
    ) {
        (Ok(low), Ok(high)) => (low + high) as f64 / 2.0,
        _ => 0.0,
    }
}

/// Total ratings for a raw row
pub fn total_ratings(raw: &RawRecord) -> u32 {
    raw.positive_ratings + raw.negative_ratings
}

/// Whether a raw row clears the reliability floor (strict inequality:
/// exactly 100 total ratings is excluded)
pub fn is_reliable(raw: &RawRecord) -> bool {
    total_ratings(raw) > MIN_TOTAL_RATINGS
}

/// Enrich a single reliable row. The positive rate is only computed here,
/// after the reliability gate, so the divisor is known to be nonzero.
fn enrich(raw: RawRecord) -> Record {
    let total = total_ratings(&raw);
    debug_assert!(total > 0, "enrich called on a row with no ratings");

    Record {
        average_owners: parse_owner_range(raw.owners.as_deref()),
        total_ratings: total,
        positive_rate: raw.positive_ratings as f64 / total as f64 * 100.0,
        name: raw.name,
        positive_ratings: raw.positive_ratings,
        negative_ratings: raw.negative_ratings,
        genres: raw.genres,
    }
}

/// Read the dataset CSV and return the enriched, reliable record set.
///
/// A missing or unreadable file is reported as `DatasetUnavailable` so the
/// caller can surface it to the user; rows that fail to deserialize are
/// skipped with a warning rather than aborting the load.
pub fn load_and_enrich(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(ParadoxError::DatasetUnavailable(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|_| ParadoxError::DatasetUnavailable(path.to_path_buf()))?;

    let mut records = Vec::new();
    let mut total_rows = 0usize;
    let mut bad_rows = 0usize;
    let mut unreliable = 0usize;

    for result in reader.deserialize::<RawRecord>() {
        total_rows += 1;
        match result {
            Ok(raw) => {
                if is_reliable(&raw) {
                    records.push(enrich(raw));
                } else {
                    unreliable += 1;
                }
            }
            Err(e) => {
                bad_rows += 1;
                debug!("Skipping row {}: {}", total_rows, e);
            }
        }
    }

    if bad_rows > 0 {
        warn!("Skipped {} rows that failed to parse", bad_rows);
    }
    info!(
        "Loaded {} rows: {} reliable, {} below the {}-rating floor",
        total_rows,
        records.len(),
        unreliable,
        MIN_TOTAL_RATINGS
    );

    Ok(records)
}
