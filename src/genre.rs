//! Genre universe and filtering

use crate::dataset::Record;

/// Separator between tags in the raw genres field
pub const GENRE_SEPARATOR: char = ';';

/// Sentinel genre meaning "no filter", always first in the selectable list
pub const ALL_GENRES: &str = "All Genres";

/// Build the selectable genre list: every individual tag across the record
/// set, deduplicated and sorted, with the no-filter sentinel first.
pub fn list_genres(records: &[Record]) -> Vec<String> {
    let mut tags: Vec<String> = records
        .iter()
        .flat_map(|r| r.genres.split(GENRE_SEPARATOR))
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();
    tags.sort();
    tags.dedup();

    let mut genres = Vec::with_capacity(tags.len() + 1);
    genres.push(ALL_GENRES.to_string());
    genres.extend(tags);
    genres
}

/// Restrict a record set to games tagged with the given genre.
///
/// The sentinel returns everything. Matching is a case-sensitive substring
/// test against the raw genres field, not an exact tag comparison, so
/// "Action" also matches a game tagged only "Action-Adventure". That is the
/// inherited selection behavior and is preserved as-is.
pub fn filter_by_genre(records: &[Record], genre: &str) -> Vec<Record> {
    if genre == ALL_GENRES {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| r.genres.contains(genre))
        .cloned()
        .collect()
}
