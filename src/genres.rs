//! Genre ID resolution for catalog shows

use crate::models::GenreRef;

/// Label shown when no id resolves to anything displayable
pub const UNKNOWN_GENRE: &str = "Unknown Genre";

// The public catalog's genre table. Ids 0 and 10 are reserved by the API
// for the "All" and "Featured" shelves and never appear here.
const CATALOG_GENRES: &[(i64, &str)] = &[
    (1, "Personal Growth"),
    (2, "Investigative Journalism"),
    (3, "History"),
    (4, "Comedy"),
    (5, "Entertainment"),
    (6, "Business"),
    (7, "Fiction"),
    (8, "News"),
    (9, "Kids and Family"),
];

/// Built-in genre table the shell passes to the detail view
pub fn catalog_genres() -> Vec<GenreRef> {
    CATALOG_GENRES
        .iter()
        .map(|&(id, title)| GenreRef {
            id,
            title: title.to_string(),
        })
        .collect()
}

/// Resolve numeric genre ids to display labels.
///
/// Ids present in `table` use the table title. Two reserved ids get a fixed
/// label when the table has no entry for them: 0 is "All", 10 is "Featured".
/// Any other unresolved id contributes nothing. Duplicate labels collapse
/// keeping first-seen order, and an empty result becomes a single
/// "Unknown Genre" tag, so the returned list is never empty.
pub fn resolve_genre_labels(ids: &[i64], table: &[GenreRef]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();

    for &id in ids {
        let label = match table.iter().find(|entry| entry.id == id) {
            Some(entry) => Some(entry.title.as_str()),
            None if id == 0 => Some("All"),
            None if id == 10 => Some("Featured"),
            None => None,
        };

        if let Some(label) = label {
            if !labels.iter().any(|seen| seen == label) {
                labels.push(label.to_string());
            }
        }
    }

    if labels.is_empty() {
        labels.push(UNKNOWN_GENRE.to_string());
    }

    labels
}

#[cfg(test)]
#[path = "genres_tests.rs"]
mod tests;
