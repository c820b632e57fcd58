//! Substring search over diary entries.

use crate::diary_core::Entry;
use crate::errors::ValidationError;
use tracing::{debug, info};

/// Returns the entries whose title or content contains `query`.
///
/// Matching is case-insensitive; the query is trimmed first. Entries keep
/// their input order, so results sourced from `EntryStore::list` stay newest
/// first. There is no persistent index: callers pass a freshly loaded list.
///
/// # Errors
///
/// Returns `ValidationError::EmptyQuery` if the query is blank. A query that
/// matches nothing is not an error and yields an empty vector.
///
/// # Examples
///
/// ```
/// use diarybot::diary_core::{Emotion, Entry};
/// use diarybot::ops::search_entries;
/// use chrono::Local;
///
/// let entry = Entry {
///     id: "20240115_143000".to_string(),
///     title: "Beach".to_string(),
///     content: "Swam in the SEA".to_string(),
///     created_at: Local::now(),
///     emotion: Emotion::Neutral,
///     sentiment_score: 0.0,
///     attachments: vec![],
/// };
///
/// let entries = vec![entry];
/// assert_eq!(search_entries(&entries, " sea ")?.len(), 1);
/// assert!(search_entries(&entries, "mountain")?.is_empty());
/// assert!(search_entries(&entries, "   ").is_err());
/// # Ok::<(), diarybot::errors::ValidationError>(())
/// ```
pub fn search_entries(entries: &[Entry], query: &str) -> Result<Vec<Entry>, ValidationError> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }

    debug!("Searching {} entries", entries.len());
    let results: Vec<Entry> = entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle)
                || entry.content.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    info!("Returning {} search results", results.len());
    Ok(results)
}
