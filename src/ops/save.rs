//! The entry save pipeline.

use crate::diary_core::{entry_id_for, Entry, EntryDraft, Owner};
use crate::diary_io::EntryStore;
use crate::errors::AppResult;
use crate::sentiment::{classify, SentimentAnalyzer};
use chrono::{DateTime, Local};
use tracing::{debug, info};

/// Creates and persists an entry from a draft.
///
/// # Flow
///
/// 1. Trim and validate the draft's title and content
/// 2. Classify the content (synchronously, exactly once)
/// 3. Derive the entry id from `created_at`
/// 4. Write the record through the store
///
/// The entry becomes visible to `EntryStore::list` only once step 4
/// succeeds.
///
/// # Arguments
///
/// * `store` - Entry store to write to
/// * `analyzer` - Sentiment analyzer used for classification
/// * `owner` - Already-authenticated owner of the entry
/// * `draft` - Title, content and pending attachments
/// * `created_at` - Creation instant, which also determines the id
///
/// # Errors
///
/// Returns an error if:
/// - Title or content is blank (`AppError::Validation`)
/// - Classification fails (`AppError::Analysis`); nothing is written
/// - The record cannot be written (`AppError::Persistence`)
pub fn save_entry<A>(
    store: &EntryStore,
    analyzer: &A,
    owner: &Owner,
    draft: &EntryDraft,
    created_at: &DateTime<Local>,
) -> AppResult<Entry>
where
    A: SentimentAnalyzer + ?Sized,
{
    let (title, content) = draft.validated_text()?;

    debug!("Classifying entry content ({} chars)", content.len());
    let sentiment = classify(analyzer, content)?;

    let entry = Entry {
        id: entry_id_for(created_at),
        title: title.to_string(),
        content: content.to_string(),
        created_at: *created_at,
        emotion: sentiment.emotion,
        sentiment_score: sentiment.score,
        attachments: draft.attachments.clone(),
    };

    let saved = store.save(owner, entry)?;
    info!(
        "Entry saved with id {}, emotion detected: {}",
        saved.id, saved.emotion
    );
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary_core::Emotion;
    use crate::errors::{AnalysisError, AppError, ValidationError};
    use crate::sentiment::LexiconAnalyzer;
    use chrono::{NaiveDate, TimeZone};
    use std::fs;
    use tempfile::tempdir;

    struct BrokenAnalyzer;

    impl SentimentAnalyzer for BrokenAnalyzer {
        fn name(&self) -> &str {
            "broken"
        }

        fn polarity(&self, _text: &str) -> Result<f64, AnalysisError> {
            Err(AnalysisError::Failed {
                analyzer: "broken".to_string(),
                message: "unavailable".to_string(),
            })
        }
    }

    fn fixed_now() -> DateTime<Local> {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 2)
            .unwrap()
            .and_hms_opt(21, 15, 42)
            .unwrap();
        Local.from_local_datetime(&naive).single().unwrap()
    }

    #[test]
    fn test_save_entry_classifies_and_trims() {
        let temp_dir = tempdir().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();
        let owner = Owner::new("alice").unwrap();
        let mut draft = EntryDraft::new("  Good day ", "I am so happy and excited today\n");
        draft.attach("attachments/alice_photo.png");

        let entry = save_entry(&store, &LexiconAnalyzer::new(), &owner, &draft, &fixed_now())
            .unwrap();

        assert_eq!(entry.id, "20240302_211542");
        assert_eq!(entry.title, "Good day");
        assert_eq!(entry.content, "I am so happy and excited today");
        assert_eq!(entry.emotion, Emotion::Positive);
        assert!(entry.sentiment_score > 0.1);
        assert_eq!(entry.attachments.len(), 1);

        let stored = store.get(&owner, &entry.id).unwrap().unwrap();
        assert_eq!(stored, entry);
    }

    #[test]
    fn test_blank_title_is_rejected_before_classification() {
        let temp_dir = tempdir().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();
        let owner = Owner::new("alice").unwrap();
        let draft = EntryDraft::new("", "content");

        let result = save_entry(&store, &BrokenAnalyzer, &owner, &draft, &fixed_now());
        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::EmptyTitle))
        ));
    }

    #[test]
    fn test_analysis_failure_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();
        let owner = Owner::new("alice").unwrap();
        let draft = EntryDraft::new("Title", "Some content");

        let result = save_entry(&store, &BrokenAnalyzer, &owner, &draft, &fixed_now());
        assert!(matches!(result, Err(AppError::Analysis(_))));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
