//! Core diary types without I/O operations.
//!
//! This module contains the `Entry` record and the small value types around
//! it: the `Emotion` label, the validated `Owner` identifier, the
//! `EntryDraft` session object that collects input before a save, and the
//! helpers that derive entry ids from creation instants. Nothing in here
//! touches the filesystem.

use crate::constants::{
    DISPLAY_DATETIME_FORMAT, ENTRY_ID_FORMAT, LEGACY_TIMESTAMP_FORMAT, MAX_SCORE, MIN_SCORE,
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
use crate::errors::ValidationError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The discretized sentiment label of an entry.
///
/// # Examples
///
/// ```
/// use diarybot::diary_core::Emotion;
///
/// assert_eq!(Emotion::from_score(0.5), Emotion::Positive);
/// assert_eq!(Emotion::from_score(0.1), Emotion::Neutral);
/// assert_eq!(Emotion::from_score(-0.25), Emotion::Negative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Negative,
    Neutral,
}

impl Emotion {
    /// Maps a polarity score onto a label.
    ///
    /// Scores strictly above 0.1 are positive, strictly below -0.1 negative,
    /// everything else (including both boundaries) neutral.
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Emotion::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Emotion::Negative
        } else {
            Emotion::Neutral
        }
    }

    /// Lower-case name, as stored in records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Positive => "positive",
            Emotion::Negative => "negative",
            Emotion::Neutral => "neutral",
        }
    }

    /// Emoji shown next to entries in listings.
    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Positive => "😊",
            Emotion::Negative => "😢",
            Emotion::Neutral => "😐",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An already-authenticated diary owner.
///
/// Owners become part of record file names, so anything that could escape
/// the entries directory or confuse the naming scheme is rejected.
///
/// # Examples
///
/// ```
/// use diarybot::diary_core::Owner;
///
/// let owner = Owner::new("  alice ").unwrap();
/// assert_eq!(owner.as_str(), "alice");
///
/// assert!(Owner::new("").is_err());
/// assert!(Owner::new("../alice").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner(String);

impl Owner {
    /// Validates and wraps an owner identifier.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let owner = raw.trim();
        let invalid = |reason| ValidationError::InvalidOwner {
            owner: owner.to_string(),
            reason,
        };

        if owner.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if owner.contains(['/', '\\']) {
            return Err(invalid("must not contain path separators"));
        }
        if owner.starts_with('.') {
            return Err(invalid("must not start with '.'"));
        }
        if owner.chars().any(char::is_control) {
            return Err(invalid("must not contain control characters"));
        }

        Ok(Owner(owner.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One immutable diary record.
///
/// The owner is not part of the record; it is encoded in the storage key.
/// `emotion` and `sentiment_score` are computed once when the entry is
/// created and stored side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(alias = "date", with = "timestamp")]
    pub created_at: DateTime<Local>,
    pub emotion: Emotion,
    pub sentiment_score: f64,
    #[serde(default)]
    pub attachments: Vec<PathBuf>,
}

impl Entry {
    /// Checks the invariants every persisted entry must hold.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when the id is not an entry id, the title
    /// or content is blank, or the score is not a finite number inside
    /// [-1.0, 1.0].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_entry_id(&self.id) {
            return Err(ValidationError::InvalidId(self.id.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        if !self.sentiment_score.is_finite()
            || !(MIN_SCORE..=MAX_SCORE).contains(&self.sentiment_score)
        {
            return Err(ValidationError::InvalidScore(self.sentiment_score));
        }
        Ok(())
    }

    /// Creation time formatted for listings, e.g. `2024-01-15 14:30`.
    pub fn display_date(&self) -> String {
        self.created_at.format(DISPLAY_DATETIME_FORMAT).to_string()
    }
}

/// Pending input for an entry that has not been saved yet.
///
/// The draft replaces ambient UI state: callers build one per save and pass
/// it explicitly, attachments included.
///
/// # Examples
///
/// ```
/// use diarybot::diary_core::EntryDraft;
///
/// let mut draft = EntryDraft::new("Walk", "Went to the park.");
/// draft.append_transcript("It was sunny.");
/// draft.attach("attachments/alice_20240115_143000_park.jpg");
///
/// assert_eq!(draft.content, "Went to the park.\nIt was sunny.");
/// assert_eq!(draft.attachments.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub attachments: Vec<PathBuf>,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        EntryDraft {
            title: title.into(),
            content: content.into(),
            attachments: Vec::new(),
        }
    }

    /// Records an already-copied attachment path, keeping attach order.
    pub fn attach(&mut self, path: impl Into<PathBuf>) {
        self.attachments.push(path.into());
    }

    /// Appends transcribed speech to the content on a new line.
    pub fn append_transcript(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(text);
    }

    /// Returns the trimmed title and content, rejecting blank ones.
    pub fn validated_text(&self) -> Result<(&str, &str), ValidationError> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok((title, content))
    }
}

/// Derives the base entry id (`YYYYMMDD_HHMMSS`) from a creation instant.
pub fn entry_id_for(created_at: &DateTime<Local>) -> String {
    created_at.format(ENTRY_ID_FORMAT).to_string()
}

/// Returns the id to try after `base` collided `attempt` times.
///
/// The first attempt is the base id itself; later attempts get `-2`, `-3`, ...
pub fn suffixed_id(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}

/// Position of `id` among entries created in the same second: 1 for the
/// base id, `N` for an id suffixed with `-N`.
pub fn id_sequence(id: &str) -> u32 {
    id.split_once('-')
        .and_then(|(_, suffix)| suffix.parse().ok())
        .unwrap_or(1)
}

/// Whether `candidate` has the shape of an entry id.
///
/// Accepts `YYYYMMDD_HHMMSS` optionally followed by `-N`.
pub fn is_entry_id(candidate: &str) -> bool {
    let (base, suffix) = match candidate.split_once('-') {
        Some((base, suffix)) => (base, Some(suffix)),
        None => (candidate, None),
    };

    let bytes = base.as_bytes();
    let base_ok = bytes.len() == 15
        && bytes[8] == b'_'
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[9..].iter().all(u8::is_ascii_digit);

    let suffix_ok = match suffix {
        Some(s) => !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    };

    base_ok && suffix_ok
}

/// Serde adapter for entry timestamps.
///
/// Writes RFC 3339 with the local offset. Reads RFC 3339, or the naive ISO
/// format of older records, which is interpreted as local time.
mod timestamp {
    use super::LEGACY_TIMESTAMP_FORMAT;
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw)))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Local>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Local));
        }
        let naive = NaiveDateTime::parse_from_str(raw, LEGACY_TIMESTAMP_FORMAT).ok()?;
        Local.from_local_datetime(&naive).earliest()
    }
}
