//! Emotion statistics over diary entries.
//!
//! Two read-side views feed the analytics screen: a count of entries per
//! emotion and a histogram of sentiment scores. Both are pure functions of
//! the entries handed in.

use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::diary_core::{Emotion, Entry};
use crate::errors::ValidationError;
use serde::Serialize;

/// Entry counts per emotion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmotionSummary {
    pub total: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
}

impl EmotionSummary {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Partitions `entries` by their stored emotion.
///
/// Empty input yields an all-zero summary.
pub fn summarize(entries: &[Entry]) -> EmotionSummary {
    entries
        .iter()
        .fold(EmotionSummary::default(), |mut summary, entry| {
            summary.total += 1;
            match entry.emotion {
                Emotion::Positive => summary.positive_count += 1,
                Emotion::Negative => summary.negative_count += 1,
                Emotion::Neutral => summary.neutral_count += 1,
            }
            summary
        })
}

/// Counts sentiment scores into `bucket_count` equal-width bins over
/// [-1.0, 1.0].
///
/// A score on an interior bin boundary counts toward the lower bin. -1.0
/// lands in the first bin and 1.0 in the last. Scores outside the domain
/// are clamped. The result always has `bucket_count` elements summing to
/// `entries.len()`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidBucketCount` when `bucket_count` is 0.
///
/// # Examples
///
/// ```
/// use diarybot::ops::histogram;
///
/// let counts = histogram(&[], 10)?;
/// assert_eq!(counts, vec![0; 10]);
/// # Ok::<(), diarybot::errors::ValidationError>(())
/// ```
pub fn histogram(entries: &[Entry], bucket_count: usize) -> Result<Vec<usize>, ValidationError> {
    if bucket_count == 0 {
        return Err(ValidationError::InvalidBucketCount);
    }

    let mut counts = vec![0; bucket_count];
    for entry in entries {
        counts[bucket_index(entry.sentiment_score, bucket_count)] += 1;
    }
    Ok(counts)
}

/// Lower and upper score bounds of bin `index`.
pub fn bucket_range(index: usize, bucket_count: usize) -> (f64, f64) {
    let span = MAX_SCORE - MIN_SCORE;
    let lower = MIN_SCORE + span * index as f64 / bucket_count as f64;
    let upper = MIN_SCORE + span * (index + 1) as f64 / bucket_count as f64;
    (lower, upper)
}

fn bucket_index(score: f64, bucket_count: usize) -> usize {
    let clamped = score.clamp(MIN_SCORE, MAX_SCORE);
    // position in units of bins; multiplying before dividing keeps exact
    // boundaries exact
    let position = (clamped - MIN_SCORE) * bucket_count as f64 / (MAX_SCORE - MIN_SCORE);
    let upper_edge = position.ceil();
    if upper_edge.is_nan() || upper_edge < 1.0 {
        0
    } else {
        (upper_edge as usize - 1).min(bucket_count - 1)
    }
}
