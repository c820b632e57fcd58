//! Sentiment classification for diary entries.
//!
//! Classification maps free text to an [`Emotion`] label and a polarity score
//! in [-1.0, 1.0]. The numeric polarity comes from a [`SentimentAnalyzer`];
//! the label is always derived from the score with the fixed thresholds of
//! [`Emotion::from_score`], whatever analyzer is plugged in.
//!
//! # Module Structure
//!
//! - `lexicon`: the default, dictionary-based analyzer
//!
//! # Example
//!
//! ```
//! use diarybot::diary_core::Emotion;
//! use diarybot::sentiment::{classify, LexiconAnalyzer};
//!
//! let sentiment = classify(&LexiconAnalyzer::new(), "What a wonderful morning")?;
//! assert_eq!(sentiment.emotion, Emotion::Positive);
//! # Ok::<(), diarybot::errors::AnalysisError>(())
//! ```

pub mod lexicon;

use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::diary_core::Emotion;
use crate::errors::AnalysisError;
use tracing::debug;

pub use lexicon::LexiconAnalyzer;

/// Produces a raw polarity for a piece of text.
///
/// Implementations should return values nominally in [-1.0, 1.0]; the
/// classifier clamps anything outside and rejects non-finite values.
pub trait SentimentAnalyzer {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Computes the aggregate polarity of `text`.
    fn polarity(&self, text: &str) -> Result<f64, AnalysisError>;
}

/// The result of classifying one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub emotion: Emotion,
    pub score: f64,
}

impl Sentiment {
    /// Builds a sentiment from a score, deriving the label.
    pub fn from_score(score: f64) -> Self {
        Sentiment {
            emotion: Emotion::from_score(score),
            score,
        }
    }
}

/// Classifies `text` into an emotion label and polarity score.
///
/// Whitespace-only text is neutral with a score of 0.0 and is never handed to
/// the analyzer.
///
/// # Errors
///
/// Returns `AnalysisError` if the analyzer fails or yields a non-finite
/// polarity. Callers must not persist anything in that case.
pub fn classify<A>(analyzer: &A, text: &str) -> Result<Sentiment, AnalysisError>
where
    A: SentimentAnalyzer + ?Sized,
{
    if text.trim().is_empty() {
        return Ok(Sentiment::from_score(0.0));
    }

    let raw = analyzer.polarity(text)?;
    if !raw.is_finite() {
        return Err(AnalysisError::NonFinite {
            analyzer: analyzer.name().to_string(),
        });
    }

    let sentiment = Sentiment::from_score(raw.clamp(MIN_SCORE, MAX_SCORE));
    debug!(
        analyzer = analyzer.name(),
        score = sentiment.score,
        emotion = %sentiment.emotion,
        "Classified text"
    );
    Ok(sentiment)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Analyzer returning a canned polarity, for exercising the thresholds.
    struct FixedAnalyzer(f64);

    impl SentimentAnalyzer for FixedAnalyzer {
        fn name(&self) -> &str {
            "fixed"
        }

        fn polarity(&self, _text: &str) -> Result<f64, AnalysisError> {
            Ok(self.0)
        }
    }

    struct FailingAnalyzer;

    impl SentimentAnalyzer for FailingAnalyzer {
        fn name(&self) -> &str {
            "failing"
        }

        fn polarity(&self, _text: &str) -> Result<f64, AnalysisError> {
            Err(AnalysisError::Failed {
                analyzer: "failing".to_string(),
                message: "model not loaded".to_string(),
            })
        }
    }

    #[test]
    fn test_label_follows_thresholds() {
        let cases = [
            (0.5, Emotion::Positive),
            (0.1, Emotion::Neutral),
            (0.0, Emotion::Neutral),
            (-0.1, Emotion::Neutral),
            (-0.11, Emotion::Negative),
            (0.11, Emotion::Positive),
        ];

        for (score, expected) in cases {
            let sentiment = classify(&FixedAnalyzer(score), "some text").unwrap();
            assert_eq!(sentiment.emotion, expected, "score {}", score);
            assert_eq!(sentiment.score, score);
        }
    }

    #[test]
    fn test_whitespace_only_is_neutral_without_analysis() {
        let sentiment = classify(&FailingAnalyzer, "  \n\t ").unwrap();
        assert_eq!(sentiment.emotion, Emotion::Neutral);
        assert_eq!(sentiment.score, 0.0);
    }

    #[test]
    fn test_out_of_range_polarity_is_clamped() {
        let sentiment = classify(&FixedAnalyzer(3.0), "text").unwrap();
        assert_eq!(sentiment.score, 1.0);
        assert_eq!(sentiment.emotion, Emotion::Positive);

        let sentiment = classify(&FixedAnalyzer(-7.5), "text").unwrap();
        assert_eq!(sentiment.score, -1.0);
    }

    #[test]
    fn test_non_finite_polarity_is_an_error() {
        let result = classify(&FixedAnalyzer(f64::NAN), "text");
        assert!(matches!(result, Err(AnalysisError::NonFinite { .. })));

        let result = classify(&FixedAnalyzer(f64::INFINITY), "text");
        assert!(matches!(result, Err(AnalysisError::NonFinite { .. })));
    }

    #[test]
    fn test_analyzer_failure_propagates() {
        let result = classify(&FailingAnalyzer, "text");
        match result {
            Err(AnalysisError::Failed { analyzer, message }) => {
                assert_eq!(analyzer, "failing");
                assert_eq!(message, "model not loaded");
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_through_trait_object() {
        let analyzer: Box<dyn SentimentAnalyzer> = Box::new(FixedAnalyzer(-0.4));
        let sentiment = classify(analyzer.as_ref(), "text").unwrap();
        assert_eq!(sentiment.emotion, Emotion::Negative);
    }
}
