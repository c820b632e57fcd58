//! Dictionary-based polarity analyzer.
//!
//! Each known word carries a polarity in [-1.0, 1.0]. A directly preceding
//! intensifier scales it, a negator within the two preceding tokens flips and
//! halves it, and the text's polarity is the mean over all sentiment-bearing
//! words. Text without any known word scores 0.0.

use super::SentimentAnalyzer;
use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::errors::AnalysisError;

/// Factor applied to a word's polarity when it is negated.
const NEGATION_FACTOR: f64 = -0.5;

/// How many tokens back a negator still applies.
const NEGATION_WINDOW: usize = 2;

/// The default sentiment analyzer.
///
/// # Examples
///
/// ```
/// use diarybot::sentiment::{LexiconAnalyzer, SentimentAnalyzer};
///
/// let analyzer = LexiconAnalyzer::new();
/// assert!(analyzer.polarity("I feel terrible and sad")? < -0.1);
/// assert_eq!(analyzer.polarity("The bus leaves at nine")?, 0.0);
/// # Ok::<(), diarybot::errors::AnalysisError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        LexiconAnalyzer
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity(&self, text: &str) -> Result<f64, AnalysisError> {
        let tokens = tokenize(text);
        let mut scores = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut polarity) = word_polarity(token) else {
                continue;
            };

            if let Some(factor) = i.checked_sub(1).and_then(|p| intensity(&tokens[p])) {
                polarity = (polarity * factor).clamp(MIN_SCORE, MAX_SCORE);
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negator(t)) {
                polarity *= NEGATION_FACTOR;
            }

            scores.push(polarity);
        }

        if scores.is_empty() {
            return Ok(0.0);
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Ok(mean.clamp(MIN_SCORE, MAX_SCORE))
    }
}

/// Splits text into lower-cased words made of letters and apostrophes.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphabetic() || c == '\'' || c == '’'))
        .map(|raw| raw.trim_matches(|c| c == '\'' || c == '’'))
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase().replace('’', "'"))
        .collect()
}

fn is_negator(token: &str) -> bool {
    matches!(
        token,
        "not" | "no" | "never" | "cannot" | "nor" | "neither" | "without" | "hardly"
    ) || token.ends_with("n't")
}

fn intensity(token: &str) -> Option<f64> {
    let factor = match token {
        "very" | "so" | "really" | "truly" | "super" => 1.3,
        "extremely" | "incredibly" | "absolutely" | "totally" => 1.5,
        "quite" | "pretty" | "too" => 1.15,
        "slightly" | "somewhat" | "bit" => 0.6,
        _ => return None,
    };
    Some(factor)
}

fn word_polarity(word: &str) -> Option<f64> {
    let polarity = match word {
        // positive
        "amazing" | "awesome" | "excellent" | "fantastic" | "perfect" | "wonderful"
        | "best" | "brilliant" | "superb" | "delighted" | "thrilled" => 0.9,
        "happy" | "happiness" | "joy" | "joyful" | "love" | "loved" | "lovely" | "great"
        | "beautiful" | "glad" | "grateful" | "thankful" | "blessed" => 0.8,
        "good" | "nice" | "fun" | "enjoyed" | "enjoy" | "proud" | "pleased" | "cheerful"
        | "relaxed" | "peaceful" | "hopeful" | "hope" | "success" | "successful"
        | "productive" | "win" | "won" => 0.6,
        "excited" | "exciting" | "calm" | "fine" | "better" | "interesting" | "comfortable"
        | "confident" | "smile" | "smiled" | "laugh" | "laughed" | "kind" | "friendly" => 0.5,
        "okay" | "ok" | "alright" | "decent" | "relieved" | "rested" => 0.25,
        // negative
        "bored" | "boring" | "tired" | "meh" | "dull" | "late" | "busy" => -0.3,
        "bad" | "sad" | "unhappy" | "upset" | "worried" | "worry" | "stress" | "stressed"
        | "stressful" | "annoyed" | "annoying" | "lonely" | "sick" | "hurt" | "pain"
        | "problem" | "difficult" | "hard" | "wrong" | "fail" | "failed" | "lost" => -0.5,
        "angry" | "anxious" | "afraid" | "scared" | "cry" | "cried" | "crying"
        | "disappointed" | "disappointing" | "frustrated" | "frustrating" | "hate"
        | "hated" | "ugly" | "exhausted" | "depressed" | "miserable" => -0.7,
        "terrible" | "awful" | "horrible" | "worst" | "disgusting" | "devastated"
        | "hopeless" | "dreadful" => -1.0,
        _ => return None,
    };
    Some(polarity)
}
