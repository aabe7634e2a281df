//! Lexicon-based sentiment classifier
//!
//! Default classifier for the binary when no external model is plugged in.

use crate::classifier::Classifier;
use aho_corasick::AhoCorasick;
use bertserve_core::{Label, Result};

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "love",
    "amazing",
    "wonderful",
    "happy",
    "fantastic",
    "awesome",
    "best",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "horrible",
    "worst",
    "sad",
    "angry",
    "disappointed",
    "poor",
];

pub struct SentimentClassifier {
    name: String,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl SentimentClassifier {
    pub fn new() -> Result<Self> {
        Self::with_name("sentiment")
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let positive = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(POSITIVE_WORDS)
            .map_err(|e| {
                bertserve_core::Error::classifier(format!(
                    "Failed to build positive sentiment matcher: {e}"
                ))
            })?;

        let negative = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(NEGATIVE_WORDS)
            .map_err(|e| {
                bertserve_core::Error::classifier(format!(
                    "Failed to build negative sentiment matcher: {e}"
                ))
            })?;

        Ok(Self {
            name: name.into(),
            positive,
            negative,
        })
    }
}

#[async_trait::async_trait]
impl Classifier for SentimentClassifier {
    async fn predict(&self, text: &str) -> Result<Label> {
        let positive_hits = self.positive.find_iter(text).count();
        let negative_hits = self.negative.find_iter(text).count();

        let label = match positive_hits.cmp(&negative_hits) {
            std::cmp::Ordering::Greater => "positive",
            std::cmp::Ordering::Less => "negative",
            std::cmp::Ordering::Equal => "neutral",
        };

        Ok(Label::from(label))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
