//! Keyword classifier

use crate::classifier::Classifier;
use aho_corasick::{AhoCorasick, MatchKind};
use bertserve_core::{Label, Result};

/// Labels text by the first configured keyword found in it.
///
/// Matching is ASCII case-insensitive. When several keywords overlap at the
/// same position the one listed first wins. Text without any keyword gets
/// the default label.
pub struct KeywordClassifier {
    name: String,
    patterns: AhoCorasick,
    pattern_labels: Vec<Label>,
    default_label: Label,
}

impl KeywordClassifier {
    /// Create a new keyword classifier from `(label, keyword)` pairs
    pub fn new(
        name: impl Into<String>,
        keywords: Vec<(String, String)>,
        default_label: impl Into<Label>,
    ) -> Result<Self> {
        let (labels, pattern_strs): (Vec<_>, Vec<_>) = keywords.into_iter().unzip();

        let ac = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostFirst)
            .build(&pattern_strs)
            .map_err(|e| {
                bertserve_core::Error::classifier(format!(
                    "Failed to build keyword matcher: {}",
                    e
                ))
            })?;

        Ok(Self {
            name: name.into(),
            patterns: ac,
            pattern_labels: labels.into_iter().map(Label::from).collect(),
            default_label: default_label.into(),
        })
    }

    /// Number of configured keywords
    pub fn len(&self) -> usize {
        self.pattern_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_labels.is_empty()
    }
}

#[async_trait::async_trait]
impl Classifier for KeywordClassifier {
    async fn predict(&self, text: &str) -> Result<Label> {
        let label = match self.patterns.find(text) {
            Some(m) => self.pattern_labels[m.pattern().as_usize()].clone(),
            None => self.default_label.clone(),
        };

        Ok(label)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
