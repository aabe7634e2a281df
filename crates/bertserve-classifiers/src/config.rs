//! Configuration for the built-in classifiers

use crate::{Classifier, KeywordClassifier, LookupClassifier, SentimentClassifier};
use bertserve_core::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Selects and parameterizes one of the built-in classifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierConfig {
    /// Lexicon-based sentiment (positive/negative/neutral)
    Sentiment {
        #[serde(default = "default_sentiment_name")]
        name: String,
    },

    /// First matching keyword wins
    Keywords {
        #[serde(default = "default_keywords_name")]
        name: String,
        /// Ordered keyword rules
        rules: Vec<KeywordRule>,
        /// Label for text matching no rule
        #[serde(default = "default_keyword_label")]
        default: String,
    },

    /// Exact-text table
    Lookup {
        #[serde(default = "default_lookup_name")]
        name: String,
        entries: BTreeMap<String, String>,
        /// Label for unknown text; unknown text is an error when unset
        #[serde(default)]
        default: Option<String>,
    },
}

/// A single keyword rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub label: String,
    pub keyword: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::Sentiment {
            name: default_sentiment_name(),
        }
    }
}

impl ClassifierConfig {
    /// Short name of the classifier kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sentiment { .. } => "sentiment",
            Self::Keywords { .. } => "keywords",
            Self::Lookup { .. } => "lookup",
        }
    }
}

/// Load a classifier configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ClassifierConfig> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let config = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Instantiate the classifier described by `config`
pub fn build_classifier(config: &ClassifierConfig) -> Result<Arc<dyn Classifier>> {
    let classifier: Arc<dyn Classifier> = match config {
        ClassifierConfig::Sentiment { name } => Arc::new(SentimentClassifier::with_name(name)?),
        ClassifierConfig::Keywords {
            name,
            rules,
            default,
        } => {
            let keywords = rules
                .iter()
                .map(|rule| (rule.label.clone(), rule.keyword.clone()))
                .collect();
            Arc::new(KeywordClassifier::new(name, keywords, default.as_str())?)
        }
        ClassifierConfig::Lookup {
            name,
            entries,
            default,
        } => {
            let mut classifier = LookupClassifier::new(name);
            classifier.extend(entries.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            if let Some(label) = default {
                classifier = classifier.with_fallback(label.as_str());
            }
            Arc::new(classifier)
        }
    };

    info!(
        "Built {} classifier '{}'",
        config.kind(),
        classifier.name()
    );

    Ok(classifier)
}

fn default_sentiment_name() -> String {
    "sentiment".to_string()
}

fn default_keywords_name() -> String {
    "keywords".to_string()
}

fn default_lookup_name() -> String {
    "lookup".to_string()
}

fn default_keyword_label() -> String {
    "other".to_string()
}
