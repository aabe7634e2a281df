//! Mock classifiers for testing
//!
//! Exercises the `Classifier` trait through trait objects the way the
//! server uses it: shared behind an `Arc`, called concurrently, and
//! occasionally failing.

use async_trait::async_trait;
use bertserve_classifiers::{build_classifier, load_config, Classifier, ClassifierConfig};
use bertserve_core::{Error, Label, Result};
use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A configurable mock classifier that echoes a transformed input
pub struct MockClassifier {
    name: String,
    simulated_latency: Option<Duration>,
    call_count: AtomicU32,
}

impl MockClassifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            simulated_latency: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// Set simulated latency for this classifier
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = Some(latency);
        self
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn predict(&self, text: &str) -> Result<Label> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if let Some(latency) = self.simulated_latency {
            tokio::time::sleep(latency).await;
        }

        Ok(Label::from(format!("label:{}", text.to_uppercase())))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A classifier that always fails - for testing error paths
pub struct FailingClassifier {
    name: String,
    error_message: String,
}

impl FailingClassifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            error_message: "Simulated classifier failure".to_string(),
        }
    }

    /// Set a custom error message
    pub fn with_error(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}

#[async_trait]
impl Classifier for FailingClassifier {
    async fn predict(&self, _text: &str) -> Result<Label> {
        Err(Error::classifier(&self.error_message))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[tokio::test]
async fn test_mock_counts_calls() {
    let mock = MockClassifier::new("mock");

    let label = mock.predict("abc").await.unwrap();
    assert_eq!(label.as_str(), "label:ABC");
    mock.predict("def").await.unwrap();

    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_failing_classifier_message() {
    let failing = FailingClassifier::new("broken").with_error("model not loaded");

    let err = failing.predict("anything").await.unwrap_err();
    assert!(matches!(err, Error::Classifier(_)));
    assert_eq!(err.to_string(), "classifier error: model not loaded");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_through_shared_reference() {
    let mock = Arc::new(MockClassifier::new("shared").with_latency(Duration::from_millis(20)));
    let classifier: Arc<dyn Classifier> = mock.clone();

    let inputs: Vec<String> = (0..16).map(|i| format!("text-{i}")).collect();
    let calls = inputs.iter().map(|text| {
        let classifier = classifier.clone();
        let text = text.clone();
        tokio::spawn(async move { classifier.predict(&text).await })
    });

    let results = futures::future::join_all(calls).await;

    for (input, result) in inputs.iter().zip(results) {
        let label = result.unwrap().unwrap();
        assert_eq!(label.as_str(), format!("label:{}", input.to_uppercase()));
    }
    assert_eq!(mock.call_count(), 16);
}

#[tokio::test]
async fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
kind: keywords
name: topics
rules:
  - label: sports
    keyword: football
default: misc
"#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.kind(), "keywords");

    let classifier = build_classifier(&config).unwrap();
    assert_eq!(classifier.name(), "topics");
    assert_eq!(
        classifier.predict("football tonight").await.unwrap().as_str(),
        "sports"
    );
    assert_eq!(classifier.predict("gardening").await.unwrap().as_str(), "misc");
}

#[test]
fn test_load_config_missing_file() {
    let err = load_config("/nonexistent/classifier.yaml").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn test_default_config_builds_sentiment() {
    let classifier = build_classifier(&ClassifierConfig::default()).unwrap();
    assert_eq!(classifier.name(), "sentiment");
    assert_eq!(
        classifier.predict("good product").await.unwrap().as_str(),
        "positive"
    );
    assert_eq!(
        classifier.predict("bad product").await.unwrap().as_str(),
        "negative"
    );
}
