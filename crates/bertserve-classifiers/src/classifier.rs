//! Classifier trait

use async_trait::async_trait;
use bertserve_core::{Label, Result};
use std::sync::Arc;

/// A text classifier that can be served over RPC.
///
/// Implementations are shared across every in-flight request and may be
/// invoked concurrently, so any interior state must be synchronized by the
/// implementation itself.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Predict the label for the given text
    async fn predict(&self, text: &str) -> Result<Label>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

#[async_trait]
impl<C: Classifier + ?Sized> Classifier for Arc<C> {
    async fn predict(&self, text: &str) -> Result<Label> {
        (**self).predict(text).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Adapter turning a plain function into a `Classifier`
pub struct FnClassifier<F> {
    name: String,
    func: F,
}

/// Wrap a synchronous prediction function as a classifier
pub fn from_fn<F>(name: impl Into<String>, func: F) -> FnClassifier<F>
where
    F: Fn(&str) -> Result<Label> + Send + Sync,
{
    FnClassifier {
        name: name.into(),
        func,
    }
}

#[async_trait]
impl<F> Classifier for FnClassifier<F>
where
    F: Fn(&str) -> Result<Label> + Send + Sync,
{
    async fn predict(&self, text: &str) -> Result<Label> {
        (self.func)(text)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bertserve_core::Error;

    #[tokio::test]
    async fn test_fn_classifier() {
        let classifier = from_fn("length", |text: &str| {
            if text.is_empty() {
                Err(Error::classifier("empty input"))
            } else if text.len() > 10 {
                Ok(Label::from("long"))
            } else {
                Ok(Label::from("short"))
            }
        });

        assert_eq!(classifier.name(), "length");
        assert_eq!(classifier.predict("hi").await.unwrap().as_str(), "short");
        assert_eq!(
            classifier.predict("a much longer sentence").await.unwrap().as_str(),
            "long"
        );
        assert!(classifier.predict("").await.is_err());
    }

    #[tokio::test]
    async fn test_arc_dyn_delegates() {
        let classifier: Arc<dyn Classifier> =
            Arc::new(from_fn("constant", |_: &str| Ok(Label::from("spam"))));

        assert_eq!(classifier.name(), "constant");
        assert_eq!(classifier.predict("anything").await.unwrap().as_str(), "spam");
    }
}
