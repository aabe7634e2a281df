//! Exact-text lookup classifier

use crate::classifier::Classifier;
use bertserve_core::{Error, Label, Result};
use std::collections::HashMap;

/// Maps known texts to fixed labels.
///
/// Texts are matched exactly, without normalization. Unknown texts fail with
/// a classifier error unless a fallback label is set.
pub struct LookupClassifier {
    name: String,
    table: HashMap<String, Label>,
    fallback: Option<Label>,
}

impl LookupClassifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: HashMap::new(),
            fallback: None,
        }
    }

    /// Add a `text -> label` entry
    pub fn with_entry(mut self, text: impl Into<String>, label: impl Into<Label>) -> Self {
        self.table.insert(text.into(), label.into());
        self
    }

    /// Label returned for texts missing from the table
    pub fn with_fallback(mut self, label: impl Into<Label>) -> Self {
        self.fallback = Some(label.into());
        self
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<S, L> Extend<(S, L)> for LookupClassifier
where
    S: Into<String>,
    L: Into<Label>,
{
    fn extend<I: IntoIterator<Item = (S, L)>>(&mut self, iter: I) {
        self.table
            .extend(iter.into_iter().map(|(text, label)| (text.into(), label.into())));
    }
}

#[async_trait::async_trait]
impl Classifier for LookupClassifier {
    async fn predict(&self, text: &str) -> Result<Label> {
        self.table
            .get(text)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| Error::classifier(format!("no label for input: {:?}", text)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
