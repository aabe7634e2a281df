//! bertserve Classifiers
//!
//! The `Classifier` capability served over RPC, plus a handful of built-in
//! implementations the binary can be configured with when no external model
//! is plugged in:
//! - `SentimentClassifier`: lexicon-based positive/negative/neutral
//! - `KeywordClassifier`: first matching keyword decides the label
//! - `LookupClassifier`: exact-text table
//!
//! Any type implementing `Classifier` can be served; the built-ins exist so
//! the service is usable out of the box.

pub mod classifier;
pub mod config;
pub mod keywords;
pub mod lookup;
pub mod sentiment;

pub use classifier::{from_fn, Classifier, FnClassifier};
pub use config::{build_classifier, load_config, ClassifierConfig};
pub use keywords::KeywordClassifier;
pub use lookup::LookupClassifier;
pub use sentiment::SentimentClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{Classifier, FnClassifier};
    pub use crate::keywords::KeywordClassifier;
    pub use crate::lookup::LookupClassifier;
    pub use crate::sentiment::SentimentClassifier;
    pub use bertserve_core::Label;
}
