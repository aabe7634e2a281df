//! bertserve Server
//!
//! Serves a text classifier over gRPC as the `BertClassifier` service.
//!
//! The server owns no model: callers hand it any [`Classifier`] and it
//! forwards every `Predict` call to that classifier, returning the label in
//! a `PredictResponse`. Classifier failures surface to the caller as an
//! `INTERNAL` status and do not affect other in-flight calls.
//!
//! ```no_run
//! use bertserve_classifiers::SentimentClassifier;
//!
//! fn main() -> bertserve_core::Result<()> {
//!     // Binds 127.0.0.1:3233 and blocks until SIGINT/SIGTERM
//!     bertserve_server::run(SentimentClassifier::new()?)
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod server;
pub mod service;
pub mod telemetry;

/// Generated protobuf messages and gRPC stubs
pub mod proto {
    tonic::include_proto!("_");
}

pub use bertserve_classifiers::Classifier;
pub use client::PredictionClient;
pub use config::{MetricsConfig, ServerConfig};
pub use server::{run, serve, serve_blocking, BoundServer, PredictionServer};
pub use service::PredictionService;
