//! The `BertClassifier` gRPC service

use crate::proto::bert_classifier_server::{BertClassifier, BertClassifierServer};
use crate::proto::{PredictRequest, PredictResponse};
use bertserve_classifiers::Classifier;
use bertserve_core::Error;
use std::sync::Arc;
use std::time::Instant;
use tonic::{Request, Response, Status};
use tracing::{debug, warn};

/// Forwards `Predict` calls to a shared classifier.
///
/// The classifier is only ever borrowed; every call is independent and the
/// service keeps no per-request state.
#[derive(Clone)]
pub struct PredictionService {
    classifier: Arc<dyn Classifier>,
}

impl PredictionService {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Name of the classifier behind this service
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Wrap the service in the generated tonic server
    pub fn into_server(self) -> BertClassifierServer<Self> {
        BertClassifierServer::new(self)
    }
}

#[tonic::async_trait]
impl BertClassifier for PredictionService {
    async fn predict(
        &self,
        request: Request<PredictRequest>,
    ) -> Result<Response<PredictResponse>, Status> {
        let PredictRequest { text } = request.into_inner();
        let start = Instant::now();

        let result = self.classifier.predict(&text).await;
        let latency_us = start.elapsed().as_micros() as u64;
        metrics::histogram!("bertserve_predict_latency_us").record(latency_us as f64);

        match result {
            Ok(label) => {
                metrics::counter!("bertserve_predictions_total", "outcome" => "ok").increment(1);
                debug!(
                    classifier = self.classifier.name(),
                    label = %label,
                    latency_us,
                    "Prediction served"
                );
                Ok(Response::new(PredictResponse {
                    prediction: label.into_string(),
                }))
            }
            Err(e) => {
                metrics::counter!("bertserve_predictions_total", "outcome" => "error")
                    .increment(1);
                warn!(
                    classifier = self.classifier.name(),
                    error = %e,
                    "Prediction failed"
                );
                Err(error_to_status(e))
            }
        }
    }
}

/// Convert a classifier error into the status returned to the caller
pub fn error_to_status(err: Error) -> Status {
    Status::internal(err.to_string())
}
