//! Typed client for the `BertClassifier` service

use crate::proto::bert_classifier_client::BertClassifierClient;
use crate::proto::PredictRequest;
use bertserve_core::{Error, Result};
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Plaintext client for a running prediction server.
///
/// Cloning is cheap and clones share the underlying HTTP/2 connection.
#[derive(Clone)]
pub struct PredictionClient {
    inner: BertClassifierClient<Channel>,
}

impl PredictionClient {
    /// Connect to `endpoint`, e.g. `http://127.0.0.1:3233` or `127.0.0.1:3233`
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self> {
        let mut uri = endpoint.into();
        if !uri.contains("://") {
            uri = format!("http://{uri}");
        }

        let channel = Endpoint::from_shared(uri.clone())
            .map_err(|e| Error::transport(format!("invalid endpoint '{}': {}", uri, e)))?
            .connect_timeout(CONNECT_TIMEOUT)
            .connect()
            .await
            .map_err(|e| Error::transport(format!("failed to connect to {}: {}", uri, e)))?;

        debug!("Connected to {}", uri);

        Ok(Self {
            inner: BertClassifierClient::new(channel),
        })
    }

    /// Predict the label for a single text
    pub async fn predict(&self, text: impl Into<String>) -> Result<String> {
        let mut client = self.inner.clone();
        let response = client
            .predict(PredictRequest { text: text.into() })
            .await
            .map_err(|status| {
                Error::transport(format!("{:?}: {}", status.code(), status.message()))
            })?;

        Ok(response.into_inner().prediction)
    }

    /// Predict labels for many texts concurrently.
    ///
    /// Results come back in input order; a failed call only affects its own
    /// slot.
    pub async fn predict_batch<I, S>(&self, texts: I) -> Vec<Result<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let calls = texts.into_iter().map(|text| self.predict(text));
        futures::future::join_all(calls).await
    }
}
