//! Logging and metrics setup for the binary

use crate::config::MetricsConfig;
use bertserve_core::{Error, Result};
use std::net::SocketAddr;
use tracing::info;

/// Initialize tracing/logging
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("bertserve=debug,bertserve_server=debug,bertserve_classifiers=debug,tower=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("bertserve=info,bertserve_server=info,bertserve_classifiers=info")
        })
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Install the Prometheus exporter and describe the service metrics.
///
/// Must be called from within a tokio runtime; the exporter's HTTP listener
/// runs as a task on it.
pub fn init_metrics(config: &MetricsConfig) -> Result<()> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let addr: SocketAddr = config.listen.parse().map_err(|e| {
        Error::config(format!("invalid metrics listen address '{}': {}", config.listen, e))
    })?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| Error::internal(format!("Failed to install metrics: {}", e)))?;

    metrics::describe_counter!(
        "bertserve_predictions_total",
        "Total number of Predict calls by outcome"
    );
    metrics::describe_histogram!(
        "bertserve_predict_latency_us",
        metrics::Unit::Microseconds,
        "Classifier latency per Predict call in microseconds"
    );

    info!("Metrics exporter listening on http://{}/metrics", addr);
    Ok(())
}
