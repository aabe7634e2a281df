//! Server lifecycle: bind, serve, block, shut down

use crate::config::ServerConfig;
use crate::service::PredictionService;
use crate::telemetry;
use bertserve_classifiers::Classifier;
use bertserve_core::{Error, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;
use tower::limit::GlobalConcurrencyLimitLayer;
use tracing::{error, info, warn};

/// Notice printed to stdout once the listener is bound
pub const STARTUP_NOTICE: &str = "classifier server started";

/// A prediction server that has not been bound yet
pub struct PredictionServer {
    classifier: Arc<dyn Classifier>,
    config: ServerConfig,
}

impl PredictionServer {
    pub fn new(classifier: Arc<dyn Classifier>, config: ServerConfig) -> Self {
        Self { classifier, config }
    }

    /// Bind the listening socket.
    ///
    /// Fails when the address cannot be resolved or is already in use.
    pub async fn bind(self) -> Result<BoundServer> {
        self.config.validate()?;

        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        info!("Bound {} on {}", self.classifier.name(), local_addr);

        Ok(BoundServer {
            listener,
            local_addr,
            classifier: self.classifier,
            workers: self.config.workers,
        })
    }
}

/// A server holding a bound listener, ready to accept calls
pub struct BoundServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    classifier: Arc<dyn Classifier>,
    workers: usize,
}

impl BoundServer {
    /// Address the listener is bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve calls until `shutdown` is cancelled.
    ///
    /// At most `workers` calls are in flight at once; further calls wait for a
    /// free slot. In-flight calls are drained before this returns.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<()> {
        let service = PredictionService::new(self.classifier);
        let incoming = TcpListenerStream::new(self.listener);

        info!(
            "Serving BertClassifier on {} with {} workers",
            self.local_addr, self.workers
        );

        Server::builder()
            .layer(GlobalConcurrencyLimitLayer::new(self.workers))
            .add_service(service.into_server())
            .serve_with_incoming_shutdown(incoming, async move { shutdown.cancelled().await })
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Bind, announce and serve until `shutdown` is cancelled
pub async fn serve(
    classifier: Arc<dyn Classifier>,
    config: &ServerConfig,
    shutdown: CancellationToken,
) -> Result<()> {
    let server = PredictionServer::new(classifier, config.clone()).bind().await?;

    println!("{STARTUP_NOTICE}");

    server.serve(shutdown).await
}

/// Run the server on a dedicated runtime, blocking the calling thread until
/// SIGINT or SIGTERM.
///
/// The runtime has exactly `config.workers` worker threads.
pub fn serve_blocking(classifier: Arc<dyn Classifier>, config: ServerConfig) -> Result<()> {
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .thread_name("bertserve-worker")
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        if config.metrics.enabled {
            telemetry::init_metrics(&config.metrics)?;
        }

        let shutdown = CancellationToken::new();
        let signal_token = shutdown.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            warn!("Shutdown signal received, stopping server...");
            signal_token.cancel();
        });

        serve(classifier, &config, shutdown).await
    })
}

/// Serve `classifier` with the default configuration (127.0.0.1:3233, 10 workers)
pub fn run<C>(classifier: C) -> Result<()>
where
    C: Classifier + 'static,
{
    serve_blocking(Arc::new(classifier), ServerConfig::default())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
