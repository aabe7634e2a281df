//! bertserve
//!
//! Serves one of the built-in classifiers over gRPC, or queries a running
//! server from the command line.

use anyhow::Result;
use bertserve_classifiers::build_classifier;
use bertserve_server::cli::{Cli, Commands, ServeArgs};
use bertserve_server::telemetry::init_tracing;
use bertserve_server::{serve_blocking, PredictionClient, ServerConfig};
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve(args),
        Commands::Predict {
            endpoint,
            texts,
            verbose,
        } => {
            init_tracing(verbose);
            predict(endpoint, texts)
        }
    }
}

fn serve(args: ServeArgs) -> Result<()> {
    init_tracing(args.verbose);

    info!("Starting bertserve");

    let config = ServerConfig::load(&args.config)?.with_overrides(args.host, args.port, args.workers);
    config.validate()?;
    info!("Configuration loaded successfully");
    info!("Listen: {}:{}", config.host, config.port);
    info!("Workers: {}", config.workers);
    info!("Classifier: {}", config.classifier.kind());

    let classifier = build_classifier(&config.classifier)?;

    serve_blocking(classifier, config)?;
    Ok(())
}

fn predict(endpoint: String, texts: Vec<String>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async move {
        let client = PredictionClient::connect(endpoint).await?;
        let results = client.predict_batch(texts.iter().cloned()).await;

        let mut failures = 0;
        for (text, result) in texts.iter().zip(results) {
            match result {
                Ok(label) => println!("{}\t{}", label, text),
                Err(e) => {
                    failures += 1;
                    eprintln!("error\t{}\t{}", text, e);
                }
            }
        }

        if failures > 0 {
            anyhow::bail!("{} of {} predictions failed", failures, texts.len());
        }
        Ok(())
    })
}
