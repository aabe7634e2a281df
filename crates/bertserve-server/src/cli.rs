use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bertserve")]
#[command(author, version, about = "Serve a text classifier over gRPC")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the prediction server
    Serve(ServeArgs),

    /// Send texts to a running server and print the predicted labels
    Predict {
        /// Server endpoint
        #[arg(short, long, default_value = "http://127.0.0.1:3233")]
        endpoint: String,

        /// Texts to classify
        #[arg(required = true)]
        texts: Vec<String>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Configuration file path
    #[arg(short, long, env = "BERTSERVE_CONFIG", default_value = "bertserve.yaml")]
    pub config: String,

    /// Listen host
    #[arg(short = 'l', long)]
    pub host: Option<String>,

    /// Listen port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Worker threads and maximum in-flight calls
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
