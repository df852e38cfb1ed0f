//! Wristo storefront client - command-line entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wristo::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    match wristo::run(&cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.backend_message() {
                Some(message) => eprintln!("error: {message}"),
                None => eprintln!("error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
