//! Rolodex CLI binary.

use anyhow::Result;
use rolodex::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the rolodex CLI.
///
/// Uses tokio's current_thread runtime; the only async work is file IO.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=rolodex=debug rolodex path "Sara Sood" "Kris Hammond"
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rolodex=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting rolodex CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Rolodex CLI completed successfully");
    Ok(())
}
