//! meme-deploy command-line interface
//!
//! Entry point for the meme-deploy binary. Parses command-line arguments
//! and delegates to the appropriate command handler.

use meme_deploy::run_cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_cli().await
}
