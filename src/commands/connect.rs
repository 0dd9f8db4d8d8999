//! `connect` command: open a wallet session and report the address

use crate::argument_parsing::MemeDeployCli;
use crate::cli_config::{CliConfig, RuntimeSettings};
use crate::commands::common::{outcome_to_result, report_outcome};
use crate::component::MemeTokenDeployer;
use crate::error::CliResult;
use crate::output::{ConsoleOutput, Output};
use crate::wallet::{HttpWalletBridge, Wallet};

/// Handle connect command
pub async fn handle_connect_command(cli: &MemeDeployCli, config: &CliConfig) -> CliResult<()> {
    let settings = cli.resolve_settings(config)?;
    let wallet = HttpWalletBridge::new(settings.wallet_url.clone());
    handle_connect_with(wallet, &settings, &cli.format, &ConsoleOutput).await
}

/// Connect through any wallet with injected output (for testing)
pub async fn handle_connect_with<W: Wallet, O: Output>(
    wallet: W,
    settings: &RuntimeSettings,
    format: &str,
    output: &O,
) -> CliResult<()> {
    if format == "table" {
        output.note(&format!("Connecting wallet on {}...", settings.network))?;
    }

    let mut form = MemeTokenDeployer::new(wallet)
        .with_network(settings.network)
        .with_success_clear_delay(settings.success_clear_delay);

    let outcome = form.handle_connect().await;
    report_outcome(&outcome, form.state(), settings.network, format, output)?;
    outcome_to_result(&outcome, &form.state().contract_name)
}
