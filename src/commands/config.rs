//! `config` command: inspect and initialise the CLI config file

use crate::argument_parsing::{format_output, ConfigAction, ConfigArgs, MemeDeployCli};
use crate::cli_config::{self, CliConfig, FormDefaults, RuntimeSettings};
use crate::error::{CliError, CliResult};
use crate::logic::clarity::{DEFAULT_DECIMALS, DEFAULT_TOKEN_NAME, DEFAULT_TOKEN_SYMBOL};
use crate::logic::contract_name::DEFAULT_CONTRACT_NAME;
use crate::logic::form::SUCCESS_CLEAR_DELAY;
use crate::logic::NetworkDescriptor;
use crate::output::{ConsoleOutput, Output};
use crate::wallet::http::DEFAULT_WALLET_URL;
use serde_json::{json, Value};
use std::path::Path;

/// Config file content matching the built-in defaults
pub fn starter_config() -> CliConfig {
    CliConfig {
        network: Some(NetworkDescriptor::default().as_str().to_string()),
        wallet_url: Some(DEFAULT_WALLET_URL.to_string()),
        address: None,
        success_clear_ms: Some(SUCCESS_CLEAR_DELAY.as_millis() as u64),
        defaults: Some(FormDefaults {
            contract_name: Some(DEFAULT_CONTRACT_NAME.to_string()),
            token_name: Some(DEFAULT_TOKEN_NAME.to_string()),
            token_symbol: Some(DEFAULT_TOKEN_SYMBOL.to_string()),
            decimals: Some(DEFAULT_DECIMALS.to_string()),
        }),
    }
}

/// Effective settings as a flat record
pub fn settings_to_json(settings: &RuntimeSettings, config_path: &Path) -> Value {
    json!({
        "config": config_path.display().to_string(),
        "network": settings.network.as_str(),
        "api_url": settings.network.api_url(),
        "chain_id": settings.network.chain_id(),
        "wallet_url": settings.wallet_url,
        "address": settings.address,
        "success_clear_ms": settings.success_clear_delay.as_millis() as u64,
    })
}

/// Handle config command
pub fn handle_config_command(args: ConfigArgs, cli: &MemeDeployCli, config: &CliConfig) -> CliResult<()> {
    let output = ConsoleOutput;
    match args.action {
        ConfigAction::Show => {
            let settings = cli.resolve_settings(config)?;
            let path = cli_config::config_path(cli.config.as_deref());
            let data = settings_to_json(&settings, &path);
            if cli.format == "json" {
                output.print_json(&data)
            } else {
                output.card_title("Effective settings", &path.display().to_string())?;
                output.print(&format_output(&data, &cli.format)?)
            }
        }
        ConfigAction::Init { force } => init_config(cli.config.as_deref(), force, &output),
    }
}

/// Write the starter config unless one exists and `force` is off
pub fn init_config<O: Output>(path: Option<&str>, force: bool, output: &O) -> CliResult<()> {
    let target = cli_config::config_path(path);
    if target.exists() && !force {
        return Err(CliError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        )));
    }
    let written = cli_config::save_config(path, &starter_config())?;
    output.success_alert(&format!("Wrote {}", written.display()))
}
