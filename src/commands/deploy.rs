//! `deploy` command
//!
//! Validates the form, optionally connects first, and submits the generated
//! contract through the wallet.

use crate::argument_parsing::{DeployArgs, MemeDeployCli};
use crate::cli_config::{CliConfig, RuntimeSettings};
use crate::commands::common::{build_form_state, outcome_to_result, report_outcome};
use crate::component::MemeTokenDeployer;
use crate::error::CliResult;
use crate::logic::form::{AlertKind, FormState};
use crate::output::{ConsoleOutput, Output};
use crate::wallet::{DeployRequest, HttpWalletBridge, Wallet};
use tracing::debug;

// ============================================================================
// PURE LOGIC
// ============================================================================

/// Request that would be sent for the current form, if it validates
pub fn build_dry_run_request(state: &FormState, settings: &RuntimeSettings) -> CliResult<DeployRequest> {
    state.validate_for_deploy()?;
    Ok(DeployRequest {
        contract_name: state.contract_name.clone(),
        code_body: state.contract_source(),
        network: settings.network,
    })
}

// ============================================================================
// IMPERATIVE SHELL
// ============================================================================

/// Handle deploy command
pub async fn handle_deploy_command(
    args: DeployArgs,
    cli: &MemeDeployCli,
    config: &CliConfig,
) -> CliResult<()> {
    let settings = cli.resolve_settings(config)?;
    let state = build_form_state(&args.form, config, settings.address.clone());
    let wallet = HttpWalletBridge::new(settings.wallet_url.clone());
    handle_deploy_with(&args, wallet, state, &settings, &cli.format, &ConsoleOutput).await
}

/// Deploy through any wallet with injected output (for testing)
pub async fn handle_deploy_with<W: Wallet, O: Output>(
    args: &DeployArgs,
    wallet: W,
    state: FormState,
    settings: &RuntimeSettings,
    format: &str,
    output: &O,
) -> CliResult<()> {
    if args.dry_run {
        return match build_dry_run_request(&state, settings) {
            Ok(request) => {
                output.print_json(&serde_json::to_value(&request)?)?;
                Ok(())
            }
            Err(err) => {
                output.error_alert(AlertKind::Validation, &err.to_string())?;
                Err(err)
            }
        };
    }

    let mut form = MemeTokenDeployer::new(wallet)
        .with_network(settings.network)
        .with_success_clear_delay(settings.success_clear_delay)
        .with_state(state);

    if args.connect && !form.state().is_connected() {
        let outcome = form.handle_connect().await;
        if !outcome.is_success() {
            report_outcome(&outcome, form.state(), settings.network, format, output)?;
            return outcome_to_result(&outcome, &form.state().contract_name);
        }
        debug!(address = ?form.state().user_address, "connected before deploy");
    }

    if format == "table" && form.state().validate_for_deploy().is_ok() {
        output.note(&format!(
            "Deploying '{}' to {}...",
            form.state().contract_name,
            settings.network
        ))?;
    }

    let outcome = form.handle_deploy().await;
    report_outcome(&outcome, form.state(), settings.network, format, output)?;
    outcome_to_result(&outcome, &form.state().contract_name)
}
