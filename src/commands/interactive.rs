//! Interactive form session
//!
//! Architecture: Functional Core, Imperative Shell (FCIS)
//!
//! - **Pure Logic**: deciding what to do after each action
//! - **Imperative Shell**: prompts, wallet calls, rendering

use crate::argument_parsing::{FormArgs, MemeDeployCli};
use crate::cli_config::CliConfig;
use crate::commands::common::{build_form_state, outcome_to_result, render_view, report_outcome};
use crate::component::{ActionOutcome, MemeTokenDeployer};
use crate::error::{CliError, CliResult};
use crate::logic::form::FormState;
use crate::output::{ConsoleOutput, Output};
use crate::wallet::{HttpWalletBridge, Wallet};
use dialoguer::{Confirm, Input};
use std::time::Instant;

// ============================================================================
// PURE LOGIC - No side effects, fully testable
// ============================================================================

/// What the session does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Deployment submitted; show the final form and stop
    Done,
    /// Go back to the fields
    EditFields,
    /// Ask before trying the same action again
    AskRetry,
}

pub fn next_step(outcome: &ActionOutcome) -> NextStep {
    match outcome {
        ActionOutcome::Submitted { .. } => NextStep::Done,
        ActionOutcome::Connected { .. } | ActionOutcome::Rejected(_) => NextStep::EditFields,
        ActionOutcome::Cancelled | ActionOutcome::Failed(_) => NextStep::AskRetry,
    }
}

// ============================================================================
// IMPERATIVE SHELL
// ============================================================================

fn prompt_error(err: dialoguer::Error) -> CliError {
    CliError::PromptFailed(err.to_string())
}

fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(prompt_error)
}

fn prompt_text(label: &str, current: &str) -> CliResult<String> {
    Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)
}

fn prompt_fields(state: &mut FormState) -> CliResult<()> {
    let contract_name = prompt_text("Contract Name", &state.contract_name)?;
    state.set_contract_name(contract_name);
    let token_name = prompt_text("Token Name", &state.token_name)?;
    state.set_token_name(token_name);
    let token_symbol = prompt_text("Token Symbol", &state.token_symbol)?;
    state.set_token_symbol(token_symbol);
    let decimals = prompt_text("Decimals", &state.decimals)?;
    state.set_decimals(decimals);
    Ok(())
}

/// Handle interactive command
pub async fn handle_interactive_command(cli: &MemeDeployCli, config: &CliConfig) -> CliResult<()> {
    let settings = cli.resolve_settings(config)?;
    let state = build_form_state(&FormArgs::default(), config, settings.address.clone());
    let form = MemeTokenDeployer::new(HttpWalletBridge::new(settings.wallet_url.clone()))
        .with_network(settings.network)
        .with_success_clear_delay(settings.success_clear_delay)
        .with_state(state);

    run_session(form, &ConsoleOutput).await
}

async fn run_session<W: Wallet, O: Output>(mut form: MemeTokenDeployer<W>, output: &O) -> CliResult<()> {
    let network = form.network();

    loop {
        form.tick(Instant::now());
        render_view(&form.state().view(), output)?;

        if !form.state().is_connected() {
            if !confirm("Connect wallet now?", true)? {
                return Ok(());
            }
            let outcome = form.handle_connect().await;
            report_outcome(&outcome, form.state(), network, "table", output)?;
            if outcome.is_success() {
                form.wait_for_success_clear().await;
            }
            continue;
        }

        prompt_fields(form.state_mut())?;

        if confirm("Preview contract source?", false)? {
            output.print(&form.state().contract_source())?;
        }
        if !confirm(&format!("Deploy to {}?", network), true)? {
            return Ok(());
        }

        let outcome = form.handle_deploy().await;
        report_outcome(&outcome, form.state(), network, "table", output)?;

        match next_step(&outcome) {
            NextStep::Done => {
                render_view(&form.state().view(), output)?;
                return Ok(());
            }
            NextStep::EditFields => continue,
            NextStep::AskRetry => {
                if !confirm("Try again?", true)? {
                    return outcome_to_result(&outcome, &form.state().contract_name);
                }
            }
        }
    }
}
