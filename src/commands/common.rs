//! Helpers shared across commands
//!
//! Building a form from flags and config, rendering it, and turning an
//! action outcome into output plus an exit status.

use crate::argument_parsing::{format_output, FormArgs};
use crate::cli_config::CliConfig;
use crate::component::ActionOutcome;
use crate::error::{CliError, CliResult};
use crate::logic::form::{AlertKind, FormState, FormView, Panel};
use crate::logic::NetworkDescriptor;
use crate::output::Output;
use serde_json::{json, Value};

// ============================================================================
// PURE LOGIC
// ============================================================================

/// Form seeded from built-in defaults, then config, then flags
pub fn build_form_state(args: &FormArgs, config: &CliConfig, address: Option<String>) -> FormState {
    let mut state = FormState::new();
    config.apply_form_defaults(&mut state);

    if let Some(v) = &args.contract_name {
        state.set_contract_name(v.clone());
    }
    if let Some(v) = &args.token_name {
        state.set_token_name(v.clone());
    }
    if let Some(v) = &args.symbol {
        state.set_token_symbol(v.clone());
    }
    if let Some(v) = &args.decimals {
        state.set_decimals(v.clone());
    }

    state.set_user_address(address);
    state
}

/// Machine-readable summary of an action
pub fn outcome_to_json(outcome: &ActionOutcome, state: &FormState, network: NetworkDescriptor) -> Value {
    let (status, message) = match outcome {
        ActionOutcome::Connected { .. } => ("connected", state.success.clone()),
        ActionOutcome::Submitted { .. } => ("submitted", state.success.clone()),
        ActionOutcome::Cancelled => ("cancelled", state.error.clone()),
        ActionOutcome::Rejected(_) => ("rejected", state.error.clone()),
        ActionOutcome::Failed(_) => ("failed", state.error.clone()),
    };

    let mut data = json!({
        "status": status,
        "message": message,
        "network": network.as_str(),
        "address": state.user_address,
        "contract_name": state.contract_name,
    });
    if let ActionOutcome::Submitted { tx_id } = outcome {
        data["tx_id"] = json!(tx_id);
        data["explorer"] = json!(network.explorer_tx_url(tx_id));
    }
    data
}

/// Kind of the error alert an unsuccessful outcome is shown in
pub fn outcome_alert_kind(outcome: &ActionOutcome, state: &FormState) -> Option<AlertKind> {
    let fallback = match outcome {
        ActionOutcome::Connected { .. } | ActionOutcome::Submitted { .. } => return None,
        ActionOutcome::Rejected(_) => AlertKind::Validation,
        ActionOutcome::Cancelled => AlertKind::Cancellation,
        ActionOutcome::Failed(_) => AlertKind::Deployment,
    };
    Some(state.error_kind.unwrap_or(fallback))
}

/// Exit status for an outcome; anything but success is an error
pub fn outcome_to_result(outcome: &ActionOutcome, contract: &str) -> CliResult<()> {
    match outcome {
        ActionOutcome::Connected { .. } | ActionOutcome::Submitted { .. } => Ok(()),
        ActionOutcome::Rejected(reason) => Err(CliError::Validation(reason.clone())),
        ActionOutcome::Cancelled => Err(CliError::DeploymentFailed {
            contract: contract.to_string(),
            reason: "cancelled in wallet".to_string(),
        }),
        ActionOutcome::Failed(reason) => Err(CliError::DeploymentFailed {
            contract: contract.to_string(),
            reason: reason.clone(),
        }),
    }
}

// ============================================================================
// IMPERATIVE SHELL
// ============================================================================

/// Print the form the way the browser component lays it out
pub fn render_view(view: &FormView, output: &dyn Output) -> CliResult<()> {
    output.card_title("Deploy Meme Token", "Launch a SIP-010 token in minutes")?;

    match &view.panel {
        Panel::Connect { button_label, button_disabled } => {
            output.print("Connect your Stacks wallet to deploy your token")?;
            output.button(button_label, *button_disabled)?;
        }
        Panel::Deploy {
            address,
            fields,
            error_alert,
            success_alert,
            button_label,
            button_disabled,
        } => {
            output.print(&format!("Connected Address: {}", address))?;
            for field in fields {
                output.field(field.label, &field.value, field.hint)?;
            }
            if let Some(alert) = error_alert {
                output.error_alert(alert.kind, &alert.message)?;
            }
            if let Some(msg) = success_alert {
                output.success_alert(msg)?;
            }
            output.button(button_label, *button_disabled)?;
        }
    }

    output.print("What gets deployed:")?;
    for item in view.summary {
        output.print(&format!("  • {}", item))?;
    }
    Ok(())
}

/// Report an outcome in the requested format
pub fn report_outcome(
    outcome: &ActionOutcome,
    state: &FormState,
    network: NetworkDescriptor,
    format: &str,
    output: &dyn Output,
) -> CliResult<()> {
    if format != "table" {
        let data = outcome_to_json(outcome, state, network);
        return output.print(&format_output(&data, format)?);
    }

    match outcome {
        ActionOutcome::Connected { address } => {
            if let Some(msg) = &state.success {
                output.success_alert(msg)?;
            }
            output.note(&format!("Address: {}", address))?;
        }
        ActionOutcome::Submitted { tx_id } => {
            if let Some(msg) = &state.success {
                output.success_alert(&format!("{} TxID: {}", msg, tx_id))?;
            }
            output.note(&format!("Explorer: {}", network.explorer_tx_url(tx_id)))?;
        }
        ActionOutcome::Cancelled | ActionOutcome::Rejected(_) | ActionOutcome::Failed(_) => {
            if let (Some(msg), Some(kind)) = (&state.error, outcome_alert_kind(outcome, state)) {
                output.error_alert(kind, msg)?;
            }
        }
    }

    Ok(())
}
