//! `validate` command: run the deploy preconditions offline

use crate::argument_parsing::{FormArgs, MemeDeployCli};
use crate::cli_config::CliConfig;
use crate::commands::common::build_form_state;
use crate::error::CliResult;
use crate::logic::form::{AlertKind, FormState};
use crate::output::{ConsoleOutput, Output};
use serde_json::{json, Value};

/// Validation report for a form
pub fn validation_report(state: &FormState) -> Value {
    let result = state.validate_for_deploy();
    json!({
        "valid": result.is_ok(),
        "error": result.err().map(|e| e.to_string()),
        "contract_name": state.contract_name,
        "decimals": state.decimals_value(),
    })
}

/// Handle validate command
pub fn handle_validate_command(args: FormArgs, cli: &MemeDeployCli, config: &CliConfig) -> CliResult<()> {
    let settings = cli.resolve_settings(config)?;
    let state = build_form_state(&args, config, settings.address);
    handle_validate_with(&state, &cli.format, &ConsoleOutput)
}

/// Validate with injected output (for testing)
pub fn handle_validate_with<O: Output>(state: &FormState, format: &str, output: &O) -> CliResult<()> {
    if format == "json" {
        output.print_json(&validation_report(state))?;
        return state.validate_for_deploy().map_err(Into::into);
    }

    match state.validate_for_deploy() {
        Ok(()) => {
            output.success_alert(&format!("'{}' is ready to deploy", state.contract_name))?;
            Ok(())
        }
        Err(reason) => {
            output.error_alert(AlertKind::Validation, &reason.to_string())?;
            Err(reason.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::MockOutput;

    #[test]
    fn test_valid_form() {
        let output = MockOutput::new();
        let state = FormState::new().with_address("ST1");
        handle_validate_with(&state, "table", &output).unwrap();
        output.assert_contains_message("'meme-token' is ready to deploy");
    }

    #[test]
    fn test_first_failure_reported() {
        let output = MockOutput::new();
        let mut state = FormState::new().with_address("ST1");
        state.set_contract_name("ab/cd");
        state.set_decimals("-4");
        assert!(handle_validate_with(&state, "table", &output).is_err());
        output.assert_contains_error("Contract name must be 1-40 chars");
        assert_eq!(output.get_errors().len(), 1);
    }

    #[test]
    fn test_json_report() {
        let mut state = FormState::new().with_address("ST1");
        state.set_decimals("abc");
        let report = validation_report(&state);
        assert_eq!(report["valid"], false);
        assert_eq!(report["error"], "Decimals must be between 0 and 18");
        assert!(report["decimals"].is_null());
    }
}
