//! `template` command: print or save the generated contract source
//!
//! No validation happens here. The builder's own leniency applies, so
//! blank fields fall back to defaults and decimals are clamped.

use crate::argument_parsing::{MemeDeployCli, TemplateArgs};
use crate::cli_config::CliConfig;
use crate::commands::common::build_form_state;
use crate::error::CliResult;
use crate::output::{ConsoleOutput, Output};
use std::fs;

/// Handle template command
pub fn handle_template_command(args: TemplateArgs, _cli: &MemeDeployCli, config: &CliConfig) -> CliResult<()> {
    handle_template_with(&args, config, &ConsoleOutput)
}

/// Generate the source with injected output (for testing)
pub fn handle_template_with<O: Output>(args: &TemplateArgs, config: &CliConfig, output: &O) -> CliResult<()> {
    let state = build_form_state(&args.form, config, None);
    let source = state.contract_source();

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &source)?;
            output.success_alert(&format!("Wrote {} bytes to {}", source.len(), path.display()))?;
        }
        None => output.print(&source)?,
    }
    Ok(())
}
