//! Meme token deployer CLI
//!
//! Command-line surface for generating and deploying the SIP-010 meme
//! token contract through a connected wallet.

use crate::cli_config::{self, RuntimeSettings};
use crate::commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

/// Meme token deployer
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "meme-deploy")]
pub struct MemeDeployCli {
    /// Signer bridge URL the wallet is reached through
    #[arg(short, long, env = "MEME_DEPLOY_WALLET_URL")]
    pub wallet_url: Option<String>,

    /// Target network (mainnet, testnet, devnet)
    #[arg(short, long, env = "MEME_DEPLOY_NETWORK")]
    pub network: Option<String>,

    /// Address of an already connected wallet
    #[arg(short, long, env = "MEME_DEPLOY_ADDRESS")]
    pub address: Option<String>,

    /// Enable verbose output
    #[arg(short, long, env = "MEME_DEPLOY_VERBOSE")]
    pub verbose: bool,

    /// Output format (json, table)
    #[arg(short, long, default_value = "table", env = "MEME_DEPLOY_FORMAT")]
    pub format: String,

    /// Configuration file path
    #[arg(short, long, env = "MEME_DEPLOY_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: MemeDeployCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum MemeDeployCommand {
    /// Connect the wallet and print the session address
    Connect,

    /// Validate the form and deploy the token contract
    Deploy(DeployArgs),

    /// Print the generated contract source without deploying
    Template(TemplateArgs),

    /// Check deploy preconditions without contacting the wallet
    Validate(FormArgs),

    /// Fill the form through prompts, then connect and deploy
    Interactive,

    /// Configuration management
    Config(ConfigArgs),
}

/// Deploy form fields; unset ones fall back to config, then built-in defaults
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Contract name (1-40 chars: letters, numbers, . _ -)
    #[arg(long)]
    pub contract_name: Option<String>,

    /// Token name (e.g., "MEME TOKEN")
    #[arg(long)]
    pub token_name: Option<String>,

    /// Token symbol (e.g., "MEME")
    #[arg(long)]
    pub symbol: Option<String>,

    /// Token decimals (0-18)
    #[arg(long, allow_hyphen_values = true)]
    pub decimals: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeployArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Connect the wallet first when no address is known
    #[arg(long)]
    pub connect: bool,

    /// Validate and print the request without calling the wallet
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TemplateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Write the source to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective settings
    Show,
    /// Write a config file with the built-in defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl MemeDeployCli {
    /// Merge flags and env over the loaded config
    pub fn resolve_settings(&self, config: &cli_config::CliConfig) -> crate::CliResult<RuntimeSettings> {
        cli_config::resolve_settings(
            self.network.as_deref(),
            self.wallet_url.as_deref(),
            self.address.as_deref(),
            config,
        )
    }
}

/// Main CLI runner
pub async fn run_cli() -> Result<()> {
    let cli = MemeDeployCli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let config = cli_config::load_config(cli.config.as_deref())?;

    match &cli.command {
        MemeDeployCommand::Connect => commands::connect::handle_connect_command(&cli, &config).await.map_err(anyhow::Error::msg),
        MemeDeployCommand::Deploy(args) => commands::deploy::handle_deploy_command(args.clone(), &cli, &config).await.map_err(anyhow::Error::msg),
        MemeDeployCommand::Template(args) => commands::template::handle_template_command(args.clone(), &cli, &config).map_err(anyhow::Error::msg),
        MemeDeployCommand::Validate(args) => commands::validate::handle_validate_command(args.clone(), &cli, &config).map_err(anyhow::Error::msg),
        MemeDeployCommand::Interactive => commands::interactive::handle_interactive_command(&cli, &config).await.map_err(anyhow::Error::msg),
        MemeDeployCommand::Config(args) => commands::config::handle_config_command(args.clone(), &cli, &config).map_err(anyhow::Error::msg),
    }
}

/// Format output based on CLI format preference
pub fn format_output(data: &Value, format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(data)?),
        "table" => {
            if let Some(obj) = data.as_object() {
                let mut result = String::new();
                for (key, value) in obj {
                    let shown = match value {
                        Value::String(s) => s.clone(),
                        Value::Null => "-".to_string(),
                        other => other.to_string(),
                    };
                    result.push_str(&format!("{:<20} {}\n", key, shown));
                }
                Ok(result)
            } else {
                Ok(data.to_string())
            }
        }
        _ => Err(anyhow::anyhow!("Unsupported output format: {}", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn test_cli_definition_is_consistent() {
        MemeDeployCli::command().debug_assert();
    }

    #[test]
    fn test_parse_deploy_with_fields() {
        let cli = MemeDeployCli::try_parse_from([
            "meme-deploy",
            "--network",
            "devnet",
            "deploy",
            "--contract-name",
            "pepe",
            "--token-name",
            "Pepe",
            "--symbol",
            "PEPE",
            "--decimals",
            "-3",
            "--connect",
        ])
        .unwrap();

        assert_eq!(cli.network.as_deref(), Some("devnet"));
        match cli.command {
            MemeDeployCommand::Deploy(args) => {
                assert_eq!(args.form.contract_name.as_deref(), Some("pepe"));
                assert_eq!(args.form.decimals.as_deref(), Some("-3"));
                assert!(args.connect);
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_init() {
        let cli = MemeDeployCli::try_parse_from(["meme-deploy", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            MemeDeployCommand::Config(ConfigArgs { action: ConfigAction::Init { force: true } })
        ));
    }

    #[test]
    fn test_format_output_table() {
        let data = json!({"tx_id": "0xabc", "network": "testnet"});
        let table = format_output(&data, "table").unwrap();
        assert!(table.contains("tx_id"));
        assert!(table.contains("0xabc"));
        assert!(!table.contains("\"0xabc\""));
    }

    #[test]
    fn test_format_output_json() {
        let data = json!({"ok": true});
        assert!(format_output(&data, "json").unwrap().contains("\"ok\": true"));
    }

    #[test]
    fn test_format_output_unsupported() {
        assert!(format_output(&json!({}), "xml").is_err());
    }
}
