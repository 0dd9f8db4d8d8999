//! Meme token deployer
//!
//! Parameterizes a SIP-010 fungible token contract and deploys it through a
//! connected wallet.
//!
//! ## Architecture
//!
//! This crate follows the **Functional Core, Imperative Shell** (FCIS) architecture pattern:
//!
//! - **Functional Core** (`logic/` module): source generation, validation, form state
//! - **Imperative Shell** (`component`, `commands/`): wallet calls, prompts, printing
//! - **Wallet seam** (`wallet/` module): the `Wallet` trait and the HTTP signer bridge
//! - **Error Handling** (`error` module): structured, domain-specific error types
//! - **Output Abstraction** (`output` module): testable printing interface

pub mod argument_parsing;
pub mod cli_config;
pub mod commands;
pub mod component;
pub mod error;
pub mod logic;
pub mod output;
pub mod wallet;

// Re-export main types for public use
pub use argument_parsing::{format_output, run_cli, MemeDeployCli, MemeDeployCommand};
pub use component::{ActionOutcome, MemeTokenDeployer};
pub use error::{CliError, CliResult, ValidationError, WalletError};
pub use logic::{build_contract_source, escape_clarity_string, is_valid_contract_name, FormState, NetworkDescriptor};
pub use output::Output;
pub use wallet::{DeployOutcome, DeployRequest, HttpWalletBridge, Wallet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
