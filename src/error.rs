//! Structured error types for the meme token deployer
//!
//! Validation and wallet failures carry the exact message shown to the
//! user; `CliError` wraps everything the command shell can run into.

use thiserror::Error;

/// Deploy precondition failures, checked in declaration order.
///
/// The `Display` text is the message rendered in the form's error alert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please connect your wallet first")]
    WalletNotConnected,

    #[error("Contract name must be 1-40 chars: letters, numbers, . _ -")]
    InvalidContractName,

    #[error("Token name and symbol are required")]
    MissingNameOrSymbol,

    #[error("Decimals must be between 0 and 18")]
    DecimalsOutOfRange,
}

/// Failures reported by a wallet backend
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Wallet connection rejected: {0}")]
    ConnectionRejected(String),

    #[error("Wallet bridge unreachable at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("Wallet bridge call to {endpoint} failed: {status} - {reason}")]
    BridgeStatus { endpoint: String, status: u16, reason: String },

    #[error("Malformed wallet response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        if err.is_decode() {
            WalletError::MalformedResponse(err.to_string())
        } else {
            WalletError::Unreachable {
                url,
                reason: err.to_string(),
            }
        }
    }
}

/// CLI error types with proper context
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("Deployment of '{contract}' failed: {reason}")]
    DeploymentFailed { contract: String, reason: String },

    #[error("Unknown network '{0}'. Supported: mainnet, testnet, devnet")]
    UnknownNetwork(String),

    // Configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    // I/O operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // Serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for CliError {
    fn from(s: String) -> Self {
        CliError::Other(s)
    }
}

impl From<&str> for CliError {
    fn from(s: &str) -> Self {
        CliError::Other(s.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
