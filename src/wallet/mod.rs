//! Wallet abstraction
//!
//! The deploy form never signs anything itself. It hands a `DeployRequest`
//! to a `Wallet` and gets back what the user did with it.

pub mod http;
#[cfg(test)]
pub mod testing;

pub use http::HttpWalletBridge;

use crate::error::WalletError;
use crate::logic::NetworkDescriptor;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Contract deployment handed to the wallet for signing and broadcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRequest {
    pub contract_name: String,
    pub code_body: String,
    pub network: NetworkDescriptor,
}

/// What the user did with a deploy request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Signed and broadcast
    Finished { tx_id: String },
    /// Dismissed in the wallet
    Cancelled,
}

/// Connected wallet extension or signer bridge
///
/// Implementations must be thread-safe (Send + Sync); the CLI holds one
/// behind a shared reference for the life of a command.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Ask the wallet for a session; resolves to the connected address.
    async fn connect(&self) -> Result<String, WalletError>;

    /// Ask the wallet to sign and broadcast a contract deployment.
    ///
    /// `Err` means the call itself failed. A user dismissing the prompt is
    /// `Ok(DeployOutcome::Cancelled)`.
    async fn deploy_contract(&self, request: DeployRequest) -> Result<DeployOutcome, WalletError>;
}
