//! Scripted wallet for unit tests

use super::{DeployOutcome, DeployRequest, Wallet};
use crate::error::WalletError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub const TEST_ADDRESS: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

/// Scripted answer to a deploy request
#[derive(Debug, Clone)]
pub enum DeployScript {
    Finish(String),
    Cancel,
    Fail(String),
}

/// Wallet that records calls and replays scripted answers
#[derive(Clone)]
pub struct ScriptedWallet {
    pub connect_ok: bool,
    pub deploy: DeployScript,
    pub connects: Arc<Mutex<usize>>,
    pub requests: Arc<Mutex<Vec<DeployRequest>>>,
}

impl ScriptedWallet {
    pub fn new(deploy: DeployScript) -> Self {
        ScriptedWallet {
            connect_ok: true,
            deploy,
            connects: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn finishing(tx_id: &str) -> Self {
        Self::new(DeployScript::Finish(tx_id.to_string()))
    }

    pub fn refusing_connection(mut self) -> Self {
        self.connect_ok = false;
        self
    }

    pub fn connect_count(&self) -> usize {
        *self.connects.lock().unwrap()
    }

    pub fn recorded_requests(&self) -> Vec<DeployRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Wallet for ScriptedWallet {
    async fn connect(&self) -> Result<String, WalletError> {
        *self.connects.lock().unwrap() += 1;
        if self.connect_ok {
            Ok(TEST_ADDRESS.to_string())
        } else {
            Err(WalletError::ConnectionRejected("user closed popup".to_string()))
        }
    }

    async fn deploy_contract(&self, request: DeployRequest) -> Result<DeployOutcome, WalletError> {
        self.requests.lock().unwrap().push(request);
        match &self.deploy {
            DeployScript::Finish(tx_id) => Ok(DeployOutcome::Finished { tx_id: tx_id.clone() }),
            DeployScript::Cancel => Ok(DeployOutcome::Cancelled),
            DeployScript::Fail(reason) => Err(WalletError::Other(reason.clone())),
        }
    }
}
