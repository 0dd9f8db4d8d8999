//! Wallet reached over a local HTTP signer bridge
//!
//! The bridge fronts a browser wallet or hardware signer and exposes two
//! JSON endpoints:
//!
//! - `POST /connect` → `{"address": "ST..."}`
//! - `POST /deploy` with a `DeployRequest` body → `{"txId": "0x..."}` or `{"cancelled": true}`

use super::{DeployOutcome, DeployRequest, Wallet};
use crate::error::WalletError;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Default bridge address
pub const DEFAULT_WALLET_URL: &str = "http://127.0.0.1:5959";

#[derive(Debug, Deserialize)]
struct ConnectResponse {
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeployResponse {
    tx_id: Option<String>,
    #[serde(default)]
    cancelled: bool,
}

/// Interpret a `/connect` response body
fn parse_connect_response(body: ConnectResponse) -> Result<String, WalletError> {
    match body.address {
        Some(address) if !address.trim().is_empty() => Ok(address),
        _ => Err(WalletError::ConnectionRejected(
            "bridge returned no address".to_string(),
        )),
    }
}

/// Interpret a `/deploy` response body
fn parse_deploy_response(body: DeployResponse) -> Result<DeployOutcome, WalletError> {
    if body.cancelled {
        return Ok(DeployOutcome::Cancelled);
    }
    match body.tx_id {
        Some(tx_id) if !tx_id.is_empty() => Ok(DeployOutcome::Finished { tx_id }),
        _ => Err(WalletError::MalformedResponse(
            "deploy response carried neither txId nor cancelled".to_string(),
        )),
    }
}

/// HTTP signer bridge client
#[derive(Debug, Clone)]
pub struct HttpWalletBridge {
    base_url: String,
    client: reqwest::Client,
}

impl HttpWalletBridge {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpWalletBridge {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, WalletError>
    where
        B: serde::Serialize + ?Sized + Sync,
        R: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "calling wallet bridge");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| WalletError::Unreachable {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let reason = response
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(WalletError::BridgeStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
                reason,
            });
        }

        Ok(response.json::<R>().await?)
    }
}

impl Default for HttpWalletBridge {
    fn default() -> Self {
        Self::new(DEFAULT_WALLET_URL)
    }
}

#[async_trait]
impl Wallet for HttpWalletBridge {
    async fn connect(&self) -> Result<String, WalletError> {
        let body: ConnectResponse = self.post("/connect", &serde_json::json!({})).await?;
        parse_connect_response(body)
    }

    async fn deploy_contract(&self, request: DeployRequest) -> Result<DeployOutcome, WalletError> {
        let body: DeployResponse = self.post("/deploy", &request).await?;
        parse_deploy_response(body)
    }
}
