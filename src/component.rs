//! Connect and deploy actions
//!
//! `MemeTokenDeployer` couples a `FormState` with a `Wallet`. Each action
//! marks the form busy, awaits the wallet once, folds the result back into
//! the state and reports an `ActionOutcome` to the caller.

use crate::error::ValidationError;
use crate::logic::form::{FormState, SUCCESS_CLEAR_DELAY};
use crate::logic::NetworkDescriptor;
use crate::wallet::{DeployOutcome, DeployRequest, Wallet};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Result of one connect or deploy action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Connected { address: String },
    Submitted { tx_id: String },
    Cancelled,
    /// A precondition failed; the wallet was never called
    Rejected(ValidationError),
    Failed(String),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Connected { .. } | ActionOutcome::Submitted { .. })
    }
}

/// Deploy form bound to a wallet and a target network
pub struct MemeTokenDeployer<W: Wallet> {
    wallet: W,
    network: NetworkDescriptor,
    success_clear_delay: Duration,
    state: FormState,
}

impl<W: Wallet> MemeTokenDeployer<W> {
    pub fn new(wallet: W) -> Self {
        MemeTokenDeployer {
            wallet,
            network: NetworkDescriptor::Testnet,
            success_clear_delay: SUCCESS_CLEAR_DELAY,
            state: FormState::default(),
        }
    }

    pub fn with_network(mut self, network: NetworkDescriptor) -> Self {
        self.network = network;
        self
    }

    pub fn with_success_clear_delay(mut self, delay: Duration) -> Self {
        self.success_clear_delay = delay;
        self
    }

    pub fn with_state(mut self, state: FormState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn network(&self) -> NetworkDescriptor {
        self.network
    }

    pub fn success_clear_delay(&self) -> Duration {
        self.success_clear_delay
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Drop the connect success message once its delay has run out
    pub fn tick(&mut self, now: Instant) -> bool {
        self.state.clear_expired_success(now)
    }

    /// Sleep until the pending success message expires, then drop it.
    ///
    /// Returns false straight away when no message is waiting to expire.
    pub async fn wait_for_success_clear(&mut self) -> bool {
        let Some(deadline) = self.state.success_expires_at else {
            return false;
        };
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        self.tick(deadline)
    }

    /// Open a wallet session
    pub async fn handle_connect(&mut self) -> ActionOutcome {
        self.state.begin_connect();
        debug!("connecting wallet");

        let outcome = match self.wallet.connect().await {
            Ok(address) => {
                self.state.connect_succeeded(
                    Some(address.clone()),
                    Instant::now(),
                    self.success_clear_delay,
                );
                info!(%address, "wallet connected");
                ActionOutcome::Connected { address }
            }
            Err(err) => {
                error!(error = %err, "connection error");
                self.state.connect_failed();
                ActionOutcome::Failed(err.to_string())
            }
        };

        self.state.finish_action();
        outcome
    }

    /// Validate the form and hand the generated contract to the wallet
    pub async fn handle_deploy(&mut self) -> ActionOutcome {
        if let Err(reason) = self.state.validate_for_deploy() {
            debug!(%reason, "deploy rejected");
            self.state.reject(&reason);
            return ActionOutcome::Rejected(reason);
        }

        self.state.begin_deploy();
        let request = DeployRequest {
            contract_name: self.state.contract_name.clone(),
            code_body: self.state.contract_source(),
            network: self.network,
        };
        debug!(
            contract = %request.contract_name,
            network = %request.network,
            bytes = request.code_body.len(),
            "requesting contract deploy"
        );

        let outcome = match self.wallet.deploy_contract(request).await {
            Ok(result) => {
                self.state.apply_deploy_outcome(&result);
                match result {
                    DeployOutcome::Finished { tx_id } => {
                        info!(%tx_id, "deployment submitted");
                        ActionOutcome::Submitted { tx_id }
                    }
                    DeployOutcome::Cancelled => {
                        warn!("deployment cancelled in wallet");
                        ActionOutcome::Cancelled
                    }
                }
            }
            Err(err) => {
                error!(error = %err, "deploy error");
                self.state.deploy_failed();
                ActionOutcome::Failed(err.to_string())
            }
        };

        self.state.finish_action();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::form::{
        CONNECT_FAILURE_MESSAGE, CONNECT_SUCCESS_MESSAGE, DEPLOY_CANCELLED_MESSAGE,
        DEPLOY_FAILURE_MESSAGE, DEPLOY_SUBMITTED_MESSAGE,
    };
    use crate::wallet::testing::{DeployScript, ScriptedWallet, TEST_ADDRESS};

    fn connected_form(wallet: ScriptedWallet) -> MemeTokenDeployer<ScriptedWallet> {
        MemeTokenDeployer::new(wallet).with_state(FormState::new().with_address("ST1"))
    }

    #[tokio::test]
    async fn test_connect_success_sets_address_and_message() {
        let mut form = MemeTokenDeployer::new(ScriptedWallet::new(DeployScript::Cancel));
        let outcome = form.handle_connect().await;
        assert_eq!(outcome, ActionOutcome::Connected { address: TEST_ADDRESS.to_string() });
        assert_eq!(form.state().user_address.as_deref(), Some(TEST_ADDRESS));
        assert_eq!(form.state().success.as_deref(), Some(CONNECT_SUCCESS_MESSAGE));
        assert!(!form.state().loading);
    }

    #[tokio::test]
    async fn test_connect_clears_previous_error() {
        let mut form = MemeTokenDeployer::new(ScriptedWallet::new(DeployScript::Cancel));
        form.state_mut().error = Some("stale".to_string());
        form.handle_connect().await;
        assert!(form.state().error.is_none());
    }

    #[tokio::test]
    async fn test_connect_failure_sets_error_and_clears_loading() {
        let wallet = ScriptedWallet::new(DeployScript::Cancel).refusing_connection();
        let mut form = MemeTokenDeployer::new(wallet);
        let outcome = form.handle_connect().await;
        assert!(matches!(outcome, ActionOutcome::Failed(_)));
        assert_eq!(form.state().error.as_deref(), Some(CONNECT_FAILURE_MESSAGE));
        assert!(!form.state().loading);
        assert!(!form.state().is_connected());
    }

    #[tokio::test]
    async fn test_connect_success_expires_via_tick() {
        let mut form = MemeTokenDeployer::new(ScriptedWallet::new(DeployScript::Cancel))
            .with_success_clear_delay(Duration::ZERO);
        form.handle_connect().await;
        assert!(form.tick(Instant::now()));
        assert!(form.state().success.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_success_clear_sleeps_out_the_delay() {
        let mut form = MemeTokenDeployer::new(ScriptedWallet::new(DeployScript::Cancel));
        form.handle_connect().await;
        assert!(form.state().success.is_some());

        let started = tokio::time::Instant::now();
        assert!(form.wait_for_success_clear().await);
        assert!(started.elapsed() >= SUCCESS_CLEAR_DELAY);
        assert!(form.state().success.is_none());
        assert!(form.state().is_connected());
    }

    #[tokio::test]
    async fn test_wait_for_success_clear_without_pending_message() {
        let mut form = connected_form(ScriptedWallet::new(DeployScript::Cancel));
        assert!(!form.wait_for_success_clear().await);
    }

    #[tokio::test]
    async fn test_deploy_without_address_never_calls_wallet() {
        let wallet = ScriptedWallet::finishing("0x1");
        let mut form = MemeTokenDeployer::new(wallet.clone());

        let outcome = form.handle_deploy().await;

        assert_eq!(outcome, ActionOutcome::Rejected(ValidationError::WalletNotConnected));
        assert!(wallet.recorded_requests().is_empty());
        assert_eq!(form.state().error.as_deref(), Some("Please connect your wallet first"));
    }

    #[tokio::test]
    async fn test_deploy_bad_contract_name_never_calls_wallet() {
        let wallet = ScriptedWallet::finishing("0x1");
        let mut form = connected_form(wallet.clone());
        form.state_mut().set_contract_name("ab/cd");

        let outcome = form.handle_deploy().await;

        assert_eq!(outcome, ActionOutcome::Rejected(ValidationError::InvalidContractName));
        assert!(wallet.recorded_requests().is_empty());
        assert_eq!(
            form.state().error.as_deref(),
            Some("Contract name must be 1-40 chars: letters, numbers, . _ -")
        );
    }

    #[tokio::test]
    async fn test_deploy_finished_records_tx_id() {
        let wallet = ScriptedWallet::finishing("0xdeadbeef");
        let mut form = connected_form(wallet.clone());
        form.state_mut().set_token_name("Pepe");
        form.state_mut().set_decimals("8");

        let outcome = form.handle_deploy().await;

        assert_eq!(outcome, ActionOutcome::Submitted { tx_id: "0xdeadbeef".to_string() });
        assert_eq!(form.state().success.as_deref(), Some(DEPLOY_SUBMITTED_MESSAGE));
        assert_eq!(form.state().tx_id.as_deref(), Some("0xdeadbeef"));
        assert!(!form.state().loading);

        let requests = wallet.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].contract_name, "meme-token");
        assert_eq!(requests[0].network, NetworkDescriptor::Testnet);
        assert!(requests[0].code_body.contains(r#"(ok u"Pepe")"#));
        assert!(requests[0].code_body.contains("(ok u8)"));
    }

    #[tokio::test]
    async fn test_deploy_cancelled() {
        let mut form = connected_form(ScriptedWallet::new(DeployScript::Cancel));
        let outcome = form.handle_deploy().await;
        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert_eq!(form.state().error.as_deref(), Some(DEPLOY_CANCELLED_MESSAGE));
        assert!(form.state().success.is_none());
        assert!(!form.state().loading);
    }

    #[tokio::test]
    async fn test_deploy_wallet_error_is_generic_message() {
        let mut form = connected_form(ScriptedWallet::new(DeployScript::Fail("boom".to_string())));
        let outcome = form.handle_deploy().await;
        assert_eq!(outcome, ActionOutcome::Failed("boom".to_string()));
        assert_eq!(form.state().error.as_deref(), Some(DEPLOY_FAILURE_MESSAGE));
        assert!(!form.state().loading);
    }

    #[tokio::test]
    async fn test_deploy_uses_configured_network() {
        let wallet = ScriptedWallet::finishing("0x2");
        let mut form = connected_form(wallet.clone()).with_network(NetworkDescriptor::Devnet);
        form.handle_deploy().await;
        assert_eq!(wallet.recorded_requests()[0].network, NetworkDescriptor::Devnet);
    }
}
