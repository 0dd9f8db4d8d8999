//! Deploy form state and its pure transitions
//!
//! `FormState` is everything the deploy form owns. Actions in
//! `crate::component` drive it through the transition methods below; no
//! method here performs I/O or reads the clock.

use crate::error::ValidationError;
use crate::logic::clarity::{self, DEFAULT_TOKEN_NAME, DEFAULT_TOKEN_SYMBOL};
use crate::logic::contract_name::{self, CONTRACT_NAME_HINT, DEFAULT_CONTRACT_NAME};
use crate::logic::decimals;
use crate::wallet::DeployOutcome;
use std::time::{Duration, Instant};

pub const CONNECT_SUCCESS_MESSAGE: &str = "Wallet connected successfully!";
pub const CONNECT_FAILURE_MESSAGE: &str = "Failed to connect wallet";
pub const DEPLOY_SUBMITTED_MESSAGE: &str = "Deployment submitted! Check your wallet for status.";
pub const DEPLOY_CANCELLED_MESSAGE: &str = "Transaction cancelled by user";
pub const DEPLOY_FAILURE_MESSAGE: &str = "Failed to deploy contract";

/// How long the connect success message stays visible
pub const SUCCESS_CLEAR_DELAY: Duration = Duration::from_millis(2000);

/// Bullet points describing what the generated contract provides
pub const DEPLOY_SUMMARY: &[&str] = &[
    "SIP-010 compatible fungible token",
    "Owner-only minting with on-chain supply tracking",
    "Transfer and burn support",
];

/// What went wrong, for the message in the error alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Wallet connection failed
    Connection,
    /// A deploy precondition did not hold
    Validation,
    /// The user dismissed the deploy in the wallet
    Cancellation,
    /// Any other deploy failure
    Deployment,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::Connection => "connection",
            AlertKind::Validation => "validation",
            AlertKind::Cancellation => "cancelled",
            AlertKind::Deployment => "deploy",
        }
    }
}

/// Mutable state of one deploy form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub user_address: Option<String>,
    pub contract_name: String,
    pub token_name: String,
    pub token_symbol: String,
    /// Raw decimals text as typed
    pub decimals: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Category of `error`, when a transition set it
    pub error_kind: Option<AlertKind>,
    pub success: Option<String>,
    /// When set, `success` is dropped once this instant has passed
    pub success_expires_at: Option<Instant>,
    pub tx_id: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            user_address: None,
            contract_name: DEFAULT_CONTRACT_NAME.to_string(),
            token_name: DEFAULT_TOKEN_NAME.to_string(),
            token_symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            decimals: clarity::DEFAULT_DECIMALS.to_string(),
            loading: false,
            error: None,
            error_kind: None,
            success: None,
            success_expires_at: None,
            tx_id: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.set_user_address(Some(address.into()));
        self
    }

    // ------------------------------------------------------------------
    // Field setters
    // ------------------------------------------------------------------

    /// Set or clear the connected address. Blank addresses count as none.
    pub fn set_user_address(&mut self, address: Option<String>) {
        self.user_address = address.filter(|a| !a.trim().is_empty());
    }

    pub fn set_contract_name(&mut self, value: impl Into<String>) {
        self.contract_name = value.into();
    }

    pub fn set_token_name(&mut self, value: impl Into<String>) {
        self.token_name = value.into();
    }

    pub fn set_token_symbol(&mut self, value: impl Into<String>) {
        self.token_symbol = value.into();
    }

    pub fn set_decimals(&mut self, value: impl Into<String>) {
        self.decimals = value.into();
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    /// Parsed decimals, `None` when the text holds no number
    pub fn decimals_value(&self) -> Option<i64> {
        decimals::parse_decimals(&self.decimals)
    }

    /// Contract source for the current field values
    pub fn contract_source(&self) -> String {
        clarity::build_contract_source(&self.token_name, &self.token_symbol, self.decimals_value())
    }

    pub fn is_connected(&self) -> bool {
        self.user_address.is_some()
    }

    /// Check deploy preconditions in order; the first failure wins.
    pub fn validate_for_deploy(&self) -> Result<(), ValidationError> {
        if !self.is_connected() {
            return Err(ValidationError::WalletNotConnected);
        }
        if !contract_name::is_valid_contract_name(&self.contract_name) {
            return Err(ValidationError::InvalidContractName);
        }
        if self.token_name.trim().is_empty() || self.token_symbol.trim().is_empty() {
            return Err(ValidationError::MissingNameOrSymbol);
        }
        if !decimals::decimals_in_range(self.decimals_value()) {
            return Err(ValidationError::DecimalsOutOfRange);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Connect transitions
    // ------------------------------------------------------------------

    pub fn begin_connect(&mut self) {
        self.loading = true;
        self.clear_error();
    }

    /// Record a successful connection; the message expires at `now + clear_after`.
    ///
    /// A delay too large to represent leaves the message in place for good.
    pub fn connect_succeeded(&mut self, address: Option<String>, now: Instant, clear_after: Duration) {
        if address.is_some() {
            self.set_user_address(address);
        }
        self.success = Some(CONNECT_SUCCESS_MESSAGE.to_string());
        self.success_expires_at = now.checked_add(clear_after);
    }

    pub fn connect_failed(&mut self) {
        self.set_error(AlertKind::Connection, CONNECT_FAILURE_MESSAGE);
    }

    // ------------------------------------------------------------------
    // Deploy transitions
    // ------------------------------------------------------------------

    /// Surface a failed precondition without touching anything else
    pub fn reject(&mut self, reason: &ValidationError) {
        self.set_error(AlertKind::Validation, reason.to_string());
    }

    pub fn begin_deploy(&mut self) {
        self.clear_error();
        self.success = None;
        self.success_expires_at = None;
        self.tx_id = None;
        self.loading = true;
    }

    pub fn apply_deploy_outcome(&mut self, outcome: &DeployOutcome) {
        match outcome {
            DeployOutcome::Finished { tx_id } => {
                self.success = Some(DEPLOY_SUBMITTED_MESSAGE.to_string());
                self.tx_id = Some(tx_id.clone());
            }
            DeployOutcome::Cancelled => {
                self.set_error(AlertKind::Cancellation, DEPLOY_CANCELLED_MESSAGE);
                self.loading = false;
            }
        }
    }

    pub fn deploy_failed(&mut self) {
        self.set_error(AlertKind::Deployment, DEPLOY_FAILURE_MESSAGE);
    }

    fn set_error(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.error = Some(message.into());
        self.error_kind = Some(kind);
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.error_kind = None;
    }

    /// Final step of every action, whatever the outcome
    pub fn finish_action(&mut self) {
        self.loading = false;
    }

    /// Drop an expired success message. Returns true when something changed.
    pub fn clear_expired_success(&mut self, now: Instant) -> bool {
        match self.success_expires_at {
            Some(deadline) if now >= deadline => {
                self.success = None;
                self.success_expires_at = None;
                true
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    pub fn view(&self) -> FormView {
        let panel = match &self.user_address {
            None => Panel::Connect {
                button_label: if self.loading { "Connecting..." } else { "Connect Wallet" },
                button_disabled: self.loading,
            },
            Some(address) => Panel::Deploy {
                address: address.clone(),
                fields: vec![
                    FieldView {
                        label: "Contract Name",
                        value: self.contract_name.clone(),
                        placeholder: DEFAULT_CONTRACT_NAME,
                        hint: Some(CONTRACT_NAME_HINT),
                    },
                    FieldView {
                        label: "Token Name",
                        value: self.token_name.clone(),
                        placeholder: DEFAULT_TOKEN_NAME,
                        hint: None,
                    },
                    FieldView {
                        label: "Token Symbol",
                        value: self.token_symbol.clone(),
                        placeholder: DEFAULT_TOKEN_SYMBOL,
                        hint: None,
                    },
                    FieldView {
                        label: "Decimals",
                        value: self.decimals.clone(),
                        placeholder: "6",
                        hint: None,
                    },
                ],
                error_alert: self.error.as_ref().map(|message| Alert {
                    kind: self.error_kind.unwrap_or(AlertKind::Deployment),
                    message: message.clone(),
                }),
                success_alert: self.success.as_ref().map(|msg| match &self.tx_id {
                    Some(tx_id) => format!("{} TxID: {}", msg, tx_id),
                    None => msg.clone(),
                }),
                button_label: if self.loading { "Deploying..." } else { "Deploy Meme Token" },
                button_disabled: self.loading,
            },
        };

        FormView {
            panel,
            summary: DEPLOY_SUMMARY,
        }
    }
}

/// Render-independent snapshot of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub panel: Panel,
    pub summary: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Shown until a wallet address is known
    Connect {
        button_label: &'static str,
        button_disabled: bool,
    },
    Deploy {
        address: String,
        fields: Vec<FieldView>,
        error_alert: Option<Alert>,
        success_alert: Option<String>,
        button_label: &'static str,
        button_disabled: bool,
    },
}

/// Error alert contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub hint: Option<&'static str>,
}
