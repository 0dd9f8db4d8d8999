//! CLI configuration loader and runtime defaults.

use crate::error::{CliError, CliResult};
use crate::logic::form::{FormState, SUCCESS_CLEAR_DELAY};
use crate::logic::NetworkDescriptor;
use crate::wallet::http::DEFAULT_WALLET_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default CLI config filename under ~/.meme-deploy/
pub const DEFAULT_CONFIG_FILENAME: &str = "cli.toml";

/// Directory under the home directory holding the config
pub const CONFIG_DIR_NAME: &str = ".meme-deploy";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Target network name (mainnet, testnet, devnet)
    pub network: Option<String>,
    /// Signer bridge base URL
    pub wallet_url: Option<String>,
    /// Address to treat as already connected
    pub address: Option<String>,
    /// Lifetime of the connect success message
    pub success_clear_ms: Option<u64>,
    /// Initial values for the deploy form
    pub defaults: Option<FormDefaults>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormDefaults {
    pub contract_name: Option<String>,
    pub token_name: Option<String>,
    pub token_symbol: Option<String>,
    pub decimals: Option<String>,
}

impl CliConfig {
    pub fn success_clear_delay(&self) -> Option<Duration> {
        self.success_clear_ms.map(Duration::from_millis)
    }

    /// Seed a form with configured field values, leaving unset ones alone
    pub fn apply_form_defaults(&self, state: &mut FormState) {
        let Some(defaults) = &self.defaults else {
            return;
        };
        if let Some(v) = &defaults.contract_name {
            state.set_contract_name(v.clone());
        }
        if let Some(v) = &defaults.token_name {
            state.set_token_name(v.clone());
        }
        if let Some(v) = &defaults.token_symbol {
            state.set_token_symbol(v.clone());
        }
        if let Some(v) = &defaults.decimals {
            state.set_decimals(v.clone());
        }
    }
}

/// Settings a command runs with after flags, env and config are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub network: NetworkDescriptor,
    pub wallet_url: String,
    pub address: Option<String>,
    pub success_clear_delay: Duration,
}

/// Merge command-line values over the config file over built-in defaults
pub fn resolve_settings(
    network: Option<&str>,
    wallet_url: Option<&str>,
    address: Option<&str>,
    config: &CliConfig,
) -> CliResult<RuntimeSettings> {
    let network = match network.or(config.network.as_deref()) {
        Some(name) => name.parse::<NetworkDescriptor>()?,
        None => NetworkDescriptor::default(),
    };

    Ok(RuntimeSettings {
        network,
        wallet_url: wallet_url
            .or(config.wallet_url.as_deref())
            .unwrap_or(DEFAULT_WALLET_URL)
            .to_string(),
        address: address
            .or(config.address.as_deref())
            .filter(|a| !a.trim().is_empty())
            .map(str::to_string),
        success_clear_delay: config.success_clear_delay().unwrap_or(SUCCESS_CLEAR_DELAY),
    })
}

pub fn default_config_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        home.join(CONFIG_DIR_NAME).join(DEFAULT_CONFIG_FILENAME)
    } else {
        PathBuf::from("./meme-deploy.toml")
    }
}

pub fn config_path(path: Option<&str>) -> PathBuf {
    path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load the config; a missing default file yields defaults, a missing explicit one is an error
pub fn load_config(path: Option<&str>) -> CliResult<CliConfig> {
    let config_path = config_path(path);

    if !config_path.exists() {
        if path.is_some() {
            return Err(CliError::ConfigError(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        return Ok(CliConfig::default());
    }

    load_config_strict(&config_path)
}

pub fn load_config_strict(path: &Path) -> CliResult<CliConfig> {
    if !path.exists() {
        return Err(CliError::ConfigError(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::ConfigError(format!("Failed to read config: {}", e)))?;

    toml::from_str(&raw)
        .map_err(|e| CliError::ConfigError(format!("Invalid CLI config: {}", e)))
}

pub fn save_config(path: Option<&str>, config: &CliConfig) -> CliResult<PathBuf> {
    let config_path = config_path(path);
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::ConfigError(format!("Failed to create config directory: {}", e))
        })?;
    }

    let data = toml::to_string_pretty(config)
        .map_err(|e| CliError::ConfigError(format!("Failed to serialize config: {}", e)))?;
    fs::write(&config_path, data)
        .map_err(|e| CliError::ConfigError(format!("Failed to write config: {}", e)))?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(load_config(Some(path.to_str().unwrap())).is_err());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("cli.toml");
        let config = CliConfig {
            network: Some("devnet".to_string()),
            wallet_url: Some("http://127.0.0.1:7000".to_string()),
            address: None,
            success_clear_ms: Some(500),
            defaults: Some(FormDefaults {
                token_symbol: Some("PEPE".to_string()),
                ..FormDefaults::default()
            }),
        };

        let written = save_config(Some(path.to_str().unwrap()), &config).unwrap();
        assert_eq!(written, path);
        let loaded = load_config(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.success_clear_delay(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cli.toml");
        fs::write(&path, "network = [").unwrap();
        let err = load_config_strict(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid CLI config"));
    }

    #[test]
    fn test_resolve_settings_precedence() {
        let config = CliConfig {
            network: Some("mainnet".to_string()),
            wallet_url: Some("http://config:1".to_string()),
            address: Some("ST-CONFIG".to_string()),
            ..CliConfig::default()
        };

        let from_config = resolve_settings(None, None, None, &config).unwrap();
        assert_eq!(from_config.network, NetworkDescriptor::Mainnet);
        assert_eq!(from_config.wallet_url, "http://config:1");
        assert_eq!(from_config.address.as_deref(), Some("ST-CONFIG"));

        let overridden =
            resolve_settings(Some("devnet"), Some("http://flag:2"), Some("ST-FLAG"), &config).unwrap();
        assert_eq!(overridden.network, NetworkDescriptor::Devnet);
        assert_eq!(overridden.wallet_url, "http://flag:2");
        assert_eq!(overridden.address.as_deref(), Some("ST-FLAG"));
    }

    #[test]
    fn test_resolve_settings_builtin_defaults() {
        let settings = resolve_settings(None, None, None, &CliConfig::default()).unwrap();
        assert_eq!(settings.network, NetworkDescriptor::Testnet);
        assert_eq!(settings.wallet_url, DEFAULT_WALLET_URL);
        assert!(settings.address.is_none());
        assert_eq!(settings.success_clear_delay, SUCCESS_CLEAR_DELAY);
    }

    #[test]
    fn test_resolve_settings_rejects_unknown_network() {
        assert!(resolve_settings(Some("moonnet"), None, None, &CliConfig::default()).is_err());
    }

    #[test]
    fn test_apply_form_defaults_only_overrides_set_fields() {
        let config: CliConfig = toml::from_str(
            r#"
            [defaults]
            token_name = "Pepe Coin"
            decimals = "8"
            "#,
        )
        .unwrap();
        let mut state = FormState::new();
        config.apply_form_defaults(&mut state);
        assert_eq!(state.token_name, "Pepe Coin");
        assert_eq!(state.decimals, "8");
        assert_eq!(state.token_symbol, "MEME");
        assert_eq!(state.contract_name, "meme-token");
    }
}
