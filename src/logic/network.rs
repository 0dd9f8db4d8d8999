//! Target network selection

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chain environment a contract is deployed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkDescriptor {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
}

impl NetworkDescriptor {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkDescriptor::Mainnet => "mainnet",
            NetworkDescriptor::Testnet => "testnet",
            NetworkDescriptor::Devnet => "devnet",
        }
    }

    /// Stacks API base URL for the network
    pub fn api_url(&self) -> &'static str {
        match self {
            NetworkDescriptor::Mainnet => "https://api.hiro.so",
            NetworkDescriptor::Testnet => "https://api.testnet.hiro.so",
            NetworkDescriptor::Devnet => "http://localhost:3999",
        }
    }

    /// Chain id carried in transactions
    pub fn chain_id(&self) -> u32 {
        match self {
            NetworkDescriptor::Mainnet => 0x0000_0001,
            NetworkDescriptor::Testnet | NetworkDescriptor::Devnet => 0x8000_0000,
        }
    }

    /// Explorer link for a submitted transaction
    pub fn explorer_tx_url(&self, tx_id: &str) -> String {
        let chain = match self {
            NetworkDescriptor::Mainnet => "mainnet",
            NetworkDescriptor::Testnet => "testnet",
            NetworkDescriptor::Devnet => "devnet",
        };
        format!("https://explorer.hiro.so/txid/{}?chain={}", tx_id, chain)
    }
}

impl FromStr for NetworkDescriptor {
    type Err = CliError;

    fn from_str(s: &str) -> CliResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(NetworkDescriptor::Mainnet),
            "testnet" => Ok(NetworkDescriptor::Testnet),
            "devnet" | "mocknet" => Ok(NetworkDescriptor::Devnet),
            other => Err(CliError::UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for NetworkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_testnet() {
        assert_eq!(NetworkDescriptor::default(), NetworkDescriptor::Testnet);
    }

    #[test]
    fn test_parse() {
        assert_eq!("mainnet".parse::<NetworkDescriptor>().unwrap(), NetworkDescriptor::Mainnet);
        assert_eq!(" TESTNET ".parse::<NetworkDescriptor>().unwrap(), NetworkDescriptor::Testnet);
        assert_eq!("mocknet".parse::<NetworkDescriptor>().unwrap(), NetworkDescriptor::Devnet);
        assert!(matches!(
            "moonnet".parse::<NetworkDescriptor>(),
            Err(CliError::UnknownNetwork(name)) if name == "moonnet"
        ));
    }

    #[test]
    fn test_chain_ids() {
        assert_eq!(NetworkDescriptor::Mainnet.chain_id(), 1);
        assert_eq!(NetworkDescriptor::Testnet.chain_id(), 0x8000_0000);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&NetworkDescriptor::Testnet).unwrap();
        assert_eq!(json, "\"testnet\"");
    }

    #[test]
    fn test_explorer_url() {
        let url = NetworkDescriptor::Testnet.explorer_tx_url("0xabc");
        assert_eq!(url, "https://explorer.hiro.so/txid/0xabc?chain=testnet");
    }
}
