// Genesis configuration - Who starts with what
use crate::storage::{Ledger, LedgerError};
use crate::types::{AccountId, Balance, ChainId, COIN};
use serde::{Deserialize, Serialize};

/// One endowed account at genesis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndowedAccount {
    /// Account address
    pub account: AccountId,

    /// Initial free balance
    pub balance: Balance,
}

/// Genesis configuration for a relay deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Name of the chain this deployment belongs to
    pub chain_name: String,

    /// Chain ID (0 = root chain)
    pub chain_id: ChainId,

    /// Accounts endowed at genesis
    pub endowed: Vec<EndowedAccount>,
}

impl GenesisConfig {
    /// Development configuration: a well-known producer account with a large
    /// endowment, nothing else.
    pub fn dev(producer: AccountId) -> Self {
        Self {
            chain_name: "gasless-dev".to_string(),
            chain_id: ChainId::ROOT,
            endowed: vec![EndowedAccount {
                account: producer,
                balance: 10_000 * COIN,
            }],
        }
    }

    /// Add an endowed account (builder-style, for test setup)
    pub fn with_account(mut self, account: AccountId, balance: Balance) -> Self {
        self.endowed.push(EndowedAccount { account, balance });
        self
    }

    /// Build a fresh ledger seeded with the endowed accounts
    pub fn build(&self) -> Result<Ledger, GenesisError> {
        let mut ledger = Ledger::new();
        for endowment in &self.endowed {
            ledger.endow(endowment.account, endowment.balance)?;
        }
        Ok(ledger)
    }

    /// Load from a JSON file
    pub fn from_file(path: &str) -> Result<Self, GenesisError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save to a JSON file
    pub fn to_file(&self, path: &str) -> Result<(), GenesisError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Genesis errors
#[derive(Debug, thiserror::Error)]
pub enum GenesisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid genesis JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_config_builds_ledger() {
        let producer = AccountId::from_bytes([0xC0; 32]);
        let config = GenesisConfig::dev(producer);
        let ledger = config.build().unwrap();

        assert_eq!(ledger.balance(&producer), 10_000 * COIN);
        assert_eq!(ledger.total_issuance(), 10_000 * COIN);
    }

    #[test]
    fn test_with_account() {
        let producer = AccountId::from_bytes([0xC0; 32]);
        let user = AccountId::from_bytes([0x01; 32]);
        let config = GenesisConfig::dev(producer).with_account(user, 100 * COIN);
        let ledger = config.build().unwrap();

        assert_eq!(ledger.balance(&user), 100 * COIN);
        assert_eq!(ledger.total_issuance(), 10_100 * COIN);
    }

    #[test]
    fn test_json_round_trip() {
        let producer = AccountId::from_bytes([0xC0; 32]);
        let config = GenesisConfig::dev(producer);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: GenesisConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.chain_name, "gasless-dev");
        assert_eq!(parsed.chain_id, ChainId::ROOT);
        assert_eq!(parsed.endowed.len(), 1);
        assert_eq!(parsed.endowed[0].balance, 10_000 * COIN);
    }
}
