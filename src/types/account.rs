// Account - Minimal account system
use super::primitives::Balance;
use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// AccountId = Ed25519 public key (32 bytes)
/// Principle: No identity, just keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// The all-zero address. Never derived from a real key; used by callers
    /// that must pass an address they do not care about.
    pub const ZERO: AccountId = AccountId([0u8; 32]);

    pub fn from_public_key(key: &VerifyingKey) -> Self {
        AccountId(key.to_bytes())
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0[..8]))
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }
}

/// State of an account in the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Free balance
    pub free: Balance,
}

impl AccountInfo {
    pub fn new() -> Self {
        Self { free: 0 }
    }

    /// Can this account pay out `amount`?
    pub fn can_withdraw(&self, amount: Balance) -> bool {
        self.free >= amount
    }
}

impl Default for AccountInfo {
    fn default() -> Self {
        Self::new()
    }
}
