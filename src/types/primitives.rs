// Primitives - Fundamental scalar types
use serde::{Deserialize, Serialize};
use std::fmt;

/// Block number (u64 = ~584 billion years at 1 block/sec)
pub type BlockNumber = u64;

/// Unix timestamp in seconds
pub type Timestamp = u64;

/// Balance in native value units (u128 = enough for centuries)
/// 1 COIN = 10^12 units
pub type Balance = u128;

/// Monetary constants
pub const COIN: Balance = 1_000_000_000_000; // 10^12
pub const MILLICOIN: Balance = 1_000_000_000; // 10^9
pub const MICROCOIN: Balance = 1_000_000; // 10^6

/// ChainId, kept so a relay deployment can be tied to one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u32);

impl ChainId {
    /// Root chain is always ID 0
    pub const ROOT: ChainId = ChainId(0);

    pub fn is_root(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "chain:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_units() {
        assert_eq!(COIN, 1_000_000_000_000);
        assert_eq!(1000 * MILLICOIN, COIN);
        assert_eq!(1_000_000 * MICROCOIN, COIN);
    }

    #[test]
    fn test_chain_id_root() {
        assert!(ChainId::ROOT.is_root());
        assert!(!ChainId(1).is_root());
    }
}
