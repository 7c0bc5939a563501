// Gasless Relay - Library entry point
// Principle: One contract, two operations, no persistent state of its own

pub mod contracts;
pub mod execution;
pub mod genesis;
pub mod storage;
pub mod types;

#[cfg(test)]
mod tests;

pub use contracts::gasless::{GaslessRelay, RelayConfig, RelayError, ShortfallPolicy};
pub use execution::call::Invocation;
pub use storage::ledger::{Ledger, LedgerError};
pub use types::{AccountId, Balance, BlockContext, BlockNumber};
