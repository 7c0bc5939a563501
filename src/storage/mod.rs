// Storage - In-memory ledger state
// The relay persists nothing itself; the ledger lives for the duration of
// the surrounding execution environment.

pub mod ledger;

pub use ledger::{Ledger, LedgerError};
