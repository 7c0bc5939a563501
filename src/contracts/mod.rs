// Contracts - System contracts embedded in the runtime
// Principle: No deployable smart contracts, everything is hardcoded and auditable

pub mod gasless;

pub use gasless::{GaslessRelay, RelayConfig, RelayError, ShortfallPolicy};
