// Genesis - Initial account endowment
// Stands in for the provisioning the original execution environment did
// out-of-band (funding the producer and user accounts before any call).

pub mod config;

pub use config::{EndowedAccount, GenesisConfig, GenesisError};
