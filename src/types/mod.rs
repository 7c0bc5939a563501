// Fundamental types for the gasless relay
// Principle: Minimal, auditable, durable

pub mod account;
pub mod block;
pub mod primitives;

pub use account::*;
pub use block::*;
pub use primitives::*;
