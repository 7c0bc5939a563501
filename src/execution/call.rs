// Call - A funded invocation of a relay operation
use crate::types::{AccountId, Balance};
use serde::{Deserialize, Serialize};

/// One invocation of a payable operation.
///
/// `attached` is the payment the caller sends along with the call. It is
/// deliberately separate from any logical `amount` argument an operation
/// takes: the operation decides how much of the attached value to forward
/// and the rest comes back to the caller as surplus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Invocation {
    /// Account making the call
    pub caller: AccountId,

    /// Value payment attached to the call
    pub attached: Balance,
}

impl Invocation {
    pub fn new(caller: AccountId, attached: Balance) -> Self {
        Self { caller, attached }
    }

    /// Surplus left over once `forwarded` has been sent onward
    pub fn surplus_over(&self, forwarded: Balance) -> Balance {
        self.attached.saturating_sub(forwarded)
    }
}
