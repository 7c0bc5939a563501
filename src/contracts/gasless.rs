// Gasless - System contract for producer gas subsidies and refunds
//
// Two operations:
// - subsidize_gas: producer-gated value transfer to an arbitrary recipient
// - refund_to_miner: unrestricted value transfer to the current producer
//
// The contract holds no state between calls. Everything it touches comes in
// through the ledger, the block context, and the invocation.

use crate::execution::Invocation;
use crate::storage::{Ledger, LedgerError};
use crate::types::{AccountId, Balance, BlockContext};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do when the attached value does not cover the requested amount.
///
/// The original behaviour is unobservable (no test ever exercised the path),
/// so the choice is explicit configuration rather than a baked-in guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortfallPolicy {
    /// Refuse the call outright; nothing moves
    Reject,

    /// Forward the whole attached value instead of the requested amount
    ForwardAvailable,
}

/// Relay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Policy when attached value < requested amount
    pub shortfall_policy: ShortfallPolicy,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            shortfall_policy: ShortfallPolicy::Reject,
        }
    }
}

/// The relay contract.
///
/// Both operations settle atomically: the attached value is debited from the
/// caller, the forwarded amount credited to the recipient, and any surplus
/// credited back to the caller, all inside one `execute_atomic` so a failure
/// at any step leaves every balance untouched.
#[derive(Debug, Clone, Default)]
pub struct GaslessRelay {
    config: RelayConfig,
}

impl GaslessRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    /// Transfer `amount` of the attached value to `recipient`.
    ///
    /// Only the producer of the current block may call this. The recipient
    /// is unrestricted; the zero address and the caller itself are accepted.
    pub fn subsidize_gas(
        &self,
        ledger: &mut Ledger,
        ctx: &BlockContext,
        call: &Invocation,
        recipient: AccountId,
        amount: Balance,
    ) -> Result<(), RelayError> {
        if !ctx.is_authored_by(&call.caller) {
            warn!(caller = %call.caller, block = ctx.number, "subsidize_gas from non-producer");
            return Err(RelayError::NotBlockProducer);
        }

        let forwarded = self.forwardable(call, amount)?;
        Self::settle(ledger, call, recipient, forwarded)?;

        debug!(
            producer = %call.caller,
            %recipient,
            forwarded,
            block = ctx.number,
            "gas subsidy applied"
        );
        Ok(())
    }

    /// Transfer `amount` of the attached value to the current block's
    /// producer. Callable by anyone.
    ///
    /// The first address parameter exists for interface symmetry with
    /// `subsidize_gas` and never selects the recipient; the producer from
    /// the block context does.
    pub fn refund_to_miner(
        &self,
        ledger: &mut Ledger,
        ctx: &BlockContext,
        call: &Invocation,
        _ignored: AccountId,
        amount: Balance,
    ) -> Result<(), RelayError> {
        // Fail safe: without an identifiable producer the value would have
        // nowhere legitimate to go.
        let producer = ctx.author().ok_or(RelayError::UnknownBlockProducer)?;

        let forwarded = self.forwardable(call, amount)?;
        Self::settle(ledger, call, producer, forwarded)?;

        debug!(
            caller = %call.caller,
            %producer,
            forwarded,
            block = ctx.number,
            "miner refund applied"
        );
        Ok(())
    }

    /// Amount actually forwarded for this call, per the shortfall policy
    fn forwardable(&self, call: &Invocation, amount: Balance) -> Result<Balance, RelayError> {
        if call.attached >= amount {
            return Ok(amount);
        }

        match self.config.shortfall_policy {
            ShortfallPolicy::Reject => Err(RelayError::InsufficientAttachedValue {
                attached: call.attached,
                requested: amount,
            }),
            ShortfallPolicy::ForwardAvailable => Ok(call.attached),
        }
    }

    /// Move the attached value: debit the caller, credit the recipient with
    /// the forwarded amount, return the surplus to the caller. All three
    /// steps commit together or not at all.
    fn settle(
        ledger: &mut Ledger,
        call: &Invocation,
        recipient: AccountId,
        forwarded: Balance,
    ) -> Result<(), RelayError> {
        let surplus = call.surplus_over(forwarded);

        ledger.execute_atomic(|l| -> Result<(), LedgerError> {
            l.withdraw(&call.caller, call.attached)?;
            l.deposit(recipient, forwarded)?;
            if surplus > 0 {
                l.deposit(call.caller, surplus)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}

/// Relay errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum RelayError {
    /// Caller of `subsidize_gas` is not the current block's producer.
    /// The message is contractual; external callers match on it.
    #[error("You're not a miner of the block")]
    NotBlockProducer,

    #[error("Attached value {attached} does not cover requested amount {requested}")]
    InsufficientAttachedValue {
        attached: Balance,
        requested: Balance,
    },

    #[error("Current block has no identifiable producer")]
    UnknownBlockProducer,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
