// Ledger - Account balances and atomic value movement
use crate::types::{AccountId, AccountInfo, Balance};
use std::collections::HashMap;
use tracing::debug;

/// In-memory account ledger.
///
/// Accounts are created implicitly on first credit and never destroyed.
/// Each balance mutation either validates before touching anything or runs
/// under `execute_atomic`, so a failed operation leaves every balance
/// exactly as it was.
///
/// THREAD SAFETY: Not thread-safe by itself. The surrounding environment
/// serializes invocations; for concurrent access wrap in a lock and hold it
/// for the whole operation.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Account states, keyed by address
    accounts: HashMap<AccountId, AccountInfo>,

    /// Sum of all balances ever endowed; conserved by every transfer
    total_issuance: Balance,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a closure atomically: on error the ledger is restored to the
    /// state it had before the closure ran.
    ///
    /// This is the rollback guarantee the host environment gave the original
    /// relay for free. Callers must still validate preconditions first; the
    /// snapshot only covers failures surfacing mid-settlement.
    pub fn execute_atomic<F, R, E>(&mut self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Self) -> Result<R, E>,
    {
        let snapshot = self.accounts.clone();
        let issuance = self.total_issuance;

        match f(self) {
            Ok(value) => Ok(value),
            Err(e) => {
                self.accounts = snapshot;
                self.total_issuance = issuance;
                Err(e)
            }
        }
    }

    /// Look up an account
    pub fn get_account(&self, id: &AccountId) -> Option<&AccountInfo> {
        self.accounts.get(id)
    }

    /// Free balance of an account (zero if it does not exist yet)
    pub fn balance(&self, id: &AccountId) -> Balance {
        self.accounts.get(id).map(|a| a.free).unwrap_or(0)
    }

    /// Sum of all endowed balances
    pub fn total_issuance(&self) -> Balance {
        self.total_issuance
    }

    /// Endow an account with new value, creating it if needed.
    ///
    /// This is the provisioning entry point (genesis, test setup); transfers
    /// between existing accounts go through `withdraw`/`deposit`.
    pub fn endow(&mut self, id: AccountId, amount: Balance) -> Result<(), LedgerError> {
        let new_issuance = self
            .total_issuance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow { account: id })?;

        self.deposit(id, amount)?;
        self.total_issuance = new_issuance;
        Ok(())
    }

    /// Credit an account, creating it implicitly if needed
    pub fn deposit(&mut self, id: AccountId, amount: Balance) -> Result<(), LedgerError> {
        let account = self.accounts.entry(id).or_default();
        account.free = account
            .free
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow { account: id })?;
        Ok(())
    }

    /// Debit an account. Fails if the account does not exist or cannot cover
    /// the amount; a balance can never go negative.
    pub fn withdraw(&mut self, id: &AccountId, amount: Balance) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or(LedgerError::AccountNotFound(*id))?;

        if !account.can_withdraw(amount) {
            return Err(LedgerError::InsufficientBalance {
                account: *id,
                available: account.free,
                required: amount,
            });
        }

        account.free = account.free.saturating_sub(amount);
        Ok(())
    }

    /// Balance transfer between two accounts
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Balance,
    ) -> Result<(), LedgerError> {
        self.execute_atomic(|ledger| {
            ledger.withdraw(&from, amount)?;
            ledger.deposit(to, amount)?;

            debug!(%from, %to, amount, "transfer applied");
            Ok(())
        })
    }
}

/// Ledger errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Insufficient balance for {account}: available={available}, required={required}")]
    InsufficientBalance {
        account: AccountId,
        available: Balance,
        required: Balance,
    },

    #[error("Balance overflow on {account}")]
    BalanceOverflow { account: AccountId },
}
