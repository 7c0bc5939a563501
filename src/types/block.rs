// Block context - Ambient data the execution environment supplies per call
use super::account::AccountId;
use super::primitives::{BlockNumber, Timestamp};
use serde::{Deserialize, Serialize};

/// Read-only context of the block an invocation executes in.
///
/// The relay never owns or caches one of these; the calling framework builds
/// a fresh context for every invocation, so the producer check always
/// reflects the current block. `author` is `None` in environments that
/// cannot name a producer (simulations, consensus-less test rigs).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlockContext {
    /// Block number (height)
    pub number: BlockNumber,

    /// Timestamp of the block
    pub timestamp: Timestamp,

    /// Validator that produced this block, if the environment knows one
    pub author: Option<AccountId>,
}

impl BlockContext {
    pub fn new(number: BlockNumber, timestamp: Timestamp, author: AccountId) -> Self {
        Self {
            number,
            timestamp,
            author: Some(author),
        }
    }

    /// Context without an identifiable producer
    pub fn without_author(number: BlockNumber, timestamp: Timestamp) -> Self {
        Self {
            number,
            timestamp,
            author: None,
        }
    }

    /// The current block's producer, if known
    pub fn author(&self) -> Option<AccountId> {
        self.author
    }

    /// Is `who` the producer of this block?
    ///
    /// Fails closed: a context with no author matches nobody.
    pub fn is_authored_by(&self, who: &AccountId) -> bool {
        match self.author {
            Some(author) => author == *who,
            None => false,
        }
    }
}
