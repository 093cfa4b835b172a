//! # Outbound Ports (Driven Ports / SPI)
//!
//! The storage collaborator: a read-only key-value view of the ledger,
//! keyed by address. Implementations own transport, timeouts and
//! cancellation; this crate never retries a failed read.

use crate::domain::{Address, StoreError};
use futures::future::try_join_all;

/// Raw account as held by the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredAccount {
    /// Program that owns the account.
    pub owner: Address,
    /// Account data, discriminator first.
    pub data: Vec<u8>,
}

impl StoredAccount {
    pub fn new(owner: Address, data: Vec<u8>) -> Self {
        Self { owner, data }
    }
}

/// Read access to ledger accounts.
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetch one account. `Ok(None)` means nothing lives at `address`.
    async fn get_account(&self, address: &Address) -> Result<Option<StoredAccount>, StoreError>;

    /// Fetch several accounts. The result has one entry per input address,
    /// in input order.
    ///
    /// The default issues single reads concurrently; stores with a native
    /// batch call should override it.
    async fn get_multiple_accounts(
        &self,
        addresses: &[Address],
    ) -> Result<Vec<Option<StoredAccount>>, StoreError> {
        try_join_all(addresses.iter().map(|address| self.get_account(address))).await
    }
}
