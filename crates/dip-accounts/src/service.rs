//! # Account Client
//!
//! Application service that joins the storage port to the codecs:
//! fetch raw bytes, check the owner, decode.
//!
//! ## Result Policy
//!
//! | Storage says | Result |
//! |--------------|--------|
//! | nothing at address | `Ok(None)` |
//! | owner != program id | `Err(AccountError::Ownership)` |
//! | bytes don't decode | `Err(AccountError::Format)` |
//! | storage failure | `Err(AccountError::Storage)`, never retried |
//!
//! Batch reads apply the same policy per element: one bad account does not
//! poison its neighbours. Only a storage failure fails the whole batch.

use crate::config::ClientConfig;
use crate::domain::{
    AccountError, AccountRecord, Address, AnyAccount, FormatError, StoreError, PROGRAM_ID,
};
use crate::ports::{AccountStore, StoredAccount};
use futures::stream::{self, StreamExt, TryStreamExt};

/// Outcome of resolving one address.
pub type Fetched<T> = Result<Option<T>, AccountError>;

/// Typed, read-only access to the index program's accounts.
pub struct AccountClient<S: AccountStore> {
    store: S,
    config: ClientConfig,
}

fn resolve<T>(
    address: &Address,
    stored: Option<StoredAccount>,
    decode: impl Fn(&[u8]) -> Result<T, FormatError>,
) -> Fetched<T> {
    let Some(account) = stored else {
        tracing::debug!(address = %address, "account not found");
        return Ok(None);
    };
    if account.owner != PROGRAM_ID {
        tracing::warn!(
            address = %address,
            owner = %account.owner,
            "account owned by another program"
        );
        return Err(AccountError::Ownership {
            expected: PROGRAM_ID,
            actual: account.owner,
        });
    }
    decode(&account.data).map(Some).map_err(|e| {
        tracing::warn!(address = %address, error = %e, "account failed to decode");
        AccountError::from(e)
    })
}

impl<S: AccountStore> AccountClient<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: ClientConfig::default(),
        }
    }

    pub fn with_config(store: S, config: ClientConfig) -> Result<Self, AccountError> {
        config.validate().map_err(AccountError::Config)?;
        Ok(Self { store, config })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch and decode the `T` at `address`.
    pub async fn fetch<T: AccountRecord>(&self, address: &Address) -> Fetched<T> {
        let stored = self.store.get_account(address).await?;
        resolve(address, stored, T::decode)
    }

    /// Fetch whichever record lives at `address`.
    pub async fn fetch_any(&self, address: &Address) -> Fetched<AnyAccount> {
        let stored = self.store.get_account(address).await?;
        resolve(address, stored, AnyAccount::decode)
    }

    /// Fetch and decode many `T`s. The result lines up with `addresses`.
    pub async fn fetch_many<T: AccountRecord>(
        &self,
        addresses: &[Address],
    ) -> Result<Vec<Fetched<T>>, AccountError> {
        let stored = self.read_batched(addresses).await?;
        Ok(addresses
            .iter()
            .zip(stored)
            .map(|(address, account)| resolve(address, account, T::decode))
            .collect())
    }

    /// Like `fetch_many`, without fixing the record type.
    pub async fn fetch_many_any(
        &self,
        addresses: &[Address],
    ) -> Result<Vec<Fetched<AnyAccount>>, AccountError> {
        let stored = self.read_batched(addresses).await?;
        Ok(addresses
            .iter()
            .zip(stored)
            .map(|(address, account)| resolve(address, account, AnyAccount::decode))
            .collect())
    }

    /// Split into `max_batch_size` chunks and read up to `fetch_concurrency`
    /// of them at once. `buffered` yields in submission order, so the
    /// flattened output matches the input order.
    async fn read_batched(
        &self,
        addresses: &[Address],
    ) -> Result<Vec<Option<StoredAccount>>, AccountError> {
        if addresses.is_empty() {
            return Ok(Vec::new());
        }

        let batches: Vec<Vec<Option<StoredAccount>>> = stream::iter(
            addresses
                .chunks(self.config.max_batch_size)
                .map(|chunk| async move {
                    let found = self.store.get_multiple_accounts(chunk).await?;
                    if found.len() != chunk.len() {
                        return Err(StoreError::BatchLengthMismatch {
                            expected: chunk.len(),
                            actual: found.len(),
                        });
                    }
                    Ok::<_, StoreError>(found)
                }),
        )
        .buffered(self.config.fetch_concurrency)
        .try_collect()
        .await?;

        let stored: Vec<Option<StoredAccount>> = batches.into_iter().flatten().collect();
        tracing::info!(
            requested = addresses.len(),
            found = stored.iter().filter(|a| a.is_some()).count(),
            "batch fetch complete"
        );
        Ok(stored)
    }
}
