use crate::domain::{AccountRecord, Address, StoreError, PROGRAM_ID};
use crate::ports::{AccountStore, StoredAccount};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory implementation of AccountStore, for tests and preloaded snapshots
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<Address, StoredAccount>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, address: Address, account: StoredAccount) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        accounts.insert(address, account);
        Ok(())
    }

    /// Store `record` at `address`, owned by the index program.
    pub fn insert_record<R: AccountRecord>(
        &self,
        address: Address,
        record: &R,
    ) -> Result<(), StoreError> {
        self.insert(address, StoredAccount::new(PROGRAM_ID, record.encode()))
    }

    pub fn remove(&self, address: &Address) -> Result<Option<StoredAccount>, StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(accounts.remove(address))
    }

    pub fn len(&self) -> usize {
        self.accounts.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn get_account(&self, address: &Address) -> Result<Option<StoredAccount>, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(accounts.get(address).cloned())
    }

    async fn get_multiple_accounts(
        &self,
        addresses: &[Address],
    ) -> Result<Vec<Option<StoredAccount>>, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(addresses
            .iter()
            .map(|address| accounts.get(address).cloned())
            .collect())
    }
}
