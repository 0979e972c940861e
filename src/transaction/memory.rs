//! Implements a transaction store that keeps everything in memory.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction, TransactionStore},
};

/// Stores transactions in a `Vec`, useful for tests and throwaway servers.
///
/// Clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransactionStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    transactions: Vec<Transaction>,
    last_id: TransactionId,
}

impl MemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, Error> {
        self.inner.lock().map_err(|error| {
            tracing::debug!("could not acquire store lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let mut inner = self.lock()?;
        inner.last_id += 1;

        let transaction = transaction.into_transaction(inner.last_id);
        inner.transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.lock()?.transactions.clone())
    }

    fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let mut inner = self.lock()?;

        let index = inner
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?;
        inner.transactions.remove(index);

        Ok(())
    }
}
