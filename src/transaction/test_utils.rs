use crate::{
    Error, TransactionId,
    transaction::{NewTransaction, Transaction, TransactionStore},
};

/// A store whose every operation fails as if the database were unavailable.
#[derive(Clone)]
pub struct UnavailableStore;

impl TransactionStore for UnavailableStore {
    fn create(&self, _: NewTransaction) -> Result<Transaction, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        Err(Error::DatabaseLockError)
    }

    fn delete(&self, _: TransactionId) -> Result<(), Error> {
        Err(Error::DatabaseLockError)
    }
}
