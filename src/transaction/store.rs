//! Defines the transaction store trait.

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction},
};

/// Handles the creation, retrieval and deletion of transactions.
///
/// Implementers are shared between request handlers, so they are expected to
/// be cheap to clone and to synchronise access internally.
pub trait TransactionStore {
    /// Persist a new transaction and return it with its assigned ID.
    ///
    /// IDs are unique and are never reused, even after the transaction they
    /// were assigned to is deleted.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve every transaction in the order they were created.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Delete the transaction with the ID `id`.
    ///
    /// # Errors
    /// Implementers must return [Error::NotFound] if there is no transaction
    /// with the ID `id`, and leave the store unchanged.
    fn delete(&self, id: TransactionId) -> Result<(), Error>;
}
