//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, transaction::SQLiteTransactionStore};

/// The state of the REST server.
///
/// Request handlers only reach the record store through this struct, so any
/// [TransactionStore](crate::TransactionStore) can be plugged in, e.g. an
/// in-memory store in tests.
#[derive(Debug, Clone)]
pub struct AppState<S> {
    /// The store that owns the transactions.
    pub transaction_store: S,
}

impl<S> AppState<S> {
    /// Create a new [AppState] around `transaction_store`.
    pub fn new(transaction_store: S) -> Self {
        Self { transaction_store }
    }
}

/// Create a new [AppState] with a SQLite database connection.
///
/// This function will initialize the database by adding the tables for the domain models.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_sqlite_app_state(
    db_connection: Connection,
) -> Result<AppState<SQLiteTransactionStore>, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(SQLiteTransactionStore::new(connection)))
}
