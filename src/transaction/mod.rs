//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions on the server:
//! - The `Transaction` model and the validated `NewTransaction`
//! - The `TransactionStore` trait with SQLite and in-memory implementations
//! - The JSON route handlers for listing, creating and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod memory;
mod sqlite;
mod store;
#[cfg(test)]
mod test_utils;

pub use core::{
    Category, MAX_AMOUNT, NewTransaction, Transaction, TransactionPayload, amount_from_cents,
    amount_to_cents, format_date, map_transaction_row, parse_date,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::get_transactions_endpoint;
pub use memory::MemoryTransactionStore;
pub use sqlite::{SQLiteTransactionStore, create_transaction_table};
pub use store::TransactionStore;
