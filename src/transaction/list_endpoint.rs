//! Defines the endpoint for listing every transaction.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{AppState, transaction::TransactionStore};

/// A route handler that responds with every stored transaction as a JSON array.
///
/// The transactions are in the store's natural order, i.e. the order they
/// were created in.
pub async fn get_transactions_endpoint<S>(State(state): State<AppState<S>>) -> Response
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    match state.transaction_store.get_all() {
        Ok(transactions) => {
            tracing::debug!("listing {} transactions", transactions.len());
            Json(transactions).into_response()
        }
        Err(error) => {
            tracing::debug!("could not list transactions: {error}");
            error.into_response()
        }
    }
}
