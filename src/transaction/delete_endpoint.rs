//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error, MessageBody, TRANSACTION_DELETED_MESSAGE,
    database_id::TransactionId,
    transaction::TransactionStore,
};

/// A route handler for deleting a transaction, responds with a confirmation message.
///
/// An ID that does not refer to a stored transaction, including one that is
/// not a valid ID at all, gets a `404 Not Found`.
pub async fn delete_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(transaction_id): Path<String>,
) -> Response
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let Ok(id) = transaction_id.parse::<TransactionId>() else {
        tracing::debug!("{transaction_id:?} is not a transaction ID");
        return Error::NotFound.into_response();
    };

    match state.transaction_store.delete(id) {
        Ok(()) => {
            tracing::info!("deleted transaction {id}");
            Json(MessageBody::new(TRANSACTION_DELETED_MESSAGE)).into_response()
        }
        Err(Error::NotFound) => {
            tracing::debug!("tried to delete missing transaction {id}");
            Error::NotFound.into_response()
        }
        Err(error) => {
            tracing::debug!("could not delete transaction {id}: {error}");
            error.into_response()
        }
    }
}
