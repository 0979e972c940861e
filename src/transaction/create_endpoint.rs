//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    transaction::{NewTransaction, TransactionPayload, TransactionStore},
};

/// A route handler for creating a new transaction.
///
/// Responds with the stored transaction and `201 Created` on success.
/// Bodies that are not JSON or that fail validation get a `400 Bad Request`
/// with a message explaining why, and nothing is written to the store.
pub async fn create_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Response
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::warn!("could not parse transaction: {rejection}");
            return Error::InvalidTransaction(rejection.body_text()).into_response();
        }
    };

    let new_transaction = match NewTransaction::try_from(payload) {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::warn!("rejected invalid transaction: {error}");
            return error.into_response();
        }
    };

    match state.transaction_store.create(new_transaction) {
        Ok(transaction) => {
            tracing::info!("created transaction {}", transaction.id);
            (StatusCode::CREATED, Json(transaction)).into_response()
        }
        Err(error) => {
            tracing::debug!("could not create transaction: {error}");
            error.into_response()
        }
    }
}
