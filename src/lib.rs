//! An expense tracker for recording income and expenses and keeping an eye on
//! the running balance.
//!
//! This library provides a JSON REST API backed by a [TransactionStore], and a
//! [client](crate::client) that talks to the API, holds the transactions in
//! memory and derives the totals from them.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod app_state;
pub mod client;
mod database_id;
mod db;
pub mod endpoints;
mod logging;
mod routing;
mod timezone;
pub mod transaction;

pub use app_state::{AppState, create_sqlite_app_state};
pub use database_id::{DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::{get_local_offset, local_today};
pub use transaction::{MemoryTransactionStore, SQLiteTransactionStore, TransactionStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The JSON body used for error responses and confirmations, e.g.
/// `{"message": "Transaction not found."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// A human readable message.
    pub message: String,
}

impl MessageBody {
    /// Create a message body from `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The message sent when a request refers to a transaction that does not exist.
pub const TRANSACTION_NOT_FOUND_MESSAGE: &str = "Transaction not found.";

/// The message sent after a transaction is deleted.
pub const TRANSACTION_DELETED_MESSAGE: &str = "Transaction deleted successfully.";

/// The message sent in place of the details of an unexpected server error.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Try again later or check the server logs.";

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The fields of a new transaction failed validation, or the request body
    /// could not be parsed as a transaction.
    ///
    /// The string describes the problem and is safe to show to the client.
    #[error("{0}")]
    InvalidTransaction(String),

    /// The requested transaction was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the lock on the store.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// A canonical timezone string did not name a known timezone.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 275 occurs when a CHECK constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_CHECK =>
            {
                Error::InvalidTransaction(format!("the store rejected the transaction: {desc}"))
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::debug!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::InvalidTransaction(message) => (StatusCode::BAD_REQUEST, message),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                TRANSACTION_NOT_FOUND_MESSAGE.to_owned(),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_owned(),
                )
            }
        };

        (status, Json(MessageBody { message })).into_response()
    }
}
