//! The HTTP client for the transaction API.

use serde::de::DeserializeOwned;
use ureq::{Agent, Body, http::Response};

use crate::{
    MessageBody, TransactionId,
    transaction::{NewTransaction, Transaction},
};

/// The URL of the transaction API, fixed when the crate is built.
///
/// Set the environment variable `TRACKER_API_URL` at build time to change it.
pub const DEFAULT_API_URL: &str = match option_env!("TRACKER_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:5000/api/transaction",
};

/// The errors that may occur when calling the transaction API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be received.
    #[error("could not reach the API: {0}")]
    Transport(String),

    /// The API responded with `404 Not Found`.
    #[error("{0}")]
    NotFound(String),

    /// The API responded with any other unsuccessful status code.
    #[error("the API responded with {status}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The message from the response body, or the status text if there was none.
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("could not decode the API response: {0}")]
    Decode(String),
}

/// The operations the client needs from the transaction API.
pub trait TransactionApi {
    /// Fetch every transaction.
    fn list(&self) -> Result<Vec<Transaction>, ApiError>;

    /// Create a transaction and return it as stored, i.e. with its ID.
    fn create(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError>;

    /// Delete the transaction with the ID `id`.
    fn delete(&self, id: TransactionId) -> Result<(), ApiError>;
}

/// Calls the transaction API over HTTP.
#[derive(Clone)]
pub struct HttpTransactionApi {
    base_url: String,
    agent: Agent,
}

impl HttpTransactionApi {
    /// Create a client for the API at `base_url`, e.g. "http://127.0.0.1:5000/api/transaction".
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::new_with_config(
            ureq::config::Config::builder()
                .http_status_as_error(false)
                .build(),
        );

        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            agent,
        }
    }

    /// The URL that transactions are listed from and created at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpTransactionApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl TransactionApi for HttpTransactionApi {
    fn list(&self) -> Result<Vec<Transaction>, ApiError> {
        let response = self.agent.get(&self.base_url).call().map_err(transport)?;

        read_json(response)
    }

    fn create(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        let response = self
            .agent
            .post(&self.base_url)
            .send_json(transaction)
            .map_err(transport)?;

        read_json(response)
    }

    fn delete(&self, id: TransactionId) -> Result<(), ApiError> {
        let url = format!("{}/{id}", self.base_url);
        let response = self.agent.delete(&url).call().map_err(transport)?;

        read_json::<MessageBody>(response).map(|body| {
            tracing::debug!("deleted transaction {id}: {}", body.message);
        })
    }
}

fn transport(error: ureq::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

/// Decode a successful response as `T`, or turn an unsuccessful one into an [ApiError].
fn read_json<T: DeserializeOwned>(mut response: Response<Body>) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let message = response
            .body_mut()
            .read_json::<MessageBody>()
            .map(|body| body.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_owned());

        return Err(match status.as_u16() {
            404 => ApiError::NotFound(message),
            status => ApiError::Status { status, message },
        });
    }

    response
        .body_mut()
        .read_json()
        .map_err(|error| ApiError::Decode(error.to_string()))
}
