//! The state and operations of the client application.

use time::{Date, OffsetDateTime};

use crate::{
    Error, TransactionId,
    client::{
        ApiError, CategoryFilter, FormError, Notifier, Totals, TransactionApi, TransactionForm,
        filter_transactions,
    },
    timezone::{get_local_offset, local_today},
    transaction::Transaction,
};

/// Shown when the API fails to create a transaction.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create transaction";
/// Shown when the API fails to delete a transaction.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete transaction";
/// Asked before deleting a transaction.
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this transaction?";

/// What happened when the form was submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The API stored the transaction and it was added to the list.
    Created(Transaction),
    /// The form failed validation, the API was not called.
    Invalid(FormError),
    /// The API call failed, the list is unchanged.
    Failed(ApiError),
}

/// What happened when a transaction was deleted.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The API deleted the transaction and it was removed from the list.
    Deleted,
    /// The API did not have the transaction, so it was removed from the list
    /// to match.
    AlreadyGone,
    /// The user did not confirm the deletion.
    Cancelled,
    /// The API call failed, the list is unchanged.
    Failed(ApiError),
}

/// The client application: an in-memory copy of the transactions, the new
/// transaction form and the category filter.
///
/// The copy is only refreshed by [TrackerApp::load]; creating and deleting
/// update it once the API has answered.
pub struct TrackerApp<A, N> {
    api: A,
    notifier: N,
    timezone: String,
    transactions: Vec<Transaction>,
    totals: Totals,
    /// The form for entering a new transaction.
    pub form: TransactionForm,
    /// Which transactions [TrackerApp::visible_transactions] returns.
    pub filter: CategoryFilter,
}

impl<A, N> TrackerApp<A, N>
where
    A: TransactionApi,
    N: Notifier,
{
    /// Create an app with an empty list.
    ///
    /// `timezone` is a canonical timezone name, e.g. "Pacific/Auckland", and
    /// decides what "today" is when the form's date is left blank.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if `timezone` is not a known timezone.
    pub fn new(api: A, notifier: N, timezone: &str) -> Result<Self, Error> {
        if get_local_offset(timezone).is_none() {
            return Err(Error::InvalidTimezone(timezone.to_owned()));
        }

        Ok(Self {
            api,
            notifier,
            timezone: timezone.to_owned(),
            transactions: Vec::new(),
            totals: Totals::default(),
            form: TransactionForm::default(),
            filter: CategoryFilter::default(),
        })
    }

    /// Replace the list with the transactions from the API.
    ///
    /// Failures are logged and otherwise ignored, the list keeps whatever it
    /// had before.
    pub fn load(&mut self) {
        match self.api.list() {
            Ok(transactions) => {
                tracing::debug!("loaded {} transactions", transactions.len());
                self.totals = Totals::from_transactions(&transactions);
                self.transactions = transactions;
            }
            Err(error) => tracing::warn!("Error fetching transactions: {error}"),
        }
    }

    /// Validate the form and create the transaction it describes.
    ///
    /// Invalid forms and failed API calls raise an alert. On success the new
    /// transaction is appended to the list and the form is cleared.
    pub fn submit(&mut self) -> SubmitOutcome {
        let new_transaction = match self.form.validate(self.today()) {
            Ok(new_transaction) => new_transaction,
            Err(error) => {
                self.notifier.alert(&error.to_string());
                return SubmitOutcome::Invalid(error);
            }
        };

        match self.api.create(&new_transaction) {
            Ok(transaction) => {
                self.totals.add(&transaction);
                self.transactions.push(transaction.clone());
                self.form.clear();
                SubmitOutcome::Created(transaction)
            }
            Err(error) => {
                tracing::warn!("Error creating transaction: {error}");
                self.notifier.alert(CREATE_FAILED_MESSAGE);
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Ask for confirmation, then delete the transaction with the ID `id`.
    ///
    /// The list only changes once the API has answered: it loses the
    /// transaction if the API deleted it or never had it, and is left alone
    /// if the call failed.
    pub fn delete(&mut self, id: TransactionId) -> DeleteOutcome {
        if !self.notifier.confirm(CONFIRM_DELETE_MESSAGE) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete(id) {
            Ok(()) => {
                self.remove_local(id);
                DeleteOutcome::Deleted
            }
            Err(ApiError::NotFound(message)) => {
                tracing::info!("transaction {id} was already gone: {message}");
                self.remove_local(id);
                DeleteOutcome::AlreadyGone
            }
            Err(error) => {
                tracing::warn!("Error deleting transaction: {error}");
                self.notifier.alert(DELETE_FAILED_MESSAGE);
                DeleteOutcome::Failed(error)
            }
        }
    }

    fn remove_local(&mut self, id: TransactionId) {
        if let Some(index) = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
        {
            let removed = self.transactions.remove(index);
            self.totals.remove(&removed);
        }
    }

    fn today(&self) -> Date {
        local_today(&self.timezone).unwrap_or_else(|| {
            tracing::warn!("invalid timezone {}, using UTC", self.timezone);
            OffsetDateTime::now_utc().date()
        })
    }

    /// Every transaction, in the order the API returned or created them.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The transactions that pass [TrackerApp::filter].
    pub fn visible_transactions(&self) -> Vec<&Transaction> {
        filter_transactions(&self.transactions, self.filter)
    }

    /// The income, expense and balance over every transaction, regardless of
    /// the filter.
    pub fn totals(&self) -> Totals {
        self.totals
    }
}
