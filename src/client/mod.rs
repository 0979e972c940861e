//! The client application.
//!
//! Fetches transactions from the API, keeps them in memory, and derives the
//! totals and the filtered view from that copy rather than asking the server.

mod api;
mod app;
mod form;
mod notifier;
mod totals;
mod view;

pub use api::{ApiError, DEFAULT_API_URL, HttpTransactionApi, TransactionApi};
pub use app::{
    CONFIRM_DELETE_MESSAGE, CREATE_FAILED_MESSAGE, DELETE_FAILED_MESSAGE, DeleteOutcome,
    SubmitOutcome, TrackerApp,
};
pub use form::{FormError, TransactionForm};
pub use notifier::{Notifier, TerminalNotifier};
pub use totals::{CategoryFilter, Totals, filter_transactions};
pub use view::{format_currency, format_signed_amount, render_summary, render_transactions};
