//! Defines the core data models for transactions and the validation of new
//! transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Row,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use time::{Date, macros::format_description};

use crate::{Error, database_id::TransactionId};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// The largest amount a single transaction may have.
// 1_000_000_000_000 == 0xE8_D4A5_1000, split into 32-bit lo/mid words.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Amounts are whole cents.
const AMOUNT_DECIMAL_PLACES: u32 = 2;

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the store when the transaction was created.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Sent over the wire as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Whether the money was earned or spent.
    pub category: Category,
    /// When the transaction happened, if known.
    #[serde(
        default,
        with = "iso_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<Date>,
}

/// Whether a transaction is money earned or money spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl Category {
    /// The lowercase name used on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => "income",
            Category::Expense => "expense",
        }
    }

    /// The capitalised name for displaying to users.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Category::Income),
            "expense" => Ok(Category::Expense),
            other => Err(Error::InvalidTransaction(format!(
                "category must be either \"income\" or \"expense\", got \"{other}\""
            ))),
        }
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// A transaction that has passed validation and is ready to be stored.
///
/// Use [NewTransaction::new] or convert a [TransactionPayload] to create one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    description: String,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    category: Category,
    #[serde(with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    date: Option<Date>,
}

impl NewTransaction {
    /// Validate the fields of a new transaction.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidTransaction] if `description` is blank, or if
    /// `amount` is not greater than zero, has fractions of a cent or is
    /// larger than [MAX_AMOUNT].
    pub fn new(
        description: &str,
        amount: Decimal,
        category: Category,
        date: Option<Date>,
    ) -> Result<Self, Error> {
        if description.trim().is_empty() {
            return Err(Error::InvalidTransaction(
                "description must not be empty".to_owned(),
            ));
        }

        if amount <= Decimal::ZERO {
            return Err(Error::InvalidTransaction(
                "amount must be greater than 0".to_owned(),
            ));
        }

        if amount.normalize().scale() > AMOUNT_DECIMAL_PLACES {
            return Err(Error::InvalidTransaction(
                "amount must not have more than 2 decimal places".to_owned(),
            ));
        }

        if amount > MAX_AMOUNT {
            return Err(Error::InvalidTransaction(format!(
                "amount must not be more than {MAX_AMOUNT}"
            )));
        }

        Ok(Self {
            description: description.to_owned(),
            amount,
            category,
            date,
        })
    }

    /// Text detailing the transaction.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The positive amount of money, in whole cents.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Whether the money was earned or spent.
    pub fn category(&self) -> Category {
        self.category
    }

    /// When the transaction happened, if known.
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// Attach the store-assigned `id`.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

/// The request body for creating a transaction, before validation.
///
/// Every field is optional so that missing fields produce a validation
/// message rather than a deserialization error.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransactionPayload {
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: Option<String>,
    /// The amount of money.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    /// Either "income" or "expense".
    #[serde(default)]
    pub category: Option<String>,
    /// An ISO 8601 calendar date, e.g. "2024-01-05".
    #[serde(default)]
    pub date: Option<String>,
}

impl TryFrom<TransactionPayload> for NewTransaction {
    type Error = Error;

    fn try_from(payload: TransactionPayload) -> Result<Self, Self::Error> {
        let description = payload
            .description
            .ok_or_else(|| Error::InvalidTransaction("description is required".to_owned()))?;
        let amount = payload
            .amount
            .ok_or_else(|| Error::InvalidTransaction("amount is required".to_owned()))?;
        let category = payload
            .category
            .ok_or_else(|| Error::InvalidTransaction("category is required".to_owned()))?
            .parse()?;
        let date = match payload.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(parse_date(text)?),
        };

        NewTransaction::new(&description, amount, category, date)
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [Error::InvalidTransaction] if `text` is not a valid calendar date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, format_description!("[year]-[month]-[day]")).map_err(|_| {
        Error::InvalidTransaction(format!("date must be a valid YYYY-MM-DD date, got \"{text}\""))
    })
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Convert an amount to the whole number of cents it is stored as.
///
/// # Errors
///
/// Returns [Error::InvalidTransaction] if `amount` has fractions of a cent or
/// does not fit in an `i64`.
pub fn amount_to_cents(amount: Decimal) -> Result<i64, Error> {
    let mut cents = amount.normalize();
    if cents.scale() > AMOUNT_DECIMAL_PLACES {
        return Err(Error::InvalidTransaction(format!(
            "{amount} cannot be stored as whole cents"
        )));
    }
    cents.rescale(AMOUNT_DECIMAL_PLACES);

    cents
        .mantissa()
        .to_i64()
        .ok_or_else(|| Error::InvalidTransaction(format!("{amount} is too large to store")))
}

/// The amount for a whole number of `cents`.
pub fn amount_from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, AMOUNT_DECIMAL_PLACES)
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let description = row.get(1)?;
    let amount = amount_from_cents(row.get(2)?);
    let category = row.get(3)?;
    let date = row.get(4)?;

    Ok(Transaction {
        id,
        description,
        amount,
        category,
        date,
    })
}
