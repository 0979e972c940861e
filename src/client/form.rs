//! The form for entering a new transaction.

use rust_decimal::Decimal;
use time::Date;

use crate::{
    Error,
    transaction::{Category, NewTransaction, parse_date},
};

/// Why the form could not be submitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    /// The description is empty or only whitespace.
    #[error("Please add a description")]
    MissingDescription,

    /// The amount is missing, not a number, or not greater than zero.
    #[error("Amount must be greater than 0")]
    InvalidAmount,

    /// The date is not blank and not a `YYYY-MM-DD` date.
    #[error("Date must be in the format YYYY-MM-DD")]
    InvalidDate,

    /// The fields passed the form's checks but not the rules for a new
    /// transaction, e.g. the amount has fractions of a cent.
    #[error("Invalid transaction: {0}")]
    Rejected(String),
}

impl From<Error> for FormError {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidTransaction(message) => FormError::Rejected(message),
            other => FormError::Rejected(other.to_string()),
        }
    }
}

/// The fields of the new transaction form, as the user typed them.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    pub description: String,
    /// The amount as typed, e.g. "4.50".
    pub amount: String,
    /// Whether the money was earned or spent.
    pub category: Category,
    /// The date as typed, blank means today.
    pub date: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: Category::Expense,
            date: String::new(),
        }
    }
}

impl TransactionForm {
    /// Check the fields and build the transaction to send to the API.
    ///
    /// A blank date is replaced with `today`.
    ///
    /// # Errors
    /// Returns a [FormError] for the first field that is invalid, checking
    /// the description, then the amount, then the date.
    pub fn validate(&self, today: Date) -> Result<NewTransaction, FormError> {
        if self.description.trim().is_empty() {
            return Err(FormError::MissingDescription);
        }

        let amount = self
            .amount
            .trim()
            .parse::<Decimal>()
            .ok()
            .filter(|amount| *amount > Decimal::ZERO)
            .ok_or(FormError::InvalidAmount)?;

        let date = match self.date.trim() {
            "" => today,
            text => parse_date(text).map_err(|_| FormError::InvalidDate)?,
        };

        Ok(NewTransaction::new(
            &self.description,
            amount,
            self.category,
            Some(date),
        )?)
    }

    /// Reset every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use time::macros::date;

    use crate::{
        client::{FormError, TransactionForm},
        transaction::Category,
    };

    fn filled_form() -> TransactionForm {
        TransactionForm {
            description: "Coffee".to_owned(),
            amount: "4.5".to_owned(),
            category: Category::Expense,
            date: "2024-01-05".to_owned(),
        }
    }

    #[test]
    fn valid_form_builds_transaction() {
        let got = filled_form().validate(date!(2024 - 02 - 01)).unwrap();

        assert_eq!(got.description(), "Coffee");
        assert_eq!(got.amount(), dec!(4.5));
        assert_eq!(got.category(), Category::Expense);
        assert_eq!(got.date(), Some(date!(2024 - 01 - 05)));
    }

    #[test]
    fn blank_date_is_today() {
        let form = TransactionForm {
            date: "  ".to_owned(),
            ..filled_form()
        };

        let got = form.validate(date!(2024 - 02 - 01)).unwrap();

        assert_eq!(got.date(), Some(date!(2024 - 02 - 01)));
    }

    #[test]
    fn rejects_blank_description() {
        let form = TransactionForm {
            description: " \t".to_owned(),
            ..filled_form()
        };

        assert_eq!(
            form.validate(date!(2024 - 02 - 01)),
            Err(FormError::MissingDescription)
        );
    }

    #[test]
    fn rejects_bad_amounts() {
        for amount in ["", "0", "-3", "abc", "NaN", "inf"] {
            let form = TransactionForm {
                amount: amount.to_owned(),
                ..filled_form()
            };

            assert_eq!(
                form.validate(date!(2024 - 02 - 01)),
                Err(FormError::InvalidAmount),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn keeps_cents_exact() {
        let form = TransactionForm {
            amount: "19.99".to_owned(),
            ..filled_form()
        };

        let got = form.validate(date!(2024 - 02 - 01)).unwrap();

        assert_eq!(got.amount(), dec!(19.99));
    }

    #[test]
    fn rejects_fractions_of_a_cent() {
        let form = TransactionForm {
            amount: "12.3456".to_owned(),
            ..filled_form()
        };

        assert_eq!(
            form.validate(date!(2024 - 02 - 01)),
            Err(FormError::Rejected(
                "amount must not have more than 2 decimal places".to_owned()
            ))
        );
    }

    #[test]
    fn rejects_bad_date() {
        let form = TransactionForm {
            date: "yesterday".to_owned(),
            ..filled_form()
        };

        assert_eq!(
            form.validate(date!(2024 - 02 - 01)),
            Err(FormError::InvalidDate)
        );
    }

    #[test]
    fn clear_resets_to_defaults() {
        let mut form = TransactionForm {
            category: Category::Income,
            ..filled_form()
        };

        form.clear();

        assert_eq!(form, TransactionForm::default());
    }
}
