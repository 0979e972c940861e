//! Derives income, expense and balance totals from a list of transactions,
//! and filters the list by category.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;

use crate::transaction::{Category, Transaction};

/// The total income and expenses over a set of transactions.
///
/// [Totals::from_transactions] sums a whole list. [Totals::add] and
/// [Totals::remove] keep the totals up to date as transactions come and go,
/// and must always agree with summing the list from scratch. The sums are
/// exact, so the order transactions are counted in does not matter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// The sum of the amounts of income transactions.
    pub income: Decimal,
    /// The sum of the amounts of expense transactions.
    pub expenses: Decimal,
}

impl Totals {
    /// Sum the income and expenses in `transactions`.
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut totals = Self::default();

        for transaction in transactions {
            totals.add(transaction);
        }

        totals
    }

    /// Count `transaction` towards the totals.
    pub fn add(&mut self, transaction: &Transaction) {
        match transaction.category {
            Category::Income => self.income += transaction.amount,
            Category::Expense => self.expenses += transaction.amount,
        }
    }

    /// Stop counting `transaction` towards the totals.
    pub fn remove(&mut self, transaction: &Transaction) {
        match transaction.category {
            Category::Income => self.income -= transaction.amount,
            Category::Expense => self.expenses -= transaction.amount,
        }
    }

    /// Income minus expenses.
    pub fn balance(&self) -> Decimal {
        self.income - self.expenses
    }
}

/// Which transactions to show.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every transaction.
    #[default]
    All,
    /// Show only transactions in one category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a transaction in `category` passes the filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            other => other
                .parse()
                .map(CategoryFilter::Only)
                .map_err(|_| format!("expected one of all, income or expense, got \"{other}\"")),
        }
    }
}

/// The transactions that pass `filter`, in their original order.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: CategoryFilter,
) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|transaction| filter.matches(transaction.category))
        .collect()
}
