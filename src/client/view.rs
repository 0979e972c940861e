//! Renders the client's state as text for the terminal.

use std::fmt::Write;

use rust_decimal::{Decimal, RoundingStrategy};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    client::{CategoryFilter, Totals, filter_transactions},
    transaction::{Category, Transaction, format_date},
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

const ID_WIDTH: usize = 6;
const CATEGORY_WIDTH: usize = 8;
const DATE_WIDTH: usize = 10;
const AMOUNT_WIDTH: usize = 14;

/// Format `amount` as dollars and cents, e.g. "$1,234.50" or "-$4.50".
///
/// Fractions of a cent are rounded half away from zero.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let digits = format!("{:.2}", rounded.abs());
    let (dollars, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}${}.{cents}", group_thousands(dollars))
}

/// Put a comma between every group of three digits, e.g. "1234567" becomes "1,234,567".
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// The amount with a sign for its category, e.g. "+$100.00" for income and
/// "-$4.50" for an expense.
pub fn format_signed_amount(transaction: &Transaction) -> String {
    let sign = match transaction.category {
        Category::Income => '+',
        Category::Expense => '-',
    };

    format!("{sign}{}", format_currency(transaction.amount.abs()))
}

fn format_description(description: &str) -> String {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        description.to_owned()
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        truncated + "..."
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.graphemes(true).count());
    format!("{text}{}", " ".repeat(padding))
}

fn pad_left(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.graphemes(true).count());
    format!("{}{text}", " ".repeat(padding))
}

/// The balance, total income and total expenses, one per line.
pub fn render_summary(totals: Totals) -> String {
    let rows = [
        ("Balance", totals.balance()),
        ("Total Income", totals.income),
        ("Total Expenses", totals.expenses),
    ];

    let mut summary = String::new();
    for (label, amount) in rows {
        let _ = writeln!(
            summary,
            "{} {}",
            pad_right(&format!("{label}:"), 15),
            format_currency(amount)
        );
    }

    summary
}

/// A table of the transactions in `transactions` that pass `filter`.
///
/// If there are no transactions at all, a short message is rendered instead
/// of an empty table.
pub fn render_transactions(transactions: &[Transaction], filter: CategoryFilter) -> String {
    if transactions.is_empty() {
        return "No transactions yet\nAdd your first transaction above\n".to_owned();
    }

    let mut table = String::new();
    let _ = writeln!(
        table,
        "{} {} {} {} {}",
        pad_right("Id", ID_WIDTH),
        pad_right("Description", MAX_DESCRIPTION_GRAPHEMES),
        pad_right("Category", CATEGORY_WIDTH),
        pad_right("Date", DATE_WIDTH),
        pad_left("Amount", AMOUNT_WIDTH),
    );

    for transaction in filter_transactions(transactions, filter) {
        let date = transaction
            .date
            .map(format_date)
            .unwrap_or_else(|| "N/A".to_owned());

        let _ = writeln!(
            table,
            "{} {} {} {} {}",
            pad_right(&transaction.id.to_string(), ID_WIDTH),
            pad_right(
                &format_description(&transaction.description),
                MAX_DESCRIPTION_GRAPHEMES
            ),
            pad_right(transaction.category.label(), CATEGORY_WIDTH),
            pad_right(&date, DATE_WIDTH),
            pad_left(&format_signed_amount(transaction), AMOUNT_WIDTH),
        );
    }

    table
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use time::macros::date;

    use crate::{
        client::{CategoryFilter, Totals, format_currency, render_summary, render_transactions},
        transaction::{Category, Transaction},
    };

    use super::{format_description, format_signed_amount, group_thousands};

    fn coffee() -> Transaction {
        Transaction {
            id: 1,
            description: "Coffee".to_owned(),
            amount: dec!(4.5),
            category: Category::Expense,
            date: Some(date!(2024 - 01 - 05)),
        }
    }

    fn salary() -> Transaction {
        Transaction {
            id: 2,
            description: "Salary".to_owned(),
            amount: dec!(100),
            category: Category::Income,
            date: None,
        }
    }

    #[test]
    fn formats_currency_with_cents() {
        assert_eq!(format_currency(dec!(4.5)), "$4.50");
        assert_eq!(format_currency(dec!(5)), "$5.00");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(format_currency(dec!(-4.5)), "-$4.50");
        assert_eq!(format_currency(dec!(1234.5)), "$1,234.50");
    }

    #[test]
    fn rounds_to_the_nearest_cent() {
        assert_eq!(format_currency(dec!(12.3456)), "$12.35");
        assert_eq!(format_currency(dec!(0.005)), "$0.01");
        assert_eq!(format_currency(dec!(0.001)), "$0.00");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn large_amounts_are_not_scientific() {
        assert_eq!(format_currency(dec!(1000000000000)), "$1,000,000,000,000.00");
        assert_eq!(
            format_currency(dec!(-98765432109876.54)),
            "-$98,765,432,109,876.54"
        );
    }

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn signs_amounts_by_category() {
        assert_eq!(format_signed_amount(&coffee()), "-$4.50");
        assert_eq!(format_signed_amount(&salary()), "+$100.00");
    }

    #[test]
    fn truncates_long_descriptions() {
        let description = "🍩".repeat(40);

        let formatted = format_description(&description);

        assert!(formatted.ends_with("..."));
        assert_eq!(formatted.chars().count(), 32);
    }

    #[test]
    fn summary_lists_all_three_figures() {
        let totals = Totals {
            income: dec!(100),
            expenses: dec!(4.5),
        };

        let summary = render_summary(totals);

        assert!(summary.contains("Balance:"));
        assert!(summary.contains("$95.50"));
        assert!(summary.contains("Total Income:"));
        assert!(summary.contains("$100.00"));
        assert!(summary.contains("Total Expenses:"));
        assert!(summary.contains("$4.50"));
    }

    #[test]
    fn summary_of_cancelling_cents_is_zero() {
        let transaction = |amount, category| Transaction {
            amount,
            category,
            ..salary()
        };
        let totals = Totals::from_transactions(&[
            transaction(dec!(0.3), Category::Income),
            transaction(dec!(0.1), Category::Expense),
            transaction(dec!(0.2), Category::Expense),
        ]);

        let summary = render_summary(totals);

        assert_eq!(
            summary.lines().next(),
            Some(format!("{:<15} $0.00", "Balance:").as_str())
        );
    }

    #[test]
    fn table_header_names_columns() {
        let table = render_transactions(&[coffee()], CategoryFilter::All);

        let header: Vec<&str> = table.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(header, ["Id", "Description", "Category", "Date", "Amount"]);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let table = render_transactions(&[], CategoryFilter::All);

        assert!(table.starts_with("No transactions yet"));
    }

    #[test]
    fn table_shows_filtered_rows() {
        let transactions = vec![coffee(), salary()];

        let table = render_transactions(&transactions, CategoryFilter::Only(Category::Income));

        assert!(table.contains("Salary"));
        assert!(table.contains("Income"));
        assert!(table.contains("N/A"));
        assert!(table.contains("+$100.00"));
        assert!(!table.contains("Coffee"));
    }

    #[test]
    fn table_shows_dates() {
        let table = render_transactions(&[coffee()], CategoryFilter::All);

        assert!(table.contains("2024-01-05"));
        assert!(table.contains("-$4.50"));
    }
}
