use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker::{
    TransactionId,
    client::{
        CategoryFilter, DEFAULT_API_URL, DeleteOutcome, HttpTransactionApi, SubmitOutcome,
        TerminalNotifier, TrackerApp, TransactionForm, render_summary, render_transactions,
    },
    transaction::Category,
};

/// Record income and expenses and see your balance.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The URL of the transaction API.
    #[arg(long, env = "TRACKER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// The canonical name of your timezone, used to fill in today's date.
    #[arg(long, env = "TRACKER_TIMEZONE", default_value = "Etc/UTC")]
    timezone: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the transactions in a table.
    List {
        /// Which transactions to show: all, income or expense.
        #[arg(long, default_value = "all")]
        filter: CategoryFilter,
    },
    /// Record a new transaction.
    Add {
        /// What the transaction was for.
        #[arg(long)]
        description: String,
        /// How much money, e.g. 4.50.
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Either income or expense.
        #[arg(long, default_value = "expense")]
        category: Category,
        /// When it happened as YYYY-MM-DD, defaults to today.
        #[arg(long, default_value = "")]
        date: String,
    },
    /// Delete a transaction.
    Delete {
        /// The ID of the transaction, as shown by `list`.
        id: TransactionId,
        /// Do not ask for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the balance, total income and total expenses.
    Summary,
}

fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging();

    let notifier = match args.command {
        Command::Delete { yes: true, .. } => TerminalNotifier::assume_yes(),
        _ => TerminalNotifier::new(),
    };

    let mut app = match TrackerApp::new(
        HttpTransactionApi::new(&args.api_url),
        notifier,
        &args.timezone,
    ) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    app.load();

    match args.command {
        Command::List { filter } => {
            app.filter = filter;
            print!("{}", render_transactions(app.transactions(), app.filter));
        }
        Command::Add {
            description,
            amount,
            category,
            date,
        } => {
            app.form = TransactionForm {
                description,
                amount,
                category,
                date,
            };

            match app.submit() {
                SubmitOutcome::Created(transaction) => {
                    println!("Added transaction {}.", transaction.id);
                    print!("{}", render_summary(app.totals()));
                }
                SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_) => return ExitCode::FAILURE,
            }
        }
        Command::Delete { id, .. } => match app.delete(id) {
            DeleteOutcome::Deleted => {
                println!("Deleted transaction {id}.");
                print!("{}", render_summary(app.totals()));
            }
            DeleteOutcome::AlreadyGone => println!("Transaction {id} was already deleted."),
            DeleteOutcome::Cancelled => println!("Nothing was deleted."),
            DeleteOutcome::Failed(_) => return ExitCode::FAILURE,
        },
        Command::Summary => print!("{}", render_summary(app.totals())),
    }

    ExitCode::SUCCESS
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                ),
        )
        .init();
}
