//! A CLI that logs in to the expense service and prints the dashboard
//! summary.

use std::{error::Error, process::exit};

use clap::Parser;
use time::OffsetDateTime;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use spendtrack::{
    api::RestClient,
    auth::{Credentials, log_in},
    config::{Config, DEFAULT_BASE_URL},
    dashboard::{ColorPolicy, DashboardData, TrendDirection},
    format::{format_currency, format_date},
    stores::{BudgetStore, ExpenseStore, SessionStore},
    validation::{validate_email, validate_password},
};

/// Print the spending dashboard for a user of the expense service.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the expense service.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// The email address to log in with.
    #[arg(long)]
    email: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    if let Err(error) = validate_email(&args.email) {
        eprintln!("{error}");
        exit(1);
    }

    let password = rpassword::prompt_password("Password: ")?;
    if let Err(error) = validate_password(&password) {
        eprintln!("{error}");
        exit(1);
    }

    let config = Config::new(args.base_url.as_str(), Config::default_data_dir());
    let client = RestClient::new(config.base_url.as_str());

    let credentials = Credentials {
        email: args.email,
        password,
    };
    let session = log_in(&client, &credentials).await?;

    let session_store = SessionStore::new(config.data_dir);
    if let Err(error) = session_store.save(&session) {
        tracing::warn!("could not persist session: {error}");
    }

    let mut expenses = ExpenseStore::new(client, session.token.clone());
    expenses.fetch().await?;

    // The budget collection is mocked client-side; see stores::BudgetStore.
    let budgets = BudgetStore::seeded();

    let today = OffsetDateTime::now_utc().date();
    let data = DashboardData::compute(
        expenses.expenses(),
        budgets.budgets(),
        today,
        ColorPolicy::default(),
    );

    println!("Hello, {}", session.user.email);
    println!("{}", format_date(today));
    println!();

    println!("Total spent:     {}", format_currency(data.statistics.total_spent));
    println!("Highest expense: {}", format_currency(data.statistics.highest));
    println!("Average expense: {}", format_currency(data.statistics.average));

    if let Some(alert) = &data.alert {
        println!();
        println!("Budget Alert: {alert}");
    }

    if !data.budget_progress.is_empty() {
        println!();
        println!("Budget progress:");
        for progress in &data.budget_progress {
            println!(
                "  {:<16} {} / {} ({}% used, {:?})",
                progress.category,
                format_currency(progress.current_amount),
                format_currency(progress.limit),
                progress.utilization.display_percentage(),
                progress.utilization.status,
            );
        }
    }

    if !data.breakdown.slices.is_empty() {
        println!();
        println!("Spending by category:");
        for slice in &data.breakdown.slices {
            println!("  {:<16} {}", slice.category, format_currency(slice.amount));
        }
    }

    println!();
    println!("Monthly spending:");
    for point in &data.trend.points {
        println!("  {:<4} {}", point.label, format_currency(point.total));
    }

    let direction = match data.trend.direction {
        TrendDirection::Increased => "increased",
        TrendDirection::Decreased => "decreased",
    };
    println!("Spending {direction} compared to last month.");

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::WARN),
        )
        .init();
}
