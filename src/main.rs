use std::env;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use stock_portfolio::{
    db::{init, read, write},
    models::Stock,
    services::StockService,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stock-portfolio", about = "Track a portfolio of purchased stocks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a purchased stock to the portfolio
    Add {
        symbol: String,
        number_of_shares: i64,
        /// Purchase price per share in dollars
        purchase_price: Decimal,
        #[arg(long, default_value_t = 1)]
        user: i64,
        /// Purchase date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List all holdings, refreshing each price at most once per day
    List {
        #[arg(long, default_value_t = 1)]
        user: i64,
    },
    /// Show the weekly price chart for a holding
    Details { id: i64 },
    /// Create a default set of three stocks
    Seed {
        #[arg(long, default_value_t = 1)]
        user: i64,
    },
}

/// Symbols are 1-5 alphabetic characters, stored uppercased.
fn normalize_symbol(symbol: &str) -> Result<String> {
    if symbol.is_empty() || symbol.len() > 5 || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("stock symbol must be 1-5 alphabetic characters: '{}'", symbol);
    }

    Ok(symbol.to_ascii_uppercase())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let db_connect_options = SqliteConnectOptions::new()
        .filename("portfolio.db")
        .create_if_missing(true);
    let connection = SqlitePool::connect_with(db_connect_options).await?;
    init::create_stocks(&connection).await?;

    let api_key = env::var("ALPHA_VANTAGE_API_KEY").expect("Missing API key");
    let service = StockService::new(api_key);

    match cli.command {
        Command::Add {
            symbol,
            number_of_shares,
            purchase_price,
            user,
            date,
        } => {
            let symbol = normalize_symbol(&symbol)?;
            let purchase_date = date.and_then(|d| d.and_hms_opt(0, 0, 0));
            let stock = Stock::buy(symbol, number_of_shares, purchase_price, user, purchase_date);
            let id = write::insert_stock(&stock, &connection).await?;
            info!(id, symbol = %stock.symbol(), "added new stock");
        }
        Command::List { user } => {
            let mut account_value = dec!(0);
            let stocks = read::stocks_for_user(&connection, user).await?;

            println!(
                "{:<4} {:<7} {:>8} {:>12} {:>12} {:>14}",
                "ID", "SYMBOL", "SHARES", "PURCHASE", "CURRENT", "VALUE"
            );
            for mut stock in stocks {
                if service.refresh_stock(&mut stock).await {
                    write::update_market_data(&stock, &connection).await?;
                }

                account_value += stock.position_value_dollars();
                println!(
                    "{:<4} {:<7} {:>8} {:>12} {:>12} {:>14}",
                    stock.id().unwrap_or(0),
                    stock.symbol(),
                    stock.number_of_shares(),
                    stock.purchase_price_dollars(),
                    Decimal::new(stock.current_price(), 2),
                    stock.position_value_dollars(),
                );
            }
            println!("Account value: ${}", account_value.round_dp(2));
        }
        Command::Details { id } => {
            let Some(stock) = read::stock_by_id(&connection, id).await? else {
                bail!("no stock with id {}", id);
            };

            let chart = service.weekly_chart(&stock).await;
            println!("{}", chart.title());
            for (label, value) in chart.labels().iter().zip(chart.values()) {
                println!("{}  {}", label, value);
            }
        }
        Command::Seed { user } => {
            let defaults = [
                ("HD", 25, dec!(247.29)),
                ("TWTR", 230, dec!(31.89)),
                ("DIS", 65, dec!(118.77)),
            ];
            for (symbol, shares, price) in defaults {
                let stock = Stock::buy(symbol.to_string(), shares, price, user, None);
                write::insert_stock(&stock, &connection).await?;
            }
            info!(user, "created the default set of stocks");
        }
    }

    Ok(())
}
