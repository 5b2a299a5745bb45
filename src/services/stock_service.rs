use chrono::{Local, NaiveDate};
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::{debug, error, warn};

use crate::{
    api::{ApiError, av},
    models::{Stock, WeeklyChart},
};

/// Fetches market data from Alpha Vantage and applies it to holdings.
///
/// Every API failure is logged and degrades to "no update" (for quotes) or
/// the unavailable sentinel (for charts); nothing here propagates an error
/// to the caller.
pub struct StockService {
    client: Client,
    api_key: String,
}

impl StockService {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Refreshes the holding's cached price if it has none yet or the cached
    /// one is from an earlier calendar day. Returns whether the cached data
    /// changed, so the caller knows whether to persist the row.
    pub async fn refresh_stock(&self, stock: &mut Stock) -> bool {
        if !stock.needs_refresh(Local::now().date_naive()) {
            return false;
        }

        let price = match av::get_quote(stock.symbol(), &self.client, &self.api_key).await {
            Ok(quote) => match quote.price().parse::<Decimal>() {
                Ok(price) => price,
                Err(err) => {
                    warn!(
                        symbol = %stock.symbol(),
                        %err,
                        "could not parse the quoted price"
                    );
                    return false;
                }
            },
            Err(err) => {
                log_api_error(&err, stock.symbol(), "daily");
                return false;
            }
        };

        let updated = stock.apply_quote(price, Local::now());
        if updated {
            debug!(
                symbol = %stock.symbol(),
                price = %price,
                "retrieved the current stock price"
            );
        }

        updated
    }

    /// Builds the weekly price chart for the holding's detail view.
    pub async fn weekly_chart(&self, stock: &Stock) -> WeeklyChart {
        let series =
            match av::get_weekly_series(stock.symbol(), &self.client, &self.api_key).await {
                Ok(series) => series,
                Err(err) => {
                    log_api_error(&err, stock.symbol(), "weekly");
                    return WeeklyChart::unavailable();
                }
            };

        let closes: Vec<(NaiveDate, String)> = series
            .into_iter()
            .map(|(date, bar)| (date, bar.close().clone()))
            .collect();

        WeeklyChart::build(
            stock.symbol(),
            stock.purchase_date().map(|purchased| purchased.date()),
            Local::now().date_naive(),
            &closes,
        )
    }
}

fn log_api_error(err: &ApiError, symbol: &str, kind: &str) {
    match err {
        ApiError::Network(_) => {
            error!(symbol, %err, "network problem retrieving the {} stock data", kind);
        }
        _ => {
            warn!(symbol, %err, "could not retrieve the {} stock data", kind);
        }
    }
}
