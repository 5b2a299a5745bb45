use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Converts a dollar amount to integer cents, truncating toward zero.
///
/// Prices are stored as integer cents ($24.10 -> 2410, $100.00 -> 10000), a
/// carryover from SQLite's limited set of column types.
pub fn dollars_to_cents(amount: Decimal) -> i64 {
    (amount * Decimal::ONE_HUNDRED).trunc().to_i64().unwrap_or(0)
}

/// The cached market data for a holding: current price in cents, when it was
/// retrieved from Alpha Vantage, and the derived position value in cents.
///
/// The three fields are only ever replaced together as one value, so a reader
/// can never observe a price without its matching timestamp and value.
#[derive(Clone, Copy, Debug, Getters, PartialEq, new)]
pub struct MarketData {
    current_price: i64,
    retrieved_at: DateTime<Local>,
    position_value: i64,
}

/// A purchased stock in a user's portfolio.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct Stock {
    id: Option<i64>,
    symbol: String,
    number_of_shares: i64,
    /// Purchase price per share in cents.
    purchase_price: i64,
    user_id: i64,
    purchase_date: Option<NaiveDateTime>,
    market_data: Option<MarketData>,
}

impl Stock {
    /// Creates a new holding from a per-share purchase price in dollars.
    pub fn buy(
        symbol: String,
        number_of_shares: i64,
        purchase_price: Decimal,
        user_id: i64,
        purchase_date: Option<NaiveDateTime>,
    ) -> Self {
        Self::new(
            None,
            symbol,
            number_of_shares,
            dollars_to_cents(purchase_price),
            user_id,
            purchase_date,
            None,
        )
    }

    /// Current price in cents; 0 until the first successful refresh.
    pub fn current_price(&self) -> i64 {
        self.market_data.map(|m| *m.current_price()).unwrap_or(0)
    }

    /// When the current price was retrieved; `None` until the first
    /// successful refresh.
    pub fn current_price_date(&self) -> Option<DateTime<Local>> {
        self.market_data.map(|m| *m.retrieved_at())
    }

    /// Position value (current price * number of shares) in cents; 0 until
    /// the first successful refresh.
    pub fn position_value(&self) -> i64 {
        self.market_data.map(|m| *m.position_value()).unwrap_or(0)
    }

    pub fn position_value_dollars(&self) -> Decimal {
        Decimal::new(self.position_value(), 2)
    }

    pub fn purchase_price_dollars(&self) -> Decimal {
        Decimal::new(self.purchase_price, 2)
    }

    /// A quote is fetched at most once per holding per calendar day: refresh
    /// only when there is no cached price yet or the cached one is from an
    /// earlier day.
    pub fn needs_refresh(&self, today: NaiveDate) -> bool {
        match self.market_data {
            Some(market_data) => market_data.retrieved_at().date_naive() != today,
            None => true,
        }
    }

    /// Applies a freshly quoted dollar price, replacing the cached market
    /// data as a single unit. A price of zero means the provider had no data;
    /// it leaves the previous state untouched and returns false.
    pub fn apply_quote(&mut self, price: Decimal, now: DateTime<Local>) -> bool {
        if price <= Decimal::ZERO {
            return false;
        }

        let current_price = dollars_to_cents(price);
        self.market_data = Some(MarketData::new(
            current_price,
            now,
            current_price * self.number_of_shares,
        ));

        true
    }
}
