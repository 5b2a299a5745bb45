use anyhow::Result;
use chrono::{DateTime, Local, NaiveDateTime};
use sqlx::{Pool, Row, Sqlite, sqlite::SqliteRow};

use crate::models::{MarketData, Stock};

fn stock_from_row(row: &SqliteRow) -> Stock {
    let current_price_date = row.get::<Option<DateTime<Local>>, _>("current_price_date");

    // The triple is hydrated back into one value; a row that has never been
    // refreshed has a NULL date and carries no market data at all.
    let market_data = current_price_date.map(|retrieved_at| {
        MarketData::new(
            row.get::<i64, _>("current_price"),
            retrieved_at,
            row.get::<i64, _>("position_value"),
        )
    });

    Stock::new(
        Some(row.get::<i64, _>("id")),
        row.get::<String, _>("stock_symbol"),
        row.get::<i64, _>("number_of_shares"),
        row.get::<i64, _>("purchase_price"),
        row.get::<i64, _>("user_id"),
        row.get::<Option<NaiveDateTime>, _>("purchase_date"),
        market_data,
    )
}

/// All holdings owned by a user, ordered by id ascending. The list view
/// refreshes them in this order.
pub async fn stocks_for_user(connection: &Pool<Sqlite>, user_id: i64) -> Result<Vec<Stock>> {
    let rows = sqlx::query(
        r#"
        SELECT id, stock_symbol, number_of_shares, purchase_price, user_id,
               purchase_date, current_price, current_price_date, position_value
        FROM stocks
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(connection)
    .await?;

    Ok(rows.iter().map(stock_from_row).collect())
}

pub async fn stock_by_id(connection: &Pool<Sqlite>, id: i64) -> Result<Option<Stock>> {
    let row = sqlx::query(
        r#"
        SELECT id, stock_symbol, number_of_shares, purchase_price, user_id,
               purchase_date, current_price, current_price_date, position_value
        FROM stocks
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(connection)
    .await?;

    Ok(row.as_ref().map(stock_from_row))
}
