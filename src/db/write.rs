use anyhow::Result;
use sqlx::{Pool, Sqlite};

use crate::models::Stock;

pub async fn insert_stock(stock: &Stock, connection: &Pool<Sqlite>) -> Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO stocks
        (stock_symbol, number_of_shares, purchase_price, user_id, purchase_date,
         current_price, current_price_date, position_value)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(stock.symbol())
    .bind(stock.number_of_shares())
    .bind(stock.purchase_price())
    .bind(stock.user_id())
    .bind(stock.purchase_date())
    .bind(stock.current_price())
    .bind(stock.current_price_date())
    .bind(stock.position_value())
    .execute(connection)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Writes the cached market-data triple in a single statement, so the row
/// never holds a price without its matching timestamp and position value.
pub async fn update_market_data(stock: &Stock, connection: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE stocks
        SET current_price = ?, current_price_date = ?, position_value = ?
        WHERE id = ?
        "#,
    )
    .bind(stock.current_price())
    .bind(stock.current_price_date())
    .bind(stock.position_value())
    .bind(stock.id())
    .execute(connection)
    .await?;

    Ok(())
}
