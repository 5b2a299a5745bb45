use sqlx::sqlite::SqliteQueryResult;

pub async fn create_stocks(
    connection: &sqlx::Pool<sqlx::Sqlite>,
) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stocks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            stock_symbol TEXT NOT NULL,
            number_of_shares INTEGER NOT NULL,
            purchase_price INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            purchase_date DATETIME,
            current_price INTEGER NOT NULL DEFAULT 0,
            current_price_date DATETIME,
            position_value INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(connection)
    .await
}
