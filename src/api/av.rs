use std::collections::BTreeMap;

use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;

use super::{
    av_dto::{AvGlobalQuoteDto, AvWeeklyBarDto},
    error::ApiError,
    utils::{extract_key, make_request},
};

const BASE_URL: &str = "https://www.alphavantage.co";

/// Fetches the current Global Quote for a symbol.
pub async fn get_quote(
    symbol: &str,
    client: &Client,
    api_key: &str,
) -> Result<AvGlobalQuoteDto, ApiError> {
    let params = format!("function=GLOBAL_QUOTE&symbol={}&apikey={}", symbol, api_key);
    let res = make_request(client, BASE_URL, &params).await?;

    parse_quote(&res)
}

/// Fetches the weekly adjusted time series for a symbol, ordered latest to
/// earliest.
pub async fn get_weekly_series(
    symbol: &str,
    client: &Client,
    api_key: &str,
) -> Result<Vec<(NaiveDate, AvWeeklyBarDto)>, ApiError> {
    let params = format!(
        "function=TIME_SERIES_WEEKLY_ADJUSTED&symbol={}&apikey={}",
        symbol, api_key
    );
    let res = make_request(client, BASE_URL, &params).await?;

    parse_weekly_series(&res)
}

pub fn parse_quote(data: &Value) -> Result<AvGlobalQuoteDto, ApiError> {
    let global_quote = extract_key(data, "Global Quote")?;

    serde_json::from_value(global_quote).map_err(|err| ApiError::Malformed(err.to_string()))
}

pub fn parse_weekly_series(data: &Value) -> Result<Vec<(NaiveDate, AvWeeklyBarDto)>, ApiError> {
    let series = extract_key(data, "Weekly Adjusted Time Series")?;

    // JSON object order is not guaranteed to survive deserialization, so the
    // provider's latest-to-earliest ordering is reestablished explicitly.
    let bars: BTreeMap<NaiveDate, AvWeeklyBarDto> =
        serde_json::from_value(series).map_err(|err| ApiError::Malformed(err.to_string()))?;

    Ok(bars.into_iter().rev().collect())
}
