use reqwest::Client;
use serde_json::Value;

use super::error::ApiError;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    params: &str,
) -> Result<Value, ApiError> {
    let url = format!("{}/query?{}", base_url, params);

    // A send error means no response object exists at all; return before
    // anything tries to read a status code off of it.
    let res = client.get(&url).send().await.map_err(ApiError::Network)?;

    let status = res.status();
    if !status.is_success() {
        return Err(ApiError::UnexpectedStatus(status));
    }

    let text = res.text().await.map_err(ApiError::Network)?;
    serde_json::from_str::<Value>(&text).map_err(|err| ApiError::Malformed(err.to_string()))
}

pub fn extract_key(data: &Value, key: &'static str) -> Result<Value, ApiError> {
    data.get(key).cloned().ok_or(ApiError::MissingKey(key))
}
