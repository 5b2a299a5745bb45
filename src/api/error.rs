use thiserror::Error;

/// Failure classes for the Alpha Vantage endpoints.
///
/// All of these are non-fatal for the portfolio: the service layer logs them
/// and carries on with the previously cached data.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network problem reaching Alpha Vantage")]
    Network(#[source] reqwest::Error),

    #[error("received unexpected status code ({0}) from Alpha Vantage")]
    UnexpectedStatus(reqwest::StatusCode),

    /// The expected top-level key is absent from the response body. Alpha
    /// Vantage answers 200 with a notice object instead of data when the
    /// call-rate limit has been exceeded, which surfaces here.
    #[error("could not find the '{0}' key in the Alpha Vantage response")]
    MissingKey(&'static str),

    #[error("malformed Alpha Vantage response: {0}")]
    Malformed(String),
}
