use thiserror::Error;

/// Failure of a single restaurant fetch.
///
/// The `Display` output of each variant is the message shown to the user; the
/// underlying cause is kept for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API key is missing. Please check your environment variables.")]
    MissingApiKey,
    #[error("Unexpected data format received from the API.")]
    UnexpectedFormat,
    #[error("{0}")]
    ServiceError(String),
    #[error("Failed to fetch restaurants. Please try again.")]
    ResponseError(reqwest::StatusCode),
    #[error("An error occurred while fetching restaurants. Please try again.")]
    RequestError(#[from] reqwest::Error),
    #[error("An error occurred while fetching restaurants. Please try again.")]
    ParseError(#[from] serde_json::Error),
}

/// Failure of a single location acquisition.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("Geolocation is not supported by your browser.")]
    Unsupported,
    #[error("Failed to get your location. Please try again.")]
    PositionUnavailable(String),
}

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid base url `{0}`: {1}")]
    InvalidBaseUrl(String, String),
    #[error("unable to build the http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read the file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("unable to parse the file: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("unable to write the file: {0}")]
    WriteError(#[from] std::io::Error),
    #[error("unable to serialize the data: {0}")]
    SerializeError(#[from] serde_json::Error),
}
