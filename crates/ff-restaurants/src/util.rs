use reqwest::Client;

use crate::error::ClientInitError;

/// Build the HTTP client shared by the locator and the restaurant client.
pub fn default_http_client() -> Result<Client, ClientInitError> {
    Client::builder()
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(ClientInitError::HttpClient)
}
