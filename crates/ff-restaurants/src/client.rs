use reqwest::Url;

use crate::{
    error::{ClientInitError, FetchError},
    geolocation::Coordinates,
    restaurants::Restaurants,
    ApiKey,
};

/// Restaurant search client. The credential is fixed at construction.
#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    config: ClientConfig,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: ApiKey,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), ClientInitError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ClientInitError::InvalidBaseUrl(self.base_url.clone(), e.to_string())
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientInitError::InvalidBaseUrl(
                self.base_url.clone(),
                format!("unsupported scheme `{}`", url.scheme()),
            ));
        }
        Ok(())
    }
}

impl Client {
    /// An empty API key is accepted here; it is reported on the first fetch.
    pub fn new(http_client: reqwest::Client, config: ClientConfig) -> Result<Self, ClientInitError> {
        config.validate()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.config.api_key
    }

    /// Fails without touching the network when no credential is configured.
    pub fn ensure_api_key(&self) -> Result<(), FetchError> {
        if self.config.api_key.is_missing() {
            return Err(FetchError::MissingApiKey);
        }
        Ok(())
    }

    pub async fn get_restaurants(&self, coords: Coordinates) -> Result<Restaurants, FetchError> {
        Restaurants::get(
            &self.config.api_key,
            &self.http_client,
            &self.config.base_url,
            coords,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, key: &str) -> ClientConfig {
        ClientConfig {
            base_url: base_url.to_string(),
            api_key: ApiKey::from_raw(key),
        }
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let result = Client::new(reqwest::Client::new(), config("not a url", "k"));
        assert!(matches!(
            result.unwrap_err(),
            ClientInitError::InvalidBaseUrl(_, _)
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = Client::new(reqwest::Client::new(), config("ftp://search.test/", "k"));
        assert!(matches!(
            result.unwrap_err(),
            ClientInitError::InvalidBaseUrl(_, _)
        ));
    }

    #[test]
    fn missing_key_is_accepted_then_reported() {
        let client = Client::new(
            reqwest::Client::new(),
            config("https://search.test/restaurants", ""),
        )
        .unwrap();
        assert!(client.api_key().is_missing());
        assert!(matches!(
            client.ensure_api_key().unwrap_err(),
            FetchError::MissingApiKey
        ));
    }
}
