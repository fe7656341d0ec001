//! Device location.
//!
//! A [`Locator`] is the platform capability that answers "where am I". The
//! app holds an `Option<L>`; `None` means the capability is not available at
//! all, which is reported differently from a locator that fails.

use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span, warn, Instrument};

use crate::{api_interfaces::geolocation, constants::DEFAULT_GEOLOCATION_URL, error::LocateError};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Source of the current position. One call is one attempt; implementations
/// must not retry on their own.
pub trait Locator {
    fn current_position(&self) -> impl Future<Output = Result<Coordinates, LocateError>> + Send;
}

/// Resolve the position once, mapping an absent capability to
/// [`LocateError::Unsupported`].
pub async fn locate<L: Locator>(locator: Option<&L>) -> Result<Coordinates, LocateError> {
    let Some(locator) = locator else {
        warn!("no geolocation capability configured");
        return Err(LocateError::Unsupported);
    };
    let span = info_span!("geolocation.lookup");
    async move {
        let result = locator.current_position().await;
        match &result {
            Ok(coords) => debug!(
                latitude = coords.latitude,
                longitude = coords.longitude,
                "position acquired"
            ),
            Err(LocateError::PositionUnavailable(reason)) => {
                warn!(reason = %reason, "position unavailable")
            }
            Err(e) => warn!(error = %e, "position unavailable"),
        }
        result
    }
    .instrument(span)
    .await
}

/// Always answers with the coordinates it was given.
#[derive(Clone, Copy, Debug)]
pub struct FixedLocator {
    coords: Coordinates,
}

impl FixedLocator {
    pub fn new(coords: Coordinates) -> Self {
        Self { coords }
    }
}

impl Locator for FixedLocator {
    async fn current_position(&self) -> Result<Coordinates, LocateError> {
        Ok(self.coords)
    }
}

/// Approximate position from the caller's public IP address, using an
/// ip-api.com compatible endpoint.
#[derive(Clone, Debug)]
pub struct IpLocator {
    client: Client,
    endpoint: String,
}

impl IpLocator {
    /// If the endpoint is not provided, the public ip-api.com service is used.
    pub fn new(client: Client, endpoint: Option<&str>) -> Self {
        Self {
            client,
            endpoint: endpoint.unwrap_or(DEFAULT_GEOLOCATION_URL).to_owned(),
        }
    }

    async fn lookup(&self) -> Result<geolocation::Response, String> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("geolocation service returned {}", response.status()));
        }
        let body = response.text().await.map_err(|e| e.to_string())?;
        serde_json::from_str(&body).map_err(|e| e.to_string())
    }
}

impl Locator for IpLocator {
    async fn current_position(&self) -> Result<Coordinates, LocateError> {
        let response = self.lookup().await.map_err(LocateError::PositionUnavailable)?;
        if response.status != "success" {
            return Err(LocateError::PositionUnavailable(
                response
                    .message
                    .unwrap_or_else(|| format!("lookup status `{}`", response.status)),
            ));
        }
        match (response.lat, response.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates::new(latitude, longitude)),
            _ => Err(LocateError::PositionUnavailable(
                "lookup returned no coordinates".to_string(),
            )),
        }
    }
}

/// The locators the binaries can be configured with.
#[derive(Clone, Debug)]
pub enum DeviceLocator {
    Fixed(FixedLocator),
    Ip(IpLocator),
}

impl Locator for DeviceLocator {
    async fn current_position(&self) -> Result<Coordinates, LocateError> {
        match self {
            DeviceLocator::Fixed(locator) => locator.current_position().await,
            DeviceLocator::Ip(locator) => locator.current_position().await,
        }
    }
}
