use crate::{
    api_interfaces::restaurants, constants::*, error::*, geolocation::Coordinates, ApiKey,
};

use reqwest::{Client, StatusCode};
use serde::{self, Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// A single search result.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Restaurant {
    pub name: String,
    pub address: Address,
    pub photos: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

impl Restaurant {
    pub fn first_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

impl Address {
    /// `street, city, state zipcode`, skipping whatever the service left out.
    pub fn formatted(&self) -> String {
        let region = [self.state.as_str(), self.zipcode.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        [self.street.as_str(), self.city.as_str(), region.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<restaurants::Restaurant> for Restaurant {
    fn from(raw: restaurants::Restaurant) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            address: raw.address.map(Address::from).unwrap_or_default(),
            photos: raw.photos.unwrap_or_default(),
        }
    }
}

impl From<restaurants::Address> for Address {
    fn from(raw: restaurants::Address) -> Self {
        Self {
            street: raw.street.unwrap_or_default(),
            city: raw.city.unwrap_or_default(),
            state: raw.state.unwrap_or_default(),
            zipcode: raw.zipcode.unwrap_or_default(),
        }
    }
}

/// Ordered search results, as returned by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Restaurants(Vec<Restaurant>);

impl Restaurants {
    /// Search for restaurants near `coords`.
    ///
    /// Sends `GET <base_url>?apiKey=..&lat=..&lng=..`. An empty key fails
    /// before any request is made.
    pub async fn get(
        key: &ApiKey,
        client: &Client,
        base_url: &str,
        coords: Coordinates,
    ) -> Result<Self, FetchError> {
        if key.is_missing() {
            return Err(FetchError::MissingApiKey);
        }
        debug!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            "searching restaurants"
        );
        let response = client
            .get(base_url)
            .query(&[(API_KEY_PARAM, key.get())])
            .query(&[
                (LATITUDE_PARAM, coords.latitude),
                (LONGITUDE_PARAM, coords.longitude),
            ])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(service_error(status, &body));
        }
        let value: serde_json::Value = serde_json::from_str(&body)?;
        let parsed: restaurants::Response = serde_json::from_value(value).map_err(|e| {
            warn!(error = %e, "search response has no usable restaurant list");
            FetchError::UnexpectedFormat
        })?;
        Ok(Self(
            parsed
                .restaurants
                .into_iter()
                .map(|record| Restaurant::from(restaurants::Restaurant::from_value(record)))
                .collect(),
        ))
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file_contents = tokio::fs::read_to_string(path).await?;
        Ok(Self(serde_json::from_str(file_contents.as_str())?))
    }

    pub async fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let serialized = serde_json::to_string_pretty(&self.0)?;
        tokio::fs::write(path, serialized).await?;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Restaurant>> for Restaurants {
    fn from(restaurants: Vec<Restaurant>) -> Self {
        Self(restaurants)
    }
}

impl IntoIterator for Restaurants {
    type Item = Restaurant;
    type IntoIter = std::vec::IntoIter<Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Restaurants {
    type Item = &'a Restaurant;
    type IntoIter = std::slice::Iter<'a, Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn service_error(status: StatusCode, body: &str) -> FetchError {
    let message = serde_json::from_str::<restaurants::ErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.message);
    warn!(%status, message = ?message, "search service returned an error status");
    match message {
        Some(message) => FetchError::ServiceError(message),
        None => FetchError::ResponseError(status),
    }
}
