use serde::Deserialize;

/// Raw response from an ip-api.com style geolocation service.
#[derive(Deserialize)]
pub struct Response {
    pub status: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}
