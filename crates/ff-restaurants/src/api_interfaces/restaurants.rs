use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Only the fields rendered by the app are modelled; everything else in the
// service response is ignored. Record fields are decoded leniently so one odd
// value never costs the whole list.

/// Raw success response from the search service.
#[derive(Deserialize)]
pub struct Response {
    pub restaurants: Vec<Value>,
}

/// Raw restaurant record from the search service.
#[derive(Default, Deserialize)]
pub struct Restaurant {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_address")]
    pub address: Option<Address>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub photos: Option<Vec<String>>,
}

/// Raw address from the search service.
#[derive(Default, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "lenient_string")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub zipcode: Option<String>,
}

impl Restaurant {
    /// Anything that is not an object becomes an empty record.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Raw failure response. The service may omit the message or send no JSON at all.
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

fn as_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(as_text(Value::deserialize(deserializer)?))
}

fn lenient_strings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().filter_map(as_text).collect()),
        _ => None,
    })
}

fn lenient_address<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Address>, D::Error> {
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}
