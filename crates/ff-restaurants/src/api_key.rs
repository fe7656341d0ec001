/// Credential for the restaurant search service.
///
/// Treated as opaque. An empty key is representable so that a missing
/// environment variable surfaces as a fetch error rather than a startup crash.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    /// From a raw API key string.
    pub fn from_raw(key: &str) -> Self {
        Self {
            key: key.trim().to_owned(),
        }
    }

    /// From an optional value, e.g. an unset environment variable.
    pub fn from_optional(key: Option<&str>) -> Self {
        key.map(Self::from_raw).unwrap_or_default()
    }

    pub fn get(&self) -> &str {
        &self.key
    }

    pub fn is_missing(&self) -> bool {
        self.key.is_empty()
    }
}
