/// The default endpoint for IP-based geolocation
pub const DEFAULT_GEOLOCATION_URL: &str = "http://ip-api.com/json/";

/// Query parameter names understood by the restaurant search service
pub const API_KEY_PARAM: &str = "apiKey";
pub const LATITUDE_PARAM: &str = "lat";
pub const LONGITUDE_PARAM: &str = "lng";

/// Environment variables read by the binaries
pub const API_KEY_ENV: &str = "FORKFINDER_API_KEY";
pub const API_URL_ENV: &str = "FORKFINDER_API_URL";
pub const GEOLOCATION_URL_ENV: &str = "FORKFINDER_GEO_URL";
