pub mod geolocation;
pub mod restaurants;
