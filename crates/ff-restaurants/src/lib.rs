mod api_interfaces;
mod api_key;
pub mod app;
pub mod client;
pub mod constants;
pub mod error;
pub mod geolocation;
pub mod render;
pub mod restaurants;
pub mod state;
pub mod util;

pub use api_key::ApiKey;
pub use app::App;
pub use client::{Client, ClientConfig};
pub use geolocation::{Coordinates, Locator};
pub use restaurants::{Address, Restaurant, Restaurants};
pub use state::{UiState, View};
