use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use ff_restaurants::{
    constants::{API_KEY_ENV, API_URL_ENV},
    util::default_http_client,
    ApiKey, Client, ClientConfig, Coordinates,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use tracing::info;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'k', long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,
    #[arg(short = 'u', long, env = API_URL_ENV)]
    api_url: String,
    #[arg(long, allow_hyphen_values = true)]
    latitude: f64,
    #[arg(long, allow_hyphen_values = true)]
    longitude: f64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();
    let client = Client::new(
        default_http_client()?,
        ClientConfig {
            base_url: args.api_url,
            api_key: ApiKey::from_optional(args.api_key.as_deref()),
        },
    )?;
    let coords = Coordinates::new(args.latitude, args.longitude);
    match client.get_restaurants(coords).await {
        Ok(restaurants) => {
            info!(count = restaurants.len(), "search finished");
            println!("{}", serde_json::to_string_pretty(&restaurants)?);
        }
        Err(e) => println!("{}", json!({ "error": e.to_string() })),
    }
    Ok(())
}
