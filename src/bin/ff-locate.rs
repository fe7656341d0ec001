use clap::Parser;
use dotenv::dotenv;
use ff_restaurants::{
    constants::GEOLOCATION_URL_ENV,
    geolocation::{locate, IpLocator},
    util::default_http_client,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(
        short = 'g',
        long,
        env = GEOLOCATION_URL_ENV,
        help = "IP geolocation endpoint. Defaults to ip-api.com."
    )]
    geo_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();
    let locator = IpLocator::new(default_http_client()?, args.geo_url.as_deref());
    match locate(Some(&locator)).await {
        Ok(coords) => println!("{}", json!(coords)),
        Err(e) => println!("{}", json!({ "error": e.to_string() })),
    }
    Ok(())
}
