use std::{path::PathBuf, process::ExitCode, time::Duration};

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use ff_restaurants::{
    constants::{API_KEY_ENV, API_URL_ENV, GEOLOCATION_URL_ENV},
    geolocation::{DeviceLocator, FixedLocator, IpLocator},
    render::{render, LOADING_MESSAGE},
    util::default_http_client,
    ApiKey, App, Client, ClientConfig, Coordinates, UiState,
};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::watch;
use tokio_stream::{wrappers::WatchStream, StreamExt};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Find restaurants near your current location")]
struct Args {
    #[arg(
        short = 'k',
        long,
        env = API_KEY_ENV,
        hide_env_values = true,
        help = "API key for the restaurant search service"
    )]
    api_key: Option<String>,

    #[arg(short = 'u', long, env = API_URL_ENV, help = "Restaurant search endpoint")]
    api_url: String,

    #[arg(
        short = 'g',
        long,
        env = GEOLOCATION_URL_ENV,
        help = "IP geolocation endpoint. Defaults to ip-api.com."
    )]
    geo_url: Option<String>,

    #[arg(
        long,
        requires = "longitude",
        allow_hyphen_values = true,
        help = "Use this latitude instead of looking up the location"
    )]
    latitude: Option<f64>,

    #[arg(
        long,
        requires = "latitude",
        allow_hyphen_values = true,
        help = "Use this longitude instead of looking up the location"
    )]
    longitude: Option<f64>,

    #[arg(
        long,
        conflicts_with_all = ["latitude", "longitude", "geo_url"],
        help = "Run without any geolocation capability"
    )]
    no_geolocation: bool,

    #[arg(long, help = "Print the final state as JSON")]
    json: bool,

    #[arg(short = 'o', long, help = "Save the restaurant list to this file")]
    output: Option<PathBuf>,

    #[arg(short = 'w', long, default_value_t = 100, help = "Terminal width for the grid")]
    width: usize,
}

impl Args {
    fn locator(&self, http: reqwest::Client) -> Option<DeviceLocator> {
        if self.no_geolocation {
            return None;
        }
        Some(match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                DeviceLocator::Fixed(FixedLocator::new(Coordinates::new(latitude, longitude)))
            }
            _ => DeviceLocator::Ip(IpLocator::new(http, self.geo_url.as_deref())),
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let http = default_http_client()?;
    let client = Client::new(
        http.clone(),
        ClientConfig {
            base_url: args.api_url.clone(),
            api_key: ApiKey::from_optional(args.api_key.as_deref()),
        },
    )?;
    let mut app = App::new(client, args.locator(http));
    let spinner = (!args.json).then(|| tokio::spawn(show_loading(app.subscribe())));

    app.mount().await;
    app.settled().await;
    let state = app.shutdown().await;
    if let Some(spinner) = spinner {
        spinner.await??;
    }

    if let Some(path) = &args.output {
        state.restaurants.save(path).await?;
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", render(&state, args.width));
    }

    Ok(if state.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Spin while a search is in flight. Ends when the app shuts down.
async fn show_loading(states: watch::Receiver<UiState>) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    let mut states = WatchStream::new(states);
    let mut loading = false;
    while let Some(state) = states.next().await {
        match (loading, state.is_loading) {
            (false, true) => {
                spinner.set_message(LOADING_MESSAGE);
                spinner.enable_steady_tick(Duration::from_millis(100));
            }
            (true, false) => {
                spinner.disable_steady_tick();
                spinner.finish_and_clear();
            }
            _ => {}
        }
        loading = state.is_loading;
    }
    if loading {
        spinner.finish_and_clear();
    }
    Ok(())
}
