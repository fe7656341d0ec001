//! The locate-then-search workflow.
//!
//! Acquisition runs on the caller's task. A successful acquisition stores the
//! coordinates and publishes [`Event::CoordinatesSet`]; a single fetcher task
//! consumes those events in order and runs one search per event. All state
//! lives in a `watch` channel so renderers see every transition.

use std::sync::Arc;

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::{
    client::Client,
    error::LocateError,
    geolocation::{self, Coordinates, Locator},
    state::UiState,
};

#[derive(Debug)]
pub enum Event {
    CoordinatesSet(Coordinates),
    /// Answered once every earlier event has been handled.
    Flush(oneshot::Sender<()>),
}

pub struct App<L> {
    locator: Option<L>,
    state: Arc<watch::Sender<UiState>>,
    events: mpsc::UnboundedSender<Event>,
    fetcher: JoinHandle<()>,
    mounted: bool,
}

impl<L: Locator> App<L> {
    /// Spawns the fetcher task, so this must run inside a tokio runtime.
    /// `locator: None` means the platform has no geolocation capability.
    pub fn new(client: Client, locator: Option<L>) -> Self {
        let (state, _) = watch::channel(UiState::default());
        let state = Arc::new(state);
        let (events, receiver) = mpsc::unbounded_channel();
        let fetcher = RestaurantFetcher {
            client,
            state: Arc::clone(&state),
        };
        Self {
            locator,
            state,
            events,
            fetcher: tokio::spawn(fetcher.run(receiver)),
            mounted: false,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// First activation. Acquires the location once; later calls do nothing.
    pub async fn mount(&mut self) -> Option<Result<Coordinates, LocateError>> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.acquire().await)
    }

    /// The "Get My Location" action. Ignored while the control is hidden.
    pub async fn request_location(&self) -> Option<Result<Coordinates, LocateError>> {
        if !self.state.borrow().location_prompt_visible() {
            debug!("location requested while the prompt is hidden; ignoring");
            return None;
        }
        Some(self.acquire().await)
    }

    /// One acquisition attempt. On success the error is cleared, the
    /// coordinates are stored and a search is queued.
    pub async fn acquire(&self) -> Result<Coordinates, LocateError> {
        match geolocation::locate(self.locator.as_ref()).await {
            Ok(coords) => {
                self.state.send_modify(|state| {
                    state.error = None;
                    state.location = Some(coords);
                });
                if self.events.send(Event::CoordinatesSet(coords)).is_err() {
                    warn!("restaurant fetcher has stopped; search not queued");
                }
                Ok(coords)
            }
            Err(e) => {
                self.state
                    .send_modify(|state| state.error = Some(e.to_string()));
                Err(e)
            }
        }
    }

    /// Wait until every queued search has finished.
    pub async fn settled(&self) {
        let (done, finished) = oneshot::channel();
        if self.events.send(Event::Flush(done)).is_ok() {
            let _ = finished.await;
        }
    }

    /// Stop accepting events and wait for the fetcher to drain.
    pub async fn shutdown(self) -> UiState {
        let Self {
            state,
            events,
            fetcher,
            ..
        } = self;
        drop(events);
        if let Err(e) = fetcher.await {
            warn!(error = %e, "restaurant fetcher ended abnormally");
        }
        let snapshot = state.borrow().clone();
        snapshot
    }
}

struct RestaurantFetcher {
    client: Client,
    state: Arc<watch::Sender<UiState>>,
}

impl RestaurantFetcher {
    async fn run(self, mut events: mpsc::UnboundedReceiver<Event>) {
        while let Some(event) = events.recv().await {
            match event {
                Event::CoordinatesSet(coords) => self.fetch(coords).await,
                Event::Flush(done) => {
                    let _ = done.send(());
                }
            }
        }
        debug!("event channel closed; fetcher exiting");
    }

    async fn fetch(&self, coords: Coordinates) {
        if let Err(e) = self.client.ensure_api_key() {
            warn!("no API key configured; skipping search");
            self.state
                .send_modify(|state| state.error = Some(e.to_string()));
            return;
        }
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
        let _loading = LoadingGuard(&self.state);
        let span = info_span!(
            "restaurants.search",
            latitude = coords.latitude,
            longitude = coords.longitude
        );
        let result = self.client.get_restaurants(coords).instrument(span).await;
        self.state.send_modify(|state| {
            match result {
                Ok(restaurants) => {
                    info!(count = restaurants.len(), "restaurants loaded");
                    state.restaurants = restaurants;
                }
                Err(e) => state.error = Some(e.to_string()),
            }
            state.is_loading = false;
        });
    }
}

/// Clears `is_loading` on every exit from a search, including unwinding.
struct LoadingGuard<'a>(&'a watch::Sender<UiState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0
            .send_if_modified(|state| std::mem::replace(&mut state.is_loading, false));
    }
}
