//! Booth directory view-model
//!
//! Live public view over the booth list: refreshes on a fixed interval,
//! exposes snapshots to the presentation layer, and issues booking
//! requests single-flight per booth number.

use crate::poller::{DEFAULT_POLL_INTERVAL, Poller};
use crate::{ApiClient, ClientResult};
use shared::client::BookingResponse;
use shared::models::{Booth, BookingRequestCreate};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Outcome of a booking attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOutcome {
    /// Booking accepted; the caller navigates to the follow-up flow
    Redirect(String),
    /// A booking for this booth number is already in flight
    Suppressed,
    /// Request failed; the error banner carries the message
    Failed,
}

/// Observable state of the public directory view
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    pub booths: Vec<Booth>,
    pub loading: bool,
    pub error: Option<String>,
    /// Booth number with a booking request outstanding, if any
    pub booking_in_flight_for: Option<u32>,
}

impl DirectoryState {
    /// Booths with floorplan coordinates, for map markers
    pub fn positioned_booths(&self) -> impl Iterator<Item = &Booth> {
        self.booths.iter().filter(|b| b.has_position())
    }

    /// Booths still missing floorplan coordinates
    pub fn unpositioned_booths(&self) -> impl Iterator<Item = &Booth> {
        self.booths.iter().filter(|b| !b.has_position())
    }
}

/// Public booth directory view-model
#[derive(Clone)]
pub struct BoothDirectory {
    client: ApiClient,
    poll_interval: Duration,
    state: Arc<RwLock<DirectoryState>>,
}

impl BoothDirectory {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            poll_interval: DEFAULT_POLL_INTERVAL,
            state: Arc::new(RwLock::new(DirectoryState {
                loading: true,
                ..Default::default()
            })),
        }
    }

    /// Override the poll cadence (tests and embeddings)
    pub fn with_poll_interval(mut self, period: Duration) -> Self {
        self.poll_interval = period;
        self
    }

    /// Clone of the current view state
    pub async fn snapshot(&self) -> DirectoryState {
        self.state.read().await.clone()
    }

    /// Fetch the booth list once and replace local state wholesale.
    ///
    /// On failure the previous snapshot stays visible (stale-but-available)
    /// and only the error banner changes.
    pub async fn refresh(&self) {
        let outcome = self.fetch_booths().await;
        self.apply_refresh(outcome).await;
    }

    /// Start polling. The first refresh fires immediately, then once per
    /// interval, with no backoff and no de-duplication: a slow refresh may
    /// overlap the next tick. Cancel the returned poller on view
    /// deactivation; a fetch resolving after that discards its result.
    pub fn activate(&self) -> Poller {
        let directory = self.clone();
        Poller::spawn(self.poll_interval, move |cancel| {
            let directory = directory.clone();
            async move {
                let outcome = directory.fetch_booths().await;
                if cancel.is_cancelled() {
                    return;
                }
                directory.apply_refresh(outcome).await;
            }
        })
    }

    /// Send a booking request for a booth.
    ///
    /// Single-flight per booth number: a second call for the same number
    /// while one is outstanding is suppressed before any network I/O.
    /// Local `status` is never mutated; occupancy only becomes visible
    /// through a later poll.
    pub async fn book(&self, booth: &Booth) -> BookOutcome {
        {
            let mut state = self.state.write().await;
            if state.booking_in_flight_for == Some(booth.number) {
                return BookOutcome::Suppressed;
            }
            state.booking_in_flight_for = Some(booth.number);
            state.error = None;
        }

        let body = BookingRequestCreate::for_booth(booth.number);
        let result = self
            .client
            .public_post::<BookingResponse, _>("/booking-requests", &body)
            .await;

        let mut state = self.state.write().await;
        state.booking_in_flight_for = None;
        match result {
            Ok(BookingResponse {
                success: true,
                redirect_url: Some(url),
            }) => BookOutcome::Redirect(url),
            Ok(resp) => {
                tracing::warn!(booth = booth.number, ?resp, "Booking response had no redirect target");
                state.error = Some("Something went wrong while booking this booth.".into());
                BookOutcome::Failed
            }
            Err(e) => {
                tracing::warn!(booth = booth.number, "Booking failed: {}", e);
                state.error =
                    Some(e.user_message("Something went wrong while booking this booth."));
                BookOutcome::Failed
            }
        }
    }

    async fn fetch_booths(&self) -> ClientResult<Vec<Booth>> {
        self.client.public_get("/booths").await
    }

    async fn apply_refresh(&self, outcome: ClientResult<Vec<Booth>>) {
        let mut state = self.state.write().await;
        state.loading = false;
        match outcome {
            Ok(booths) => {
                state.booths = booths;
                state.error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to refresh booth list: {}", e);
                state.error = Some(e.user_message("Failed to load booths."));
            }
        }
    }
}
