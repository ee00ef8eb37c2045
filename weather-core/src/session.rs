//! Event loop that connects the reducer to a [`WeatherProvider`].
//!
//! State is only touched on the task that owns the [`Session`]. Each fetch
//! runs in its own tokio task tracked by a `JoinSet`; nothing is cancelled,
//! stale results are dropped by the reducer.

use std::sync::Arc;

use tokio::{sync::watch, task::JoinSet};
use tracing::{debug, warn};

use crate::{
    provider::{FetchError, FetchOutcome, WeatherProvider},
    state::{Effect, Event, RequestId, Snapshot, WidgetState},
};

type Completion = (RequestId, Result<FetchOutcome, FetchError>);

#[derive(Debug)]
pub struct Session {
    provider: Arc<dyn WeatherProvider>,
    state: WidgetState,
    fetches: JoinSet<Completion>,
    snapshots: watch::Sender<Snapshot>,
}

impl Session {
    pub fn new(provider: Arc<dyn WeatherProvider>, state: WidgetState) -> Self {
        let (snapshots, _) = watch::channel(state.snapshot());

        Self { provider, state, fetches: JoinSet::new(), snapshots }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Receive a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    /// Number of spawned fetches whose completion hasn't been processed.
    pub fn in_flight(&self) -> usize {
        self.fetches.len()
    }

    /// Apply a user event, spawning a fetch if the reducer asks for one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, event: Event) {
        let effect = self.state.reduce(event);
        self.publish();

        if let Some(Effect::Fetch { request, city }) = effect {
            let provider = Arc::clone(&self.provider);

            self.fetches.spawn(async move {
                // The provider runs in its own task so a panic there still
                // completes this request.
                let fetch = tokio::spawn(async move { provider.current_by_city(&city).await });
                let result = fetch.await.unwrap_or_else(|err| {
                    Err(FetchError::Transport(format!("fetch task failed: {err}")))
                });
                (request, result)
            });
        }
    }

    /// Wait for the next fetch to finish and apply it. Returns `false` when
    /// nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        let Some(joined) = self.fetches.join_next().await else {
            return false;
        };

        match joined {
            Ok((request, result)) => {
                self.state.reduce(Event::FetchCompleted { request, result });
                self.publish();
            }
            Err(err) => warn!(error = %err, "fetch task did not complete"),
        }
        true
    }

    /// Drain every outstanding fetch.
    pub async fn run_until_idle(&mut self) {
        while self.next_completion().await {}
        debug!("session idle");
    }

    /// Type `city` and submit, then wait for the cycle to finish.
    pub async fn search(&mut self, city: &str) -> Snapshot {
        self.dispatch(Event::QueryChanged(city.to_string()));
        self.dispatch(Event::Submit);
        self.run_until_idle().await;
        self.state.snapshot()
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.state.snapshot());
    }
}
