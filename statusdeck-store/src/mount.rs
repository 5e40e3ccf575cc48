//! Status fetch mounts.
//!
//! A [`StatusMount`] is one activation of the status fetch: it owns a fresh
//! [`StatusStore`], spawns exactly one request on the Tokio runtime, and can
//! be torn down before the response arrives. Teardown is not a failure: the
//! store goes back to the state it held before the request started.

use statusdeck_core::{Service, StatusSource};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::StatusConfig;
use crate::error::StoreError;
use crate::status_store::{FetchState, StatusStore};

/// One activation of the status fetch.
pub struct StatusMount {
    store: StatusStore,
    source: String,
    active: Arc<AtomicBool>,
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for StatusMount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusMount")
            .field("source", &self.source)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl StatusMount {
    /// Starts a fetch from `source`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn activate<S>(source: S) -> Self
    where
        S: StatusSource + 'static,
    {
        let store = StatusStore::new();
        let active = Arc::new(AtomicBool::new(true));
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let description = source.describe();

        info!(source = %description, "Activating status mount");

        let task = tokio::spawn(run_fetch(
            source,
            store.clone(),
            Arc::clone(&active),
            cancel_rx,
        ));

        Self {
            store,
            source: description,
            active,
            cancel: Some(cancel_tx),
            task: Some(task),
        }
    }

    /// Starts a fetch against the endpoint described by `config`.
    pub fn from_config(config: &StatusConfig) -> Result<Self, StoreError> {
        Ok(Self::activate(config.client()?))
    }

    /// Returns the store backing this mount.
    pub fn store(&self) -> &StatusStore {
        &self.store
    }

    /// Describes the source being fetched.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true until the mount is torn down.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Looks up the service monitoring `project_url`.
    pub async fn get_status(&self, project_url: &str) -> Option<Service> {
        self.store.get_status(project_url).await
    }

    /// Returns true once the fetch has settled, with or without data.
    pub async fn is_loaded(&self) -> bool {
        self.store.is_loaded().await
    }

    /// Waits for the fetch task to finish and returns the resulting state.
    pub async fn settled(&mut self) -> FetchState {
        self.join().await;
        self.store.state().await
    }

    /// Tears the mount down, cancelling an outstanding request.
    ///
    /// Returns the state left behind once the fetch task has stopped.
    pub async fn teardown(mut self) -> FetchState {
        self.deactivate();
        self.join().await;
        debug!(source = %self.source, "Status mount torn down");
        self.store.state().await
    }

    fn deactivate(&mut self) {
        self.active.store(false, Ordering::Release);
        if let Some(cancel) = self.cancel.take() {
            // The task may already be done; nobody is listening then.
            let _ = cancel.send(());
        }
    }

    async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "Status fetch task did not complete");
            }
        }
    }
}

impl Drop for StatusMount {
    fn drop(&mut self) {
        self.deactivate();
    }
}

async fn run_fetch<S>(
    source: S,
    store: StatusStore,
    active: Arc<AtomicBool>,
    mut cancel: oneshot::Receiver<()>,
) where
    S: StatusSource,
{
    let previous = match store.begin().await {
        Ok(previous) => previous,
        Err(e) => {
            warn!(error = %e, "Status fetch not started");
            return;
        }
    };

    let outcome = tokio::select! {
        biased;
        _ = &mut cancel => None,
        result = source.fetch_snapshot() => Some(result),
    };

    let committed = match outcome {
        None => {
            store.restore(previous).await;
            false
        }
        Some(Ok(snapshot)) => store.complete_if(&active, snapshot, previous).await,
        Some(Err(e)) => {
            let committed = store.fail_if(&active, previous).await;
            if committed {
                info!(error = %e, source = %source.describe(), "Status fetch failed");
            }
            committed
        }
    };

    if !committed {
        debug!("Status fetch cancelled");
    }
}

// ============================================================================
// Tests
// ============================================================================
