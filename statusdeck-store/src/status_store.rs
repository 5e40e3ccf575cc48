//! Status fetch state store.
//!
//! Holds the lifecycle of one status fetch with change notifications for
//! front ends. The service index is built here, once, when a snapshot is
//! committed, and dropped whenever the state leaves `Loaded`.

use chrono::{DateTime, Utc};
use statusdeck_core::{
    PageSummary, Project, ProjectView, Service, ServiceIndex, StatusPageSnapshot,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{RwLock, watch};
use tracing::{debug, info};

use crate::error::StoreError;

// ============================================================================
// Fetch State
// ============================================================================

/// A committed snapshot together with its lookup index.
#[derive(Debug, PartialEq)]
pub struct LoadedPage {
    /// The fetched snapshot.
    pub snapshot: StatusPageSnapshot,
    /// Services keyed by normalized URL.
    pub index: ServiceIndex,
    /// When the snapshot was committed locally.
    pub loaded_at: DateTime<Utc>,
}

impl LoadedPage {
    fn new(snapshot: StatusPageSnapshot) -> Self {
        let index = ServiceIndex::build(snapshot.services.iter().cloned());
        Self {
            snapshot,
            index,
            loaded_at: Utc::now(),
        }
    }
}

/// Lifecycle of a status fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    /// No fetch has been started.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The request succeeded.
    Loaded(Arc<LoadedPage>),
    /// The request failed. Holds no data.
    Errored,
}

impl FetchState {
    /// Returns true once the fetch has either succeeded or failed.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Errored)
    }

    /// Returns true while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the loaded page, if any.
    pub fn page(&self) -> Option<&LoadedPage> {
        match self {
            Self::Loaded(page) => Some(page),
            _ => None,
        }
    }

    /// Short name for logs and machine output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Errored => "errored",
        }
    }
}

// ============================================================================
// Inner State
// ============================================================================

#[derive(Default)]
struct StatusStoreInner {
    state: FetchState,
    version: u64,
}

// ============================================================================
// Status Store
// ============================================================================

/// State store for one status page fetch.
///
/// Cheap to clone; clones share state. Observable via a watch channel that
/// carries a version number bumped on every transition.
#[derive(Clone)]
pub struct StatusStore {
    inner: Arc<RwLock<StatusStoreInner>>,
    notify: Arc<watch::Sender<u64>>,
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StatusStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusStore")
            .field("version", &*self.notify.borrow())
            .finish_non_exhaustive()
    }
}

impl StatusStore {
    /// Creates an idle store.
    pub fn new() -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(StatusStoreInner::default())),
            notify: Arc::new(notify),
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Moves to `Loading` and returns the state that held before.
    ///
    /// Fails if a request is already outstanding.
    pub async fn begin(&self) -> Result<FetchState, StoreError> {
        let previous = {
            let mut inner = self.inner.write().await;
            if inner.state.is_loading() {
                return Err(StoreError::FetchInProgress);
            }
            let previous = std::mem::replace(&mut inner.state, FetchState::Loading);
            self.bump(&mut inner);
            previous
        };
        debug!(previous = previous.name(), "Status fetch started");
        Ok(previous)
    }

    /// Commits a fetched snapshot only while `active` is set.
    ///
    /// The flag is read under the write lock, so a deactivation that lands
    /// first always wins: `previous` is put back instead and this returns
    /// false.
    pub async fn complete_if(
        &self,
        active: &AtomicBool,
        snapshot: StatusPageSnapshot,
        previous: FetchState,
    ) -> bool {
        let page = LoadedPage::new(snapshot);
        let services = page.index.len();
        let committed = self
            .settle_if(active, FetchState::Loaded(Arc::new(page)), previous)
            .await;
        if committed {
            info!(services, "Status snapshot loaded");
        }
        committed
    }

    /// Marks the fetch as failed only while `active` is set.
    ///
    /// Same contract as [`StatusStore::complete_if`].
    pub async fn fail_if(&self, active: &AtomicBool, previous: FetchState) -> bool {
        let committed = self.settle_if(active, FetchState::Errored, previous).await;
        if committed {
            debug!("Status fetch settled without data");
        }
        committed
    }

    async fn settle_if(&self, active: &AtomicBool, next: FetchState, previous: FetchState) -> bool {
        let mut inner = self.inner.write().await;
        let committed = active.load(Ordering::Acquire);
        inner.state = if committed { next } else { previous };
        self.bump(&mut inner);
        committed
    }

    /// Puts back a state captured by [`StatusStore::begin`].
    pub async fn restore(&self, previous: FetchState) {
        let name = previous.name();
        {
            let mut inner = self.inner.write().await;
            inner.state = previous;
            self.bump(&mut inner);
        }
        debug!(state = name, "Status fetch state restored");
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the current state.
    pub async fn state(&self) -> FetchState {
        self.inner.read().await.state.clone()
    }

    /// Returns true once the fetch has settled, with or without data.
    pub async fn is_loaded(&self) -> bool {
        self.inner.read().await.state.is_settled()
    }

    /// Looks up the service monitoring `project_url`.
    ///
    /// Always absent unless a snapshot is loaded.
    pub async fn get_status(&self, project_url: &str) -> Option<Service> {
        self.inner
            .read()
            .await
            .state
            .page()
            .and_then(|page| page.index.lookup(project_url))
            .cloned()
    }

    /// Returns the loaded snapshot.
    pub async fn snapshot(&self) -> Option<StatusPageSnapshot> {
        self.inner
            .read()
            .await
            .state
            .page()
            .map(|page| page.snapshot.clone())
    }

    /// Returns when the loaded snapshot was committed.
    pub async fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.state.page().map(|page| page.loaded_at)
    }

    /// Merges each project with its monitoring indicator.
    pub async fn project_views(&self, projects: &[Project]) -> Vec<ProjectView> {
        let inner = self.inner.read().await;
        let settled = inner.state.is_settled();
        let page = inner.state.page();

        projects
            .iter()
            .map(|project| {
                let service = page.and_then(|p| p.index.lookup(&project.url));
                ProjectView::merge(project.clone(), service, settled)
            })
            .collect()
    }

    /// Returns the service uptime section, only when a snapshot is loaded.
    pub async fn page_summary(&self) -> Option<PageSummary> {
        self.inner
            .read()
            .await
            .state
            .page()
            .map(|page| PageSummary::from_snapshot(&page.snapshot))
    }

    // ========================================================================
    // Observable
    // ========================================================================

    /// Subscribes to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }

    /// Returns the number of transitions so far.
    pub fn version(&self) -> u64 {
        *self.notify.borrow()
    }

    fn bump(&self, inner: &mut StatusStoreInner) {
        inner.version += 1;
        self.notify.send_replace(inner.version);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use statusdeck_core::{Monitoring, ProjectStatus, ServiceStatus, StatusPage};

    fn snapshot(services: Vec<Service>) -> StatusPageSnapshot {
        StatusPageSnapshot {
            page: StatusPage {
                name: "Personal".to_string(),
                slug: "personal".to_string(),
                description: None,
            },
            services,
            all_operational: true,
            timeframe_days: 30,
            last_refreshed: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn project(url: &str) -> Project {
        Project::new("Example", url, "Founder", ProjectStatus::Active)
    }

    async fn complete(store: &StatusStore, snapshot: StatusPageSnapshot) {
        let active = AtomicBool::new(true);
        assert!(store.complete_if(&active, snapshot, FetchState::Idle).await);
    }

    async fn fail(store: &StatusStore) {
        let active = AtomicBool::new(true);
        assert!(store.fail_if(&active, FetchState::Idle).await);
    }

    #[tokio::test]
    async fn test_new_store_idle() {
        let store = StatusStore::new();
        assert_eq!(store.state().await, FetchState::Idle);
        assert!(!store.is_loaded().await);
        assert!(store.snapshot().await.is_none());
        assert_eq!(store.version(), 0);
    }

    #[tokio::test]
    async fn test_begin_twice_fails() {
        let store = StatusStore::new();

        let previous = store.begin().await.unwrap();
        assert_eq!(previous, FetchState::Idle);
        assert!(store.state().await.is_loading());
        assert!(!store.is_loaded().await);

        assert!(matches!(
            store.begin().await,
            Err(StoreError::FetchInProgress)
        ));
    }

    #[tokio::test]
    async fn test_complete_builds_index() {
        let store = StatusStore::new();
        store.begin().await.unwrap();
        complete(
            &store,
            snapshot(vec![Service::new(
                "Example",
                "example.org",
                ServiceStatus::Ok,
                99.95,
            )]),
        )
        .await;

        assert!(store.is_loaded().await);
        assert!(store.loaded_at().await.is_some());
        let found = store.get_status("https://Example.org/").await.unwrap();
        assert_eq!(found.name, "Example");
        assert!(store.get_status("other.org").await.is_none());
    }

    #[tokio::test]
    async fn test_fail_is_loaded_empty() {
        let store = StatusStore::new();
        store.begin().await.unwrap();
        fail(&store).await;

        assert!(store.is_loaded().await);
        assert!(store.snapshot().await.is_none());
        assert!(store.page_summary().await.is_none());
        assert!(store.get_status("example.org").await.is_none());
    }

    #[tokio::test]
    async fn test_restore_previous_state() {
        let store = StatusStore::new();
        let previous = store.begin().await.unwrap();
        store.restore(previous).await;

        assert_eq!(store.state().await, FetchState::Idle);
        assert!(!store.is_loaded().await);
    }

    #[tokio::test]
    async fn test_complete_if_active_commits() {
        let store = StatusStore::new();
        let active = AtomicBool::new(true);
        let previous = store.begin().await.unwrap();

        let committed = store
            .complete_if(&active, snapshot(Vec::new()), previous)
            .await;

        assert!(committed);
        assert!(store.snapshot().await.is_some());
    }

    #[tokio::test]
    async fn test_complete_if_inactive_restores() {
        let store = StatusStore::new();
        let active = AtomicBool::new(true);
        let previous = store.begin().await.unwrap();

        // Deactivated after the response arrived but before the commit.
        active.store(false, Ordering::Release);
        let committed = store
            .complete_if(&active, snapshot(Vec::new()), previous)
            .await;

        assert!(!committed);
        assert_eq!(store.state().await, FetchState::Idle);
        assert!(!store.is_loaded().await);
    }

    #[tokio::test]
    async fn test_fail_if_inactive_restores() {
        let store = StatusStore::new();
        let active = AtomicBool::new(false);
        let previous = store.begin().await.unwrap();

        assert!(!store.fail_if(&active, previous).await);
        assert_eq!(store.state().await, FetchState::Idle);

        let active = AtomicBool::new(true);
        let previous = store.begin().await.unwrap();
        assert!(store.fail_if(&active, previous).await);
        assert_eq!(store.state().await, FetchState::Errored);
    }

    #[tokio::test]
    async fn test_project_views_pending_until_settled() {
        let store = StatusStore::new();
        let projects = vec![project("https://example.org/")];

        store.begin().await.unwrap();
        let views = store.project_views(&projects).await;
        assert_eq!(views[0].monitoring, Monitoring::Pending);

        fail(&store).await;
        let views = store.project_views(&projects).await;
        assert_eq!(views[0].monitoring, Monitoring::NotMonitored);
    }

    #[tokio::test]
    async fn test_project_views_monitored() {
        let store = StatusStore::new();
        store.begin().await.unwrap();
        complete(
            &store,
            snapshot(vec![Service::new(
                "Example",
                "example.org",
                ServiceStatus::Warning,
                99.3,
            )]),
        )
        .await;

        let views = store
            .project_views(&[project("https://www.example.org"), project("missing.dev")])
            .await;

        assert_eq!(views[0].monitoring.label(), Some("Degraded"));
        assert_eq!(views[1].monitoring, Monitoring::NotMonitored);
    }

    #[tokio::test]
    async fn test_subscribe_sees_transitions() {
        let store = StatusStore::new();
        let mut rx = store.subscribe();

        store.begin().await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);

        complete(&store, snapshot(Vec::new())).await;
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 2);
        assert_eq!(store.version(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = StatusStore::new();
        let other = store.clone();

        store.begin().await.unwrap();
        fail(&other).await;

        assert!(store.is_loaded().await);
    }
}
