//! Trait definitions for StatusDeck.

use std::future::Future;

use crate::models::StatusPageSnapshot;

/// Something that can produce a status page snapshot.
///
/// Implementors perform at most one request per call and never retry;
/// every failure is returned as `Self::Error`.
pub trait StatusSource: Send + Sync {
    /// Error produced when the snapshot cannot be obtained.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns a description of where snapshots come from, for logging.
    fn describe(&self) -> String;

    /// Fetches the current snapshot.
    fn fetch_snapshot(
        &self,
    ) -> impl Future<Output = Result<StatusPageSnapshot, Self::Error>> + Send;
}
