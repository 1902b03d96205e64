//! Datastore contract for the participant registry.

use crate::domain::participant::{CounterField, Participant};
use async_trait::async_trait;

/// Single-document operations the registry needs from its datastore.
///
/// This trait lets the HTTP layer work against any backing store without
/// knowing its driver; request policy (conflict checks, status mapping)
/// stays in the handlers.
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Inserts a new participant and returns it with the assigned identifier.
    async fn insert(&self, participant: Participant) -> anyhow::Result<Participant>;

    async fn find_by_id_number(&self, id_number: &str) -> anyhow::Result<Option<Participant>>;

    async fn find_by_line_id(&self, line_id: &str) -> anyhow::Result<Option<Participant>>;

    /// Sets `lineId` on the participant matching `id_number`. Returns whether
    /// a document matched.
    async fn bind_line_id(&self, id_number: &str, line_id: &str) -> anyhow::Result<bool>;

    /// Increments one counter by 1 and returns the post-increment document.
    async fn increment_counter(
        &self,
        line_id: &str,
        field: CounterField,
    ) -> anyhow::Result<Option<Participant>>;

    /// Removes the participant matching `id_number`. Returns the number of
    /// documents removed (0 or 1).
    async fn delete_by_id_number(&self, id_number: &str) -> anyhow::Result<u64>;

    /// Clears `lineId` on the participant currently carrying `line_id`.
    /// Returns the document as it is after the update.
    async fn clear_line_id(&self, line_id: &str) -> anyhow::Result<Option<Participant>>;
}
