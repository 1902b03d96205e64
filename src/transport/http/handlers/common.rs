use crate::domain::participant::{Participant, ParticipantRecord};
use serde_json::Value as JsonValue;

/// Renders a stored participant as boundary JSON, with the datastore
/// identifier as text.
pub fn record_json(participant: Participant) -> JsonValue {
    serde_json::to_value(ParticipantRecord::from(participant))
        .unwrap_or_else(|_| JsonValue::Null)
}
