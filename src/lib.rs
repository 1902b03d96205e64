pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::registry_service::RegistryService;
pub use domain::participant::{CounterField, Participant, ParticipantRecord};
pub use domain::store::ParticipantStore;
