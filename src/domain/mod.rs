pub mod participant;
pub mod store;

pub use participant::{CounterField, Participant, ParticipantRecord};
pub use store::ParticipantStore;
