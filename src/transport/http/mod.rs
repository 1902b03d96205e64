pub mod router;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod counters;
    pub mod health;
    pub mod link;
    pub mod participants;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
