//! Centralized configuration (environment variables + defaults).

/// MongoDB connection string (required).
pub fn mongodb_url() -> String {
    std::env::var("MONGODB_URL").expect("MONGODB_URL must be set")
}

/// Database holding the participant collection (required).
pub fn mongodb_database() -> String {
    std::env::var("MONGODB_DATABASE").expect("MONGODB_DATABASE must be set")
}

/// Collection the participant documents live in (required).
pub fn mongodb_collection() -> String {
    std::env::var("MONGODB_COLLECTION").expect("MONGODB_COLLECTION must be set")
}

/// Listen address for the HTTP server.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
