//! The registry's datastore service.
//!
//! Owns the MongoDB connection for the lifetime of the process and exposes
//! the single-document operations the HTTP layer needs. Constructed once at
//! startup and shared through `AppState`, so handlers never reach for a
//! process-global handle.

use crate::domain::participant::{CounterField, Participant};
use crate::domain::store::ParticipantStore;
use crate::infra::config;
use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use tracing::{info, warn};

/// MongoDB-backed implementation of [`ParticipantStore`].
pub struct RegistryService {
    client: Client,
    collection: Collection<Participant>,
}

impl RegistryService {
    /// Connects to MongoDB and resolves the participant collection.
    pub async fn new() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let client = Client::with_uri_str(config::mongodb_url()).await?;
        let collection = client
            .database(&config::mongodb_database())
            .collection::<Participant>(&config::mongodb_collection());
        Ok(Self { client, collection })
    }

    /// One-shot connectivity probe. Logs the outcome and never blocks
    /// request handling on a failure.
    pub async fn probe_connectivity(&self) {
        match self
            .client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
        {
            Ok(_) => info!("MongoDB connection established"),
            Err(e) => warn!("MongoDB connectivity check failed: {e}"),
        }
    }
}

#[async_trait]
impl ParticipantStore for RegistryService {
    async fn insert(&self, mut participant: Participant) -> anyhow::Result<Participant> {
        let inserted = self.collection.insert_one(&participant).await?;
        participant.id = inserted.inserted_id.as_object_id();
        Ok(participant)
    }

    async fn find_by_id_number(&self, id_number: &str) -> anyhow::Result<Option<Participant>> {
        Ok(self
            .collection
            .find_one(doc! { "idNumber": id_number })
            .await?)
    }

    async fn find_by_line_id(&self, line_id: &str) -> anyhow::Result<Option<Participant>> {
        Ok(self.collection.find_one(doc! { "lineId": line_id }).await?)
    }

    async fn bind_line_id(&self, id_number: &str, line_id: &str) -> anyhow::Result<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "idNumber": id_number },
                doc! { "$set": { "lineId": line_id } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn increment_counter(
        &self,
        line_id: &str,
        field: CounterField,
    ) -> anyhow::Result<Option<Participant>> {
        let mut increment = Document::new();
        increment.insert(field.as_key(), 1);
        Ok(self
            .collection
            .find_one_and_update(doc! { "lineId": line_id }, doc! { "$inc": increment })
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete_by_id_number(&self, id_number: &str) -> anyhow::Result<u64> {
        let result = self
            .collection
            .delete_one(doc! { "idNumber": id_number })
            .await?;
        Ok(result.deleted_count)
    }

    async fn clear_line_id(&self, line_id: &str) -> anyhow::Result<Option<Participant>> {
        Ok(self
            .collection
            .find_one_and_update(
                doc! { "lineId": line_id },
                doc! { "$set": { "lineId": Bson::Null } },
            )
            .return_document(ReturnDocument::After)
            .await?)
    }
}
