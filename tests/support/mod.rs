//! Shared test harness: an in-memory `ParticipantStore` plus a helper that
//! serves the router on an ephemeral loopback port.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use participant_registry::transport;
use participant_registry::{CounterField, Participant, ParticipantStore};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Stand-in for the MongoDB-backed service: the same single-document
/// operations over a vector of documents.
#[derive(Default)]
pub struct InMemoryStore {
    documents: Mutex<Vec<Participant>>,
}

#[async_trait]
impl ParticipantStore for InMemoryStore {
    async fn insert(&self, mut participant: Participant) -> anyhow::Result<Participant> {
        participant.id = Some(ObjectId::new());
        let mut documents = self.documents.lock().await;
        documents.push(participant.clone());
        Ok(participant)
    }

    async fn find_by_id_number(&self, id_number: &str) -> anyhow::Result<Option<Participant>> {
        let documents = self.documents.lock().await;
        Ok(documents
            .iter()
            .find(|p| p.id_number.as_deref() == Some(id_number))
            .cloned())
    }

    async fn find_by_line_id(&self, line_id: &str) -> anyhow::Result<Option<Participant>> {
        let documents = self.documents.lock().await;
        Ok(documents
            .iter()
            .find(|p| p.line_id.as_deref() == Some(line_id))
            .cloned())
    }

    async fn bind_line_id(&self, id_number: &str, line_id: &str) -> anyhow::Result<bool> {
        let mut documents = self.documents.lock().await;
        match documents
            .iter_mut()
            .find(|p| p.id_number.as_deref() == Some(id_number))
        {
            Some(p) => {
                p.line_id = Some(line_id.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn increment_counter(
        &self,
        line_id: &str,
        field: CounterField,
    ) -> anyhow::Result<Option<Participant>> {
        let mut documents = self.documents.lock().await;
        match documents
            .iter_mut()
            .find(|p| p.line_id.as_deref() == Some(line_id))
        {
            Some(p) => {
                match field {
                    CounterField::HealthMeasurement => p.health_measurement += 1,
                    CounterField::HealthEducation => p.health_education += 1,
                    CounterField::Exercise => p.exercise += 1,
                }
                Ok(Some(p.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id_number(&self, id_number: &str) -> anyhow::Result<u64> {
        let mut documents = self.documents.lock().await;
        let before = documents.len();
        documents.retain(|p| p.id_number.as_deref() != Some(id_number));
        Ok((before - documents.len()) as u64)
    }

    async fn clear_line_id(&self, line_id: &str) -> anyhow::Result<Option<Participant>> {
        let mut documents = self.documents.lock().await;
        match documents
            .iter_mut()
            .find(|p| p.line_id.as_deref() == Some(line_id))
        {
            Some(p) => {
                p.line_id = None;
                Ok(Some(p.clone()))
            }
            None => Ok(None),
        }
    }
}

/// Serves the router over a fresh in-memory store and returns the base URL.
pub async fn spawn_server() -> String {
    let state = transport::http::AppState::new(Arc::new(InMemoryStore::default()));
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
