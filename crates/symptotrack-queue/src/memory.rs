use std::sync::Arc;

use symptotrack_core::models::{RiskUpdate, SymptomRecord};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::QueueError;
use crate::store::{self, BoxFuture, RecordStore};

/// In-process record store. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<SymptomRecord>>>,
}

impl MemoryStore {
    pub fn new(records: Vec<SymptomRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub async fn insert(&self, record: SymptomRecord) {
        self.records.lock().await.push(record);
    }

    pub async fn get(&self, id: Uuid) -> Option<SymptomRecord> {
        self.records.lock().await.iter().find(|r| r.id == id).cloned()
    }

    pub async fn snapshot(&self) -> Vec<SymptomRecord> {
        self.records.lock().await.clone()
    }
}

impl RecordStore for MemoryStore {
    fn fetch_unprocessed(&self) -> BoxFuture<'_, Result<Vec<SymptomRecord>, QueueError>> {
        Box::pin(async move { Ok(store::unprocessed(&self.records.lock().await)) })
    }

    fn previous_pain<'a>(
        &'a self,
        record: &'a SymptomRecord,
    ) -> BoxFuture<'a, Result<Option<i32>, QueueError>> {
        Box::pin(async move { Ok(store::previous_pain_in(&self.records.lock().await, record)) })
    }

    fn save_result<'a>(
        &'a self,
        id: Uuid,
        update: &'a RiskUpdate,
    ) -> BoxFuture<'a, Result<(), QueueError>> {
        Box::pin(async move { store::apply_update(&mut self.records.lock().await, id, update) })
    }
}
