use std::path::{Path, PathBuf};

use symptotrack_core::models::{RiskUpdate, SymptomRecord};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::QueueError;
use crate::store::{self, BoxFuture, RecordStore};

/// Record store backed by a single JSON array file.
///
/// Every operation re-reads the file so edits made by other tools between
/// cycles are picked up. Writes go to a uniquely named temp file that is
/// then renamed over the original; the temp file is removed if that fails.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records. A missing file is an empty store.
    pub async fn load_all(&self) -> Result<Vec<SymptomRecord>, QueueError> {
        let _guard = self.lock.lock().await;
        self.read_records().await
    }

    /// Replace the file contents with `records`.
    pub async fn save_all(&self, records: &[SymptomRecord]) -> Result<(), QueueError> {
        let _guard = self.lock.lock().await;
        self.write_records(records).await
    }

    async fn read_records(&self) -> Result<Vec<SymptomRecord>, QueueError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "record file missing, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_records(&self, records: &[SymptomRecord]) -> Result<(), QueueError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir).await?;
        }

        let json = serde_json::to_vec_pretty(records)?;
        let tmp_path = self.tmp_path();

        let written = match tokio::fs::write(&tmp_path, &json).await {
            Ok(()) => tokio::fs::rename(&tmp_path, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp_path).await
                && cleanup.kind() != std::io::ErrorKind::NotFound
            {
                warn!(
                    path = %tmp_path.display(),
                    error = %cleanup,
                    "failed to remove temp record file"
                );
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// Sibling of the record file, unique per write.
    fn tmp_path(&self) -> PathBuf {
        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(format!(".{}.tmp", Uuid::new_v4().simple()));
        PathBuf::from(tmp_path)
    }
}

impl RecordStore for FileStore {
    fn fetch_unprocessed(&self) -> BoxFuture<'_, Result<Vec<SymptomRecord>, QueueError>> {
        Box::pin(async move {
            let records = self.load_all().await?;
            Ok(store::unprocessed(&records))
        })
    }

    fn previous_pain<'a>(
        &'a self,
        record: &'a SymptomRecord,
    ) -> BoxFuture<'a, Result<Option<i32>, QueueError>> {
        Box::pin(async move {
            let records = self.load_all().await?;
            Ok(store::previous_pain_in(&records, record))
        })
    }

    fn save_result<'a>(
        &'a self,
        id: Uuid,
        update: &'a RiskUpdate,
    ) -> BoxFuture<'a, Result<(), QueueError>> {
        Box::pin(async move {
            let _guard = self.lock.lock().await;
            let mut records = self.read_records().await?;
            store::apply_update(&mut records, id, update)?;
            self.write_records(&records).await?;
            info!(path = %self.path.display(), record_id = %id, "record updated");
            Ok(())
        })
    }
}
