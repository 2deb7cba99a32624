use crate::domain::model::Record;
use crate::domain::ports::UniversityRepository;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 從 JSON 檔案讀取大學資料 (頂層必須是陣列)
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, message: impl Into<String>) -> ApiError {
        ApiError::StorageError {
            path: self.path.display().to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl UniversityRepository for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<Record>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("📂 Data file {} not found, no records", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.storage_error(format!("read failed: {}", e))),
        };

        let json: Value = serde_json::from_slice(&bytes)
            .map_err(|e| self.storage_error(format!("invalid JSON: {}", e)))?;

        let Value::Array(items) = json else {
            return Err(self.storage_error("top-level value must be a JSON array"));
        };

        let total = items.len();
        let records: Vec<Record> = items.into_iter().filter_map(Record::from_value).collect();
        if records.len() < total {
            tracing::debug!(
                "📂 Skipped {} non-object entries in {}",
                total - records.len(),
                self.path.display()
            );
        }

        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
