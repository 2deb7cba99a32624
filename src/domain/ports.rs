use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 大學資料來源。每次呼叫都重新讀取，不做快取。
#[async_trait]
pub trait UniversityRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Record>>;

    /// Human-readable location of the backing data, for logs.
    fn describe(&self) -> String;
}
