use crate::core::CatalogSource;
use crate::utils::error::Result;

/// 已經在記憶體中的目錄資料 (例如編譯時嵌入的 JSON)
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    bytes: Vec<u8>,
}

impl StaticCatalogSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl CatalogSource for StaticCatalogSource {
    async fn read_catalog(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} bytes)", self.bytes.len())
    }
}
