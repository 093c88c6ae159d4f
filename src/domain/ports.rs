use crate::utils::error::Result;

/// 課程目錄的原始資料來源 (檔案、記憶體等)
pub trait CatalogSource: Send + Sync {
    fn read_catalog(&self) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;

    /// 用於日誌的來源描述
    fn describe(&self) -> String;
}
