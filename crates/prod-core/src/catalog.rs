//! 目錄讀取介面

use crate::{ProductionSnapshot, Result};

/// 產品目錄讀取埠
///
/// 每次呼叫回傳一份獨立快照：產品依資料來源順序排列，
/// 配方已解析至原物料及其當前庫存。
pub trait CatalogReader {
    fn list_products_with_ingredients(&self) -> Result<ProductionSnapshot>;
}

impl<T: CatalogReader + ?Sized> CatalogReader for &T {
    fn list_products_with_ingredients(&self) -> Result<ProductionSnapshot> {
        (**self).list_products_with_ingredients()
    }
}

/// 固定快照（測試與離線計算用）
impl CatalogReader for ProductionSnapshot {
    fn list_products_with_ingredients(&self) -> Result<ProductionSnapshot> {
        Ok(self.clone())
    }
}
