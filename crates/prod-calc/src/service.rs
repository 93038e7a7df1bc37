//! 生產建議服務

use prod_core::CatalogReader;

use crate::allocator::GreedyAllocator;
use crate::report::SuggestionReport;

/// 生產建議計算器
///
/// 每次呼叫都重新讀取目錄快照並建立新的庫存帳，
/// 不同呼叫之間不共享任何可變狀態。
pub struct ProductionCalculator<C> {
    catalog: C,
}

impl<C: CatalogReader> ProductionCalculator<C> {
    /// 創建新的計算器
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// 主計算入口
    pub fn suggest(&self) -> prod_core::Result<SuggestionReport> {
        let snapshot = self.catalog.list_products_with_ingredients()?;
        Ok(GreedyAllocator::allocate(&snapshot))
    }

    /// 獲取目錄引用
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
