//! # Production Planner
//!
//! 原物料/產品目錄與生產建議計算

pub use prod_calc::{
    Allocation, FeasibilityCalculator, GreedyAllocator, ProductionCalculator, StockLedger,
    SuggestionItem, SuggestionReport,
};
pub use prod_catalog::{
    CatalogSeed, InMemoryCatalog, IngredientRequest, ProductRequest, RawMaterialRequest,
};
pub use prod_core::{
    CatalogConfig, CatalogReader, Product, ProductId, ProductionError, ProductionSnapshot,
    RawMaterial, RawMaterialId, Result,
};

/// 從 JSON 初始資料建立目錄並計算生產建議
pub fn suggest_from_seed(json: &str, config: CatalogConfig) -> Result<SuggestionReport> {
    let catalog = InMemoryCatalog::from_seed(CatalogSeed::from_json(json)?, config)?;
    ProductionCalculator::new(catalog).suggest()
}
