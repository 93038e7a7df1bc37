//! # Production Core
//!
//! 生產規劃的核心資料模型與類型定義

pub mod catalog;
pub mod config;
pub mod product;
pub mod raw_material;
pub mod snapshot;

// Re-export 主要類型
pub use catalog::CatalogReader;
pub use config::CatalogConfig;
pub use product::{Ingredient, Product, ProductId};
pub use raw_material::{RawMaterial, RawMaterialId};
pub use snapshot::{
    MaterialRef, ProductionSnapshot, SnapshotBuilder, SnapshotIngredient, SnapshotProduct,
};

/// 生產規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ProductionError {
    #[error("找不到原物料: {0}")]
    RawMaterialNotFound(RawMaterialId),

    #[error("找不到產品: {0}")]
    ProductNotFound(ProductId),

    #[error("找不到原物料代碼: {0}")]
    UnknownRawMaterialCode(String),

    #[error("代碼已存在: {0}")]
    DuplicateCode(String),

    #[error("代碼已被其他記錄使用: {0}")]
    CodeInUse(String),

    #[error("欄位 {field} 無效: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("產品重複使用原物料: {0}")]
    DuplicateIngredient(RawMaterialId),

    #[error("原物料仍被產品 {product_code} 使用: {raw_material_id}")]
    RawMaterialInUse {
        raw_material_id: RawMaterialId,
        product_code: String,
    },

    #[error("讀取目錄失敗: {0}")]
    Catalog(String),
}

impl ProductionError {
    /// 建立欄位驗證錯誤
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProductionError>;
