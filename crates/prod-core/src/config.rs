//! 目錄驗證配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 目錄寫入驗證參數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// 產品最低單價
    pub min_price: Decimal,

    /// 配方每單位最低用量
    pub min_quantity_required: Decimal,

    /// 原物料最低庫存
    pub min_stock_quantity: Decimal,
}

impl CatalogConfig {
    /// 創建預設配置（單價與用量至少 0.01，庫存不可為負）
    pub fn new() -> Self {
        Self {
            min_price: Decimal::new(1, 2),
            min_quantity_required: Decimal::new(1, 2),
            min_stock_quantity: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置最低單價
    pub fn with_min_price(mut self, min_price: Decimal) -> Self {
        self.min_price = min_price;
        self
    }

    /// 建構器模式：設置最低用量
    pub fn with_min_quantity_required(mut self, min_quantity_required: Decimal) -> Self {
        self.min_quantity_required = min_quantity_required;
        self
    }

    /// 建構器模式：設置最低庫存
    pub fn with_min_stock_quantity(mut self, min_stock_quantity: Decimal) -> Self {
        self.min_stock_quantity = min_stock_quantity;
        self
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::ProductionError::invalid("config", e.to_string()))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}
