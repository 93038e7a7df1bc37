//! 目錄寫入請求

use prod_core::RawMaterialId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原物料建立/更新請求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialRequest {
    pub code: String,
    pub name: String,
    pub stock_quantity: Decimal,
}

impl RawMaterialRequest {
    pub fn new(code: impl Into<String>, name: impl Into<String>, stock_quantity: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            stock_quantity,
        }
    }
}

/// 配方項目請求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRequest {
    pub raw_material_id: RawMaterialId,
    pub quantity_required: Decimal,
}

impl IngredientRequest {
    pub fn new(raw_material_id: RawMaterialId, quantity_required: Decimal) -> Self {
        Self {
            raw_material_id,
            quantity_required,
        }
    }
}

/// 產品建立/更新請求（更新時整批取代配方）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub code: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub ingredients: Vec<IngredientRequest>,
}

impl ProductRequest {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
            ingredients: Vec::new(),
        }
    }

    /// 建構器模式：添加配方項目
    pub fn with_ingredient(
        mut self,
        raw_material_id: RawMaterialId,
        quantity_required: Decimal,
    ) -> Self {
        self.ingredients
            .push(IngredientRequest::new(raw_material_id, quantity_required));
        self
    }
}
