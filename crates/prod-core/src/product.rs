//! 產品模型

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::RawMaterialId;

/// 產品ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// 產生新的產品ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 產品配方項目（每單位產品所需原物料）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// 原物料ID
    pub raw_material_id: RawMaterialId,

    /// 每單位用量
    pub quantity_required: Decimal,
}

impl Ingredient {
    pub fn new(raw_material_id: RawMaterialId, quantity_required: Decimal) -> Self {
        Self {
            raw_material_id,
            quantity_required,
        }
    }
}

/// 產品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 產品ID
    pub id: ProductId,

    /// 產品代碼（唯一）
    pub code: String,

    /// 名稱
    pub name: String,

    /// 單價
    pub price: Decimal,

    /// 配方
    pub ingredients: Vec<Ingredient>,
}

impl Product {
    /// 創建新的產品（無配方）
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: ProductId::new(),
            code: code.into(),
            name: name.into(),
            price,
            ingredients: Vec::new(),
        }
    }

    /// 建構器模式：設置配方
    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// 添加配方項目
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// 檢查是否使用指定原物料
    pub fn uses_raw_material(&self, raw_material_id: RawMaterialId) -> bool {
        self.ingredients
            .iter()
            .any(|i| i.raw_material_id == raw_material_id)
    }
}
