//! 目錄快照（計算輸入）
//!
//! 原物料以 arena 儲存，產品配方透過 [`MaterialRef`] 索引參照。
//! 同一原物料ID可能在 arena 中出現多次（來自不同產品記錄的舊副本），
//! 庫存帳以產品迭代順序中第一次遇到的數值為準。

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ProductId, RawMaterial, RawMaterialId};

/// 原物料 arena 索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialRef(usize);

/// 已解析的配方項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotIngredient {
    pub material: MaterialRef,
    pub quantity_required: Decimal,
}

/// 快照中的產品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotProduct {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub ingredients: Vec<SnapshotIngredient>,
}

/// 產品與原物料的唯讀快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionSnapshot {
    materials: Vec<RawMaterial>,
    products: Vec<SnapshotProduct>,
}

impl ProductionSnapshot {
    /// 創建空的快照
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::new()
    }

    /// 依資料來源順序的產品
    pub fn products(&self) -> &[SnapshotProduct] {
        &self.products
    }

    pub fn materials(&self) -> &[RawMaterial] {
        &self.materials
    }

    /// 解析配方參照
    pub fn material(&self, material: MaterialRef) -> Option<&RawMaterial> {
        self.materials.get(material.0)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// 快照建構器
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    materials: Vec<RawMaterial>,
    interned: HashMap<RawMaterialId, MaterialRef>,
    products: Vec<SnapshotProduct>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增原物料記錄，一律配置新的 arena 位置
    pub fn add_material(&mut self, material: RawMaterial) -> MaterialRef {
        let material_ref = MaterialRef(self.materials.len());
        self.interned.entry(material.id).or_insert(material_ref);
        self.materials.push(material);
        material_ref
    }

    /// 新增原物料記錄，若ID已登錄則重用既有位置
    pub fn intern_material(&mut self, material: &RawMaterial) -> MaterialRef {
        match self.interned.get(&material.id) {
            Some(&material_ref) => material_ref,
            None => self.add_material(material.clone()),
        }
    }

    /// 新增產品（配方參照必須來自本建構器）
    pub fn add_product(
        &mut self,
        id: ProductId,
        code: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        ingredients: Vec<SnapshotIngredient>,
    ) -> &mut Self {
        debug_assert!(ingredients
            .iter()
            .all(|i| i.material.0 < self.materials.len()));
        self.products.push(SnapshotProduct {
            id,
            code: code.into(),
            name: name.into(),
            price,
            ingredients,
        });
        self
    }

    pub fn build(self) -> ProductionSnapshot {
        ProductionSnapshot {
            materials: self.materials,
            products: self.products,
        }
    }
}
