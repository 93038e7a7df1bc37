//! 庫存帳（單次計算內的可用原物料數量）

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use prod_core::{ProductionSnapshot, RawMaterialId, SnapshotProduct};
use rust_decimal::Decimal;

/// 庫存帳
///
/// 每次計算建立一份，由配置器獨佔並在計算結束後丟棄。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockLedger {
    available: HashMap<RawMaterialId, Decimal>,
}

impl StockLedger {
    /// 創建空的庫存帳
    pub fn new() -> Self {
        Self::default()
    }

    /// 依產品順序登錄配方使用到的原物料
    ///
    /// 同一原物料ID只登錄一次，以第一次遇到的庫存為準。
    /// 未被任何產品使用的原物料不會出現在帳中。
    pub fn from_products<'a>(
        snapshot: &ProductionSnapshot,
        products: impl IntoIterator<Item = &'a SnapshotProduct>,
    ) -> Self {
        let mut ledger = Self::new();
        for product in products {
            for ingredient in &product.ingredients {
                if let Some(material) = snapshot.material(ingredient.material) {
                    ledger.register(material.id, material.stock_quantity);
                }
            }
        }
        ledger
    }

    /// 登錄原物料，已存在則忽略；回傳是否為新登錄
    pub fn register(&mut self, raw_material_id: RawMaterialId, quantity: Decimal) -> bool {
        match self.available.entry(raw_material_id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(quantity);
                true
            }
        }
    }

    /// 可用數量，未登錄視為零
    pub fn available(&self, raw_material_id: RawMaterialId) -> Decimal {
        self.available
            .get(&raw_material_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// 扣減庫存（負數量視為回補），超出 Decimal 範圍時取極值
    pub fn consume(&mut self, raw_material_id: RawMaterialId, quantity: Decimal) {
        let remaining = self
            .available
            .entry(raw_material_id)
            .or_insert(Decimal::ZERO);
        *remaining = remaining.saturating_sub(quantity);
    }

    /// 依生產數量扣減產品配方的所有原物料
    ///
    /// 用量不為正的配方也照常套用。
    pub fn consume_for(
        &mut self,
        snapshot: &ProductionSnapshot,
        product: &SnapshotProduct,
        units: u64,
    ) {
        let units = Decimal::from(units);
        for ingredient in &product.ingredients {
            if let Some(material) = snapshot.material(ingredient.material) {
                self.consume(material.id, ingredient.quantity_required.saturating_mul(units));
            }
        }
    }

    pub fn contains(&self, raw_material_id: RawMaterialId) -> bool {
        self.available.contains_key(&raw_material_id)
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }
}
