//! 生產建議報表

use std::fmt;

use prod_core::{ProductId, SnapshotProduct};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一產品的生產建議
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionItem {
    pub product_id: ProductId,
    pub product_code: String,
    pub product_name: String,

    /// 建議生產數量（至少 1）
    pub quantity: u64,

    pub unit_price: Decimal,

    /// 單價 × 數量
    pub total_value: Decimal,
}

impl SuggestionItem {
    /// 依快照產品與數量建立建議；總價值超出 Decimal 範圍時回傳 `None`
    pub fn try_new(product: &SnapshotProduct, quantity: u64) -> Option<Self> {
        let total_value = product.price.checked_mul(Decimal::from(quantity))?;
        Some(Self {
            product_id: product.id,
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price: product.price,
            total_value,
        })
    }
}

/// 生產建議報表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    /// 依處理順序（單價遞減）排列
    pub items: Vec<SuggestionItem>,

    /// 所有建議的總價值
    pub grand_total: Decimal,
}

impl SuggestionReport {
    /// 創建空的報表
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            grand_total: Decimal::ZERO,
        }
    }

    /// 添加建議並累加總價值
    ///
    /// 總價值超出 Decimal 範圍時不添加，回傳 `false`。
    pub fn push(&mut self, item: SuggestionItem) -> bool {
        match self.grand_total.checked_add(item.total_value) {
            Some(total) => {
                self.grand_total = total;
                self.items.push(item);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 依產品代碼查找建議
    pub fn item(&self, product_code: &str) -> Option<&SuggestionItem> {
        self.items.iter().find(|i| i.product_code == product_code)
    }

    /// 序列化為 JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for SuggestionReport {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for SuggestionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:<24} {:>10} {:>14} {:>16}",
            "CODE", "NAME", "QTY", "UNIT PRICE", "TOTAL"
        )?;
        for item in &self.items {
            writeln!(
                f,
                "{:<12} {:<24} {:>10} {:>14} {:>16}",
                item.product_code,
                item.product_name,
                item.quantity,
                item.unit_price,
                item.total_value
            )?;
        }
        write!(f, "{:<12} {:>66}", "GRAND TOTAL", self.grand_total)
    }
}
