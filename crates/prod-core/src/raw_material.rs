//! 原物料模型

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 原物料ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMaterialId(Uuid);

impl RawMaterialId {
    /// 產生新的原物料ID
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

impl Default for RawMaterialId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RawMaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 原物料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    /// 原物料ID
    pub id: RawMaterialId,

    /// 原物料代碼（唯一）
    pub code: String,

    /// 名稱
    pub name: String,

    /// 現有庫存
    pub stock_quantity: Decimal,
}

impl RawMaterial {
    /// 創建新的原物料記錄
    pub fn new(code: impl Into<String>, name: impl Into<String>, stock_quantity: Decimal) -> Self {
        Self::with_id(RawMaterialId::new(), code, name, stock_quantity)
    }

    /// 以既有ID創建原物料記錄
    pub fn with_id(
        id: RawMaterialId,
        code: impl Into<String>,
        name: impl Into<String>,
        stock_quantity: Decimal,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            stock_quantity,
        }
    }

    /// 檢查是否無庫存
    pub fn is_out_of_stock(&self) -> bool {
        self.stock_quantity <= Decimal::ZERO
    }
}
