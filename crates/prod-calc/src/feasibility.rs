//! 可生產數量計算

use prod_core::{ProductionSnapshot, SnapshotProduct};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ledger::StockLedger;

/// 可生產數量計算器
pub struct FeasibilityCalculator;

impl FeasibilityCalculator {
    /// 依目前庫存計算產品最多可生產的整數單位
    ///
    /// 取所有正用量配方 floor(可用 ÷ 用量) 的最小值；
    /// 用量不為正的配方不構成限制。沒有任何限制時回傳 0。
    pub fn feasible_units(
        snapshot: &ProductionSnapshot,
        product: &SnapshotProduct,
        ledger: &StockLedger,
    ) -> u64 {
        let mut feasible: Option<Decimal> = None;

        for ingredient in &product.ingredients {
            if ingredient.quantity_required <= Decimal::ZERO {
                continue;
            }

            let available = snapshot
                .material(ingredient.material)
                .map(|m| ledger.available(m.id))
                .unwrap_or(Decimal::ZERO);

            let units = Self::floor_div(available, ingredient.quantity_required);
            feasible = Some(feasible.map_or(units, |f| f.min(units)));
        }

        feasible.and_then(|units| units.to_u64()).unwrap_or(0)
    }

    /// 精確下取整除法，結果介於 0 與 u64::MAX 之間
    ///
    /// `required` 必須為正。
    pub fn floor_div(available: Decimal, required: Decimal) -> Decimal {
        debug_assert!(required > Decimal::ZERO);

        let ceiling = Decimal::from(u64::MAX);
        if available <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut units = match available.checked_div(required) {
            Some(quotient) => quotient.trunc().min(ceiling),
            None => return ceiling,
        };

        // 商在第 28 位有效數字捨入，校正至真正的下取整
        while units > Decimal::ZERO && Self::exceeds(units, required, available) {
            units -= Decimal::ONE;
        }
        while units < ceiling && !Self::exceeds(units + Decimal::ONE, required, available) {
            units += Decimal::ONE;
        }

        units
    }

    /// 總價值累計至 `grand_total` 後，單價 `price` 仍不超出 Decimal 範圍的最大單位數
    pub fn value_cap(price: Decimal, grand_total: Decimal) -> u64 {
        if price.is_zero() {
            return u64::MAX;
        }

        let headroom = Decimal::MAX - grand_total.abs();
        Self::floor_div(headroom, price.abs())
            .to_u64()
            .unwrap_or(0)
    }

    fn exceeds(units: Decimal, required: Decimal, available: Decimal) -> bool {
        units
            .checked_mul(required)
            .map_or(true, |consumed| consumed > available)
    }
}
