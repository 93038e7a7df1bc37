//! 貪婪配置器

use prod_core::{ProductionSnapshot, SnapshotProduct};

use crate::feasibility::FeasibilityCalculator;
use crate::ledger::StockLedger;
use crate::report::{SuggestionItem, SuggestionReport};

/// 單次配置結果
#[derive(Debug, Clone)]
pub struct Allocation {
    /// 生產建議
    pub report: SuggestionReport,

    /// 配置後剩餘庫存
    pub remaining: StockLedger,

    /// 計算耗時（微秒）
    pub calculation_time_us: u128,
}

/// 貪婪配置器
///
/// 依單價由高至低逐一處理產品，每個產品取當下可生產的最大數量並扣減共用庫存，
/// 不回頭修正先前的決定。
pub struct GreedyAllocator;

impl GreedyAllocator {
    /// 計算生產建議
    pub fn allocate(snapshot: &ProductionSnapshot) -> SuggestionReport {
        Self::run(snapshot).report
    }

    /// 計算生產建議並保留剩餘庫存
    pub fn run(snapshot: &ProductionSnapshot) -> Allocation {
        tracing::info!(
            "開始計算生產建議：產品 {} 筆，原物料 {} 筆",
            snapshot.products().len(),
            snapshot.materials().len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 依單價排序
        let ranked = Self::rank_by_price(snapshot.products());

        // Step 2: 建立庫存帳
        let mut ledger = StockLedger::from_products(snapshot, ranked.iter().copied());
        tracing::debug!("庫存帳原物料數量: {}", ledger.len());

        // Step 3: 逐產品配置
        let mut report = SuggestionReport::empty();
        for product in ranked {
            if product.ingredients.is_empty() {
                tracing::debug!("產品 {} 無配方，跳過", product.code);
                continue;
            }

            let feasible = FeasibilityCalculator::feasible_units(snapshot, product, &ledger);
            if feasible == 0 {
                tracing::debug!("產品 {} 庫存不足，跳過", product.code);
                continue;
            }

            // 總價值須落在 Decimal 範圍內
            let cap = FeasibilityCalculator::value_cap(product.price, report.grand_total);
            let units = feasible.min(cap);
            if units < feasible {
                tracing::warn!(
                    "產品 {} 可生產 {} 單位，總價值超出範圍，限制為 {} 單位",
                    product.code,
                    feasible,
                    units
                );
            }
            if units == 0 {
                continue;
            }

            let Some(item) = SuggestionItem::try_new(product, units) else {
                tracing::warn!("產品 {} 總價值超出範圍，跳過", product.code);
                continue;
            };
            tracing::debug!(
                "產品 {} 建議生產 {} 單位，價值 {}",
                product.code,
                units,
                item.total_value
            );
            if !report.push(item) {
                tracing::warn!("產品 {} 總價值超出範圍，跳過", product.code);
                continue;
            }

            ledger.consume_for(snapshot, product, units);
        }

        let elapsed = start_time.elapsed();
        tracing::info!(
            "生產建議計算完成，耗時 {:?}，建議 {} 筆，總價值 {}",
            elapsed,
            report.items.len(),
            report.grand_total
        );

        Allocation {
            report,
            remaining: ledger,
            calculation_time_us: elapsed.as_micros(),
        }
    }

    /// 依單價遞減排序；`sort_by` 為穩定排序，同價產品維持快照順序
    fn rank_by_price(products: &[SnapshotProduct]) -> Vec<&SnapshotProduct> {
        let mut ranked: Vec<&SnapshotProduct> = products.iter().collect();
        ranked.sort_by(|a, b| b.price.cmp(&a.price));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prod_core::{MaterialRef, ProductId, RawMaterial, SnapshotBuilder, SnapshotIngredient};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn uses(material: MaterialRef, quantity: &str) -> SnapshotIngredient {
        SnapshotIngredient {
            material,
            quantity_required: dec(quantity),
        }
    }

    fn add(
        builder: &mut SnapshotBuilder,
        code: &str,
        price: &str,
        ingredients: Vec<SnapshotIngredient>,
    ) {
        builder.add_product(
            ProductId::new(),
            code,
            format!("Product {code}"),
            dec(price),
            ingredients,
        );
    }

    #[test]
    fn test_higher_price_wins_shared_material() {
        let sugar = RawMaterial::new("RM-002", "Sugar", dec("500"));

        let mut builder = SnapshotBuilder::new();
        let sugar_ref = builder.intern_material(&sugar);
        add(&mut builder, "P-002", "10.00", vec![uses(sugar_ref, "100")]);
        add(&mut builder, "P-001", "100.00", vec![uses(sugar_ref, "100")]);
        let snapshot = builder.build();

        let allocation = GreedyAllocator::run(&snapshot);

        assert_eq!(allocation.report.items.len(), 1);
        assert_eq!(allocation.report.items[0].product_code, "P-001");
        assert_eq!(allocation.report.items[0].quantity, 5);
        assert_eq!(allocation.report.grand_total, dec("500.00"));
        assert_eq!(allocation.remaining.available(sugar.id), Decimal::ZERO);
    }

    #[test]
    fn test_lower_ranked_uses_leftover() {
        let material = RawMaterial::new("RM-005", "Material", dec("1000"));

        let mut builder = SnapshotBuilder::new();
        let material_ref = builder.intern_material(&material);
        add(&mut builder, "P-001", "50.00", vec![uses(material_ref, "400")]);
        add(&mut builder, "P-002", "20.00", vec![uses(material_ref, "100")]);
        let snapshot = builder.build();

        let report = GreedyAllocator::allocate(&snapshot);

        assert_eq!(report.items.len(), 2);
        assert_eq!(report.item("P-001").map(|i| i.quantity), Some(2));
        assert_eq!(report.item("P-002").map(|i| i.quantity), Some(2));
        assert_eq!(report.grand_total, dec("140.00"));
    }

    #[test]
    fn test_leftover_below_requirement() {
        let flour = RawMaterial::new("RM-004", "BigFlour", dec("1000"));

        let mut builder = SnapshotBuilder::new();
        let flour_ref = builder.intern_material(&flour);
        add(&mut builder, "P-001", "50.00", vec![uses(flour_ref, "300")]);
        add(&mut builder, "P-002", "20.00", vec![uses(flour_ref, "200")]);
        let snapshot = builder.build();

        let allocation = GreedyAllocator::run(&snapshot);

        assert_eq!(allocation.report.items.len(), 1);
        assert_eq!(allocation.report.items[0].quantity, 3);
        assert_eq!(allocation.remaining.available(flour.id), dec("100"));
    }

    #[test]
    fn test_zero_stock_excluded() {
        let yeast = RawMaterial::new("RM-003", "Yeast", Decimal::ZERO);

        let mut builder = SnapshotBuilder::new();
        let yeast_ref = builder.intern_material(&yeast);
        add(&mut builder, "P-001", "10.00", vec![uses(yeast_ref, "50")]);
        let snapshot = builder.build();

        let report = GreedyAllocator::allocate(&snapshot);

        assert!(report.is_empty());
        assert_eq!(report.grand_total, dec("0.00"));
    }

    #[test]
    fn test_product_without_ingredients_ignored() {
        let mut builder = SnapshotBuilder::new();
        add(&mut builder, "P-001", "999.00", Vec::new());
        let snapshot = builder.build();

        let report = GreedyAllocator::allocate(&snapshot);

        assert!(report.is_empty());
        assert_eq!(report.grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_empty_snapshot() {
        let report = GreedyAllocator::allocate(&ProductionSnapshot::empty());

        assert!(report.is_empty());
        assert_eq!(report.grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_equal_prices_keep_snapshot_order() {
        let flour = RawMaterial::new("RM-001", "Flour", dec("300"));

        let mut builder = SnapshotBuilder::new();
        let flour_ref = builder.intern_material(&flour);
        add(&mut builder, "P-A", "25.0", vec![uses(flour_ref, "100")]);
        add(&mut builder, "P-B", "25.00", vec![uses(flour_ref, "100")]);
        add(&mut builder, "P-C", "30", vec![uses(flour_ref, "250")]);
        let snapshot = builder.build();

        let report = GreedyAllocator::allocate(&snapshot);

        // P-C 先取 250，剩 50 不足任何同價產品
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].product_code, "P-C");

        let mut builder = SnapshotBuilder::new();
        let flour_ref = builder.intern_material(&flour);
        add(&mut builder, "P-B", "25.00", vec![uses(flour_ref, "100")]);
        add(&mut builder, "P-A", "25.0", vec![uses(flour_ref, "100")]);
        let snapshot = builder.build();

        let report = GreedyAllocator::allocate(&snapshot);

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].product_code, "P-B");
        assert_eq!(report.items[0].quantity, 3);
    }

    #[test]
    fn test_multi_ingredient_bottleneck_limits_consumption() {
        let flour = RawMaterial::new("RM-001", "Flour", dec("1000"));
        let sugar = RawMaterial::new("RM-002", "Sugar", dec("150"));

        let mut builder = SnapshotBuilder::new();
        let flour_ref = builder.intern_material(&flour);
        let sugar_ref = builder.intern_material(&sugar);
        add(
            &mut builder,
            "P-001",
            "80.00",
            vec![uses(flour_ref, "200"), uses(sugar_ref, "50")],
        );
        add(&mut builder, "P-002", "5.50", vec![uses(flour_ref, "150")]);
        let snapshot = builder.build();

        let allocation = GreedyAllocator::run(&snapshot);
        let report = &allocation.report;

        // 糖只夠 3 單位，麵粉剩 400 給 P-002
        assert_eq!(report.item("P-001").map(|i| i.quantity), Some(3));
        assert_eq!(report.item("P-002").map(|i| i.quantity), Some(2));
        assert_eq!(report.grand_total, dec("251.00"));
        assert_eq!(allocation.remaining.available(flour.id), dec("100"));
        assert_eq!(allocation.remaining.available(sugar.id), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_requirements_are_exact() {
        let cocoa = RawMaterial::new("RM-010", "Cocoa", dec("0.9"));

        let mut builder = SnapshotBuilder::new();
        let cocoa_ref = builder.intern_material(&cocoa);
        add(&mut builder, "P-001", "12.34", vec![uses(cocoa_ref, "0.3")]);
        let snapshot = builder.build();

        let report = GreedyAllocator::allocate(&snapshot);

        assert_eq!(report.items[0].quantity, 3);
        assert_eq!(report.grand_total, dec("37.02"));
    }

    #[test]
    fn test_non_positive_requirements_still_consumed() {
        let flour = RawMaterial::new("RM-001", "Flour", dec("1000"));
        let sugar = RawMaterial::new("RM-002", "Sugar", dec("20"));
        let yeast = RawMaterial::new("RM-003", "Yeast", dec("40"));

        let mut builder = SnapshotBuilder::new();
        let flour_ref = builder.intern_material(&flour);
        let sugar_ref = builder.intern_material(&sugar);
        let yeast_ref = builder.intern_material(&yeast);
        add(
            &mut builder,
            "P-001",
            "50.00",
            vec![uses(flour_ref, "100"), uses(sugar_ref, "-5"), uses(yeast_ref, "0")],
        );
        add(&mut builder, "P-002", "10.00", vec![uses(sugar_ref, "10")]);
        let snapshot = builder.build();

        let allocation = GreedyAllocator::run(&snapshot);
        let report = &allocation.report;

        // P-001 生產 10 單位使糖回補 50
        assert_eq!(report.item("P-001").map(|i| i.quantity), Some(10));
        assert_eq!(report.item("P-002").map(|i| i.quantity), Some(7));
        assert_eq!(report.grand_total, dec("570.00"));
        assert_eq!(allocation.remaining.available(flour.id), Decimal::ZERO);
        assert_eq!(allocation.remaining.available(sugar.id), Decimal::ZERO);
        assert_eq!(allocation.remaining.available(yeast.id), dec("40"));
    }

    #[test]
    fn test_total_value_capped_to_decimal_range() {
        let salt = RawMaterial::new("RM-020", "Salt", dec("1000000000000000000000"));

        let mut builder = SnapshotBuilder::new();
        let salt_ref = builder.intern_material(&salt);
        add(&mut builder, "P-001", "10000000000", vec![uses(salt_ref, "0.01")]);
        add(&mut builder, "P-002", "20", vec![uses(salt_ref, "0.01")]);
        let snapshot = builder.build();

        let allocation = GreedyAllocator::run(&snapshot);
        let report = &allocation.report;
        let top = &report.items[0];

        let cap = FeasibilityCalculator::value_cap(dec("10000000000"), Decimal::ZERO);
        assert_eq!(top.product_code, "P-001");
        assert_eq!(top.quantity, cap);
        assert_eq!(top.total_value, top.unit_price * Decimal::from(top.quantity));

        let summed = report
            .items
            .iter()
            .fold(Decimal::ZERO, |total, item| total + item.total_value);
        assert_eq!(report.grand_total, summed);

        let consumed = dec("0.01") * Decimal::from(cap);
        let leftover = allocation.remaining.available(salt.id);
        assert!(leftover >= Decimal::ZERO);
        assert!(leftover <= salt.stock_quantity - consumed);
    }

    #[test]
    fn test_idempotent() {
        let flour = RawMaterial::new("RM-001", "Flour", dec("1000"));

        let mut builder = SnapshotBuilder::new();
        let flour_ref = builder.intern_material(&flour);
        add(&mut builder, "P-001", "50.00", vec![uses(flour_ref, "100")]);
        add(&mut builder, "P-002", "30.00", vec![uses(flour_ref, "200")]);
        let snapshot = builder.build();

        assert_eq!(GreedyAllocator::allocate(&snapshot), GreedyAllocator::allocate(&snapshot));
    }
}
