//! 目錄寫入驗證

use std::collections::HashSet;

use prod_core::{CatalogConfig, ProductionError, Result};
use rust_decimal::Decimal;

use crate::request::{ProductRequest, RawMaterialRequest};

/// 驗證原物料請求
pub fn validate_raw_material(request: &RawMaterialRequest, config: &CatalogConfig) -> Result<()> {
    require_text("code", &request.code)?;
    require_text("name", &request.name)?;
    require_min("stockQuantity", request.stock_quantity, config.min_stock_quantity)
}

/// 驗證產品請求（不含原物料是否存在）
pub fn validate_product(request: &ProductRequest, config: &CatalogConfig) -> Result<()> {
    require_text("code", &request.code)?;
    require_text("name", &request.name)?;
    require_min("price", request.price, config.min_price)?;

    let mut seen = HashSet::new();
    for ingredient in &request.ingredients {
        require_min(
            "quantityRequired",
            ingredient.quantity_required,
            config.min_quantity_required,
        )?;
        if !seen.insert(ingredient.raw_material_id) {
            return Err(ProductionError::DuplicateIngredient(
                ingredient.raw_material_id,
            ));
        }
    }

    Ok(())
}

fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProductionError::invalid(field, "不可為空白"));
    }
    Ok(())
}

fn require_min(field: &'static str, value: Decimal, min: Decimal) -> Result<()> {
    if value < min {
        return Err(ProductionError::invalid(
            field,
            format!("{value} 小於最小值 {min}"),
        ));
    }
    Ok(())
}
