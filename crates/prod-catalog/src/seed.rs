//! JSON 初始資料載入

use prod_core::{CatalogConfig, ProductionError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::request::{ProductRequest, RawMaterialRequest};
use crate::InMemoryCatalog;

/// 以原物料代碼參照的配方項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSeed {
    pub raw_material_code: String,
    pub quantity_required: Decimal,
}

/// 產品初始資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSeed {
    pub code: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub ingredients: Vec<IngredientSeed>,
}

/// 目錄初始資料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogSeed {
    pub raw_materials: Vec<RawMaterialRequest>,
    pub products: Vec<ProductSeed>,
}

impl CatalogSeed {
    /// 從 JSON 解析
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ProductionError::Catalog(e.to_string()))
    }
}

impl InMemoryCatalog {
    /// 依初始資料建立目錄，所有記錄都經過一般寫入驗證
    pub fn from_seed(seed: CatalogSeed, config: CatalogConfig) -> Result<Self> {
        let mut catalog = Self::new(config);

        for request in seed.raw_materials {
            catalog.create_raw_material(request)?;
        }

        for product in seed.products {
            let mut request = ProductRequest::new(product.code, product.name, product.price);
            for ingredient in product.ingredients {
                let material = catalog
                    .raw_material_by_code(&ingredient.raw_material_code)
                    .ok_or(ProductionError::UnknownRawMaterialCode(
                        ingredient.raw_material_code,
                    ))?;
                request = request.with_ingredient(material.id, ingredient.quantity_required);
            }
            catalog.create_product(request)?;
        }

        tracing::info!(
            "目錄載入完成：原物料 {} 筆，產品 {} 筆",
            catalog.list_raw_materials().len(),
            catalog.list_products().len()
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAKERY: &str = r#"{
        "rawMaterials": [
            { "code": "RM-001", "name": "Flour", "stockQuantity": "1000" },
            { "code": "RM-002", "name": "Sugar", "stockQuantity": 500 }
        ],
        "products": [
            {
                "code": "P-001", "name": "Cake", "price": "50.00",
                "ingredients": [
                    { "rawMaterialCode": "RM-001", "quantityRequired": "100" },
                    { "rawMaterialCode": "RM-002", "quantityRequired": "20" }
                ]
            },
            { "code": "P-002", "name": "Ghost", "price": "9.99" }
        ]
    }"#;

    #[test]
    fn test_load_seed() {
        let seed = CatalogSeed::from_json(BAKERY).unwrap();
        let catalog = InMemoryCatalog::from_seed(seed, CatalogConfig::default()).unwrap();

        assert_eq!(catalog.list_raw_materials().len(), 2);
        assert_eq!(catalog.list_products().len(), 2);

        let cake = catalog.product_by_code("P-001").unwrap();
        assert_eq!(cake.ingredients.len(), 2);
        assert_eq!(cake.price, Decimal::new(5000, 2));
        assert!(catalog.product_by_code("P-002").unwrap().ingredients.is_empty());
    }

    #[test]
    fn test_unknown_raw_material_code() {
        let seed = CatalogSeed::from_json(
            r#"{ "products": [ { "code": "P-001", "name": "Cake", "price": "5",
                 "ingredients": [
                     { "rawMaterialCode": "RM-404", "quantityRequired": "1" }
                 ] } ] }"#,
        )
        .unwrap();

        assert!(matches!(
            InMemoryCatalog::from_seed(seed, CatalogConfig::default()),
            Err(ProductionError::UnknownRawMaterialCode(code)) if code == "RM-404"
        ));
    }

    #[test]
    fn test_seed_is_validated() {
        let seed = CatalogSeed::from_json(
            r#"{ "rawMaterials": [
                { "code": "RM-001", "name": "Flour", "stockQuantity": "-1" }
            ] }"#,
        )
        .unwrap();

        assert!(InMemoryCatalog::from_seed(seed, CatalogConfig::default()).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CatalogSeed::from_json("[1, 2"),
            Err(ProductionError::Catalog(_))
        ));
    }
}
