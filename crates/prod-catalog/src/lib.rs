//! # Production Catalog
//!
//! 記憶體內的原物料與產品目錄

pub mod request;
pub mod seed;
pub mod validation;

use std::collections::HashMap;

use prod_core::{
    CatalogConfig, CatalogReader, Ingredient, Product, ProductId, ProductionError,
    ProductionSnapshot, RawMaterial, RawMaterialId, Result, SnapshotIngredient,
};

// Re-export 主要類型
pub use request::{IngredientRequest, ProductRequest, RawMaterialRequest};
pub use seed::{CatalogSeed, IngredientSeed, ProductSeed};

/// 記憶體內目錄
///
/// 列表順序即建立順序。寫入操作需要 `&mut self`，
/// 需要共享時由呼叫端自行加鎖。
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    config: CatalogConfig,
    raw_materials: Vec<RawMaterial>,
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// 創建空的目錄
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            raw_materials: Vec::new(),
            products: Vec::new(),
        }
    }

    /// 獲取驗證配置
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ---- 原物料 ----

    pub fn list_raw_materials(&self) -> &[RawMaterial] {
        &self.raw_materials
    }

    pub fn raw_material(&self, id: RawMaterialId) -> Result<&RawMaterial> {
        self.raw_materials
            .iter()
            .find(|m| m.id == id)
            .ok_or(ProductionError::RawMaterialNotFound(id))
    }

    pub fn raw_material_by_code(&self, code: &str) -> Option<&RawMaterial> {
        self.raw_materials.iter().find(|m| m.code == code)
    }

    /// 建立原物料，代碼必須唯一
    pub fn create_raw_material(&mut self, request: RawMaterialRequest) -> Result<RawMaterial> {
        validation::validate_raw_material(&request, &self.config)?;
        if self.raw_material_by_code(&request.code).is_some() {
            return Err(ProductionError::DuplicateCode(request.code));
        }

        let material = RawMaterial::new(request.code, request.name, request.stock_quantity);
        tracing::debug!("建立原物料 {} ({})", material.code, material.id);
        self.raw_materials.push(material.clone());
        Ok(material)
    }

    /// 更新原物料，代碼不可與其他原物料重複
    pub fn update_raw_material(
        &mut self,
        id: RawMaterialId,
        request: RawMaterialRequest,
    ) -> Result<RawMaterial> {
        validation::validate_raw_material(&request, &self.config)?;
        if let Some(existing) = self.raw_material_by_code(&request.code) {
            if existing.id != id {
                return Err(ProductionError::CodeInUse(request.code));
            }
        }

        let material = self
            .raw_materials
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ProductionError::RawMaterialNotFound(id))?;
        material.code = request.code;
        material.name = request.name;
        material.stock_quantity = request.stock_quantity;

        tracing::debug!("更新原物料 {} ({})", material.code, material.id);
        Ok(material.clone())
    }

    /// 刪除原物料，仍被產品使用時拒絕
    pub fn delete_raw_material(&mut self, id: RawMaterialId) -> Result<()> {
        self.raw_material(id)?;
        if let Some(product) = self.products.iter().find(|p| p.uses_raw_material(id)) {
            return Err(ProductionError::RawMaterialInUse {
                raw_material_id: id,
                product_code: product.code.clone(),
            });
        }

        self.raw_materials.retain(|m| m.id != id);
        tracing::debug!("刪除原物料 {}", id);
        Ok(())
    }

    // ---- 產品 ----

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(ProductionError::ProductNotFound(id))
    }

    pub fn product_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// 建立產品，代碼必須唯一且配方原物料必須存在
    pub fn create_product(&mut self, request: ProductRequest) -> Result<Product> {
        validation::validate_product(&request, &self.config)?;
        if self.product_by_code(&request.code).is_some() {
            return Err(ProductionError::DuplicateCode(request.code));
        }
        let ingredients = self.resolve_ingredients(&request)?;

        let product = Product::new(request.code, request.name, request.price)
            .with_ingredients(ingredients);
        tracing::debug!(
            "建立產品 {} ({})，配方 {} 項",
            product.code,
            product.id,
            product.ingredients.len()
        );
        self.products.push(product.clone());
        Ok(product)
    }

    /// 更新產品並整批取代配方
    pub fn update_product(&mut self, id: ProductId, request: ProductRequest) -> Result<Product> {
        validation::validate_product(&request, &self.config)?;
        self.product(id)?;
        if let Some(existing) = self.product_by_code(&request.code) {
            if existing.id != id {
                return Err(ProductionError::CodeInUse(request.code));
            }
        }
        let ingredients = self.resolve_ingredients(&request)?;

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProductionError::ProductNotFound(id))?;
        product.code = request.code;
        product.name = request.name;
        product.price = request.price;
        product.ingredients = ingredients;

        tracing::debug!("更新產品 {} ({})", product.code, product.id);
        Ok(product.clone())
    }

    pub fn delete_product(&mut self, id: ProductId) -> Result<()> {
        self.product(id)?;
        self.products.retain(|p| p.id != id);
        tracing::debug!("刪除產品 {}", id);
        Ok(())
    }

    /// 匯出唯讀快照：產品依建立順序，配方解析至原物料
    pub fn snapshot(&self) -> Result<ProductionSnapshot> {
        let index: HashMap<RawMaterialId, &RawMaterial> =
            self.raw_materials.iter().map(|m| (m.id, m)).collect();

        let mut builder = ProductionSnapshot::builder();
        for product in &self.products {
            let mut ingredients = Vec::with_capacity(product.ingredients.len());
            for ingredient in &product.ingredients {
                let material = index
                    .get(&ingredient.raw_material_id)
                    .ok_or(ProductionError::RawMaterialNotFound(ingredient.raw_material_id))?;
                ingredients.push(SnapshotIngredient {
                    material: builder.intern_material(material),
                    quantity_required: ingredient.quantity_required,
                });
            }
            builder.add_product(
                product.id,
                product.code.clone(),
                product.name.clone(),
                product.price,
                ingredients,
            );
        }

        Ok(builder.build())
    }

    fn resolve_ingredients(&self, request: &ProductRequest) -> Result<Vec<Ingredient>> {
        request
            .ingredients
            .iter()
            .map(|i| {
                self.raw_material(i.raw_material_id)
                    .map(|m| Ingredient::new(m.id, i.quantity_required))
            })
            .collect()
    }
}

impl CatalogReader for InMemoryCatalog {
    fn list_products_with_ingredients(&self) -> Result<ProductionSnapshot> {
        self.snapshot()
    }
}
