//! 產品目錄快照

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::{MaterialId, PlannerError, Product, Result};

/// 產品目錄快照（唯讀）
///
/// 建立時即完成校驗，之後提供給分配引擎的資料必定合法：
/// - 價格不可為負數
/// - 單位用量至少為 1
/// - 同一產品不得重複關聯同一原物料
/// - 產品ID與代碼不得重複
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    products: Vec<Product>,
}

impl CatalogSnapshot {
    /// 創建並校驗目錄快照
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut product_ids = HashSet::new();
        let mut codes = HashSet::new();

        for product in &products {
            if !product_ids.insert(product.id) {
                return Err(PlannerError::DuplicateProduct(product.id));
            }
            if !codes.insert(product.code.as_str()) {
                return Err(PlannerError::DuplicateCode(product.code.clone()));
            }
            if product.price < Decimal::ZERO {
                return Err(PlannerError::NegativePrice {
                    product_id: product.id,
                    price: product.price,
                });
            }

            let mut materials = HashSet::new();
            for entry in &product.bom {
                if entry.required_quantity == 0 {
                    return Err(PlannerError::InvalidQuantity {
                        product_id: product.id,
                        material_id: entry.material_id,
                    });
                }
                if !materials.insert(entry.material_id) {
                    return Err(PlannerError::DuplicateBomEntry {
                        product_id: product.id,
                        material_id: entry.material_id,
                    });
                }
            }
        }

        Ok(Self { products })
    }

    /// 空目錄
    pub fn empty() -> Self {
        Self::default()
    }

    /// 所有產品（保持輸入順序）
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// BOM 中引用到的所有原物料ID（已排序、去重）
    pub fn referenced_materials(&self) -> Vec<MaterialId> {
        let mut ids: Vec<MaterialId> = self
            .products
            .iter()
            .flat_map(|p| p.bom.iter().map(|entry| entry.material_id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
