//! 生產建議服務
//!
//! 從外部資料來源讀取目錄與庫存快照後交給分配引擎。
//! 資料來源的錯誤在此向上傳遞，引擎本身只接收已成功取得的快照。

use planner_calc::{AllocationResult, ProductionAllocator};
use planner_core::{
    CatalogSnapshot, PlannerConfig, PlannerError, Product, ProductionPlan, RawMaterial, Result,
    StockSnapshot,
};
use serde::{Deserialize, Serialize};

/// 快照資料來源（外部產品/庫存系統）
pub trait SnapshotSource {
    /// 讀取所有產品及其 BOM
    fn fetch_catalog(&self) -> Result<CatalogSnapshot>;

    /// 讀取原物料庫存
    fn fetch_stock(&self) -> Result<StockSnapshot>;
}

impl<S: SnapshotSource + ?Sized> SnapshotSource for &S {
    fn fetch_catalog(&self) -> Result<CatalogSnapshot> {
        (**self).fetch_catalog()
    }

    fn fetch_stock(&self) -> Result<StockSnapshot> {
        (**self).fetch_stock()
    }
}

/// 記憶體資料來源
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemorySource {
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub materials: Vec<RawMaterial>,
}

impl InMemorySource {
    pub fn new(products: Vec<Product>, materials: Vec<RawMaterial>) -> Self {
        Self {
            products,
            materials,
        }
    }

    /// 從 JSON 文件載入（`{ "products": [...], "materials": [...] }`）
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PlannerError::SourceUnavailable(e.to_string()))
    }
}

impl SnapshotSource for InMemorySource {
    fn fetch_catalog(&self) -> Result<CatalogSnapshot> {
        CatalogSnapshot::new(self.products.clone())
    }

    fn fetch_stock(&self) -> Result<StockSnapshot> {
        StockSnapshot::from_materials(&self.materials)
    }
}

/// 生產建議服務
pub struct ProductionPlanner<S> {
    source: S,
    allocator: ProductionAllocator,
}

impl<S: SnapshotSource> ProductionPlanner<S> {
    /// 創建新的生產建議服務
    pub fn new(source: S, config: PlannerConfig) -> Self {
        Self {
            source,
            allocator: ProductionAllocator::new(config),
        }
    }

    /// 計算目前的生產建議
    ///
    /// 配置了 `value_scale` 時單價取整後重新累計總產值，否則原值輸出。
    pub fn suggest(&self) -> Result<ProductionPlan> {
        let result = self.suggest_detailed()?;
        match self.allocator.config().value_scale {
            Some(scale) => result.plan.rounded(scale),
            None => Ok(result.plan),
        }
    }

    /// 計算生產建議並保留完整的分配結果（含跳過記錄與耗時）
    pub fn suggest_detailed(&self) -> Result<AllocationResult> {
        let catalog = self.source.fetch_catalog().map_err(|e| {
            tracing::warn!("讀取產品目錄失敗: {}", e);
            e
        })?;
        let stock = self.source.fetch_stock().map_err(|e| {
            tracing::warn!("讀取原物料庫存失敗: {}", e);
            e
        })?;

        self.allocator.allocate(&catalog, &stock)
    }

    /// 獲取資料來源引用
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::cell::Cell;

    /// 無法連線的資料來源，記錄被呼叫次數
    #[derive(Default)]
    struct OfflineSource {
        stock_calls: Cell<u32>,
    }

    impl SnapshotSource for OfflineSource {
        fn fetch_catalog(&self) -> Result<CatalogSnapshot> {
            Err(PlannerError::SourceUnavailable("catalog store offline".to_string()))
        }

        fn fetch_stock(&self) -> Result<StockSnapshot> {
            self.stock_calls.set(self.stock_calls.get() + 1);
            Ok(StockSnapshot::empty())
        }
    }

    fn bike_source() -> InMemorySource {
        InMemorySource::new(
            vec![
                Product::new(1, "BIKE-001", "Bike", Decimal::new(19999, 2))
                    .with_material(1, 1)
                    .with_material(2, 2),
                Product::new(2, "WHEEL-001", "Wheel", Decimal::new(2550, 2)).with_material(2, 1),
            ],
            vec![
                RawMaterial::new(1, "FRAME", "Frame", 3),
                RawMaterial::new(2, "RIM", "Rim", 7),
            ],
        )
    }

    #[test]
    fn test_suggest() {
        let planner = ProductionPlanner::new(bike_source(), PlannerConfig::default());
        let plan = planner.suggest().unwrap();

        // Bike: min(3/1, 7/2) = 3 → Rim 剩 1；Wheel: 1
        assert_eq!(plan.quantity_of(1), Some(3));
        assert_eq!(plan.quantity_of(2), Some(1));
        assert_eq!(plan.total_value(), Decimal::new(62547, 2));
    }

    #[test]
    fn test_upstream_failure_propagates() {
        let source = OfflineSource::default();
        let planner = ProductionPlanner::new(&source, PlannerConfig::default());

        let err = planner.suggest().unwrap_err();
        assert!(matches!(err, PlannerError::SourceUnavailable(_)));
        assert_eq!(source.stock_calls.get(), 0);
    }

    #[test]
    fn test_invalid_catalog_propagates() {
        let mut source = bike_source();
        source.products[0].price = Decimal::from(-5);

        let planner = ProductionPlanner::new(source, PlannerConfig::default());
        assert!(matches!(
            planner.suggest().unwrap_err(),
            PlannerError::NegativePrice { product_id: 1, .. }
        ));
    }

    #[test]
    fn test_value_scale_applied() {
        let source = InMemorySource::new(
            vec![Product::new(1, "P", "P", Decimal::new(3333, 3)).with_material(1, 1)],
            vec![RawMaterial::new(1, "M", "M", 2)],
        );
        let planner = ProductionPlanner::new(source, PlannerConfig::new().with_value_scale(1));

        let plan = planner.suggest().unwrap();
        assert_eq!(plan.suggestions()[0].product_price, Decimal::new(33, 1));
        assert_eq!(plan.total_value(), Decimal::new(66, 1));

        let detailed = planner.suggest_detailed().unwrap();
        assert_eq!(detailed.plan.total_value(), Decimal::new(6666, 3));
    }

    #[test]
    fn test_prices_unrounded_by_default() {
        let source = InMemorySource::new(
            vec![Product::new(1, "P", "P", Decimal::new(19999, 3)).with_material(1, 1)],
            vec![RawMaterial::new(1, "M", "M", 3)],
        );
        let plan = ProductionPlanner::new(source, PlannerConfig::default())
            .suggest()
            .unwrap();

        assert_eq!(plan.suggestions()[0].product_price, Decimal::new(19999, 3));
        assert_eq!(plan.total_value(), Decimal::new(59997, 3));
    }

    #[test]
    fn test_value_overflow_propagates() {
        let source = InMemorySource::new(
            vec![Product::new(9, "P", "P", Decimal::from(10_000_000_000u64)).with_material(1, 1)],
            vec![RawMaterial::new(1, "M", "M", u64::MAX)],
        );
        let planner = ProductionPlanner::new(source, PlannerConfig::default());

        assert!(matches!(
            planner.suggest().unwrap_err(),
            PlannerError::ValueOverflow { product_id: 9 }
        ));
    }

    #[test]
    fn test_source_from_json() {
        let source = InMemorySource::from_json_str(
            r#"{
                "products": [
                    { "id": 1, "code": "A", "name": "A", "price": "100",
                      "bom": [{ "material_id": 1, "required_quantity": 2 }] },
                    { "id": 2, "code": "B", "name": "B", "price": 50 }
                ],
                "materials": [{ "id": 1, "code": "M1", "name": "M1", "stock": 5 }]
            }"#,
        )
        .unwrap();

        assert_eq!(source.products.len(), 2);
        assert!(!source.products[1].has_recipe());

        let plan = ProductionPlanner::new(source, PlannerConfig::default())
            .suggest()
            .unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.total_value(), Decimal::from(200));
    }

    #[test]
    fn test_source_from_invalid_json() {
        assert!(matches!(
            InMemorySource::from_json_str("{ broken"),
            Err(PlannerError::SourceUnavailable(_))
        ));
    }
}
