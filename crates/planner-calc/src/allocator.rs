//! 生產分配主計算器

use planner_core::{CatalogSnapshot, PlannerConfig, ProductionSuggestion, StockSnapshot};

use crate::{AllocationResult, BottleneckCalculator, SkippedProduct, WorkingStock};

/// 生產分配計算器
///
/// 依單價由高至低逐一處理產品，每個產品取瓶頸原物料可支撐的最大數量，
/// 並立即從工作庫存扣除，較低價產品只能使用剩餘的原物料。
/// 這是貪婪法，不保證總產值最大。
pub struct ProductionAllocator {
    config: PlannerConfig,
}

impl ProductionAllocator {
    /// 創建新的分配計算器
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 主分配計算入口
    pub fn allocate(
        &self,
        catalog: &CatalogSnapshot,
        stock: &StockSnapshot,
    ) -> planner_core::Result<AllocationResult> {
        tracing::info!(
            "開始生產分配計算：產品 {} 項，原物料 {} 項",
            catalog.len(),
            stock.len()
        );

        let uncovered: Vec<_> = catalog
            .referenced_materials()
            .into_iter()
            .filter(|id| stock.available(*id) == 0)
            .collect();
        if catalog.is_empty() {
            tracing::debug!("產品目錄為空");
        } else if stock.is_depleted() {
            tracing::warn!("原物料庫存全部為零，不會產生任何建議");
        } else if !uncovered.is_empty() {
            tracing::warn!("BOM 引用但庫存為零的原物料: {:?}", uncovered);
        }

        let start_time = std::time::Instant::now();
        let mut result = AllocationResult::empty();

        // Step 1: 依單價排序（同價依ID）
        let ordered = crate::ordering::prioritize(catalog.products());

        // Step 2: 複製工作庫存
        let mut working = WorkingStock::from_snapshot(stock);

        // Step 3: 逐產品分配
        for product in ordered {
            let bottleneck = match BottleneckCalculator::calculate(product, &working) {
                Some(bottleneck) => bottleneck,
                None => {
                    tracing::debug!("產品 {} 沒有 BOM，跳過", product.code);
                    self.record_skipped(&mut result, SkippedProduct::no_recipe(product.id));
                    continue;
                }
            };

            if bottleneck.producible == 0 {
                tracing::debug!(
                    "產品 {} 受原物料 {} 限制，無法生產",
                    product.code,
                    bottleneck.material_id
                );
                self.record_skipped(
                    &mut result,
                    SkippedProduct::insufficient_stock(product.id, bottleneck.material_id),
                );
                continue;
            }

            let quantity = bottleneck.producible;
            for capacity in &bottleneck.capacities {
                let used = capacity.required_per_unit * quantity;
                if let Err(err) = working.consume(capacity.material_id, used) {
                    tracing::error!("產品 {} 扣減庫存失敗: {}", product.code, err);
                    return Err(err);
                }
            }

            tracing::debug!(
                "產品 {} 建議生產 {} 單位（瓶頸原物料 {}）",
                product.code,
                quantity,
                bottleneck.material_id
            );

            if let Err(err) = result.plan.push(ProductionSuggestion::new(product, quantity)) {
                tracing::error!("產品 {} 產值累計失敗: {}", product.code, err);
                return Err(err);
            }
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("生產分配計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "建議產品數量: {}，總產值: {}",
            result.plan.len(),
            result.plan.total_value()
        );

        Ok(result)
    }

    fn record_skipped(&self, result: &mut AllocationResult, skipped: SkippedProduct) {
        if self.config.record_skipped {
            result.add_skipped(skipped);
        }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

impl Default for ProductionAllocator {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
