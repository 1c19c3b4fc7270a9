//! # Production Allocation Engine
//!
//! 依產品單價優先、以瓶頸原物料決定產量的貪婪分配引擎

pub mod allocator;
pub mod bottleneck;
pub mod ordering;
pub mod working_stock;

// Re-export 主要類型
pub use allocator::ProductionAllocator;
pub use bottleneck::{Bottleneck, BottleneckCalculator, MaterialCapacity};
pub use working_stock::WorkingStock;

use planner_core::{MaterialId, ProductId, ProductionPlan};
use serde::Serialize;

/// 分配計算結果
#[derive(Debug, Clone)]
pub struct AllocationResult {
    /// 生產計劃
    pub plan: ProductionPlan,

    /// 被跳過的產品
    pub skipped: Vec<SkippedProduct>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl AllocationResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            plan: ProductionPlan::empty(),
            skipped: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加跳過記錄
    pub fn add_skipped(&mut self, skipped: SkippedProduct) {
        self.skipped.push(skipped);
    }
}

/// 被跳過的產品及原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedProduct {
    pub product_id: ProductId,
    pub reason: SkipReason,
}

impl SkippedProduct {
    pub fn no_recipe(product_id: ProductId) -> Self {
        Self {
            product_id,
            reason: SkipReason::NoRecipe,
        }
    }

    pub fn insufficient_stock(product_id: ProductId, bottleneck_material: MaterialId) -> Self {
        Self {
            product_id,
            reason: SkipReason::InsufficientStock {
                bottleneck_material,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// 未定義 BOM
    NoRecipe,
    /// 瓶頸原物料不足以生產一單位
    InsufficientStock { bottleneck_material: MaterialId },
}
