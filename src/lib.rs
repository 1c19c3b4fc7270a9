//! # Production Planner
//!
//! 依原物料庫存計算生產建議：對外提供資料來源介面、計劃服務與日誌初始化

pub mod logging;
pub mod service;

// Re-export 主要類型
pub use planner_calc::{
    AllocationResult, Bottleneck, BottleneckCalculator, MaterialCapacity, ProductionAllocator,
    SkipReason, SkippedProduct, WorkingStock,
};
pub use planner_core::{
    BomEntry, CatalogSnapshot, MaterialId, PlannerConfig, PlannerError, Product, ProductId,
    ProductionPlan, ProductionSuggestion, RawMaterial, Result, StockSnapshot,
};
pub use rust_decimal::Decimal;
pub use service::{InMemorySource, ProductionPlanner, SnapshotSource};
