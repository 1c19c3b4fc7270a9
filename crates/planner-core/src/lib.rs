//! # Planner Core
//!
//! 生產建議的核心資料模型與類型定義

pub mod catalog;
pub mod config;
pub mod material;
pub mod plan;
pub mod product;
pub mod stock;

// Re-export 主要類型
pub use catalog::CatalogSnapshot;
pub use config::PlannerConfig;
pub use material::RawMaterial;
pub use plan::{ProductionPlan, ProductionSuggestion};
pub use product::{BomEntry, Product};
pub use stock::StockSnapshot;

/// 產品ID
pub type ProductId = u64;

/// 原物料ID
pub type MaterialId = u64;

/// 生產建議錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("資料來源無法使用: {0}")]
    SourceUnavailable(String),

    #[error("庫存扣減溢位：物料 {material_id} 可用 {available}，需扣減 {requested}")]
    StockUnderflow {
        material_id: MaterialId,
        available: u64,
        requested: u64,
    },

    #[error("產品 {product_id} 的產值超出可表示範圍")]
    ValueOverflow { product_id: ProductId },

    #[error("產品 {product_id} 的物料 {material_id} 用量必須至少為 1")]
    InvalidQuantity {
        product_id: ProductId,
        material_id: MaterialId,
    },

    #[error("產品 {product_id} 的價格不可為負數: {price}")]
    NegativePrice {
        product_id: ProductId,
        price: rust_decimal::Decimal,
    },

    #[error("產品 {product_id} 已關聯物料 {material_id}")]
    DuplicateBomEntry {
        product_id: ProductId,
        material_id: MaterialId,
    },

    #[error("重複的產品ID: {0}")]
    DuplicateProduct(ProductId),

    #[error("重複的原物料ID: {0}")]
    DuplicateMaterial(MaterialId),

    #[error("重複的代碼: {0}")]
    DuplicateCode(String),

    #[error("配置錯誤: {0}")]
    Config(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
