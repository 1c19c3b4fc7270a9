//! 瓶頸原物料計算

use planner_core::{MaterialId, Product};

use crate::WorkingStock;

/// 單一 BOM 明細的產能
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialCapacity {
    /// 原物料ID
    pub material_id: MaterialId,
    /// 目前剩餘量
    pub available: u64,
    /// 單位用量
    pub required_per_unit: u64,
    /// 可支撐的產品數量（剩餘量 / 單位用量，向下取整）
    pub possible_units: u64,
}

/// 瓶頸計算結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bottleneck {
    /// 最受限的原物料（同為最小值時取 BOM 中較前者）
    pub material_id: MaterialId,
    /// 可生產數量（各明細 possible_units 的最小值）
    pub producible: u64,
    /// 各明細產能，依 BOM 順序
    pub capacities: Vec<MaterialCapacity>,
}

/// 瓶頸計算器
pub struct BottleneckCalculator;

impl BottleneckCalculator {
    /// 計算產品在目前工作庫存下的可生產數量
    ///
    /// 產品沒有 BOM 時回傳 `None`。
    pub fn calculate(product: &Product, stock: &WorkingStock) -> Option<Bottleneck> {
        let capacities: Vec<MaterialCapacity> = product
            .bom
            .iter()
            // 用量為 0 的明細不構成限制
            .filter(|entry| entry.required_quantity > 0)
            .map(|entry| {
                let available = stock.available(entry.material_id);
                MaterialCapacity {
                    material_id: entry.material_id,
                    available,
                    required_per_unit: entry.required_quantity,
                    possible_units: available / entry.required_quantity,
                }
            })
            .collect();

        // min_by_key 遇到相同值時回傳第一個
        let limiting = *capacities.iter().min_by_key(|c| c.possible_units)?;

        Some(Bottleneck {
            material_id: limiting.material_id,
            producible: limiting.possible_units,
            capacities,
        })
    }
}
