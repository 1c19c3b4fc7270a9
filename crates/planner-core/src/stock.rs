//! 庫存快照

use std::collections::{HashMap, HashSet};

use crate::{MaterialId, PlannerError, RawMaterial, Result};

/// 庫存快照（某一時點的原物料可用量，唯讀）
///
/// 未出現在快照中的原物料視為可用量 0。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockSnapshot {
    quantities: HashMap<MaterialId, u64>,
}

impl StockSnapshot {
    /// 由原物料清單建立快照
    pub fn from_materials(materials: &[RawMaterial]) -> Result<Self> {
        let mut codes = HashSet::new();
        let mut quantities = HashMap::with_capacity(materials.len());

        for material in materials {
            if !codes.insert(material.code.as_str()) {
                return Err(PlannerError::DuplicateCode(material.code.clone()));
            }
            if quantities.insert(material.id, material.stock).is_some() {
                return Err(PlannerError::DuplicateMaterial(material.id));
            }
        }

        Ok(Self { quantities })
    }

    /// 由（原物料ID, 數量）配對建立快照
    pub fn from_quantities<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (MaterialId, u64)>,
    {
        let mut quantities = HashMap::new();
        for (material_id, quantity) in pairs {
            if quantities.insert(material_id, quantity).is_some() {
                return Err(PlannerError::DuplicateMaterial(material_id));
            }
        }
        Ok(Self { quantities })
    }

    /// 空快照
    pub fn empty() -> Self {
        Self::default()
    }

    /// 查詢可用量（缺省為 0）
    pub fn available(&self, material_id: MaterialId) -> u64 {
        self.quantities.get(&material_id).copied().unwrap_or(0)
    }

    /// 原始數量映射
    pub fn quantities(&self) -> &HashMap<MaterialId, u64> {
        &self.quantities
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// 快照中是否所有原物料皆無庫存
    pub fn is_depleted(&self) -> bool {
        self.quantities.values().all(|&qty| qty == 0)
    }
}
