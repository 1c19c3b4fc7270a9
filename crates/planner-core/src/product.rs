//! 產品與物料清單（BOM）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MaterialId, ProductId};

/// BOM 明細：每生產一單位產品所需的原物料數量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomEntry {
    /// 原物料ID
    pub material_id: MaterialId,

    /// 單位用量（至少為 1）
    pub required_quantity: u64,
}

impl BomEntry {
    /// 創建新的 BOM 明細
    pub fn new(material_id: MaterialId, required_quantity: u64) -> Self {
        Self {
            material_id,
            required_quantity,
        }
    }
}

/// 成品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: ProductId,

    /// 產品代碼（唯一）
    pub code: String,

    /// 顯示名稱
    pub name: String,

    /// 單價
    pub price: Decimal,

    /// 物料清單
    #[serde(default)]
    pub bom: Vec<BomEntry>,
}

impl Product {
    /// 創建新的產品（無 BOM）
    pub fn new(
        id: ProductId,
        code: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            price,
            bom: Vec::new(),
        }
    }

    /// 建構器模式：添加 BOM 明細
    pub fn with_material(mut self, material_id: MaterialId, required_quantity: u64) -> Self {
        self.bom.push(BomEntry::new(material_id, required_quantity));
        self
    }

    /// 建構器模式：設置整份 BOM
    pub fn with_bom(mut self, bom: Vec<BomEntry>) -> Self {
        self.bom = bom;
        self
    }

    /// 是否已定義配方
    pub fn has_recipe(&self) -> bool {
        !self.bom.is_empty()
    }

    /// 查詢某原物料的單位用量
    pub fn required_quantity_of(&self, material_id: MaterialId) -> Option<u64> {
        self.bom
            .iter()
            .find(|entry| entry.material_id == material_id)
            .map(|entry| entry.required_quantity)
    }
}
