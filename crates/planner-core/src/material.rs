//! 原物料模型

use serde::{Deserialize, Serialize};

use crate::MaterialId;

/// 原物料（由外部庫存系統維護，此處唯讀）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMaterial {
    /// 原物料ID
    pub id: MaterialId,

    /// 原物料代碼（唯一）
    pub code: String,

    /// 顯示名稱
    pub name: String,

    /// 現有庫存
    pub stock: u64,
}

impl RawMaterial {
    /// 創建新的原物料記錄
    pub fn new(
        id: MaterialId,
        code: impl Into<String>,
        name: impl Into<String>,
        stock: u64,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            stock,
        }
    }
}
