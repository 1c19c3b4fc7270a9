//! 生產計劃模型（分配引擎的輸出）

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{PlannerError, Product, ProductId, Result};

/// 生產建議（單一產品的建議生產數量）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSuggestion {
    /// 產品ID
    pub product_id: ProductId,

    /// 產品名稱
    pub product_name: String,

    /// 產品代碼
    pub product_code: String,

    /// 產品單價
    #[serde(with = "rust_decimal::serde::float")]
    pub product_price: Decimal,

    /// 建議生產數量（至少為 1）
    pub quantity: u64,
}

impl ProductionSuggestion {
    /// 由產品與數量創建生產建議
    pub fn new(product: &Product, quantity: u64) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            product_code: product.code.clone(),
            product_price: product.price,
            quantity,
        }
    }

    /// 此建議的產值（單價 × 數量），超出 Decimal 範圍時回傳 `None`
    pub fn value(&self) -> Option<Decimal> {
        self.product_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// 生產計劃
///
/// 建議依產生順序排列，`total_value` 永遠等於各建議產值之和。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlan {
    /// 生產建議
    suggestions: Vec<ProductionSuggestion>,

    /// 總產值
    #[serde(with = "rust_decimal::serde::float")]
    total_value: Decimal,
}

impl ProductionPlan {
    /// 創建空的生產計劃
    pub fn empty() -> Self {
        Self::default()
    }

    /// 加入一筆生產建議並累計總產值
    ///
    /// 產值或總產值溢位時回傳錯誤，計劃保持不變。
    pub fn push(&mut self, suggestion: ProductionSuggestion) -> Result<()> {
        let total = suggestion
            .value()
            .and_then(|value| self.total_value.checked_add(value))
            .ok_or(PlannerError::ValueOverflow {
                product_id: suggestion.product_id,
            })?;

        self.total_value = total;
        self.suggestions.push(suggestion);
        Ok(())
    }

    pub fn suggestions(&self) -> &[ProductionSuggestion] {
        &self.suggestions
    }

    pub fn total_value(&self) -> Decimal {
        self.total_value
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// 查詢某產品的建議數量
    pub fn quantity_of(&self, product_id: ProductId) -> Option<u64> {
        self.suggestions
            .iter()
            .find(|s| s.product_id == product_id)
            .map(|s| s.quantity)
    }

    /// 單價四捨五入至指定小數位，總產值以取整後的單價重新累計
    pub fn rounded(&self, scale: u32) -> Result<Self> {
        let mut plan = Self::empty();
        for suggestion in &self.suggestions {
            plan.push(ProductionSuggestion {
                product_price: suggestion
                    .product_price
                    .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero),
                ..suggestion.clone()
            })?;
        }
        Ok(plan)
    }

    /// 輸出為 API 回應格式的 JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PlannerError::Other(e.to_string()))
    }
}
