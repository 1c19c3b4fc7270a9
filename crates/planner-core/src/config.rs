//! 生產建議配置

use serde::{Deserialize, Serialize};

use crate::{PlannerError, Result};

/// 生產建議計算參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 輸出計劃中單價的小數位數，`None` 表示原值輸出不取整
    pub value_scale: Option<u32>,

    /// 是否在計算結果中保留被跳過產品的記錄
    pub record_skipped: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            value_scale: None,
            record_skipped: true,
        }
    }
}

impl PlannerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置金額小數位數
    pub fn with_value_scale(mut self, scale: u32) -> Self {
        self.value_scale = Some(scale);
        self
    }

    /// 建構器模式：設置是否保留跳過記錄
    pub fn with_record_skipped(mut self, record: bool) -> Self {
        self.record_skipped = record;
        self
    }

    /// 從 JSON 文件解析配置，缺少的欄位使用預設值
    ///
    /// # 範例
    /// ```
    /// # use planner_core::PlannerConfig;
    /// let config = PlannerConfig::from_json_str(r#"{ "value_scale": 4 }"#).unwrap();
    /// assert_eq!(config.value_scale, Some(4));
    /// assert!(config.record_skipped);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PlannerError::Config(e.to_string()))?;

        // rust_decimal 最多支援 28 位小數
        if let Some(scale) = config.value_scale.filter(|&scale| scale > 28) {
            return Err(PlannerError::Config(format!("value_scale 超出範圍: {}", scale)));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::new();

        assert_eq!(config.value_scale, None);
        assert!(config.record_skipped);
    }

    #[test]
    fn test_config_builder() {
        let config = PlannerConfig::new()
            .with_value_scale(0)
            .with_record_skipped(false);

        assert_eq!(config.value_scale, Some(0));
        assert!(!config.record_skipped);
    }

    #[rstest]
    #[case("{}", None, true)]
    #[case(r#"{ "value_scale": null }"#, None, true)]
    #[case(r#"{ "value_scale": 3 }"#, Some(3), true)]
    #[case(r#"{ "record_skipped": false }"#, None, false)]
    #[case(r#"{ "value_scale": 0, "record_skipped": false }"#, Some(0), false)]
    fn test_from_json(#[case] json: &str, #[case] scale: Option<u32>, #[case] record: bool) {
        let config = PlannerConfig::from_json_str(json).unwrap();

        assert_eq!(config.value_scale, scale);
        assert_eq!(config.record_skipped, record);
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{ "value_scale": -1 }"#)]
    #[case(r#"{ "value_scale": 29 }"#)]
    fn test_invalid_config(#[case] json: &str) {
        let err = PlannerConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }
}
