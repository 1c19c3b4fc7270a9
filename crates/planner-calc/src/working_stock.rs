//! 工作庫存（單次分配計算內部使用的可變副本）

use std::collections::HashMap;

use planner_core::{MaterialId, PlannerError, StockSnapshot};

/// 工作庫存
///
/// 由快照複製而來，只在一次計算中存在；原快照永不被修改。
#[derive(Debug, Clone)]
pub struct WorkingStock {
    remaining: HashMap<MaterialId, u64>,
}

impl WorkingStock {
    /// 從快照複製
    pub fn from_snapshot(snapshot: &StockSnapshot) -> Self {
        Self {
            remaining: snapshot.quantities().clone(),
        }
    }

    /// 剩餘可用量（缺省為 0）
    pub fn available(&self, material_id: MaterialId) -> u64 {
        self.remaining.get(&material_id).copied().unwrap_or(0)
    }

    /// 扣減庫存
    ///
    /// 扣減量超過剩餘量代表瓶頸計算有誤，直接回傳錯誤而不截斷為 0。
    pub fn consume(&mut self, material_id: MaterialId, quantity: u64) -> planner_core::Result<()> {
        let available = self.available(material_id);
        let remaining = available
            .checked_sub(quantity)
            .ok_or(PlannerError::StockUnderflow {
                material_id,
                available,
                requested: quantity,
            })?;

        self.remaining.insert(material_id, remaining);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume() {
        let snapshot = StockSnapshot::from_quantities([(1, 10), (2, 4)]).unwrap();
        let mut stock = WorkingStock::from_snapshot(&snapshot);

        stock.consume(1, 6).unwrap();
        assert_eq!(stock.available(1), 4);

        stock.consume(2, 4).unwrap();
        assert_eq!(stock.available(2), 0);

        // 快照不受影響
        assert_eq!(snapshot.available(1), 10);
        assert_eq!(snapshot.available(2), 4);
    }

    #[test]
    fn test_consume_underflow_is_error() {
        let snapshot = StockSnapshot::from_quantities([(1, 3)]).unwrap();
        let mut stock = WorkingStock::from_snapshot(&snapshot);

        let err = stock.consume(1, 5).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::StockUnderflow {
                material_id: 1,
                available: 3,
                requested: 5
            }
        ));
        // 失敗時不修改剩餘量
        assert_eq!(stock.available(1), 3);
    }

    #[test]
    fn test_consume_missing_material() {
        let mut stock = WorkingStock::from_snapshot(&StockSnapshot::empty());

        assert_eq!(stock.available(42), 0);
        assert!(stock.consume(42, 0).is_ok());
        assert!(stock.consume(42, 1).is_err());
    }
}
