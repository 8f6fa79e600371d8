//! 需求序列

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 月度需求序列 (單品數)
///
/// 最佳化以營業日為期間, 每日需求 = 月需求 / 每月營業日數,
/// 在整個月內均勻分布。缺漏的 (月, SKU) 組合視為零需求。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemandSeries {
    quantities: HashMap<(u32, String), f64>,
}

impl DemandSeries {
    /// 建立空的需求序列
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定某月某 SKU 的需求量 (單品數)
    pub fn set(&mut self, month: u32, sku_id: impl Into<String>, quantity: f64) {
        self.quantities.insert((month, sku_id.into()), quantity);
    }

    /// 某月某 SKU 的月需求, 缺漏視為 0
    pub fn monthly(&self, month: u32, sku_id: &str) -> f64 {
        self.quantities
            .get(&(month, sku_id.to_string()))
            .copied()
            .unwrap_or(0.0)
    }

    /// 均勻日需求 = 月需求 / 每月營業日數
    pub fn daily(&self, month: u32, sku_id: &str, days_per_month: u32) -> f64 {
        self.monthly(month, sku_id) / days_per_month as f64
    }

    /// 某 SKU 在整個規劃期間的總需求
    pub fn total_for_sku(&self, sku_id: &str) -> f64 {
        self.quantities
            .iter()
            .filter(|((_, s), _)| s == sku_id)
            .map(|(_, q)| q)
            .sum()
    }

    /// 是否完全沒有需求資料
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty() || self.quantities.values().all(|q| *q == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_month_is_zero() {
        let mut demand = DemandSeries::new();
        demand.set(1, "SKUA1", 210.0);
        assert_eq!(demand.monthly(1, "SKUA1"), 210.0);
        assert_eq!(demand.monthly(2, "SKUA1"), 0.0);
        assert_eq!(demand.monthly(1, "SKUB1"), 0.0);
    }

    #[test]
    fn test_daily_is_uniform() {
        let mut demand = DemandSeries::new();
        demand.set(1, "SKUA1", 210.0);
        assert!((demand.daily(1, "SKUA1", 21) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_for_sku() {
        let mut demand = DemandSeries::new();
        demand.set(1, "SKUA1", 100.0);
        demand.set(2, "SKUA1", 50.0);
        demand.set(1, "SKUB1", 999.0);
        assert_eq!(demand.total_for_sku("SKUA1"), 150.0);
    }
}
