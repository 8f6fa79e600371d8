//! Days-on-Hand 安全庫存政策

use crate::facility::Facility;
use crate::sku::{Sku, SupplierType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// DoH 政策: 每個 (SKU, 設施) 組合的最低庫存覆蓋天數
///
/// 期末庫存必須 ≥ 日需求 × 覆蓋天數。缺漏的組合視為
/// 零覆蓋 (僅記錄警告, 不中斷求解)。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DohPolicy {
    days: HashMap<(String, String), f64>,
}

impl DohPolicy {
    /// 建立空的政策
    pub fn new() -> Self {
        Self::default()
    }

    /// 依供應商類型套用統一天數: 國內 SKU 一律 `domestic` 天,
    /// 國際 SKU 一律 `international` 天, 套用到所有設施
    pub fn uniform(
        skus: &[Sku],
        facilities: &[Facility],
        domestic: f64,
        international: f64,
    ) -> Self {
        let mut policy = Self::new();
        for sku in skus {
            let days = match sku.supplier_type {
                SupplierType::Domestic => domestic,
                SupplierType::International => international,
            };
            for fac in facilities {
                policy.set(&sku.id, &fac.id, days);
            }
        }
        policy
    }

    /// 設定某 (SKU, 設施) 的覆蓋天數
    pub fn set(&mut self, sku_id: &str, facility_id: &str, days: f64) {
        self.days
            .insert((sku_id.to_string(), facility_id.to_string()), days);
    }

    /// 查詢覆蓋天數; 缺漏回傳 `None`
    pub fn get(&self, sku_id: &str, facility_id: &str) -> Option<f64> {
        self.days
            .get(&(sku_id.to_string(), facility_id.to_string()))
            .copied()
    }

    /// 查詢覆蓋天數, 缺漏時以 0 天處理並記錄警告
    pub fn days_or_zero(&self, sku_id: &str, facility_id: &str) -> f64 {
        match self.get(sku_id, facility_id) {
            Some(days) => days,
            None => {
                tracing::warn!(
                    sku = sku_id,
                    facility = facility_id,
                    "DoH 政策缺漏, 以 0 天處理"
                );
                0.0
            }
        }
    }

    /// 是否沒有任何政策資料
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims::Dims3;
    use crate::sku::StorageType;

    #[test]
    fn test_uniform_by_supplier_type() {
        let skus = vec![
            Sku::new(
                "SKUA1",
                Dims3::new(10.0, 10.0, 6.0),
                15.0,
                StorageType::Bins,
                SupplierType::Domestic,
            ),
            Sku::new(
                "SKUB1",
                Dims3::new(8.0, 8.0, 4.0),
                5.0,
                StorageType::Racking,
                SupplierType::International,
            ),
        ];
        let facilities = vec![Facility::new("Austin"), Facility::frozen("Columbus")];
        let policy = DohPolicy::uniform(&skus, &facilities, 7.0, 30.0);
        assert_eq!(policy.get("SKUA1", "Austin"), Some(7.0));
        assert_eq!(policy.get("SKUB1", "Columbus"), Some(30.0));
    }

    #[test]
    fn test_missing_pair_defaults_to_zero() {
        let policy = DohPolicy::new();
        assert_eq!(policy.get("SKUX", "Nowhere"), None);
        assert_eq!(policy.days_or_zero("SKUX", "Nowhere"), 0.0);
    }
}
