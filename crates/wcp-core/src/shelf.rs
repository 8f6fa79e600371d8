//! 貨架規格

use crate::dims::Dims3;
use crate::sku::StorageType;
use serde::{Deserialize, Serialize};

/// 貨架規格 (設施 × 儲存類型)
///
/// 一個貨架切分為 `item_slots` 個相同的槽位; 離散裝箱以槽位為
/// 計算單位, 純 SKU 連續裝箱則直接使用整架的體積與重量預算。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfSpec {
    /// 所屬設施
    pub facility: String,
    /// 儲存類型
    pub storage_type: StorageType,
    /// 每架槽位數
    pub item_slots: u32,
    /// 每槽位重量上限 (磅)
    pub weight_limit_per_slot: f64,
    /// 槽位內部尺寸 (英寸)
    pub slot_dims: Dims3,
    /// 整架可用體積 (立方英尺)
    pub shelf_volume_cuft: f64,
}

impl ShelfSpec {
    /// 建立新的貨架規格
    pub fn new(
        facility: impl Into<String>,
        storage_type: StorageType,
        item_slots: u32,
        weight_limit_per_slot: f64,
        slot_dims: Dims3,
        shelf_volume_cuft: f64,
    ) -> Self {
        Self {
            facility: facility.into(),
            storage_type,
            item_slots,
            weight_limit_per_slot,
            slot_dims,
            shelf_volume_cuft,
        }
    }

    /// 整架重量上限 = 槽位數 × 每槽位重量上限
    pub fn shelf_weight_limit(&self) -> f64 {
        self.item_slots as f64 * self.weight_limit_per_slot
    }

    /// 單一槽位體積 (立方英尺)
    pub fn slot_volume_cuft(&self) -> f64 {
        self.slot_dims.volume_cuft()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_weight_limit() {
        let spec = ShelfSpec::new(
            "Austin",
            StorageType::Bins,
            6,
            100.0,
            Dims3::new(48.0, 48.0, 48.0),
            384.0,
        );
        assert_eq!(spec.shelf_weight_limit(), 600.0);
        assert_eq!(spec.slot_volume_cuft(), 64.0);
    }
}
