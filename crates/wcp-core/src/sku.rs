//! SKU 主檔資料

use crate::dims::Dims3;
use serde::{Deserialize, Serialize};

/// 儲存類型
///
/// 每個 SKU 歸屬唯一的儲存類型, 只能放在同類型的貨架上。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageType {
    /// 料箱 (小件)
    Bins,
    /// 層架
    Racking,
    /// 棧板
    Pallet,
    /// 危險品
    Hazmat,
}

impl StorageType {
    /// 所有儲存類型
    pub const ALL: [StorageType; 4] = [
        StorageType::Bins,
        StorageType::Racking,
        StorageType::Pallet,
        StorageType::Hazmat,
    ];

    /// 顯示名稱
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Bins => "Bins",
            StorageType::Racking => "Racking",
            StorageType::Pallet => "Pallet",
            StorageType::Hazmat => "Hazmat",
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 供應商類型, 決定預設的 Days-on-Hand 覆蓋天數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplierType {
    /// 國內供應商
    Domestic,
    /// 國際供應商 (較長的補貨前置期, 較高的 DoH)
    International,
}

/// SKU 主檔
///
/// 區分銷售包裝 (出貨與上架的單位) 與進貨包裝 (供應商交付的單位)。
/// 裝箱配置以銷售包裝為計算單位, 補貨交付以進貨包裝為單位。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sku {
    /// SKU 編號
    pub id: String,
    /// 銷售包裝尺寸 (英寸)
    pub sell_dims: Dims3,
    /// 銷售包裝重量 (磅)
    pub sell_weight: f64,
    /// 每個銷售包裝的單品數
    pub units_per_package: u32,
    /// 進貨包裝尺寸 (英寸)
    pub inbound_dims: Dims3,
    /// 進貨包裝重量 (磅)
    pub inbound_weight: f64,
    /// 每個進貨包裝的單品數
    pub inbound_units: u32,
    /// 儲存類型
    pub storage_type: StorageType,
    /// 供應商類型
    pub supplier_type: SupplierType,
    /// 是否可與其他物料併箱 (主檔欄位, 保留給併箱規劃)
    pub can_consolidate: bool,
}

impl Sku {
    /// 建立新的 SKU, 進貨包裝預設等同銷售包裝
    pub fn new(
        id: impl Into<String>,
        sell_dims: Dims3,
        sell_weight: f64,
        storage_type: StorageType,
        supplier_type: SupplierType,
    ) -> Self {
        Self {
            id: id.into(),
            sell_dims,
            sell_weight,
            units_per_package: 1,
            inbound_dims: sell_dims,
            inbound_weight: sell_weight,
            inbound_units: 1,
            storage_type,
            supplier_type,
            can_consolidate: false,
        }
    }

    /// 設定進貨包裝 (尺寸、重量、單品數)
    pub fn with_inbound_pack(mut self, dims: Dims3, weight: f64, units: u32) -> Self {
        self.inbound_dims = dims;
        self.inbound_weight = weight;
        self.inbound_units = units;
        self
    }

    /// 設定每個銷售包裝的單品數
    pub fn with_units_per_package(mut self, units: u32) -> Self {
        self.units_per_package = units;
        self
    }

    /// 設定可併箱旗標
    pub fn with_consolidation(mut self, can_consolidate: bool) -> Self {
        self.can_consolidate = can_consolidate;
        self
    }

    /// 銷售包裝體積 (立方英尺)
    pub fn package_volume_cuft(&self) -> f64 {
        self.sell_dims.volume_cuft()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_defaults() {
        let sku = Sku::new(
            "SKUA1",
            Dims3::new(10.0, 10.0, 6.0),
            15.0,
            StorageType::Bins,
            SupplierType::Domestic,
        );
        assert_eq!(sku.units_per_package, 1);
        assert_eq!(sku.inbound_units, 1);
        assert_eq!(sku.inbound_weight, 15.0);
        assert!(!sku.can_consolidate);
        assert!(sku.with_consolidation(true).can_consolidate);
    }

    #[test]
    fn test_inbound_pack_builder() {
        let sku = Sku::new(
            "SKUB1",
            Dims3::new(8.0, 8.0, 4.0),
            5.0,
            StorageType::Racking,
            SupplierType::International,
        )
        .with_inbound_pack(Dims3::new(24.0, 16.0, 16.0), 62.0, 12);
        assert_eq!(sku.inbound_units, 12);
        assert_eq!(sku.inbound_weight, 62.0);
    }
}
