//! 裝箱配置

use crate::shelf::ShelfSpec;
use crate::sku::{Sku, StorageType};
use crate::{Result, WcpError};
use serde::{Deserialize, Serialize};

/// 重量/體積比較的容差
const EPS: f64 = 1e-6;

/// 裝箱模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackingMode {
    /// 離散槽位裝箱: 每槽位獨立計算可放包裝數
    Discrete,
    /// 純 SKU 連續裝箱: 整架視為單一體積/重量預算
    Continuous,
}

impl std::fmt::Display for PackingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackingMode::Discrete => f.write_str("discrete"),
            PackingMode::Continuous => f.write_str("continuous"),
        }
    }
}

/// 裝箱配置: 單一 SKU 在某設施某儲存類型貨架上的擺放方式
///
/// 配置 id 由產生器依走訪順序遞增編號, 同一份目錄重新產生
/// 會得到完全相同的編號。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingConfiguration {
    /// 配置編號 (產生器內遞增)
    pub id: u32,
    /// 設施
    pub facility: String,
    /// 儲存類型
    pub storage_type: StorageType,
    /// SKU 編號
    pub sku_id: String,
    /// 裝箱模式
    pub mode: PackingMode,
    /// 每槽位包裝數 (連續模式為整架包裝數)
    pub packages_per_slot: u32,
    /// 使用槽位數 (連續模式固定為 1)
    pub slots_used: u32,
    /// 單一包裝重量 (磅)
    pub weight_per_package: f64,
    /// 每包裝單品數
    pub units_per_package: u32,
}

impl PackingConfiguration {
    /// 整架總包裝數
    pub fn total_packages(&self) -> u32 {
        self.packages_per_slot * self.slots_used
    }

    /// 整架總重量 (磅)
    pub fn total_weight(&self) -> f64 {
        self.total_packages() as f64 * self.weight_per_package
    }

    /// 每架單品容量 = 總包裝數 × 每包裝單品數
    pub fn units_per_shelf(&self) -> f64 {
        self.total_packages() as f64 * self.units_per_package as f64
    }

    /// 驗證配置未超出貨架的槽位、重量與體積限制
    pub fn validate(&self, sku: &Sku, spec: &ShelfSpec) -> Result<()> {
        if self.slots_used > spec.item_slots {
            return Err(WcpError::ConfigurationOverflow(format!(
                "配置 {} 使用 {} 槽位, 超過 {} 的上限 {}",
                self.id, self.slots_used, spec.facility, spec.item_slots
            )));
        }
        if self.total_weight() > spec.shelf_weight_limit() + EPS {
            return Err(WcpError::ConfigurationOverflow(format!(
                "配置 {} 總重 {:.1} lbs 超過貨架上限 {:.1} lbs",
                self.id,
                self.total_weight(),
                spec.shelf_weight_limit()
            )));
        }
        let total_volume = self.total_packages() as f64 * sku.package_volume_cuft();
        if total_volume > spec.shelf_volume_cuft + EPS {
            return Err(WcpError::ConfigurationOverflow(format!(
                "配置 {} 總體積 {:.2} cuft 超過貨架上限 {:.2} cuft",
                self.id, total_volume, spec.shelf_volume_cuft
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims::Dims3;
    use crate::sku::SupplierType;

    fn widget() -> Sku {
        Sku::new(
            "SKUA1",
            Dims3::new(10.0, 10.0, 6.0),
            15.0,
            StorageType::Bins,
            SupplierType::Domestic,
        )
    }

    fn bin_shelf() -> ShelfSpec {
        ShelfSpec::new(
            "Austin",
            StorageType::Bins,
            1,
            600.0,
            Dims3::new(48.0, 48.0, 48.0),
            64.0,
        )
    }

    #[test]
    fn test_totals() {
        let config = PackingConfiguration {
            id: 1,
            facility: "Austin".to_string(),
            storage_type: StorageType::Bins,
            sku_id: "SKUA1".to_string(),
            mode: PackingMode::Discrete,
            packages_per_slot: 40,
            slots_used: 1,
            weight_per_package: 15.0,
            units_per_package: 2,
        };
        assert_eq!(config.total_packages(), 40);
        assert_eq!(config.total_weight(), 600.0);
        assert_eq!(config.units_per_shelf(), 80.0);
        assert!(config.validate(&widget(), &bin_shelf()).is_ok());
    }

    #[test]
    fn test_validate_rejects_overweight() {
        let config = PackingConfiguration {
            id: 2,
            facility: "Austin".to_string(),
            storage_type: StorageType::Bins,
            sku_id: "SKUA1".to_string(),
            mode: PackingMode::Discrete,
            packages_per_slot: 41,
            slots_used: 1,
            weight_per_package: 15.0,
            units_per_package: 1,
        };
        assert!(matches!(
            config.validate(&widget(), &bin_shelf()),
            Err(WcpError::ConfigurationOverflow(_))
        ));
    }
}
