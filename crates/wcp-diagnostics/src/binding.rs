//! 綁定約束分類
//!
//! 判斷某配置的容量被哪個限制卡住: 重量、體積、槽位數,
//! 或兩者接近同時吃滿 (平衡)。擴建建議據此標註
//! 「加架」以外的改善方向 (例如換高承重貨架)。

use serde::{Deserialize, Serialize};
use wcp_core::{PackingConfiguration, PackingMode, ShelfSpec, Sku};

/// 使用率差距在此範圍內視為同時吃滿
const BALANCED_TOL: f64 = 0.05;

/// 綁定約束類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingConstraint {
    /// 重量先吃滿
    WeightLimited,
    /// 體積先吃滿
    VolumeLimited,
    /// 槽位數先吃滿 (連續模式)
    ItemCountLimited,
    /// 重量與體積同時接近吃滿
    Balanced,
}

impl std::fmt::Display for BindingConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            BindingConstraint::WeightLimited => "weight-limited",
            BindingConstraint::VolumeLimited => "volume-limited",
            BindingConstraint::ItemCountLimited => "item-count-limited",
            BindingConstraint::Balanced => "balanced",
        };
        f.write_str(msg)
    }
}

/// 分類某配置的綁定約束
///
/// 離散模式以槽位粒度的重量/體積使用率比較;
/// 連續模式以整架粒度, 另加槽位數使用率。
pub fn classify(config: &PackingConfiguration, sku: &Sku, spec: &ShelfSpec) -> BindingConstraint {
    match config.mode {
        PackingMode::Discrete => {
            let per_slot = config.packages_per_slot as f64;
            let weight_util = per_slot * sku.sell_weight / spec.weight_limit_per_slot;
            let volume_util = per_slot * sku.package_volume_cuft() / spec.slot_volume_cuft();
            if (weight_util - volume_util).abs() <= BALANCED_TOL {
                BindingConstraint::Balanced
            } else if weight_util > volume_util {
                BindingConstraint::WeightLimited
            } else {
                BindingConstraint::VolumeLimited
            }
        }
        PackingMode::Continuous => {
            let packages = config.total_packages() as f64;
            let weight_util = packages * sku.sell_weight / spec.shelf_weight_limit();
            let volume_util = packages * sku.package_volume_cuft() / spec.shelf_volume_cuft;
            let slot_util = packages / spec.item_slots as f64;

            let top = weight_util.max(volume_util).max(slot_util);
            if slot_util >= top - BALANCED_TOL
                && weight_util < top - BALANCED_TOL
                && volume_util < top - BALANCED_TOL
            {
                BindingConstraint::ItemCountLimited
            } else if (weight_util - volume_util).abs() <= BALANCED_TOL {
                BindingConstraint::Balanced
            } else if weight_util > volume_util {
                BindingConstraint::WeightLimited
            } else {
                BindingConstraint::VolumeLimited
            }
        }
    }
}
