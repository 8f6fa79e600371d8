//! 純 SKU 連續裝箱
//!
//! 大型家具類 SKU 用槽位切分會浪費容量, 改以整架為單位:
//! `min(floor(整架體積 / 包裝體積), floor(整架重量上限 / 包裝重量), 槽位數)`。
//! 槽位數上限反映貨架實際的擺放位置數。

use crate::generator::RejectReason;
use crate::orientation;
use wcp_core::{ShelfSpec, Sku};

/// 計算整架可放的包裝數
pub fn max_packages(sku: &Sku, spec: &ShelfSpec) -> Result<u32, RejectReason> {
    if !sku.sell_dims.is_valid() || sku.sell_weight <= 0.0 {
        return Err(RejectReason::InvalidPackageData);
    }
    if !orientation::fits_slot(&sku.sell_dims, &spec.slot_dims) {
        return Err(RejectReason::DoesNotFitSlot);
    }

    let by_volume = (spec.shelf_volume_cuft / sku.package_volume_cuft()).floor() as u32;
    let by_weight = (spec.shelf_weight_limit() / sku.sell_weight).floor() as u32;

    if by_weight == 0 {
        return Err(RejectReason::WeightCapacityZero);
    }
    if by_volume == 0 {
        return Err(RejectReason::VolumeCapacityZero);
    }
    Ok(by_volume.min(by_weight).min(spec.item_slots))
}
