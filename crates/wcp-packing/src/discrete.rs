//! 離散槽位裝箱
//!
//! 每槽位可放包裝數取重量上限與體積上限兩者的下界:
//! `min(floor(槽位重量上限 / 包裝重量), floor(槽位體積 / 包裝體積))`,
//! 前提是包裝至少有一個方向放得進槽位。整架配置使用全部槽位。

use crate::generator::RejectReason;
use crate::orientation;
use wcp_core::{ShelfSpec, Sku};

/// 計算每槽位可放的包裝數
pub fn packages_per_slot(sku: &Sku, spec: &ShelfSpec) -> Result<u32, RejectReason> {
    if !sku.sell_dims.is_valid() || sku.sell_weight <= 0.0 {
        return Err(RejectReason::InvalidPackageData);
    }
    if !orientation::fits_slot(&sku.sell_dims, &spec.slot_dims) {
        return Err(RejectReason::DoesNotFitSlot);
    }

    let by_weight = (spec.weight_limit_per_slot / sku.sell_weight).floor() as u32;
    let by_volume = (spec.slot_volume_cuft() / sku.package_volume_cuft()).floor() as u32;

    if by_weight == 0 {
        return Err(RejectReason::WeightCapacityZero);
    }
    if by_volume == 0 {
        return Err(RejectReason::VolumeCapacityZero);
    }
    Ok(by_weight.min(by_volume))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcp_core::{Dims3, StorageType, SupplierType};

    fn shelf(weight_limit_per_slot: f64) -> ShelfSpec {
        ShelfSpec::new(
            "Austin",
            StorageType::Bins,
            6,
            weight_limit_per_slot,
            Dims3::new(48.0, 48.0, 48.0),
            384.0,
        )
    }

    #[test]
    fn test_weight_bound_governs() {
        // 10x10x6 in, 15 lbs 的包裝放進 48^3 槽位 (600 lbs 上限):
        // 體積可放 184, 重量只允許 40
        let sku = Sku::new(
            "SKUA1",
            Dims3::new(10.0, 10.0, 6.0),
            15.0,
            StorageType::Bins,
            SupplierType::Domestic,
        );
        assert_eq!(packages_per_slot(&sku, &shelf(600.0)), Ok(40));
    }

    #[test]
    fn test_volume_bound_governs() {
        // 輕但大的包裝改由體積決定: 24x24x24 = 8 cuft, 槽位 64 cuft
        let sku = Sku::new(
            "SKUL1",
            Dims3::new(24.0, 24.0, 24.0),
            1.0,
            StorageType::Bins,
            SupplierType::Domestic,
        );
        assert_eq!(packages_per_slot(&sku, &shelf(600.0)), Ok(8));
    }

    #[test]
    fn test_oversized_package_rejected() {
        let sku = Sku::new(
            "SKUX1",
            Dims3::new(50.0, 50.0, 50.0),
            10.0,
            StorageType::Bins,
            SupplierType::Domestic,
        );
        assert_eq!(
            packages_per_slot(&sku, &shelf(600.0)),
            Err(RejectReason::DoesNotFitSlot)
        );
    }

    #[test]
    fn test_too_heavy_for_slot() {
        let sku = Sku::new(
            "SKUH1",
            Dims3::new(10.0, 10.0, 10.0),
            700.0,
            StorageType::Bins,
            SupplierType::Domestic,
        );
        assert_eq!(
            packages_per_slot(&sku, &shelf(600.0)),
            Err(RejectReason::WeightCapacityZero)
        );
    }
}
