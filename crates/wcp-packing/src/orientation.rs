//! 方向搜尋與幾何可行性

use wcp_core::Dims3;

/// 包裝是否能以任一軸對齊方向放入槽位
pub fn fits_slot(package: &Dims3, slot: &Dims3) -> bool {
    package.fits_any_orientation(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_slot_with_rotation() {
        let pkg = Dims3::new(40.0, 10.0, 10.0);
        let slot = Dims3::new(48.0, 48.0, 12.0);
        assert!(fits_slot(&pkg, &slot));
    }

    #[test]
    fn test_oversized_package_rejected() {
        let pkg = Dims3::new(50.0, 50.0, 50.0);
        let slot = Dims3::new(48.0, 48.0, 48.0);
        assert!(!fits_slot(&pkg, &slot));
    }
}
