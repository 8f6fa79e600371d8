//! 三維尺寸與方向運算

use serde::{Deserialize, Serialize};

/// 每立方英尺的立方英寸數
pub const CUIN_PER_CUFT: f64 = 1728.0;

/// 三維尺寸 (英寸)
///
/// 長寬高只是標籤; 包裝可以沿任一軸旋轉, 因此所有
/// 幾何判斷都透過 [`Dims3::orientations`] 列舉六個軸對齊方向。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dims3 {
    /// 長 (英寸)
    pub length: f64,
    /// 寬 (英寸)
    pub width: f64,
    /// 高 (英寸)
    pub height: f64,
}

impl Dims3 {
    /// 建立新的三維尺寸
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// 體積 (立方英寸)
    pub fn volume_cuin(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// 體積 (立方英尺)
    pub fn volume_cuft(&self) -> f64 {
        self.volume_cuin() / CUIN_PER_CUFT
    }

    /// 六個軸對齊方向 (三軸的全排列)
    pub fn orientations(&self) -> [Dims3; 6] {
        let (l, w, h) = (self.length, self.width, self.height);
        [
            Dims3::new(l, w, h),
            Dims3::new(l, h, w),
            Dims3::new(w, l, h),
            Dims3::new(w, h, l),
            Dims3::new(h, l, w),
            Dims3::new(h, w, l),
        ]
    }

    /// 此方向是否可放入容器 (逐軸比較, 不旋轉)
    pub fn fits_within(&self, container: &Dims3) -> bool {
        self.length <= container.length
            && self.width <= container.width
            && self.height <= container.height
    }

    /// 是否存在任一方向可放入容器
    pub fn fits_any_orientation(&self, container: &Dims3) -> bool {
        self.orientations()
            .iter()
            .any(|o| o.fits_within(container))
    }

    /// 所有邊長皆為正數
    pub fn is_valid(&self) -> bool {
        self.length > 0.0 && self.width > 0.0 && self.height > 0.0
    }
}

impl std::fmt::Display for Dims3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} x {}", self.length, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume() {
        let d = Dims3::new(10.0, 10.0, 6.0);
        assert_eq!(d.volume_cuin(), 600.0);
        assert!((d.volume_cuft() - 600.0 / 1728.0).abs() < 1e-12);
    }

    #[test]
    fn test_fits_requires_rotation() {
        // 48 寬的包裝直放超出 40 寬的容器, 轉 90 度即可
        let pkg = Dims3::new(30.0, 48.0, 20.0);
        let container = Dims3::new(48.0, 40.0, 36.0);
        assert!(!pkg.fits_within(&container));
        assert!(pkg.fits_any_orientation(&container));
    }

    #[test]
    fn test_no_orientation_fits() {
        let pkg = Dims3::new(50.0, 50.0, 50.0);
        let container = Dims3::new(48.0, 48.0, 48.0);
        assert!(!pkg.fits_any_orientation(&container));
    }

    #[test]
    fn test_orientation_volume_invariant() {
        let d = Dims3::new(3.0, 5.0, 7.0);
        for o in d.orientations() {
            assert!((o.volume_cuin() - d.volume_cuin()).abs() < 1e-9);
        }
    }
}
