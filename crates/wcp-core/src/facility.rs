//! 設施主檔

use serde::{Deserialize, Serialize};

/// 倉儲設施
///
/// `expandable` 決定貨架上限約束的型態:
/// 可擴充設施的超額需求以鬆弛變數吸收並計入擴建建議,
/// 凍結設施則為硬上限。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    /// 設施名稱
    pub id: String,
    /// 是否允許擴建
    pub expandable: bool,
}

impl Facility {
    /// 建立可擴建的設施
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            expandable: true,
        }
    }

    /// 建立凍結 (不可擴建) 的設施
    pub fn frozen(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            expandable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_facility() {
        let fac = Facility::frozen("Columbus");
        assert!(!fac.expandable);
        assert!(Facility::new("Austin").expandable);
    }
}
