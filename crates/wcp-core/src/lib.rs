//! # WCP Core
//!
//! 倉庫容量規劃 (Warehouse Capacity Planning) 核心資料模型。
//!
//! 提供 SKU、設施、貨架規格、需求序列、DoH 政策與規劃日曆等
//! 基礎類型，供裝箱產生器與容量最佳化器使用。

pub mod calendar;
pub mod demand;
pub mod dims;
pub mod facility;
pub mod packing;
pub mod parse;
pub mod policy;
pub mod scenario;
pub mod shelf;
pub mod sku;

// Re-export 常用類型
pub use calendar::{PeriodIndex, PlanningCalendar};
pub use demand::DemandSeries;
pub use dims::Dims3;
pub use facility::Facility;
pub use packing::{PackingConfiguration, PackingMode};
pub use parse::{parse_dims, parse_quantity, parse_weight, ParseStats};
pub use policy::DohPolicy;
pub use scenario::{Catalog, ExpansionCeiling, ScenarioConfig, ScenarioContext};
pub use shelf::ShelfSpec;
pub use sku::{Sku, StorageType, SupplierType};

/// WCP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum WcpError {
    /// 找不到指定設施與儲存類型的貨架規格
    #[error("找不到貨架規格: {0}")]
    ShelfSpecNotFound(String),

    /// 找不到 SKU
    #[error("找不到 SKU: {0}")]
    SkuNotFound(String),

    /// 找不到設施
    #[error("找不到設施: {0}")]
    FacilityNotFound(String),

    /// 尺寸欄位無法解析
    #[error("無效的尺寸欄位: {0}")]
    InvalidDimension(String),

    /// 重量欄位無法解析
    #[error("無效的重量欄位: {0}")]
    InvalidWeight(String),

    /// 數量欄位無法解析
    #[error("無效的數量欄位: {0}")]
    InvalidQuantity(String),

    /// 場景配置不合法 (期間、DoH、JSON 格式等)
    #[error("無效的場景配置: {0}")]
    InvalidScenario(String),

    /// 裝箱配置超出貨架重量、體積或槽位限制
    #[error("裝箱配置違反貨架限制: {0}")]
    ConfigurationOverflow(String),

    /// 線性規劃模型建構失敗
    #[error("模型建構錯誤: {0}")]
    ModelBuildError(String),

    /// 求解器回報錯誤狀態
    #[error("求解器錯誤: {0}")]
    SolverError(String),

    /// 其他錯誤
    #[error("錯誤: {0}")]
    Other(String),
}

/// WCP 結果類型
pub type Result<T> = std::result::Result<T, WcpError>;
