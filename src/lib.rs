//! # WCP — Warehouse Capacity Planning
//!
//! 倉庫容量規劃引擎: 由 SKU 幾何與需求預測推導各設施
//! 需要的貨架數量與擴建建議。
//!
//! 三個階段:
//! 1. 裝箱配置產生 ([`wcp_packing`]): 每個 SKU 在每種貨架上
//!    能放多少包裝
//! 2. 容量配置最佳化 ([`wcp_optimizer`]): 時間索引 LP,
//!    以鬆弛變數表達需求、DoH 與貨架上限的軟約束
//! 3. 可行性診斷 ([`wcp_diagnostics`]): 鬆弛值 → 擴建需求表
//!    與紅旗清單
//!
//! [`pipeline::run_scenario`] 把三個階段串成單一入口。

pub mod pipeline;

pub use pipeline::{run_scenario, ScenarioReport};

pub use wcp_core::{
    Catalog, DemandSeries, Dims3, DohPolicy, ExpansionCeiling, Facility, PackingConfiguration,
    PackingMode, PeriodIndex, PlanningCalendar, Result, ScenarioConfig, ScenarioContext,
    ShelfSpec, Sku, StorageType, SupplierType, WcpError,
};
pub use wcp_diagnostics::{BindingConstraint, DiagnosticsReport, ExpansionRequirement, RedFlag};
pub use wcp_optimizer::{
    CapacityOptimizer, CapacitySolution, ObjectiveWeights, PolicyConstraint, SolveStatus,
};
pub use wcp_packing::{GenerationResult, PackingGenerator, PackingRejection, RejectReason};
