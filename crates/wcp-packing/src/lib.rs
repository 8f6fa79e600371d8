//! # WCP Packing
//!
//! 裝箱配置產生器: 對每個可行的設施 × 儲存類型 × SKU 組合,
//! 計算一個貨架能容納多少包裝, 輸出容量最佳化所需的
//! 每架單品容量係數。
//!
//! 支援兩種模式:
//! - 離散槽位裝箱 ([`discrete`]): 一般 SKU, 以槽位為單位
//! - 純 SKU 連續裝箱 ([`continuous`]): 大型家具類 SKU,
//!   整架視為單一體積/重量預算

pub mod continuous;
pub mod discrete;
pub mod generator;
pub mod orientation;

pub use generator::{GenerationResult, PackingGenerator, PackingRejection, RejectReason};
