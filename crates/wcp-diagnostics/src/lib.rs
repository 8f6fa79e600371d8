//! # WCP Diagnostics
//!
//! 可行性與擴建診斷: 把最佳化解的鬆弛值翻譯成
//! 規劃人員可以行動的輸出 — 哪個設施要加幾架、
//! 哪些 SKU 的需求或 DoH 無法滿足、以及為什麼。

pub mod binding;
pub mod expansion;
pub mod report;

pub use binding::{classify, BindingConstraint};
pub use expansion::{ExpansionAnalyzer, ExpansionRequirement};
pub use report::{DiagnosticsReport, RedFlag};
