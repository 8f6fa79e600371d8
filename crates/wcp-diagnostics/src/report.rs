//! 診斷報告
//!
//! 彙整求解結果: 擴建需求表、紅旗清單 (未滿足需求、DoH 缺口、
//! 擴建上限超出、完全無法上架的 SKU), 以及求解狀態。
//! 求解失敗時報告明確標示失敗, 不產出看似正常的空結果。

use crate::expansion::{ExpansionAnalyzer, ExpansionRequirement};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use wcp_core::{ScenarioContext, StorageType};
use wcp_optimizer::{CapacitySolution, SolveStatus};
use wcp_packing::GenerationResult;

/// 紅旗: 需要人工關注的結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RedFlag {
    /// 有需求無法滿足
    UnmetDemand {
        /// SKU 編號
        sku_id: String,
        /// 未滿足總量 (單品數)
        total_units: f64,
        /// 受影響的期間數
        periods: usize,
    },
    /// DoH 覆蓋不足
    DohShortfall {
        /// SKU 編號
        sku_id: String,
        /// 設施
        facility: String,
        /// 缺口總量 (單品數)
        total_units: f64,
        /// 受影響的期間數
        periods: usize,
    },
    /// 超出擴建上限
    CeilingExceeded {
        /// 設施
        facility: String,
        /// 儲存類型
        storage_type: StorageType,
        /// 超出的貨架數
        shelves: f64,
    },
    /// 有需求的 SKU 在所有設施都沒有可行裝箱配置
    NoPackingConfiguration {
        /// SKU 編號
        sku_id: String,
    },
}

impl std::fmt::Display for RedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedFlag::UnmetDemand {
                sku_id,
                total_units,
                periods,
            } => write!(
                f,
                "未滿足需求: {} 共 {:.0} 單品, 影響 {} 個期間",
                sku_id, total_units, periods
            ),
            RedFlag::DohShortfall {
                sku_id,
                facility,
                total_units,
                periods,
            } => write!(
                f,
                "DoH 缺口: {} @ {} 共 {:.0} 單品, 影響 {} 個期間",
                sku_id, facility, total_units, periods
            ),
            RedFlag::CeilingExceeded {
                facility,
                storage_type,
                shelves,
            } => write!(
                f,
                "超出擴建上限: {} {} 超出 {:.1} 架",
                facility, storage_type, shelves
            ),
            RedFlag::NoPackingConfiguration { sku_id } => {
                write!(f, "無可行裝箱配置: {} 在所有設施都放不上架", sku_id)
            }
        }
    }
}

/// 診斷報告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    /// 場景名稱
    pub scenario: String,
    /// 執行識別碼
    pub run_id: String,
    /// 求解狀態
    pub status: SolveStatus,
    /// 目標值
    pub objective: f64,
    /// 擴建需求
    pub expansions: Vec<ExpansionRequirement>,
    /// 紅旗清單
    pub red_flags: Vec<RedFlag>,
}

impl DiagnosticsReport {
    /// 由解彙整診斷報告
    pub fn from_solution(
        ctx: &ScenarioContext,
        generation: &GenerationResult,
        solution: &CapacitySolution,
    ) -> Self {
        let expansions = if solution.status.has_solution() {
            ExpansionAnalyzer::analyze(ctx, generation, solution)
        } else {
            Vec::new()
        };

        let mut red_flags = Vec::new();

        // 有需求但完全無法上架的 SKU
        for sku in &ctx.catalog.skus {
            if ctx.catalog.demand.total_for_sku(&sku.id) > 0.0
                && !generation.has_config_for_sku(&sku.id)
            {
                red_flags.push(RedFlag::NoPackingConfiguration {
                    sku_id: sku.id.clone(),
                });
            }
        }

        if solution.status.has_solution() {
            // 未滿足需求依 SKU 彙總
            let mut unmet: BTreeMap<String, (f64, usize)> = BTreeMap::new();
            for record in &solution.unmet_demand {
                let entry = unmet.entry(record.sku_id.clone()).or_insert((0.0, 0));
                entry.0 += record.quantity;
                entry.1 += 1;
            }
            for (sku_id, (total_units, periods)) in unmet {
                red_flags.push(RedFlag::UnmetDemand {
                    sku_id,
                    total_units,
                    periods,
                });
            }

            // DoH 缺口依 (SKU, 設施) 彙總
            let mut shortfalls: BTreeMap<(String, String), (f64, usize)> = BTreeMap::new();
            for record in &solution.doh_shortfalls {
                let entry = shortfalls
                    .entry((record.sku_id.clone(), record.facility.clone()))
                    .or_insert((0.0, 0));
                entry.0 += record.quantity;
                entry.1 += 1;
            }
            for ((sku_id, facility), (total_units, periods)) in shortfalls {
                red_flags.push(RedFlag::DohShortfall {
                    sku_id,
                    facility,
                    total_units,
                    periods,
                });
            }

            for overrun in &solution.ceiling_overruns {
                red_flags.push(RedFlag::CeilingExceeded {
                    facility: overrun.facility.clone(),
                    storage_type: overrun.storage_type,
                    shelves: overrun.excess_shelves,
                });
            }
        }

        tracing::info!(
            scenario = %ctx.config.name,
            status = %solution.status,
            expansions = expansions.len(),
            red_flags = red_flags.len(),
            unmet_units = solution.total_unmet_demand(),
            "診斷報告彙整完成"
        );
        Self {
            scenario: ctx.config.name.clone(),
            run_id: ctx.run_id.to_string(),
            status: solution.status.clone(),
            objective: solution.objective,
            expansions,
            red_flags,
        }
    }

    /// 沒有任何紅旗且求得最佳解
    pub fn is_clean(&self) -> bool {
        self.status == SolveStatus::Optimal && self.red_flags.is_empty()
    }

    /// 擴建貨架總數
    pub fn total_additional_shelves(&self) -> u32 {
        ExpansionAnalyzer::total_additional(&self.expansions)
    }

    /// 輸出主控台報告
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(72));
        let _ = writeln!(out, "容量規劃診斷報告: {} ({})", self.scenario, self.run_id);
        let _ = writeln!(out, "{}", "=".repeat(72));
        let _ = writeln!(out, "求解狀態: {}", self.status);

        if !self.status.has_solution() {
            let _ = writeln!(out, "\n求解失敗, 無診斷結果可報告。");
            return out;
        }
        let _ = writeln!(out, "目標值: {:.2}", self.objective);

        let _ = writeln!(out, "\n擴建需求:");
        if self.expansions.is_empty() {
            let _ = writeln!(out, "  (現有容量足夠, 無需擴建)");
        } else {
            let _ = writeln!(
                out,
                "  {:<14} {:<10} {:>10} {:>10}  {}",
                "設施", "儲存類型", "現有", "需增加", "綁定約束"
            );
            for req in &self.expansions {
                let binding = req
                    .binding
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let _ = writeln!(
                    out,
                    "  {:<14} {:<10} {:>10} {:>10}  {}",
                    req.facility,
                    req.storage_type.as_str(),
                    req.current_shelves,
                    req.additional_shelves,
                    binding
                );
            }
            let _ = writeln!(out, "  合計需增加 {} 架", self.total_additional_shelves());
        }

        let _ = writeln!(out, "\n紅旗:");
        if self.red_flags.is_empty() {
            let _ = writeln!(out, "  (無)");
        } else {
            for flag in &self.red_flags {
                let _ = writeln!(out, "  ⚠ {}", flag);
            }
        }
        let _ = writeln!(out, "{}", "=".repeat(72));
        out
    }
}
