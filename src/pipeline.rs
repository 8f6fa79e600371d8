//! 場景執行管線
//!
//! 裝箱產生 → 模型建構與求解 → 診斷彙整。
//! 同一份目錄搭配不同場景配置即可掃描 DoH 政策,
//! 不需要複製任何程式。

use uuid::Uuid;
use wcp_core::{Result, ScenarioContext};
use wcp_diagnostics::DiagnosticsReport;
use wcp_optimizer::{CapacityOptimizer, SolveStatus};
use wcp_packing::PackingGenerator;

/// 場景執行報告
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ScenarioReport {
    /// 場景名稱
    pub scenario_name: String,
    /// 執行識別碼
    pub run_id: Uuid,
    /// 產生的裝箱配置數
    pub configurations: usize,
    /// 失敗的裝箱嘗試數
    pub rejections: usize,
    /// 求解狀態
    pub status: SolveStatus,
    /// 診斷報告
    pub diagnostics: DiagnosticsReport,
}

impl ScenarioReport {
    /// 擴建貨架總數
    pub fn total_additional_shelves(&self) -> u32 {
        self.diagnostics.total_additional_shelves()
    }
}

/// 執行完整的容量規劃場景
pub fn run_scenario(ctx: &ScenarioContext) -> Result<ScenarioReport> {
    tracing::info!(
        key = %ctx.output_key(),
        horizon_months = ctx.config.horizon_months,
        "開始執行場景"
    );

    let generation = PackingGenerator::generate_all(ctx)?;
    let solution = CapacityOptimizer::solve_scenario(ctx, &generation)?;
    let diagnostics = DiagnosticsReport::from_solution(ctx, &generation, &solution);

    tracing::info!(
        scenario = %ctx.config.name,
        status = %solution.status,
        additional_shelves = diagnostics.total_additional_shelves(),
        red_flags = diagnostics.red_flags.len(),
        "場景執行完成"
    );

    Ok(ScenarioReport {
        scenario_name: ctx.config.name.clone(),
        run_id: ctx.run_id,
        configurations: generation.configurations.len(),
        rejections: generation.rejections.len(),
        status: solution.status.clone(),
        diagnostics,
    })
}
