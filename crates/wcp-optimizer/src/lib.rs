//! # WCP Optimizer
//!
//! 時間索引的容量配置最佳化:
//! 在滿足需求與 DoH 覆蓋的前提下, 求各裝箱配置的最小貨架部署。
//!
//! 約束全部為軟約束 (貨架上限在凍結設施除外),
//! 以鬆弛變數與權重階層取代硬性不可行:
//! 模型幾乎永遠有解, 不可行的原因直接顯示在鬆弛值上。

pub mod builder;
pub mod model;
pub mod solution;
pub mod solver;

pub use builder::{CapacityModelBuilder, ModelIndex, ObjectiveWeights, PolicyConstraint};
pub use model::{LpModel, RowBound, Sense, VarId};
pub use solution::{CapacitySolution, DohShortfall, ShelfDeployment, ShelfSlack, UnmetDemand};
pub use solver::{HighsSolver, RawSolution, SolveStatus};

use wcp_core::{Result, ScenarioContext};
use wcp_packing::GenerationResult;

/// 容量最佳化門面: 建模 → 求解 → 萃取
pub struct CapacityOptimizer;

impl CapacityOptimizer {
    /// 依場景配置求解容量配置問題
    pub fn solve_scenario(
        ctx: &ScenarioContext,
        generation: &GenerationResult,
    ) -> Result<CapacitySolution> {
        let (model, index) = CapacityModelBuilder::from_scenario(ctx, generation).build()?;
        let solver = HighsSolver::new().with_time_limit(ctx.config.solver_time_limit_secs);
        let raw = solver.solve(&model)?;
        Ok(CapacitySolution::extract(index, raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcp_core::{
        Catalog, Dims3, Facility, PeriodIndex, ScenarioConfig, ShelfSpec, Sku, StorageType,
        SupplierType,
    };
    use wcp_packing::PackingGenerator;

    fn context(monthly_demand: f64, current_shelves: u32) -> ScenarioContext {
        let mut catalog = Catalog::new();
        catalog.skus.push(Sku::new(
            "SKUA1",
            Dims3::new(10.0, 10.0, 6.0),
            15.0,
            StorageType::Bins,
            SupplierType::Domestic,
        ));
        catalog.facilities.push(Facility::new("Austin"));
        catalog.shelf_specs.push(ShelfSpec::new(
            "Austin",
            StorageType::Bins,
            6,
            600.0,
            Dims3::new(48.0, 48.0, 48.0),
            384.0,
        ));
        catalog.set_current_shelves("Austin", StorageType::Bins, current_shelves);
        catalog.demand.set(1, "SKUA1", monthly_demand);
        let mut config = ScenarioConfig::new("optimizer-test", 2.0, 2.0, 1);
        config.days_per_month = 3;
        ScenarioContext::new(config, catalog).unwrap()
    }

    #[test]
    fn test_zero_demand_needs_no_expansion() {
        let ctx = context(0.0, 0);
        let generation = PackingGenerator::generate_all(&ctx).unwrap();
        let solution = CapacityOptimizer::solve_scenario(&ctx, &generation).unwrap();
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert!(solution.unmet_demand.is_empty());
        for slack in &solution.shelf_slack {
            assert!(slack.excess_shelves < 1e-6);
        }
    }

    #[test]
    fn test_demand_met_without_unmet_slack() {
        // 240 包/架, 月需求 30 單品, 充足的現有貨架
        let ctx = context(30.0, 5);
        let generation = PackingGenerator::generate_all(&ctx).unwrap();
        let solution = CapacityOptimizer::solve_scenario(&ctx, &generation).unwrap();
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert!(solution.unmet_demand.is_empty());
        assert!(solution.doh_shortfalls.is_empty());
        assert_eq!(solution.total_unmet_demand(), 0.0);
    }

    #[test]
    fn test_inventory_balance_holds() {
        let ctx = context(30.0, 5);
        let generation = PackingGenerator::generate_all(&ctx).unwrap();
        let solution = CapacityOptimizer::solve_scenario(&ctx, &generation).unwrap();
        let cal = ctx.config.calendar();

        let mut prev_inv = 0.0;
        for p in cal.periods() {
            let inv = solution.inventory(p, "SKUA1", "Austin").unwrap();
            let ship = solution.shipment(p, "SKUA1", "Austin").unwrap();
            let deliv = solution.delivery(p, "SKUA1", "Austin").unwrap();
            // inv[t] = inv[t-1] + 進貨單品 - 出貨
            assert!((inv - (prev_inv + deliv - ship)).abs() < 1e-4);
            prev_inv = inv;
        }
    }

    #[test]
    fn test_inventory_carries_over_month_boundary() {
        // 兩個月的水平: 月初的餘額必須以前一個月最後一天的
        // 期末庫存結轉, 不是歸零重來
        let mut ctx = context(30.0, 5);
        ctx.config.horizon_months = 2;
        ctx.catalog.demand.set(2, "SKUA1", 30.0);
        let generation = PackingGenerator::generate_all(&ctx).unwrap();
        let solution = CapacityOptimizer::solve_scenario(&ctx, &generation).unwrap();
        assert_eq!(solution.status, SolveStatus::Optimal);

        let cal = ctx.config.calendar();
        let boundary = PeriodIndex::new(2, 1);
        let prev = cal.previous(boundary).unwrap();
        assert_eq!(prev, PeriodIndex::new(1, 3));

        let prev_inv = solution.inventory(prev, "SKUA1", "Austin").unwrap();
        let inv = solution.inventory(boundary, "SKUA1", "Austin").unwrap();
        let ship = solution.shipment(boundary, "SKUA1", "Austin").unwrap();
        let deliv = solution.delivery(boundary, "SKUA1", "Austin").unwrap();

        // DoH 2 天要求月底持有庫存, 結轉量必為正
        assert!(prev_inv > 0.0);
        assert!((inv - (prev_inv + deliv - ship)).abs() < 1e-4);
    }

    #[test]
    fn test_accessors_reject_out_of_range_period() {
        let ctx = context(30.0, 5);
        let generation = PackingGenerator::generate_all(&ctx).unwrap();
        let solution = CapacityOptimizer::solve_scenario(&ctx, &generation).unwrap();

        // 單月 × 3 日的日曆之外的期間一律回 None, 不得 panic
        assert!(solution.inventory(PeriodIndex::new(2, 1), "SKUA1", "Austin").is_none());
        assert!(solution.shipment(PeriodIndex::new(1, 4), "SKUA1", "Austin").is_none());
        assert!(solution.delivery(PeriodIndex::new(0, 1), "SKUA1", "Austin").is_none());
        assert!(solution.inventory(PeriodIndex::new(1, 1), "SKUA1", "Austin").is_some());
    }

    #[test]
    fn test_no_shelves_forces_doh_shortfall_on_frozen_facility() {
        // 凍結設施且沒有現有貨架: 當日進當日出可滿足需求,
        // 但無法持有 DoH 要求的庫存, 缺口落在 DoH 鬆弛上
        let mut ctx = context(30.0, 0);
        ctx.catalog.facilities[0].expandable = false;
        let generation = PackingGenerator::generate_all(&ctx).unwrap();
        let solution = CapacityOptimizer::solve_scenario(&ctx, &generation).unwrap();
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert!(!solution.doh_shortfalls.is_empty());
    }
}
