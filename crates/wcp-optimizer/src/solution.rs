//! 解向量的具名萃取

use crate::builder::ModelIndex;
use crate::solver::{RawSolution, SolveStatus};
use serde::{Deserialize, Serialize};
use wcp_core::{PeriodIndex, StorageType};

/// 記錄鬆弛值的容差
const SLACK_TOL: f64 = 1e-6;

/// 某配置的部署貨架數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfDeployment {
    /// 配置編號
    pub config_id: u32,
    /// 部署貨架數 (LP 鬆弛下可為小數)
    pub shelves: f64,
}

/// 未滿足需求記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmetDemand {
    /// 期間
    pub period: PeriodIndex,
    /// SKU 編號
    pub sku_id: String,
    /// 未滿足量 (單品數)
    pub quantity: f64,
}

/// DoH 覆蓋缺口記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DohShortfall {
    /// 期間
    pub period: PeriodIndex,
    /// SKU 編號
    pub sku_id: String,
    /// 設施
    pub facility: String,
    /// 缺口量 (單品數)
    pub quantity: f64,
}

/// 貨架上限的鬆弛量 (可擴建設施)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfSlack {
    /// 設施
    pub facility: String,
    /// 儲存類型
    pub storage_type: StorageType,
    /// 超出現有貨架的數量
    pub excess_shelves: f64,
}

/// 容量配置解
#[derive(Debug, Clone)]
pub struct CapacitySolution {
    /// 求解狀態
    pub status: SolveStatus,
    /// 目標值
    pub objective: f64,
    /// 各配置的貨架部署 (含零)
    pub shelves: Vec<ShelfDeployment>,
    /// 貨架上限鬆弛 (含零, 供診斷列出全部組合)
    pub shelf_slack: Vec<ShelfSlack>,
    /// 擴建上限超出量 (僅非零)
    pub ceiling_overruns: Vec<ShelfSlack>,
    /// 未滿足需求 (僅非零)
    pub unmet_demand: Vec<UnmetDemand>,
    /// DoH 缺口 (僅非零)
    pub doh_shortfalls: Vec<DohShortfall>,
    index: ModelIndex,
    values: Vec<f64>,
}

impl CapacitySolution {
    /// 由原始解向量萃取具名結果
    pub fn extract(index: ModelIndex, raw: RawSolution) -> Self {
        let values = raw.values;

        let shelves = index
            .config_ids
            .iter()
            .zip(&index.shelves)
            .map(|(id, var)| ShelfDeployment {
                config_id: *id,
                shelves: values.get(var.0).copied().unwrap_or(0.0),
            })
            .collect();

        let shelf_slack = index
            .slack_shelf
            .iter()
            .map(|((facility, storage_type), var)| ShelfSlack {
                facility: facility.clone(),
                storage_type: *storage_type,
                excess_shelves: values.get(var.0).copied().unwrap_or(0.0),
            })
            .collect();

        let ceiling_overruns = index
            .slack_ceiling
            .iter()
            .filter_map(|((facility, storage_type), var)| {
                let overrun = values.get(var.0).copied().unwrap_or(0.0);
                (overrun > SLACK_TOL).then(|| ShelfSlack {
                    facility: facility.clone(),
                    storage_type: *storage_type,
                    excess_shelves: overrun,
                })
            })
            .collect();

        let mut unmet_demand = Vec::new();
        let mut doh_shortfalls = Vec::new();
        for t in 0..index.calendar.num_periods() {
            let period = index.calendar.period(t);
            for (s, sku_id) in index.sku_ids.iter().enumerate() {
                let unmet = values
                    .get(index.slack_demand_var(t, s).0)
                    .copied()
                    .unwrap_or(0.0);
                if unmet > SLACK_TOL {
                    unmet_demand.push(UnmetDemand {
                        period,
                        sku_id: sku_id.clone(),
                        quantity: unmet,
                    });
                }
                for (f, facility) in index.facility_ids.iter().enumerate() {
                    let shortfall = values
                        .get(index.slack_doh_var(t, s, f).0)
                        .copied()
                        .unwrap_or(0.0);
                    if shortfall > SLACK_TOL {
                        doh_shortfalls.push(DohShortfall {
                            period,
                            sku_id: sku_id.clone(),
                            facility: facility.clone(),
                            quantity: shortfall,
                        });
                    }
                }
            }
        }

        Self {
            status: raw.status,
            objective: raw.objective,
            shelves,
            shelf_slack,
            ceiling_overruns,
            unmet_demand,
            doh_shortfalls,
            index,
            values,
        }
    }

    /// 某配置的部署貨架數
    pub fn shelves_for(&self, config_id: u32) -> f64 {
        self.shelves
            .iter()
            .find(|d| d.config_id == config_id)
            .map(|d| d.shelves)
            .unwrap_or(0.0)
    }

    fn flat_key(&self, period: PeriodIndex, sku_id: &str, facility: &str) -> Option<(usize, usize, usize)> {
        if !self.index.calendar.contains(period) {
            return None;
        }
        let t = self.index.calendar.ordinal(period);
        let s = self.index.sku_index(sku_id)?;
        let f = self.index.facility_index(facility)?;
        Some((t, s, f))
    }

    /// 某期間某 SKU 在某設施的期末庫存
    pub fn inventory(&self, period: PeriodIndex, sku_id: &str, facility: &str) -> Option<f64> {
        let (t, s, f) = self.flat_key(period, sku_id, facility)?;
        self.values.get(self.index.inventory_var(t, s, f).0).copied()
    }

    /// 某期間的出貨量
    pub fn shipment(&self, period: PeriodIndex, sku_id: &str, facility: &str) -> Option<f64> {
        let (t, s, f) = self.flat_key(period, sku_id, facility)?;
        self.values.get(self.index.shipment_var(t, s, f).0).copied()
    }

    /// 某期間的進貨量 (進貨包裝數)
    pub fn delivery(&self, period: PeriodIndex, sku_id: &str, facility: &str) -> Option<f64> {
        let (t, s, f) = self.flat_key(period, sku_id, facility)?;
        self.values.get(self.index.delivery_var(t, s, f).0).copied()
    }

    /// 變數索引 (診斷用)
    pub fn model_index(&self) -> &ModelIndex {
        &self.index
    }

    /// 所有未滿足需求的總量
    pub fn total_unmet_demand(&self) -> f64 {
        self.unmet_demand.iter().map(|u| u.quantity).sum()
    }
}
