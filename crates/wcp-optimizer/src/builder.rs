//! 容量配置模型建構器
//!
//! 把場景資料組成時間索引的線性規劃:
//! 決策變數為各配置的貨架數、每日庫存、出貨與進貨,
//! 軟約束 (需求、DoH、貨架上限) 以鬆弛變數進入目標式,
//! 權重階層確保需求滿足 ≫ DoH 覆蓋 ≫ 擴建成本。

use crate::model::{LpModel, RowBound, Sense, VarId};
use wcp_core::{PlanningCalendar, Result, ScenarioContext, StorageType, WcpError};
use wcp_packing::GenerationResult;

/// 目標式權重階層
///
/// 未滿足需求的懲罰遠大於 DoH 缺口, DoH 缺口又遠大於
/// 擴建一個貨架的成本; 求解器只會在物理上不可行時
/// 才犧牲需求。
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveWeights {
    /// 每單位未滿足需求的懲罰
    pub unmet_demand: f64,
    /// 每單位 DoH 缺口的懲罰
    pub doh_shortfall: f64,
    /// 每個超出現有數量的貨架成本
    pub shelf_expansion: f64,
    /// 每個超出擴建上限的貨架懲罰
    pub ceiling_overrun: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            unmet_demand: 1e6,
            doh_shortfall: 1e3,
            shelf_expansion: 1.0,
            ceiling_overrun: 100.0,
        }
    }
}

/// 政策約束: 場景可切換的額外規則
#[derive(Debug, Clone)]
pub enum PolicyConstraint {
    /// 貨架使用率下限: 現有貨架的使用量不得低於 alpha 倍
    UtilizationFloor {
        /// 使用率下限 (0..=1)
        alpha: f64,
    },
    /// 擴建上限: 超出部分以高懲罰鬆弛變數吸收
    ExpansionCeiling {
        /// 設施
        facility: String,
        /// 儲存類型
        storage_type: StorageType,
        /// 最多可增加的貨架數
        max_additional: f64,
    },
    /// 貨架數要求整數解 (LP 鬆弛改為 MIP)
    IntegerShelves,
}

/// 變數索引: 把解向量映回 (期間, SKU, 設施) 鍵
///
/// 期間 × SKU × 設施的變數以固定順序攤平, 由索引算術查找。
#[derive(Debug, Clone)]
pub struct ModelIndex {
    /// 規劃日曆
    pub calendar: PlanningCalendar,
    /// SKU 編號 (目錄順序)
    pub sku_ids: Vec<String>,
    /// 設施編號 (目錄順序)
    pub facility_ids: Vec<String>,
    /// 配置編號 (產生順序)
    pub config_ids: Vec<u32>,
    /// 各配置的貨架數變數
    pub shelves: Vec<VarId>,
    /// 庫存變數 (期間 × SKU × 設施, 攤平)
    pub inventory: Vec<VarId>,
    /// 出貨變數
    pub shipments: Vec<VarId>,
    /// 進貨變數 (進貨包裝數)
    pub deliveries: Vec<VarId>,
    /// 需求鬆弛變數 (期間 × SKU)
    pub slack_demand: Vec<VarId>,
    /// DoH 鬆弛變數 (期間 × SKU × 設施)
    pub slack_doh: Vec<VarId>,
    /// 貨架上限鬆弛變數 (可擴建的設施 × 儲存類型)
    pub slack_shelf: Vec<((String, StorageType), VarId)>,
    /// 擴建上限鬆弛變數
    pub slack_ceiling: Vec<((String, StorageType), VarId)>,
}

impl ModelIndex {
    fn flat(&self, t: usize, s: usize, f: usize) -> usize {
        (t * self.sku_ids.len() + s) * self.facility_ids.len() + f
    }

    /// 庫存變數
    pub fn inventory_var(&self, t: usize, s: usize, f: usize) -> VarId {
        self.inventory[self.flat(t, s, f)]
    }

    /// 出貨變數
    pub fn shipment_var(&self, t: usize, s: usize, f: usize) -> VarId {
        self.shipments[self.flat(t, s, f)]
    }

    /// 進貨變數
    pub fn delivery_var(&self, t: usize, s: usize, f: usize) -> VarId {
        self.deliveries[self.flat(t, s, f)]
    }

    /// 需求鬆弛變數
    pub fn slack_demand_var(&self, t: usize, s: usize) -> VarId {
        self.slack_demand[t * self.sku_ids.len() + s]
    }

    /// DoH 鬆弛變數
    pub fn slack_doh_var(&self, t: usize, s: usize, f: usize) -> VarId {
        self.slack_doh[self.flat(t, s, f)]
    }

    /// SKU 在索引中的位置
    pub fn sku_index(&self, sku_id: &str) -> Option<usize> {
        self.sku_ids.iter().position(|s| s == sku_id)
    }

    /// 設施在索引中的位置
    pub fn facility_index(&self, facility_id: &str) -> Option<usize> {
        self.facility_ids.iter().position(|f| f == facility_id)
    }
}

/// 容量配置模型建構器
pub struct CapacityModelBuilder<'a> {
    ctx: &'a ScenarioContext,
    generation: &'a GenerationResult,
    weights: ObjectiveWeights,
    policies: Vec<PolicyConstraint>,
}

impl<'a> CapacityModelBuilder<'a> {
    /// 建立建構器, 不帶任何政策約束
    pub fn new(ctx: &'a ScenarioContext, generation: &'a GenerationResult) -> Self {
        Self {
            ctx,
            generation,
            weights: ObjectiveWeights::default(),
            policies: Vec::new(),
        }
    }

    /// 建立建構器並依場景配置套用政策約束
    pub fn from_scenario(ctx: &'a ScenarioContext, generation: &'a GenerationResult) -> Self {
        let mut builder = Self::new(ctx, generation);
        if let Some(alpha) = ctx.config.utilization_floor {
            builder.policies.push(PolicyConstraint::UtilizationFloor { alpha });
        }
        for ceiling in &ctx.config.expansion_ceilings {
            builder.policies.push(PolicyConstraint::ExpansionCeiling {
                facility: ceiling.facility.clone(),
                storage_type: ceiling.storage_type,
                max_additional: ceiling.max_additional,
            });
        }
        if ctx.config.integer_shelves {
            builder.policies.push(PolicyConstraint::IntegerShelves);
        }
        builder
    }

    /// 覆寫目標式權重
    pub fn with_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.weights = weights;
        self
    }

    /// 加入政策約束
    pub fn with_policy(mut self, policy: PolicyConstraint) -> Self {
        self.policies.push(policy);
        self
    }

    /// 建構線性規劃模型與變數索引
    pub fn build(&self) -> Result<(LpModel, ModelIndex)> {
        let catalog = &self.ctx.catalog;
        if catalog.skus.is_empty() || catalog.facilities.is_empty() {
            return Err(WcpError::ModelBuildError(
                "目錄缺少 SKU 或設施".to_string(),
            ));
        }

        let calendar = self.ctx.config.calendar();
        let doh = self.ctx.effective_doh();
        let integer_shelves = self
            .policies
            .iter()
            .any(|p| matches!(p, PolicyConstraint::IntegerShelves));

        let sku_ids: Vec<String> = catalog.skus.iter().map(|s| s.id.clone()).collect();
        let facility_ids: Vec<String> = catalog.facilities.iter().map(|f| f.id.clone()).collect();
        let n_periods = calendar.num_periods();
        let n_skus = sku_ids.len();
        let n_facilities = facility_ids.len();

        let mut model = LpModel::new(Sense::Minimize);

        // 貨架數變數 (每配置一個, 不隨時間變動)
        let mut shelves = Vec::with_capacity(self.generation.configurations.len());
        let mut config_ids = Vec::with_capacity(self.generation.configurations.len());
        for config in &self.generation.configurations {
            let name = format!("shelves[c{}]", config.id);
            let var = if integer_shelves {
                model.add_integer_variable(name, 0.0, f64::INFINITY, 0.0)
            } else {
                model.add_variable(name, 0.0, f64::INFINITY, 0.0)
            };
            shelves.push(var);
            config_ids.push(config.id);
        }

        // 沒有任何裝箱配置的 (SKU, 設施) 組合無法經手該 SKU:
        // 出貨與進貨直接固定為零, 該需求落在需求鬆弛上
        let storable: Vec<bool> = sku_ids
            .iter()
            .flat_map(|sku| {
                facility_ids.iter().map(move |fac| {
                    self.generation
                        .configurations
                        .iter()
                        .any(|c| &c.sku_id == sku && &c.facility == fac)
                })
            })
            .collect();

        // 期間 × SKU × 設施 的流量變數
        let mut inventory = Vec::with_capacity(n_periods * n_skus * n_facilities);
        let mut shipments = Vec::with_capacity(n_periods * n_skus * n_facilities);
        let mut deliveries = Vec::with_capacity(n_periods * n_skus * n_facilities);
        for t in 0..n_periods {
            let p = calendar.period(t);
            for sku in &sku_ids {
                for fac in &facility_ids {
                    inventory.push(model.add_variable(
                        format!("inv[{},{},{}]", p, sku, fac),
                        0.0,
                        f64::INFINITY,
                        0.0,
                    ));
                }
            }
            for (s, sku) in sku_ids.iter().enumerate() {
                for (f, fac) in facility_ids.iter().enumerate() {
                    let upper = if storable[s * n_facilities + f] {
                        f64::INFINITY
                    } else {
                        0.0
                    };
                    shipments.push(model.add_variable(
                        format!("ship[{},{},{}]", p, sku, fac),
                        0.0,
                        upper,
                        0.0,
                    ));
                }
            }
            for (s, sku) in sku_ids.iter().enumerate() {
                for (f, fac) in facility_ids.iter().enumerate() {
                    let upper = if storable[s * n_facilities + f] {
                        f64::INFINITY
                    } else {
                        0.0
                    };
                    deliveries.push(model.add_variable(
                        format!("deliv[{},{},{}]", p, sku, fac),
                        0.0,
                        upper,
                        0.0,
                    ));
                }
            }
        }

        // 鬆弛變數
        let mut slack_demand = Vec::with_capacity(n_periods * n_skus);
        let mut slack_doh = Vec::with_capacity(n_periods * n_skus * n_facilities);
        for t in 0..n_periods {
            let p = calendar.period(t);
            for sku in &sku_ids {
                slack_demand.push(model.add_variable(
                    format!("slack_demand[{},{}]", p, sku),
                    0.0,
                    f64::INFINITY,
                    self.weights.unmet_demand,
                ));
            }
            for sku in &sku_ids {
                for fac in &facility_ids {
                    slack_doh.push(model.add_variable(
                        format!("slack_doh[{},{},{}]", p, sku, fac),
                        0.0,
                        f64::INFINITY,
                        self.weights.doh_shortfall,
                    ));
                }
            }
        }

        let mut slack_shelf = Vec::new();
        for facility in &catalog.facilities {
            if !facility.expandable {
                continue;
            }
            for storage_type in StorageType::ALL {
                if catalog.shelf_spec(&facility.id, storage_type).is_none() {
                    continue;
                }
                let var = model.add_variable(
                    format!("slack_shelf[{},{}]", facility.id, storage_type),
                    0.0,
                    f64::INFINITY,
                    self.weights.shelf_expansion,
                );
                slack_shelf.push(((facility.id.clone(), storage_type), var));
            }
        }

        let mut slack_ceiling = Vec::new();
        for policy in &self.policies {
            if let PolicyConstraint::ExpansionCeiling {
                facility,
                storage_type,
                ..
            } = policy
            {
                let var = model.add_variable(
                    format!("slack_ceiling[{},{}]", facility, storage_type),
                    0.0,
                    f64::INFINITY,
                    self.weights.ceiling_overrun,
                );
                slack_ceiling.push(((facility.clone(), *storage_type), var));
            }
        }

        let index = ModelIndex {
            calendar: calendar.clone(),
            sku_ids,
            facility_ids,
            config_ids,
            shelves,
            inventory,
            shipments,
            deliveries,
            slack_demand,
            slack_doh,
            slack_shelf,
            slack_ceiling,
        };

        self.add_flow_constraints(&mut model, &index, &doh)?;
        self.add_capacity_constraints(&mut model, &index)?;
        self.add_policy_constraints(&mut model, &index)?;

        tracing::info!(
            variables = model.num_variables(),
            constraints = model.num_constraints(),
            integer = integer_shelves,
            "容量配置模型建構完成"
        );
        Ok((model, index))
    }

    /// 需求滿足、庫存餘額與 DoH 覆蓋約束
    fn add_flow_constraints(
        &self,
        model: &mut LpModel,
        index: &ModelIndex,
        doh: &wcp_core::DohPolicy,
    ) -> Result<()> {
        let catalog = &self.ctx.catalog;
        let calendar = &index.calendar;
        let days = self.ctx.config.days_per_month;

        for t in 0..calendar.num_periods() {
            let p = calendar.period(t);
            for (s, sku) in catalog.skus.iter().enumerate() {
                let daily_demand = catalog.demand.daily(p.month, &sku.id, days);

                // 需求滿足: Σf 出貨 + 鬆弛 ≥ 日需求
                if daily_demand > 0.0 {
                    let mut terms: Vec<(VarId, f64)> = (0..index.facility_ids.len())
                        .map(|f| (index.shipment_var(t, s, f), 1.0))
                        .collect();
                    terms.push((index.slack_demand_var(t, s), 1.0));
                    model.add_constraint(
                        format!("demand_fulfill[{},{}]", p, sku.id),
                        terms,
                        RowBound::Ge(daily_demand),
                    );
                }

                for (f, facility_id) in index.facility_ids.iter().enumerate() {
                    // 庫存餘額: inv[t] = inv[t-1] + 進貨單品 - 出貨
                    // 第一個期間冷啟動, 期初庫存為零
                    let inbound_units = sku.inbound_units as f64;
                    let mut terms = vec![
                        (index.inventory_var(t, s, f), 1.0),
                        (index.delivery_var(t, s, f), -inbound_units),
                        (index.shipment_var(t, s, f), 1.0),
                    ];
                    if let Some(prev) = calendar.previous(p) {
                        let pt = calendar.ordinal(prev);
                        terms.push((index.inventory_var(pt, s, f), -1.0));
                    }
                    model.add_constraint(
                        format!("inv_balance[{},{},{}]", p, sku.id, facility_id),
                        terms,
                        RowBound::Eq(0.0),
                    );

                    // DoH 覆蓋: inv + 鬆弛 ≥ 日需求 × 覆蓋天數
                    let coverage = daily_demand * doh.days_or_zero(&sku.id, facility_id);
                    if coverage > 0.0 {
                        model.add_constraint(
                            format!("doh[{},{},{}]", p, sku.id, facility_id),
                            vec![
                                (index.inventory_var(t, s, f), 1.0),
                                (index.slack_doh_var(t, s, f), 1.0),
                            ],
                            RowBound::Ge(coverage),
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// 容量連結與貨架上限約束
    fn add_capacity_constraints(&self, model: &mut LpModel, index: &ModelIndex) -> Result<()> {
        let catalog = &self.ctx.catalog;
        let calendar = &index.calendar;

        // 容量連結: 庫存 ≤ 該 SKU 在該設施所有配置的單品容量總和
        for t in 0..calendar.num_periods() {
            let p = calendar.period(t);
            for (s, sku) in catalog.skus.iter().enumerate() {
                for (f, facility_id) in index.facility_ids.iter().enumerate() {
                    let mut terms = vec![(index.inventory_var(t, s, f), 1.0)];
                    for (c, config) in self.generation.configurations.iter().enumerate() {
                        if config.sku_id == sku.id && &config.facility == facility_id {
                            terms.push((index.shelves[c], -config.units_per_shelf()));
                        }
                    }
                    model.add_constraint(
                        format!("capacity_link[{},{},{}]", p, sku.id, facility_id),
                        terms,
                        RowBound::Le(0.0),
                    );
                }
            }
        }

        // 貨架上限: 可擴建設施帶鬆弛, 凍結設施為硬上限
        for facility in &catalog.facilities {
            for storage_type in StorageType::ALL {
                if catalog.shelf_spec(&facility.id, storage_type).is_none() {
                    continue;
                }
                let current = catalog.current_shelf_count(&facility.id, storage_type) as f64;
                let mut terms: Vec<(VarId, f64)> = Vec::new();
                for (c, config) in self.generation.configurations.iter().enumerate() {
                    if config.facility == facility.id && config.storage_type == storage_type {
                        terms.push((index.shelves[c], 1.0));
                    }
                }
                if terms.is_empty() {
                    continue;
                }
                if facility.expandable {
                    let slack = index
                        .slack_shelf
                        .iter()
                        .find(|((fac, st), _)| fac == &facility.id && *st == storage_type)
                        .map(|(_, v)| *v)
                        .ok_or_else(|| {
                            WcpError::ModelBuildError(format!(
                                "缺少 {}/{} 的貨架鬆弛變數",
                                facility.id, storage_type
                            ))
                        })?;
                    terms.push((slack, -1.0));
                }
                model.add_constraint(
                    format!("shelf_limit[{},{}]", facility.id, storage_type),
                    terms,
                    RowBound::Le(current),
                );
            }
        }
        Ok(())
    }

    /// 政策約束 (使用率下限、擴建上限)
    fn add_policy_constraints(&self, model: &mut LpModel, index: &ModelIndex) -> Result<()> {
        let catalog = &self.ctx.catalog;

        for policy in &self.policies {
            match policy {
                PolicyConstraint::UtilizationFloor { alpha } => {
                    for facility in &catalog.facilities {
                        for storage_type in StorageType::ALL {
                            let current =
                                catalog.current_shelf_count(&facility.id, storage_type) as f64;
                            if current <= 0.0 {
                                continue;
                            }
                            let terms: Vec<(VarId, f64)> = self
                                .generation
                                .configurations
                                .iter()
                                .enumerate()
                                .filter(|(_, c)| {
                                    c.facility == facility.id && c.storage_type == storage_type
                                })
                                .map(|(c, _)| (index.shelves[c], 1.0))
                                .collect();
                            if terms.is_empty() {
                                continue;
                            }
                            model.add_constraint(
                                format!("utilization_floor[{},{}]", facility.id, storage_type),
                                terms,
                                RowBound::Ge(alpha * current),
                            );
                        }
                    }
                }
                PolicyConstraint::ExpansionCeiling {
                    facility,
                    storage_type,
                    max_additional,
                } => {
                    let current = catalog.current_shelf_count(facility, *storage_type) as f64;
                    let mut terms: Vec<(VarId, f64)> = self
                        .generation
                        .configurations
                        .iter()
                        .enumerate()
                        .filter(|(_, c)| &c.facility == facility && c.storage_type == *storage_type)
                        .map(|(c, _)| (index.shelves[c], 1.0))
                        .collect();
                    if terms.is_empty() {
                        continue;
                    }
                    let slack = index
                        .slack_ceiling
                        .iter()
                        .find(|((fac, st), _)| fac == facility && st == storage_type)
                        .map(|(_, v)| *v)
                        .ok_or_else(|| {
                            WcpError::ModelBuildError(format!(
                                "缺少 {}/{} 的擴建上限鬆弛變數",
                                facility, storage_type
                            ))
                        })?;
                    terms.push((slack, -1.0));
                    model.add_constraint(
                        format!("expansion_ceiling[{},{}]", facility, storage_type),
                        terms,
                        RowBound::Le(current + max_additional),
                    );
                }
                PolicyConstraint::IntegerShelves => {}
            }
        }
        Ok(())
    }
}
