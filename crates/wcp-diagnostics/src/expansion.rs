//! 擴建需求分析
//!
//! 把貨架上限的鬆弛值換算成各設施各儲存類型需要增加的
//! 貨架數, 並標註造成擴建的主力配置被哪個限制綁定。

use crate::binding::{self, BindingConstraint};
use serde::{Deserialize, Serialize};
use wcp_core::{ScenarioContext, StorageType};
use wcp_optimizer::CapacitySolution;
use wcp_packing::GenerationResult;

/// 低於此值的鬆弛視為數值雜訊
const EXPANSION_TOL: f64 = 0.1;

/// 單一 (設施, 儲存類型) 的擴建需求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionRequirement {
    /// 設施
    pub facility: String,
    /// 儲存類型
    pub storage_type: StorageType,
    /// 現有貨架數
    pub current_shelves: u32,
    /// 需增加的貨架數 (無條件進位)
    pub additional_shelves: u32,
    /// 主力配置的綁定約束
    pub binding: Option<BindingConstraint>,
    /// 佔用最多新增貨架的 SKU
    pub dominant_sku: Option<String>,
}

/// 擴建需求分析器
pub struct ExpansionAnalyzer;

impl ExpansionAnalyzer {
    /// 由解的貨架鬆弛值整理擴建需求
    pub fn analyze(
        ctx: &ScenarioContext,
        generation: &GenerationResult,
        solution: &CapacitySolution,
    ) -> Vec<ExpansionRequirement> {
        let mut requirements = Vec::new();

        for slack in &solution.shelf_slack {
            if slack.excess_shelves <= EXPANSION_TOL {
                continue;
            }
            let additional = (slack.excess_shelves - EXPANSION_TOL).ceil().max(1.0) as u32;
            let current = ctx
                .catalog
                .current_shelf_count(&slack.facility, slack.storage_type);

            // 該組合內部署量最大的配置決定綁定標註
            let dominant = generation
                .configs_for(&slack.facility, slack.storage_type)
                .map(|c| (c, solution.shelves_for(c.id)))
                .filter(|(_, deployed)| *deployed > 0.0)
                .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(c, _)| c);

            let (binding_class, dominant_sku) = match dominant {
                Some(config) => {
                    let sku = ctx.catalog.sku(&config.sku_id);
                    let spec = ctx
                        .catalog
                        .shelf_spec(&config.facility, config.storage_type);
                    let class = match (sku, spec) {
                        (Some(sku), Some(spec)) => Some(binding::classify(config, sku, spec)),
                        _ => None,
                    };
                    (class, Some(config.sku_id.clone()))
                }
                None => (None, None),
            };

            requirements.push(ExpansionRequirement {
                facility: slack.facility.clone(),
                storage_type: slack.storage_type,
                current_shelves: current,
                additional_shelves: additional,
                binding: binding_class,
                dominant_sku,
            });
        }

        requirements.sort_by(|a, b| {
            (&a.facility, a.storage_type.as_str()).cmp(&(&b.facility, b.storage_type.as_str()))
        });
        requirements
    }

    /// 全部擴建需求的貨架總數
    pub fn total_additional(requirements: &[ExpansionRequirement]) -> u32 {
        requirements.iter().map(|r| r.additional_shelves).sum()
    }
}
