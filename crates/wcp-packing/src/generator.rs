//! 裝箱配置產生器

use crate::{continuous, discrete};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use wcp_core::{
    PackingConfiguration, PackingMode, Result, ScenarioContext, ShelfSpec, Sku, StorageType,
};

/// 裝箱失敗原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RejectReason {
    /// 包裝尺寸或重量資料不合法
    #[error("包裝資料不合法")]
    InvalidPackageData,
    /// 六個方向都放不進槽位
    #[error("所有方向都超出槽位尺寸")]
    DoesNotFitSlot,
    /// 單一包裝已超過重量預算
    #[error("單一包裝超過重量預算")]
    WeightCapacityZero,
    /// 單一包裝已超過體積預算
    #[error("單一包裝超過體積預算")]
    VolumeCapacityZero,
}

/// 一次失敗的裝箱嘗試
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingRejection {
    /// 設施
    pub facility: String,
    /// 儲存類型
    pub storage_type: StorageType,
    /// SKU 編號
    pub sku_id: String,
    /// 嘗試的裝箱模式
    pub mode: PackingMode,
    /// 失敗原因
    pub reason: RejectReason,
}

/// 產生器輸出: 全部可行配置與全部失敗嘗試
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    /// 可行的裝箱配置, id 依產生順序遞增
    pub configurations: Vec<PackingConfiguration>,
    /// 失敗的嘗試 (診斷用)
    pub rejections: Vec<PackingRejection>,
}

impl GenerationResult {
    /// 某設施某儲存類型的配置
    pub fn configs_for(
        &self,
        facility: &str,
        storage_type: StorageType,
    ) -> impl Iterator<Item = &PackingConfiguration> {
        let facility = facility.to_string();
        self.configurations
            .iter()
            .filter(move |c| c.facility == facility && c.storage_type == storage_type)
    }

    /// 某 SKU 的所有配置
    pub fn configs_for_sku(&self, sku_id: &str) -> impl Iterator<Item = &PackingConfiguration> {
        let sku_id = sku_id.to_string();
        self.configurations.iter().filter(move |c| c.sku_id == sku_id)
    }

    /// SKU 是否在任何設施有至少一個可行配置
    pub fn has_config_for_sku(&self, sku_id: &str) -> bool {
        self.configs_for_sku(sku_id).next().is_some()
    }

    /// 依配置編號查詢
    pub fn config(&self, id: u32) -> Option<&PackingConfiguration> {
        self.configurations.iter().find(|c| c.id == id)
    }
}

/// 單一 (SKU, 貨架規格, 模式) 的裝箱嘗試結果
type Attempt = std::result::Result<PackingConfiguration, PackingRejection>;

/// 裝箱配置產生器
///
/// 依設施 → 儲存類型 → SKU 的固定順序走訪, 同一儲存類型內
/// 的 SKU 以 rayon 平行計算; 配置編號在收集後依走訪順序
/// 指派, 重複執行產生完全相同的輸出。
pub struct PackingGenerator;

impl PackingGenerator {
    /// 為場景產生全部裝箱配置
    pub fn generate_all(ctx: &ScenarioContext) -> Result<GenerationResult> {
        tracing::info!(
            facilities = ctx.catalog.facilities.len(),
            skus = ctx.catalog.skus.len(),
            "開始產生裝箱配置"
        );

        let mut result = GenerationResult::default();
        let mut next_id: u32 = 1;

        for facility in &ctx.catalog.facilities {
            for storage_type in StorageType::ALL {
                let Some(spec) = ctx.catalog.shelf_spec(&facility.id, storage_type) else {
                    continue;
                };
                let candidates: Vec<&Sku> = ctx
                    .catalog
                    .skus
                    .iter()
                    .filter(|s| s.storage_type == storage_type)
                    .collect();
                if candidates.is_empty() {
                    continue;
                }

                let attempts: Vec<Vec<Attempt>> = candidates
                    .par_iter()
                    .map(|sku| Self::attempts_for(ctx, sku, spec))
                    .collect();

                for attempt in attempts.into_iter().flatten() {
                    match attempt {
                        Ok(mut config) => {
                            config.id = next_id;
                            next_id += 1;
                            result.configurations.push(config);
                        }
                        Err(rejection) => result.rejections.push(rejection),
                    }
                }
            }
        }

        // 每個配置都重新對照貨架限制驗證一次
        for config in &result.configurations {
            let sku = ctx
                .catalog
                .sku(&config.sku_id)
                .ok_or_else(|| wcp_core::WcpError::SkuNotFound(config.sku_id.clone()))?;
            let spec = ctx
                .catalog
                .shelf_spec(&config.facility, config.storage_type)
                .ok_or_else(|| {
                    wcp_core::WcpError::ShelfSpecNotFound(format!(
                        "{}/{}",
                        config.facility, config.storage_type
                    ))
                })?;
            config.validate(sku, spec)?;
        }

        tracing::info!(
            configurations = result.configurations.len(),
            rejections = result.rejections.len(),
            "裝箱配置產生完成"
        );
        Ok(result)
    }

    /// 單一 SKU 在某貨架規格上的所有裝箱嘗試
    fn attempts_for(ctx: &ScenarioContext, sku: &Sku, spec: &ShelfSpec) -> Vec<Attempt> {
        let mut attempts = Vec::with_capacity(2);

        attempts.push(match discrete::packages_per_slot(sku, spec) {
            Ok(per_slot) => Ok(PackingConfiguration {
                id: 0,
                facility: spec.facility.clone(),
                storage_type: spec.storage_type,
                sku_id: sku.id.clone(),
                mode: PackingMode::Discrete,
                packages_per_slot: per_slot,
                slots_used: spec.item_slots,
                weight_per_package: sku.sell_weight,
                units_per_package: sku.units_per_package,
            }),
            Err(reason) => Err(PackingRejection {
                facility: spec.facility.clone(),
                storage_type: spec.storage_type,
                sku_id: sku.id.clone(),
                mode: PackingMode::Discrete,
                reason,
            }),
        });

        if ctx.is_continuous_sku(&sku.id) {
            attempts.push(match continuous::max_packages(sku, spec) {
                Ok(packages) => Ok(PackingConfiguration {
                    id: 0,
                    facility: spec.facility.clone(),
                    storage_type: spec.storage_type,
                    sku_id: sku.id.clone(),
                    mode: PackingMode::Continuous,
                    packages_per_slot: packages,
                    slots_used: 1,
                    weight_per_package: sku.sell_weight,
                    units_per_package: sku.units_per_package,
                }),
                Err(reason) => Err(PackingRejection {
                    facility: spec.facility.clone(),
                    storage_type: spec.storage_type,
                    sku_id: sku.id.clone(),
                    mode: PackingMode::Continuous,
                    reason,
                }),
            });
        }

        attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcp_core::{Catalog, Dims3, Facility, ScenarioConfig, SupplierType};

    fn test_context() -> ScenarioContext {
        let mut catalog = Catalog::new();
        catalog.skus.push(Sku::new(
            "SKUA1",
            Dims3::new(10.0, 10.0, 6.0),
            15.0,
            StorageType::Bins,
            SupplierType::Domestic,
        ));
        catalog.skus.push(Sku::new(
            "SKUC1",
            Dims3::new(40.0, 40.0, 40.0),
            700.0,
            StorageType::Pallet,
            SupplierType::International,
        ));
        catalog.facilities.push(Facility::frozen("Columbus"));
        catalog.facilities.push(Facility::new("Austin"));
        catalog.shelf_specs.push(ShelfSpec::new(
            "Austin",
            StorageType::Bins,
            6,
            600.0,
            Dims3::new(48.0, 48.0, 48.0),
            384.0,
        ));
        catalog.shelf_specs.push(ShelfSpec::new(
            "Austin",
            StorageType::Pallet,
            4,
            500.0,
            Dims3::new(48.0, 48.0, 48.0),
            256.0,
        ));
        let mut config = ScenarioConfig::new("test", 7.0, 30.0, 3);
        config.continuous_skus = vec!["SKUC1".to_string()];
        ScenarioContext::new(config, catalog).unwrap()
    }

    #[test]
    fn test_generates_expected_configs() {
        let ctx = test_context();
        let result = PackingGenerator::generate_all(&ctx).unwrap();

        // SKUA1 離散配置: 每槽位 40 包 × 6 槽位
        let widget: Vec<_> = result.configs_for_sku("SKUA1").collect();
        assert_eq!(widget.len(), 1);
        assert_eq!(widget[0].packages_per_slot, 40);
        assert_eq!(widget[0].slots_used, 6);
        assert_eq!(widget[0].total_packages(), 240);

        // SKUC1 離散失敗 (單槽位 500 lbs 放不下 700 lbs), 連續成功
        let furniture: Vec<_> = result.configs_for_sku("SKUC1").collect();
        assert_eq!(furniture.len(), 1);
        assert_eq!(furniture[0].mode, PackingMode::Continuous);
        assert_eq!(furniture[0].total_packages(), 2);
        assert!(result
            .rejections
            .iter()
            .any(|r| r.sku_id == "SKUC1" && r.mode == PackingMode::Discrete));
    }

    #[test]
    fn test_ids_are_sequential_and_deterministic() {
        let ctx = test_context();
        let first = PackingGenerator::generate_all(&ctx).unwrap();
        let second = PackingGenerator::generate_all(&ctx).unwrap();

        let ids: Vec<u32> = first.configurations.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=ids.len() as u32).collect::<Vec<_>>());
        for (a, b) in first.configurations.iter().zip(&second.configurations) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.sku_id, b.sku_id);
            assert_eq!(a.total_packages(), b.total_packages());
        }
    }

    #[test]
    fn test_no_configs_at_facility_without_spec() {
        let ctx = test_context();
        let result = PackingGenerator::generate_all(&ctx).unwrap();
        assert_eq!(result.configs_for("Columbus", StorageType::Bins).count(), 0);
    }
}
