//! 場景配置與規劃目錄
//!
//! 所有可調參數集中在 [`ScenarioConfig`], 可直接以 JSON 載入;
//! 不同 DoH 組合只需換一份配置, 不需要複製程式。

use crate::calendar::PlanningCalendar;
use crate::demand::DemandSeries;
use crate::facility::Facility;
use crate::policy::DohPolicy;
use crate::shelf::ShelfSpec;
use crate::sku::{Sku, StorageType};
use crate::{Result, WcpError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// 擴建上限: 某設施某儲存類型最多可增加的貨架數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionCeiling {
    /// 設施
    pub facility: String,
    /// 儲存類型
    pub storage_type: StorageType,
    /// 現有貨架以外最多可增加的貨架數
    pub max_additional: f64,
}

fn default_days_per_month() -> u32 {
    21
}

fn default_time_limit() -> f64 {
    180.0
}

/// 場景配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// 場景名稱 (輸出識別用)
    pub name: String,
    /// 國內 SKU 的 DoH 覆蓋天數
    pub doh_domestic: f64,
    /// 國際 SKU 的 DoH 覆蓋天數
    pub doh_international: f64,
    /// 規劃月數
    pub horizon_months: u32,
    /// 每月營業日數
    #[serde(default = "default_days_per_month")]
    pub days_per_month: u32,
    /// 求解時間上限 (秒)
    #[serde(default = "default_time_limit")]
    pub solver_time_limit_secs: f64,
    /// 貨架使用率下限 (例如 0.93); `None` 表示不啟用
    #[serde(default)]
    pub utilization_floor: Option<f64>,
    /// 各設施的擴建上限
    #[serde(default)]
    pub expansion_ceilings: Vec<ExpansionCeiling>,
    /// 貨架數是否要求整數解 (預設為 LP 鬆弛)
    #[serde(default)]
    pub integer_shelves: bool,
    /// 使用純 SKU 連續裝箱的 SKU 清單
    #[serde(default)]
    pub continuous_skus: Vec<String>,
}

impl ScenarioConfig {
    /// 建立場景配置, 其餘欄位採預設值
    pub fn new(
        name: impl Into<String>,
        doh_domestic: f64,
        doh_international: f64,
        horizon_months: u32,
    ) -> Self {
        Self {
            name: name.into(),
            doh_domestic,
            doh_international,
            horizon_months,
            days_per_month: default_days_per_month(),
            solver_time_limit_secs: default_time_limit(),
            utilization_floor: None,
            expansion_ceilings: Vec::new(),
            integer_shelves: false,
            continuous_skus: Vec::new(),
        }
    }

    /// 由 JSON 字串載入
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScenarioConfig = serde_json::from_str(json)
            .map_err(|e| WcpError::InvalidScenario(format!("JSON 解析失敗: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 檢查配置合法性
    pub fn validate(&self) -> Result<()> {
        if self.horizon_months == 0 {
            return Err(WcpError::InvalidScenario("規劃月數必須 > 0".to_string()));
        }
        if self.days_per_month == 0 {
            return Err(WcpError::InvalidScenario(
                "每月營業日數必須 > 0".to_string(),
            ));
        }
        if self.doh_domestic < 0.0 || self.doh_international < 0.0 {
            return Err(WcpError::InvalidScenario("DoH 天數不可為負".to_string()));
        }
        if let Some(alpha) = self.utilization_floor {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(WcpError::InvalidScenario(format!(
                    "使用率下限 {} 必須在 [0, 1] 內",
                    alpha
                )));
            }
        }
        Ok(())
    }

    /// 場景對應的規劃日曆
    pub fn calendar(&self) -> PlanningCalendar {
        PlanningCalendar::new(self.horizon_months, self.days_per_month)
    }
}

/// 規劃目錄: 主檔資料的集合
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// SKU 主檔
    pub skus: Vec<Sku>,
    /// 設施主檔
    pub facilities: Vec<Facility>,
    /// 貨架規格 (設施 × 儲存類型)
    pub shelf_specs: Vec<ShelfSpec>,
    /// 現有貨架數
    pub current_shelves: HashMap<(String, StorageType), u32>,
    /// 月度需求
    pub demand: DemandSeries,
    /// DoH 政策 (空白時由場景配置的統一天數產生)
    pub doh: DohPolicy,
}

impl Catalog {
    /// 建立空的目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 查詢 SKU
    pub fn sku(&self, id: &str) -> Option<&Sku> {
        self.skus.iter().find(|s| s.id == id)
    }

    /// 查詢設施
    pub fn facility(&self, id: &str) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.id == id)
    }

    /// 查詢貨架規格
    pub fn shelf_spec(&self, facility: &str, storage_type: StorageType) -> Option<&ShelfSpec> {
        self.shelf_specs
            .iter()
            .find(|s| s.facility == facility && s.storage_type == storage_type)
    }

    /// 現有貨架數, 缺漏視為 0
    pub fn current_shelf_count(&self, facility: &str, storage_type: StorageType) -> u32 {
        self.current_shelves
            .get(&(facility.to_string(), storage_type))
            .copied()
            .unwrap_or(0)
    }

    /// 設定現有貨架數
    pub fn set_current_shelves(&mut self, facility: &str, storage_type: StorageType, count: u32) {
        self.current_shelves
            .insert((facility.to_string(), storage_type), count);
    }
}

/// 場景執行上下文: 配置 + 目錄 + 唯一執行識別碼
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    /// 場景配置
    pub config: ScenarioConfig,
    /// 規劃目錄
    pub catalog: Catalog,
    /// 本次執行的唯一識別碼
    pub run_id: Uuid,
}

impl ScenarioContext {
    /// 建立場景上下文並產生執行識別碼
    pub fn new(config: ScenarioConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            run_id: Uuid::new_v4(),
        })
    }

    /// 有效的 DoH 政策: 目錄有明確政策時直接使用,
    /// 否則依場景配置的統一天數產生
    pub fn effective_doh(&self) -> DohPolicy {
        if self.catalog.doh.is_empty() {
            DohPolicy::uniform(
                &self.catalog.skus,
                &self.catalog.facilities,
                self.config.doh_domestic,
                self.config.doh_international,
            )
        } else {
            self.catalog.doh.clone()
        }
    }

    /// SKU 是否採用純 SKU 連續裝箱
    pub fn is_continuous_sku(&self, sku_id: &str) -> bool {
        self.config.continuous_skus.iter().any(|s| s == sku_id)
    }

    /// 輸出識別鍵: 場景名稱 + 執行識別碼
    pub fn output_key(&self) -> String {
        format!("{}/{}", self.config.name, self.run_id)
    }
}
