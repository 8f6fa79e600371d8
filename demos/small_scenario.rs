//! 小型場景示範: 從目錄建構到診斷報告

use anyhow::Result;
use wcp::{
    run_scenario, Catalog, Dims3, Facility, ScenarioConfig, ScenarioContext, ShelfSpec, Sku,
    StorageType, SupplierType,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 倉庫容量規劃示範 ===\n");

    // 建立目錄: 兩個設施, 兩個 SKU
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
    for facility in ["Columbus", "Austin"] {
        catalog.shelf_specs.push(ShelfSpec::new(
            facility,
            StorageType::Bins,
            6,
            600.0,
            Dims3::new(48.0, 48.0, 48.0),
            384.0,
        ));
        catalog.shelf_specs.push(ShelfSpec::new(
            facility,
            StorageType::Pallet,
            4,
            500.0,
            Dims3::new(48.0, 48.0, 48.0),
            256.0,
        ));
    }
    catalog.set_current_shelves("Columbus", StorageType::Bins, 8);

    // 十二個月的需求
    for month in 1..=12 {
        catalog.demand.set(month, "SKUA1", 2100.0);
        catalog.demand.set(month, "SKUC1", 42.0);
    }

    // 場景: 國內 7 天 / 國際 30 天 DoH
    let mut config = ScenarioConfig::new("demo_7_30", 7.0, 30.0, 12);
    config.continuous_skus = vec!["SKUC1".to_string()];

    let ctx = ScenarioContext::new(config, catalog)?;
    let report = run_scenario(&ctx)?;

    println!(
        "裝箱配置: {} 個可行, {} 個被拒\n",
        report.configurations, report.rejections
    );
    println!("{}", report.diagnostics.render());

    Ok(())
}
