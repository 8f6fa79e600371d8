//! DoH 政策掃描示範
//!
//! 同一份目錄跑多組 (國內, 國際) DoH 天數,
//! 比較各政策下的擴建需求。

use anyhow::Result;
use wcp::{
    run_scenario, Catalog, Dims3, Facility, ScenarioConfig, ScenarioContext, ShelfSpec, Sku,
    StorageType, SupplierType,
};

fn sweep_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.skus.push(Sku::new(
        "SKUA1",
        Dims3::new(10.0, 10.0, 6.0),
        15.0,
        StorageType::Bins,
        SupplierType::Domestic,
    ));
    catalog.skus.push(
        Sku::new(
            "SKUB1",
            Dims3::new(8.0, 8.0, 4.0),
            5.0,
            StorageType::Bins,
            SupplierType::International,
        )
        .with_units_per_package(4),
    );
    catalog.facilities.push(Facility::new("Sacramento"));
    catalog.shelf_specs.push(ShelfSpec::new(
        "Sacramento",
        StorageType::Bins,
        6,
        600.0,
        Dims3::new(48.0, 48.0, 48.0),
        384.0,
    ));
    catalog.set_current_shelves("Sacramento", StorageType::Bins, 3);
    for month in 1..=6 {
        catalog.demand.set(month, "SKUA1", 2100.0);
        catalog.demand.set(month, "SKUB1", 4200.0);
    }
    catalog
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== DoH 政策掃描 ===\n");
    println!(
        "{:<12} {:<12} {:>12} {:>8}",
        "國內 DoH", "國際 DoH", "需增加貨架", "紅旗數"
    );

    for (domestic, international) in [(2.0, 7.0), (7.0, 30.0), (14.0, 45.0), (21.0, 60.0)] {
        let config = ScenarioConfig::new(
            format!("sweep_{}_{}", domestic, international),
            domestic,
            international,
            6,
        );
        let ctx = ScenarioContext::new(config, sweep_catalog())?;
        let report = run_scenario(&ctx)?;
        println!(
            "{:<12} {:<12} {:>12} {:>8}",
            domestic,
            international,
            report.total_additional_shelves(),
            report.diagnostics.red_flags.len()
        );
    }

    Ok(())
}
