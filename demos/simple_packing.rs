//! 簡單包裝計算示例

use order_packs::telemetry::init_tracing;
use order_packs::{PackConfig, PackingService};

fn main() -> anyhow::Result<()> {
    init_tracing("info");

    println!("=== 簡單包裝計算示例 ===\n");

    let service = PackingService::from_config(&PackConfig::default())?;
    let catalog = [250, 500, 1000, 2000, 5000];

    for order in [1, 250, 251, 501, 12_001] {
        let result = service.cached_compute(order, &catalog)?;

        println!(
            "訂購 {} 件 → 出貨 {} 件，共 {} 箱",
            order,
            result.total_items(),
            result.total_packs()
        );
        for packing in &result {
            println!("  - {} 件/箱 × {}", packing.box_size, packing.quantity);
        }
    }

    // 相同查詢（尺寸順序不同）會命中快取
    let result = service.cached_compute(500_000, &[23, 31, 53])?;
    let again = service.cached_compute(500_000, &[53, 31, 23])?;
    assert_eq!(result, again);
    println!("\n500000 件（23/31/53）: {}", serde_json::to_string(&result)?);

    match service.cached_compute(10, &[2, 23, 31, 53, 31]) {
        Ok(_) => println!("意外成功"),
        Err(err) => println!("預期錯誤: {err}"),
    }

    Ok(())
}
