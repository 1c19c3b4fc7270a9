//! 生產建議計算示例

use production_planner::{InMemorySource, PlannerConfig, ProductionPlanner};

const STORE: &str = r#"{
    "materials": [
        { "id": 1, "code": "STEEL-001", "name": "鋼管", "stock": 40 },
        { "id": 2, "code": "RIM-001", "name": "輪圈", "stock": 25 },
        { "id": 3, "code": "SEAT-001", "name": "座墊", "stock": 6 }
    ],
    "products": [
        { "id": 1, "code": "BIKE-001", "name": "腳踏車", "price": "4500.00",
          "bom": [
              { "material_id": 1, "required_quantity": 3 },
              { "material_id": 2, "required_quantity": 2 },
              { "material_id": 3, "required_quantity": 1 }
          ] },
        { "id": 2, "code": "SCOOTER-001", "name": "滑板車", "price": "1200.00",
          "bom": [
              { "material_id": 1, "required_quantity": 2 },
              { "material_id": 2, "required_quantity": 2 }
          ] },
        { "id": 3, "code": "WHEEL-001", "name": "備用輪", "price": "350.00",
          "bom": [{ "material_id": 2, "required_quantity": 1 }] },
        { "id": 4, "code": "HELMET-001", "name": "安全帽", "price": "800.00" }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    production_planner::logging::init();

    println!("=== 生產建議計算示例 ===\n");

    let source = InMemorySource::from_json_str(STORE)?;

    println!("原物料庫存:");
    for material in &source.materials {
        println!("  - {} {}: {}", material.code, material.name, material.stock);
    }

    let planner = ProductionPlanner::new(source, PlannerConfig::default());
    let result = planner.suggest_detailed()?;

    println!("\n生產建議:");
    for suggestion in result.plan.suggestions() {
        println!(
            "  - {} {} × {} (單價 {})",
            suggestion.product_code,
            suggestion.product_name,
            suggestion.quantity,
            suggestion.product_price
        );
    }
    println!("總產值: {}", result.plan.total_value());

    if !result.skipped.is_empty() {
        println!("\n未排入計劃:");
        for skipped in &result.skipped {
            println!("  - 產品 {}: {:?}", skipped.product_id, skipped.reason);
        }
    }

    println!("\nAPI 回應:\n{}", planner.suggest()?.to_json()?);

    Ok(())
}
