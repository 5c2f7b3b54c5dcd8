//! 咖啡調配生產指標範例
//!
//! 登錄物料、設定配方後計算最大產量、成本與損益平衡點，並存成情境檔

use prodplan::ProductionCalculator;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("===== Premium Coffee Blend =====\n");

    // 步驟 1: 載入測試案例並計算
    println!("[1] Load Test Case");
    let mut calculator = ProductionCalculator::new();
    let report = calculator.load_test_case()?;
    println!("{}\n", serde_json::to_string_pretty(&report)?);

    // 步驟 2: 摘要
    println!("[2] Summary");
    println!(
        "    Max production: {} (bottleneck: {})",
        report.max_production, report.bottleneck_material
    );
    println!("    Profit: {} ({}%)", report.profit, report.profit_margin);
    println!("    Break-even: {}", report.break_even_units);

    // 步驟 3: 補充 Flavoring 後重新計算
    println!("\n[3] Restock Flavoring and Recalculate");
    calculator.register_material("Flavoring", 10.0, "kg", 15.0);
    let restocked = calculator.calculate_metrics()?;
    println!(
        "    Max production: {} (bottleneck: {})",
        restocked.max_production, restocked.bottleneck_material
    );

    // 步驟 4: 存成情境檔
    println!("\n[4] Save Scenario");
    let scenario = calculator.snapshot("premium_coffee_blend")?;
    let path = scenario.save_to_dir(&std::env::temp_dir())?;
    println!("    Saved: {}", path.display());
    println!("\n{}", scenario.to_csv());

    Ok(())
}
