//! # Production Planner
//!
//! 單一產品、多原物料的生產規劃指標：最大產量、瓶頸、成本、利潤與損益平衡點

pub use prod_calc::{
    BreakEven, Bottleneck, BottleneckCalculator, CostBreakdown, CostingCalculator,
    FinancialCalculator, Financials, MaterialUsage, MaterialUtilization, MetricsReport,
    ProductionCalculator,
};
pub use prod_core::{
    CalcConfig, CalcError, ConstraintMode, Material, MaterialInventory, Product,
    RecipeComponent, Scenario, ScenarioError, ScenarioLibrary, UtilizationMode,
};
pub use rust_decimal::Decimal;
