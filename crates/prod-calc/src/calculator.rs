//! 生產指標主計算器

use prod_core::{
    CalcConfig, CalcError, MaterialInventory, Product, RecipeComponent, Scenario, ScenarioError,
};
use std::collections::BTreeMap;

use crate::bottleneck::BottleneckCalculator;
use crate::costing::CostingCalculator;
use crate::financials::FinancialCalculator;
use crate::rounding::round_display;
use crate::{MaterialUtilization, MetricsReport};

/// 生產指標計算器
///
/// 持有物料庫存與唯一的有效產品；計算本身不修改任何狀態。
#[derive(Debug, Clone, Default)]
pub struct ProductionCalculator {
    /// 物料庫存
    materials: MaterialInventory,

    /// 目前有效的產品
    product: Option<Product>,

    /// 計算配置
    config: CalcConfig,
}

impl ProductionCalculator {
    /// 創建新的計算器（預設配置）
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置計算配置
    pub fn with_config(mut self, config: CalcConfig) -> Self {
        self.config = config;
        self
    }

    /// 登錄物料（同名整筆取代）
    pub fn register_material(
        &mut self,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        cost_per_unit: f64,
    ) {
        self.materials
            .register_material(name.into(), quantity, unit.into(), cost_per_unit);
    }

    /// 定義產品（取代先前的產品）
    pub fn define_product<I, C>(
        &mut self,
        name: impl Into<String>,
        selling_price: f64,
        fixed_costs: f64,
        recipe: I,
    ) where
        I: IntoIterator<Item = C>,
        C: Into<RecipeComponent>,
    {
        let product = Product::new(name.into(), selling_price, fixed_costs)
            .with_recipe(recipe.into_iter().map(Into::into).collect());

        tracing::debug!(
            "設定產品: {}（配方 {} 項）",
            product.name,
            product.recipe.len()
        );
        self.product = Some(product);
    }

    /// 計算生產指標
    pub fn calculate_metrics(&self) -> prod_core::Result<MetricsReport> {
        Self::compute(&self.materials, self.product.as_ref(), &self.config)
    }

    /// 對任意庫存快照計算生產指標
    pub fn compute(
        materials: &MaterialInventory,
        product: Option<&Product>,
        config: &CalcConfig,
    ) -> prod_core::Result<MetricsReport> {
        let product = match product {
            Some(product) if !materials.is_empty() => product,
            _ => return Err(CalcError::NoProductOrMaterials),
        };

        tracing::info!(
            "開始指標計算：產品 {}，配方 {} 項，物料 {} 筆",
            product.name,
            product.recipe.len(),
            materials.len()
        );
        let start_time = std::time::Instant::now();

        // Step 1: 檢查配方引用（回報第一個找不到的物料）
        if let Some(name) = product.first_unresolved(|name| materials.contains(name)) {
            return Err(CalcError::UnknownMaterial(name.to_string()));
        }
        if product.has_duplicate_materials() {
            tracing::debug!("配方重複引用同一物料，約束方式: {:?}", config.constraint_mode);
        }

        // Step 2: 瓶頸與最大產量
        let bottleneck = BottleneckCalculator::find(product, materials, config.constraint_mode)?;
        tracing::debug!(
            "瓶頸物料: {}，最大產量 {}",
            bottleneck.material_name,
            bottleneck.max_units
        );

        // Step 3: 變動成本與物料用量
        let costs = CostingCalculator::compute(
            product,
            materials,
            bottleneck.max_units,
            config.utilization_mode,
        )?;

        // Step 4: 財務指標與損益平衡（未取整）
        let financials = FinancialCalculator::derive(
            costs.variable_cost,
            bottleneck.max_units,
            product.selling_price,
            product.fixed_costs,
        );

        // Step 5: 組裝報表（僅在此取整）
        let digits = config.display_precision;
        let mut material_utilization = BTreeMap::new();
        for (name, usage) in &costs.usage {
            material_utilization.insert(
                name.clone(),
                MaterialUtilization {
                    used: usage.used,
                    available: usage.available,
                    utilization_percent: round_display(
                        "utilization_percent",
                        usage.utilization_percent(),
                        digits,
                    )?,
                },
            );
        }

        let report = MetricsReport {
            product_name: product.name.clone(),
            max_production: bottleneck.max_units,
            bottleneck_material: bottleneck.material_name,
            variable_cost: round_display("variable_cost", costs.variable_cost, digits)?,
            fixed_cost: round_display("fixed_cost", product.fixed_costs, digits)?,
            total_cost: round_display("total_cost", financials.total_cost, digits)?,
            cost_per_unit: round_display("cost_per_unit", financials.cost_per_unit, digits)?,
            revenue: round_display("revenue", financials.revenue, digits)?,
            profit: round_display("profit", financials.profit, digits)?,
            profit_margin: round_display("profit_margin", financials.profit_margin, digits)?,
            break_even_units: financials.break_even,
            material_utilization,
            utilization_mode: config.utilization_mode,
            constraint_mode: config.constraint_mode,
        };

        tracing::info!("指標計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "最大產量 {}，瓶頸 {}，利潤 {}",
            report.max_production,
            report.bottleneck_material,
            report.profit
        );

        Ok(report)
    }

    /// 載入測試案例（Premium Coffee Blend）並計算
    pub fn load_test_case(&mut self) -> prod_core::Result<MetricsReport> {
        self.materials = MaterialInventory::new();
        self.register_material("Arabica", 120.0, "kg", 7.0);
        self.register_material("Robusta", 80.0, "kg", 5.0);
        self.register_material("Instant", 15.0, "kg", 12.0);
        self.register_material("Flavoring", 5.0, "kg", 15.0);
        self.register_material("Packaging", 200.0, "units", 0.4);

        self.define_product(
            "Premium Coffee Blend",
            18.0,
            250.0,
            [
                ("Arabica", 0.7),
                ("Robusta", 0.2),
                ("Instant", 0.05),
                ("Flavoring", 0.03),
                ("Packaging", 1.0),
            ],
        );

        self.calculate_metrics()
    }

    /// 建立目前狀態的情境快照
    pub fn snapshot(&self, name: impl Into<String>) -> Result<Scenario, ScenarioError> {
        let product = self.product.as_ref().ok_or(ScenarioError::NoProduct)?;
        Ok(Scenario::capture(name.into(), &self.materials, product))
    }

    /// 以情境取代目前的物料與產品
    pub fn restore(&mut self, scenario: Scenario) {
        tracing::debug!("還原情境: {}", scenario.name);
        self.materials = scenario.materials;
        self.product = Some(scenario.product);
    }

    /// 獲取物料庫存引用
    pub fn materials(&self) -> &MaterialInventory {
        &self.materials
    }

    /// 獲取目前產品引用
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// 獲取計算配置引用
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }
}
