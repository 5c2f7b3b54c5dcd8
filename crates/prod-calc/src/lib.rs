//! # Production Metrics Engine
//!
//! 生產指標計算引擎：最大產量、瓶頸物料、成本、利潤與損益平衡點

pub mod bottleneck;
pub mod calculator;
pub mod costing;
pub mod financials;
pub mod rounding;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Re-export 主要類型
pub use bottleneck::{Bottleneck, BottleneckCalculator};
pub use calculator::ProductionCalculator;
pub use costing::{CostBreakdown, CostingCalculator, MaterialUsage};
pub use financials::{FinancialCalculator, Financials};
pub use prod_core::{ConstraintMode, UtilizationMode};

/// 指標計算結果
///
/// 金額與百分比欄位已依配置的小數位數四捨五入，僅供顯示；
/// 內部推導一律使用未取整的數值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// 產品名稱
    pub product_name: String,

    /// 最大可生產數量
    pub max_production: u64,

    /// 瓶頸物料
    pub bottleneck_material: String,

    /// 變動成本（物料成本）
    pub variable_cost: Decimal,

    /// 固定成本
    pub fixed_cost: Decimal,

    /// 總成本
    pub total_cost: Decimal,

    /// 單位成本
    pub cost_per_unit: Decimal,

    /// 營收
    pub revenue: Decimal,

    /// 利潤
    pub profit: Decimal,

    /// 利潤率（%）
    pub profit_margin: Decimal,

    /// 損益平衡數量
    pub break_even_units: BreakEven,

    /// 各物料利用率
    pub material_utilization: BTreeMap<String, MaterialUtilization>,

    /// 利用率彙總方式（重複引用同一物料時的處理）
    pub utilization_mode: UtilizationMode,

    /// 產能約束方式
    pub constraint_mode: ConstraintMode,
}

impl MetricsReport {
    /// 是否獲利
    pub fn is_profitable(&self) -> bool {
        self.profit > Decimal::ZERO
    }

    /// 查詢物料利用率
    pub fn utilization_of(&self, material_name: &str) -> Option<&MaterialUtilization> {
        self.material_utilization.get(material_name)
    }
}

/// 單一物料的利用率紀錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUtilization {
    /// 最大產量下的用量
    pub used: f64,

    /// 可用庫存
    pub available: f64,

    /// 利用率（%）
    pub utilization_percent: Decimal,
}

/// 損益平衡點
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakEven {
    /// 達到損益平衡所需的最小整數產量
    Units(u64),

    /// 邊際貢獻不為正，無法達到損益平衡
    Unbounded,
}

impl BreakEven {
    pub fn units(&self) -> Option<u64> {
        match self {
            BreakEven::Units(units) => Some(*units),
            BreakEven::Unbounded => None,
        }
    }
}

impl std::fmt::Display for BreakEven {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakEven::Units(units) => write!(f, "{}", units),
            BreakEven::Unbounded => write!(f, "無法達成"),
        }
    }
}
