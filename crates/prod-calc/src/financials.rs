//! 財務指標與損益平衡計算

use crate::BreakEven;

/// 財務推導結果（未取整）
#[derive(Debug, Clone, PartialEq)]
pub struct Financials {
    pub total_cost: f64,
    pub cost_per_unit: f64,
    pub revenue: f64,
    pub profit: f64,
    /// 利潤率（%）
    pub profit_margin: f64,
    pub variable_cost_per_unit: f64,
    /// 邊際貢獻（售價 - 單位變動成本）
    pub contribution_margin: f64,
    pub break_even: BreakEven,
}

/// 財務計算器
pub struct FinancialCalculator;

impl FinancialCalculator {
    /// 由變動成本與最大產量推導財務指標
    ///
    /// 所有除法皆有保護：產量為 0、營收不為正時以 0 代替，邊際貢獻不為正時損益平衡為 `Unbounded`。
    pub fn derive(
        variable_cost: f64,
        max_units: u64,
        selling_price: f64,
        fixed_costs: f64,
    ) -> Financials {
        let units = max_units as f64;

        let total_cost = variable_cost + fixed_costs;
        let cost_per_unit = if max_units > 0 {
            total_cost / units
        } else {
            tracing::warn!("最大產量為 0，單位成本以 0 計");
            0.0
        };

        let revenue = units * selling_price;
        let profit = revenue - total_cost;
        let profit_margin = if revenue > 0.0 {
            profit / revenue * 100.0
        } else {
            0.0
        };

        let variable_cost_per_unit = if max_units > 0 {
            variable_cost / units
        } else {
            0.0
        };
        let contribution_margin = selling_price - variable_cost_per_unit;
        let break_even = Self::break_even(fixed_costs, contribution_margin);

        Financials {
            total_cost,
            cost_per_unit,
            revenue,
            profit,
            profit_margin,
            variable_cost_per_unit,
            contribution_margin,
            break_even,
        }
    }

    /// 損益平衡數量 = ceil(固定成本 / 邊際貢獻)
    pub fn break_even(fixed_costs: f64, contribution_margin: f64) -> BreakEven {
        if contribution_margin > 0.0 {
            let units = (fixed_costs / contribution_margin).ceil();
            // 超出 u64 的數量視同無法達成，不截斷
            if units.is_finite() && units < u64::MAX as f64 {
                // 固定成本為負時 0 單位即已獲利
                return BreakEven::Units(units.max(0.0) as u64);
            }
        }

        tracing::warn!(
            "固定成本 {}、邊際貢獻 {}：無法達到損益平衡",
            fixed_costs,
            contribution_margin
        );
        BreakEven::Unbounded
    }

    /// 指定產量下的利潤（與損益平衡使用相同成本模型）
    pub fn profit_at(
        units: u64,
        selling_price: f64,
        variable_cost_per_unit: f64,
        fixed_costs: f64,
    ) -> f64 {
        let units = units as f64;
        units * selling_price - (units * variable_cost_per_unit + fixed_costs)
    }
}
