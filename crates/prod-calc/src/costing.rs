//! 物料成本與利用率計算

use prod_core::{CalcError, MaterialInventory, Product, UtilizationMode};
use std::collections::BTreeMap;

/// 物料用量紀錄（未取整）
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialUsage {
    /// 用量
    pub used: f64,
    /// 可用庫存
    pub available: f64,
}

impl MaterialUsage {
    /// 利用率（%），庫存為 0 時返回 0
    pub fn utilization_percent(&self) -> f64 {
        if self.available > 0.0 {
            self.used / self.available * 100.0
        } else {
            0.0
        }
    }
}

/// 成本計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    /// 變動成本總額
    pub variable_cost: f64,
    /// 各物料用量
    pub usage: BTreeMap<String, MaterialUsage>,
}

/// 成本計算器
pub struct CostingCalculator;

impl CostingCalculator {
    /// 以最大產量計算變動成本與各物料用量
    pub fn compute(
        product: &Product,
        inventory: &MaterialInventory,
        max_units: u64,
        mode: UtilizationMode,
    ) -> prod_core::Result<CostBreakdown> {
        let units = max_units as f64;
        let mut variable_cost = 0.0;
        let mut usage: BTreeMap<String, MaterialUsage> = BTreeMap::new();

        for component in &product.recipe {
            let material = inventory
                .get(&component.material_name)
                .ok_or_else(|| CalcError::UnknownMaterial(component.material_name.clone()))?;

            let material_cost = material.cost_for(component.amount_per_unit);
            variable_cost += material_cost * units;

            let used = component.amount_per_unit * units;
            tracing::debug!(
                "物料 {} 單位成本 {}，用量 {}",
                component.material_name,
                material_cost,
                used
            );

            match mode {
                UtilizationMode::LastWriteWins => {
                    usage.insert(
                        component.material_name.clone(),
                        MaterialUsage {
                            used,
                            available: material.quantity,
                        },
                    );
                }
                UtilizationMode::Summed => {
                    usage
                        .entry(component.material_name.clone())
                        .and_modify(|record| record.used += used)
                        .or_insert(MaterialUsage {
                            used,
                            available: material.quantity,
                        });
                }
            }
        }

        for (material_name, record) in &usage {
            if record.available <= 0.0 {
                tracing::warn!(
                    "物料 {} 庫存不為正 ({})，利用率以 0 計",
                    material_name,
                    record.available
                );
            }
        }

        Ok(CostBreakdown {
            variable_cost,
            usage,
        })
    }
}
