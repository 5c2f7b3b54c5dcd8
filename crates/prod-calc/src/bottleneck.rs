//! 瓶頸物料計算

use prod_core::{CalcError, ConstraintMode, MaterialInventory, Product};

/// 瓶頸計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct Bottleneck {
    /// 瓶頸物料名稱
    pub material_name: String,

    /// 瓶頸物料可支撐的產量（未取整）
    pub candidate_units: f64,

    /// 最大可生產數量（向下取整）
    pub max_units: u64,
}

/// 瓶頸計算器
pub struct BottleneckCalculator;

impl BottleneckCalculator {
    /// 找出瓶頸物料並計算最大產量
    ///
    /// 依配方順序逐項計算 `庫存 / 每單位用量`，取最小值；數值相同時以先出現者為瓶頸。
    /// 用量為 0 的配方項不構成約束。
    pub fn find(
        product: &Product,
        inventory: &MaterialInventory,
        mode: ConstraintMode,
    ) -> prod_core::Result<Bottleneck> {
        let constraints = Self::constraints(product, mode);
        let mut best: Option<(&str, f64)> = None;

        for &(material_name, amount_per_unit) in &constraints {
            let material = inventory
                .get(material_name)
                .ok_or_else(|| CalcError::UnknownMaterial(material_name.to_string()))?;

            let Some(candidate) = material.supported_units(amount_per_unit) else {
                tracing::debug!("物料 {} 用量為 0，不構成約束", material_name);
                continue;
            };

            tracing::debug!(
                "物料 {} 可支撐產量: {} / {} = {}",
                material_name,
                material.quantity,
                amount_per_unit,
                candidate
            );

            if candidate.is_nan() {
                return Err(CalcError::CalculationError(format!(
                    "物料 {} 的可支撐產量無法計算",
                    material_name
                )));
            }

            // 嚴格小於：平手時保留先出現者
            if best.map_or(true, |(_, min)| candidate < min) {
                best = Some((material_name, candidate));
            }
        }

        match best {
            // u64 無法表示的產量不可截斷，否則報表會與庫存不符
            Some((material_name, candidate_units)) if candidate_units >= u64::MAX as f64 => {
                Err(CalcError::CalculationError(format!(
                    "物料 {} 的可支撐產量 {} 超出可表示範圍",
                    material_name, candidate_units
                )))
            }
            Some((material_name, candidate_units)) if candidate_units.is_finite() => {
                Ok(Bottleneck {
                    material_name: material_name.to_string(),
                    candidate_units,
                    max_units: candidate_units.floor() as u64,
                })
            }
            _ => Err(CalcError::NoConstrainingMaterial),
        }
    }

    /// 依約束方式整理 (物料名稱, 每單位用量) 清單，保持配方順序
    fn constraints(product: &Product, mode: ConstraintMode) -> Vec<(&str, f64)> {
        match mode {
            ConstraintMode::PerComponent => product
                .recipe
                .iter()
                .map(|c| (c.material_name.as_str(), c.amount_per_unit))
                .collect(),
            ConstraintMode::Combined => {
                let mut combined: Vec<(&str, f64)> = Vec::new();
                for component in &product.recipe {
                    match combined
                        .iter()
                        .position(|(name, _)| *name == component.material_name)
                    {
                        Some(index) => combined[index].1 += component.amount_per_unit,
                        None => combined
                            .push((component.material_name.as_str(), component.amount_per_unit)),
                    }
                }
                combined
            }
        }
    }
}
