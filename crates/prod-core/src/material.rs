//! 原物料模型

use serde::{Deserialize, Serialize};

/// 原物料（庫存中的一筆記錄）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// 物料名稱（庫存映射中的唯一鍵）
    pub name: String,

    /// 可用數量
    pub quantity: f64,

    /// 計量單位（僅供顯示）
    pub unit: String,

    /// 單位成本
    pub cost_per_unit: f64,
}

impl Material {
    /// 創建新的物料
    pub fn new(name: String, quantity: f64, unit: String, cost_per_unit: f64) -> Self {
        Self {
            name,
            quantity,
            unit,
            cost_per_unit,
        }
    }

    /// 以此庫存可支撐的產品數量（未取整）
    ///
    /// 用量為 0（或負值）時不構成約束，返回 `None`。
    pub fn supported_units(&self, amount_per_unit: f64) -> Option<f64> {
        if amount_per_unit > 0.0 {
            Some(self.quantity / amount_per_unit)
        } else {
            None
        }
    }

    /// 每單位產品消耗此物料的成本
    pub fn cost_for(&self, amount_per_unit: f64) -> f64 {
        amount_per_unit * self.cost_per_unit
    }
}
