//! 物料庫存映射

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::material::Material;

/// 物料庫存（以物料名稱為鍵）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialInventory {
    materials: BTreeMap<String, Material>,
}

impl MaterialInventory {
    /// 創建空的庫存
    pub fn new() -> Self {
        Self::default()
    }

    /// 登錄物料
    ///
    /// 同名物料整筆取代（不合併）。此層不做任何數值驗證。
    pub fn register_material(
        &mut self,
        name: String,
        quantity: f64,
        unit: String,
        cost_per_unit: f64,
    ) {
        tracing::debug!("登錄物料: {} ({} {}, 單位成本 {})", name, quantity, unit, cost_per_unit);
        let material = Material::new(name.clone(), quantity, unit, cost_per_unit);
        if self.materials.insert(name, material).is_some() {
            tracing::debug!("同名物料已整筆取代");
        }
    }

    /// 查詢物料
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// 是否包含物料
    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// 依名稱排序迭代所有物料
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }
}
