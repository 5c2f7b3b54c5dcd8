//! 產品與配方模型

use serde::{Deserialize, Serialize};

/// 配方組成項
///
/// 以名稱引用物料（不擁有物料），並記錄每單位產品的用量。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeComponent {
    /// 物料名稱
    pub material_name: String,

    /// 每單位產品用量
    pub amount_per_unit: f64,
}

impl RecipeComponent {
    /// 創建新的配方組成項
    pub fn new(material_name: String, amount_per_unit: f64) -> Self {
        Self {
            material_name,
            amount_per_unit,
        }
    }

    /// 是否對產量構成約束（用量大於 0）
    pub fn is_constraining(&self) -> bool {
        self.amount_per_unit > 0.0
    }
}

impl<S: Into<String>> From<(S, f64)> for RecipeComponent {
    fn from((material_name, amount_per_unit): (S, f64)) -> Self {
        Self::new(material_name.into(), amount_per_unit)
    }
}

/// 產品定義（同一時間只有一個產品有效）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 產品名稱（僅供顯示）
    pub name: String,

    /// 單位售價
    pub selling_price: f64,

    /// 固定成本
    pub fixed_costs: f64,

    /// 配方（順序決定瓶頸平手時的回報物料）
    pub recipe: Vec<RecipeComponent>,
}

impl Product {
    /// 創建新的產品
    pub fn new(name: String, selling_price: f64, fixed_costs: f64) -> Self {
        Self {
            name,
            selling_price,
            fixed_costs,
            recipe: Vec::new(),
        }
    }

    /// 建構器模式：設置配方
    pub fn with_recipe(mut self, recipe: Vec<RecipeComponent>) -> Self {
        self.recipe = recipe;
        self
    }

    /// 建構器模式：追加配方組成項
    pub fn with_component(mut self, material_name: String, amount_per_unit: f64) -> Self {
        self.recipe.push(RecipeComponent::new(material_name, amount_per_unit));
        self
    }

    /// 配方中第一個未出現在 `is_known` 中的物料名稱
    pub fn first_unresolved<F>(&self, is_known: F) -> Option<&str>
    where
        F: Fn(&str) -> bool,
    {
        self.recipe
            .iter()
            .map(|c| c.material_name.as_str())
            .find(|name| !is_known(name))
    }

    /// 配方是否重複引用同一物料
    pub fn has_duplicate_materials(&self) -> bool {
        self.recipe.iter().enumerate().any(|(i, c)| {
            self.recipe[..i]
                .iter()
                .any(|prev| prev.material_name == c.material_name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let product = Product::new("Premium Coffee Blend".to_string(), 18.0, 250.0)
            .with_component("Arabica".to_string(), 0.7)
            .with_component("Packaging".to_string(), 1.0);

        assert_eq!(product.recipe.len(), 2);
        assert_eq!(product.recipe[0].material_name, "Arabica");
        assert_eq!(product.recipe[1].amount_per_unit, 1.0);
        assert!(!product.has_duplicate_materials());
    }

    #[test]
    fn test_component_from_tuple() {
        let component: RecipeComponent = ("Sugar", 0.25).into();

        assert_eq!(component.material_name, "Sugar");
        assert!(component.is_constraining());
        assert!(!RecipeComponent::from(("Water", 0.0)).is_constraining());
    }

    #[test]
    fn test_first_unresolved_in_recipe_order() {
        let product = Product::new("P".to_string(), 1.0, 0.0).with_recipe(vec![
            ("A", 1.0).into(),
            ("Ghost-1", 1.0).into(),
            ("Ghost-2", 1.0).into(),
        ]);

        // 只回報第一個找不到的物料
        assert_eq!(product.first_unresolved(|name| name == "A"), Some("Ghost-1"));
        assert_eq!(product.first_unresolved(|_| true), None);
    }

    #[test]
    fn test_duplicate_materials() {
        let product = Product::new("P".to_string(), 1.0, 0.0)
            .with_component("A".to_string(), 1.0)
            .with_component("B".to_string(), 1.0)
            .with_component("A".to_string(), 2.0);

        assert!(product.has_duplicate_materials());
    }
}
