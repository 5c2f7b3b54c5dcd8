//! # Production Core
//!
//! 生產規劃的核心資料模型與類型定義

pub mod config;
pub mod inventory;
pub mod material;
pub mod recipe;
pub mod scenario;

// Re-export 主要類型
pub use config::{CalcConfig, ConstraintMode, UtilizationMode};
pub use inventory::MaterialInventory;
pub use material::Material;
pub use recipe::{Product, RecipeComponent};
pub use scenario::{Scenario, ScenarioError, ScenarioLibrary};

/// 指標計算錯誤類型
///
/// 全部皆為可恢復錯誤：呼叫端修正輸入後即可重新計算。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("尚未定義產品或物料")]
    NoProductOrMaterials,

    #[error("找不到物料: {0}")]
    UnknownMaterial(String),

    #[error("配方中沒有任何具約束力的物料（所有用量皆為 0）")]
    NoConstrainingMaterial,

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
