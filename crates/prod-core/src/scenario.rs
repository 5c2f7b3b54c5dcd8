//! 情境快照與存檔

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::inventory::MaterialInventory;
use crate::recipe::Product;

/// 情境存檔錯誤
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("尚未定義產品，無法建立情境")]
    NoProduct,

    #[error("無效的情境名稱: {0:?}")]
    InvalidName(String),

    #[error("讀寫檔案失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化失敗: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 生產情境快照（物料 + 產品 + 時間戳）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// 情境ID
    pub id: Uuid,

    /// 情境名稱
    pub name: String,

    /// 建立時間
    pub date: DateTime<Utc>,

    /// 物料（以名稱為鍵）
    pub materials: MaterialInventory,

    /// 產品
    pub product: Product,
}

impl Scenario {
    /// 擷取目前的物料與產品
    pub fn capture(name: String, materials: &MaterialInventory, product: &Product) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            date: Utc::now(),
            materials: materials.clone(),
            product: product.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 存檔為 `<dir>/<name>.json`，返回檔案路徑
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf, ScenarioError> {
        if self.name.trim().is_empty() || self.name.contains(['/', '\\']) {
            return Err(ScenarioError::InvalidName(self.name.clone()));
        }

        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", self.name));
        std::fs::write(&path, self.to_json()?)?;

        tracing::info!(?path, "情境已存檔: {}", self.name);
        Ok(path)
    }

    /// 從檔案讀取情境
    pub fn load_from_file(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        let scenario = Self::from_json(&contents)?;
        tracing::debug!(?path, "讀取情境: {}", scenario.name);
        Ok(scenario)
    }

    /// 匯出為逐行 CSV
    ///
    /// ```text
    /// Material,<名稱>,<數量>,<單位>,<單位成本>
    /// Recipe,<物料名稱>,<每單位用量>
    /// Product,<名稱>,<售價>,<固定成本>
    /// ```
    pub fn to_csv(&self) -> String {
        let mut lines: Vec<String> = self
            .materials
            .iter()
            .map(|m| {
                format!(
                    "Material,{},{},{},{}",
                    m.name, m.quantity, m.unit, m.cost_per_unit
                )
            })
            .collect();

        lines.extend(
            self.product
                .recipe
                .iter()
                .map(|c| format!("Recipe,{},{}", c.material_name, c.amount_per_unit)),
        );

        lines.push(format!(
            "Product,{},{},{}",
            self.product.name, self.product.selling_price, self.product.fixed_costs
        ));

        lines.join("\n")
    }
}

/// 已存情境清單
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioLibrary {
    scenarios: Vec<Scenario>,
}

impl ScenarioLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入情境（保留加入順序）
    pub fn add(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    pub fn list(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get(&self, id: Uuid) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// 刪除情境，返回是否有刪除
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.scenarios.len();
        self.scenarios.retain(|s| s.id != id);
        self.scenarios.len() != before
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 空字串視為空清單
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_json::from_str(json)?)
    }
}
