//! 指標計算配置

use serde::{Deserialize, Serialize};

/// 指標計算參數配置
///
/// 預設值重現既有的計算行為；其餘模式為針對重複引用物料的修正選項。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// 物料利用率彙總方式
    pub utilization_mode: UtilizationMode,

    /// 產能約束方式
    pub constraint_mode: ConstraintMode,

    /// 報表金額與百分比的小數位數
    pub display_precision: u32,
}

impl CalcConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            utilization_mode: UtilizationMode::LastWriteWins,
            constraint_mode: ConstraintMode::PerComponent,
            display_precision: 2,
        }
    }

    /// 建構器模式：設置利用率彙總方式
    pub fn with_utilization_mode(mut self, mode: UtilizationMode) -> Self {
        self.utilization_mode = mode;
        self
    }

    /// 建構器模式：設置產能約束方式
    ///
    /// # 範例
    /// ```
    /// # use prod_core::{CalcConfig, ConstraintMode};
    /// let config = CalcConfig::new().with_constraint_mode(ConstraintMode::Combined); // 重複物料合併檢查
    /// assert_eq!(config.constraint_mode, ConstraintMode::Combined);
    /// ```
    pub fn with_constraint_mode(mut self, mode: ConstraintMode) -> Self {
        self.constraint_mode = mode;
        self
    }

    /// 建構器模式：設置顯示小數位數
    pub fn with_display_precision(mut self, digits: u32) -> Self {
        self.display_precision = digits;
        self
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 利用率彙總方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UtilizationMode {
    /// 最後寫入者為準 - 同一物料出現多次時，後面的配方項覆蓋前面的紀錄
    LastWriteWins,

    /// 加總 - 同一物料所有配方項的用量相加
    Summed,
}

/// 產能約束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintMode {
    /// 逐項檢查 - 每個配方項各自以物料全部庫存計算可產數量
    PerComponent,

    /// 合併檢查 - 同一物料的用量先加總，再計算一次可產數量
    Combined,
}
