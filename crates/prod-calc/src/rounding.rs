//! 報表顯示用的取整

use prod_core::CalcError;
use rust_decimal::{Decimal, RoundingStrategy};

/// 將 f64 依其精確二進位值轉為 Decimal，並四捨五入到 `digits` 位小數
///
/// 非有限值（NaN、無限大）無法寫入報表，返回 `CalculationError`。
pub fn round_display(field: &str, value: f64, digits: u32) -> prod_core::Result<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero))
        .map(|d| d.normalize())
        .ok_or_else(|| CalcError::CalculationError(format!("{} 無法表示: {}", field, value)))
}
