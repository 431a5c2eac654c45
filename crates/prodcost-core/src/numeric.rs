//! 數值輸入解析
//!
//! 表單欄位一律以文字保存，所有計算都經由 [`NumericInput::parse`] 解讀。
//! 「缺值」在不同計算中有不同後果：
//! - 成本與彙總計算：視為 0（[`NumericInput::or_zero`]）
//! - 可生產數量計算：整筆排除（[`NumericInput::value`] 回傳 `None`）
//! - 百分比/售價互算：空字串清除對方欄位，無法解析則不變動

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 解析後的數值輸入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericInput {
    /// 空白欄位
    Empty,
    /// 非數值文字
    Invalid,
    /// 有效數值
    Numeric(Decimal),
}

impl NumericInput {
    /// 解析欄位文字
    ///
    /// 接受一般小數與科學記號（`1e3`），前後空白會被忽略。
    /// 數字分隔底線（`1_000`）不接受。
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if trimmed.contains('_') {
            return Self::Invalid;
        }

        Decimal::from_str(trimmed)
            .ok()
            .or_else(|| parse_scientific(trimmed))
            .map(Self::Numeric)
            .unwrap_or(Self::Invalid)
    }

    /// 數值（缺值時為 `None`）
    pub fn value(self) -> Option<Decimal> {
        match self {
            Self::Numeric(value) => Some(value),
            Self::Empty | Self::Invalid => None,
        }
    }

    /// 數值，缺值時以 0 代替
    pub fn or_zero(self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }

    /// 是否為空白欄位
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// 是否缺值（空白或無法解析）
    pub fn is_absent(self) -> bool {
        !matches!(self, Self::Numeric(_))
    }
}

/// 指數超過此值時，任何尾數都已捨入為 0
const MAX_NEGATIVE_EXPONENT: u32 = 60;

/// 科學記號解析
///
/// 小數位超出精度時與一般小數寫法相同，捨入而非失敗（`1e-29` → 0）。
fn parse_scientific(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = text.split_once(|c| c == 'e' || c == 'E')?;
    let mantissa = Decimal::from_str(mantissa).ok()?;
    let exponent: i32 = exponent.parse().ok()?;

    if mantissa.is_zero() {
        return Some(Decimal::ZERO);
    }

    let mut value = mantissa;
    if exponent >= 0 {
        // 非零尾數在數十次內即溢位
        for _ in 0..exponent {
            value = value.checked_mul(Decimal::TEN)?;
        }
    } else {
        for _ in 0..exponent.unsigned_abs().min(MAX_NEGATIVE_EXPONENT) {
            value = value.checked_div(Decimal::TEN)?;
        }
    }
    Some(value)
}

impl From<&str> for NumericInput {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
