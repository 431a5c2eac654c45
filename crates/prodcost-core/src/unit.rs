//! 計量單位

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CostError;

/// 原料計量單位（僅供顯示，不影響計算）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    /// 件
    #[serde(rename = "pcs")]
    Piece,
    /// 公尺
    #[default]
    #[serde(rename = "meter")]
    Meter,
    /// 公分
    #[serde(rename = "cm")]
    Centimeter,
    /// 公斤
    #[serde(rename = "kg")]
    Kilogram,
    /// 公克
    #[serde(rename = "gram")]
    Gram,
    /// 公升
    #[serde(rename = "liter")]
    Liter,
    /// 毫升
    #[serde(rename = "ml")]
    Milliliter,
}

impl Unit {
    /// 所有單位（表單下拉選單順序）
    pub const ALL: [Unit; 7] = [
        Unit::Piece,
        Unit::Meter,
        Unit::Centimeter,
        Unit::Kilogram,
        Unit::Gram,
        Unit::Liter,
        Unit::Milliliter,
    ];

    /// 單位標籤
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Piece => "pcs",
            Unit::Meter => "meter",
            Unit::Centimeter => "cm",
            Unit::Kilogram => "kg",
            Unit::Gram => "gram",
            Unit::Liter => "liter",
            Unit::Milliliter => "ml",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CostError::UnknownUnit(s.to_string()))
    }
}
