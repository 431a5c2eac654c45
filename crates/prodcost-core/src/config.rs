//! 計算與顯示配置

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// 成本計算配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// 售價小數位數（0 = 整數貨幣單位）
    pub price_decimal_places: u32,

    /// 利潤百分比小數位數
    pub percent_decimal_places: u32,

    /// 新增明細時的預設單位
    pub default_unit: Unit,

    /// 自動計算的生產總數是否覆蓋手動輸入
    pub total_items_policy: TotalItemsPolicy,
}

impl CalculatorConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            price_decimal_places: 0,
            percent_decimal_places: 1,
            default_unit: Unit::Meter,
            total_items_policy: TotalItemsPolicy::AlwaysOverwrite,
        }
    }

    /// 建構器模式：設置售價小數位數
    pub fn with_price_decimal_places(mut self, places: u32) -> Self {
        self.price_decimal_places = places;
        self
    }

    /// 建構器模式：設置百分比小數位數
    pub fn with_percent_decimal_places(mut self, places: u32) -> Self {
        self.percent_decimal_places = places;
        self
    }

    /// 建構器模式：設置預設單位
    pub fn with_default_unit(mut self, unit: Unit) -> Self {
        self.default_unit = unit;
        self
    }

    /// 建構器模式：設置生產總數覆蓋策略
    pub fn with_total_items_policy(mut self, policy: TotalItemsPolicy) -> Self {
        self.total_items_policy = policy;
        self
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 生產總數覆蓋策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalItemsPolicy {
    /// 每次明細變動且可生產數量為正時，一律覆蓋（預設）
    AlwaysOverwrite,

    /// 使用者手動輸入後保留，直到欄位被清空
    KeepManual,
}

/// 顯示格式配置（貨幣分組）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// 貨幣符號
    pub currency_symbol: String,

    /// 千分位分隔符
    pub thousands_separator: char,

    /// 小數點符號
    pub decimal_separator: char,
}

impl DisplayConfig {
    /// 印尼盾格式（Rp 30.000）
    pub fn new() -> Self {
        Self {
            currency_symbol: "Rp".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }

    /// 建構器模式：設置貨幣符號
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// 建構器模式：設置分隔符
    pub fn with_separators(mut self, thousands: char, decimal: char) -> Self {
        self.thousands_separator = thousands;
        self.decimal_separator = decimal;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
