//! 利潤百分比與售價互算
//!
//! 兩個欄位任一時刻只有一個是「驅動欄位」（最後被編輯的那個），
//! 另一個欄位由單件成本推導而來。推導規則是 (驅動欄位, 成本, 輸入文字)
//! 的純函數。

use prodcost_core::{CalculatorConfig, NumericInput};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 驅動欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceDriver {
    /// 由利潤百分比推導售價
    Percent,
    /// 由售價推導利潤百分比
    Price,
}

/// 推導結果（作用於非驅動欄位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// 寫入新值
    Set(Decimal),
    /// 清空欄位
    Clear,
    /// 保持原值
    Unchanged,
}

impl Derivation {
    /// 套用到欄位文字
    pub fn apply_to(self, field: &mut String) {
        match self {
            Self::Set(value) => *field = value.to_string(),
            Self::Clear => field.clear(),
            Self::Unchanged => {}
        }
    }
}

/// 百分比/售價互算器
pub struct PricingCalculator;

impl PricingCalculator {
    /// 售價 = 成本 × (1 + 百分比 / 100)，四捨五入到指定位數
    pub fn selling_price_from_percent(cost: Decimal, percent: Decimal, decimal_places: u32) -> Decimal {
        let factor = Decimal::ONE.saturating_add(percent / Decimal::ONE_HUNDRED);
        round_to(cost.saturating_mul(factor), decimal_places)
    }

    /// 百分比 = (售價 − 成本) / 成本 × 100，四捨五入到指定位數
    ///
    /// 成本 ≤ 0 時無法計算，回傳 `None`。
    pub fn percent_from_selling_price(
        cost: Decimal,
        price: Decimal,
        decimal_places: u32,
    ) -> Option<Decimal> {
        if cost <= Decimal::ZERO {
            return None;
        }

        price
            .saturating_sub(cost)
            .checked_div(cost)
            .map(|ratio| round_to(ratio.saturating_mul(Decimal::ONE_HUNDRED), decimal_places))
    }

    /// 編輯利潤百分比時，推導售價
    ///
    /// - 空白：清空售價
    /// - 非負數值：重新計算售價
    /// - 負數或無法解析：售價不變
    pub fn derive_from_percent(cost: Decimal, raw: &str, config: &CalculatorConfig) -> Derivation {
        match NumericInput::parse(raw) {
            NumericInput::Empty => Derivation::Clear,
            NumericInput::Numeric(percent) if percent >= Decimal::ZERO => Derivation::Set(
                Self::selling_price_from_percent(cost, percent, config.price_decimal_places),
            ),
            NumericInput::Numeric(_) | NumericInput::Invalid => Derivation::Unchanged,
        }
    }

    /// 編輯售價時，推導利潤百分比
    ///
    /// - 空白：清空百分比（不論成本）
    /// - 成本 ≤ 0：百分比不變
    /// - 數值：重新計算百分比
    /// - 無法解析：百分比不變
    pub fn derive_from_price(cost: Decimal, raw: &str, config: &CalculatorConfig) -> Derivation {
        match NumericInput::parse(raw) {
            NumericInput::Empty => Derivation::Clear,
            NumericInput::Numeric(price) => {
                Self::percent_from_selling_price(cost, price, config.percent_decimal_places)
                    .map(Derivation::Set)
                    .unwrap_or(Derivation::Unchanged)
            }
            NumericInput::Invalid => Derivation::Unchanged,
        }
    }

    /// 依驅動欄位推導另一欄位
    pub fn derive(
        driver: PriceDriver,
        cost: Decimal,
        raw: &str,
        config: &CalculatorConfig,
    ) -> Derivation {
        match driver {
            PriceDriver::Percent => Self::derive_from_percent(cost, raw, config),
            PriceDriver::Price => Self::derive_from_price(cost, raw, config),
        }
    }
}

/// 四捨五入（中點遠離零）並固定小數位數
fn round_to(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CalculatorConfig {
        CalculatorConfig::default()
    }

    #[test]
    fn test_selling_price_from_percent() {
        // 30000 × 1.25 = 37500
        let price = PricingCalculator::selling_price_from_percent(
            Decimal::from(30000),
            Decimal::from(25),
            0,
        );
        assert_eq!(price.to_string(), "37500");

        // 1234 × 1.1 = 1357.4 → 1357
        let price = PricingCalculator::selling_price_from_percent(
            Decimal::from(1234),
            Decimal::from(10),
            0,
        );
        assert_eq!(price.to_string(), "1357");

        // 中點遠離零：5 × 1.1 = 5.5 → 6
        let price = PricingCalculator::selling_price_from_percent(
            Decimal::from(5),
            Decimal::from(10),
            0,
        );
        assert_eq!(price.to_string(), "6");
    }

    #[test]
    fn test_percent_from_selling_price() {
        let percent = PricingCalculator::percent_from_selling_price(
            Decimal::from(30000),
            Decimal::from(50000),
            1,
        )
        .unwrap();
        assert_eq!(percent.to_string(), "66.7");

        // 整數結果也保留一位小數
        let percent = PricingCalculator::percent_from_selling_price(
            Decimal::from(30000),
            Decimal::from(37500),
            1,
        )
        .unwrap();
        assert_eq!(percent.to_string(), "25.0");

        // 低於成本
        let percent = PricingCalculator::percent_from_selling_price(
            Decimal::from(30000),
            Decimal::from(15000),
            1,
        )
        .unwrap();
        assert_eq!(percent.to_string(), "-50.0");
    }

    #[test]
    fn test_percent_requires_positive_cost() {
        assert_eq!(
            PricingCalculator::percent_from_selling_price(Decimal::ZERO, Decimal::from(100), 1),
            None
        );
        assert_eq!(
            PricingCalculator::percent_from_selling_price(Decimal::from(-5), Decimal::from(100), 1),
            None
        );
    }

    #[test]
    fn test_derive_from_percent() {
        let cost = Decimal::from(30000);

        assert_eq!(
            PricingCalculator::derive_from_percent(cost, "25", &config()),
            Derivation::Set(Decimal::from(37500))
        );
        assert_eq!(
            PricingCalculator::derive_from_percent(cost, "", &config()),
            Derivation::Clear
        );
        assert_eq!(
            PricingCalculator::derive_from_percent(cost, "-10", &config()),
            Derivation::Unchanged
        );
        assert_eq!(
            PricingCalculator::derive_from_percent(cost, "abc", &config()),
            Derivation::Unchanged
        );
    }

    #[test]
    fn test_derive_from_price() {
        let cost = Decimal::from(30000);

        assert_eq!(
            PricingCalculator::derive_from_price(cost, "50000", &config()),
            Derivation::Set(Decimal::new(667, 1))
        );
        assert_eq!(
            PricingCalculator::derive_from_price(cost, "", &config()),
            Derivation::Clear
        );
        assert_eq!(
            PricingCalculator::derive_from_price(cost, "abc", &config()),
            Derivation::Unchanged
        );
    }

    #[test]
    fn test_derive_from_price_zero_cost_guard() {
        // 成本 ≤ 0 時，數值或無法解析的售價都不變動百分比
        assert_eq!(
            PricingCalculator::derive_from_price(Decimal::ZERO, "50000", &config()),
            Derivation::Unchanged
        );
        assert_eq!(
            PricingCalculator::derive_from_price(Decimal::from(-10), "50000", &config()),
            Derivation::Unchanged
        );
        assert_eq!(
            PricingCalculator::derive_from_price(Decimal::ZERO, "abc", &config()),
            Derivation::Unchanged
        );
    }

    #[test]
    fn test_clearing_price_clears_percent_at_any_cost() {
        for cost in [Decimal::from(30000), Decimal::ZERO, Decimal::from(-5)] {
            assert_eq!(
                PricingCalculator::derive_from_price(cost, "", &config()),
                Derivation::Clear
            );
            assert_eq!(
                PricingCalculator::derive_from_price(cost, "   ", &config()),
                Derivation::Clear
            );
        }
    }

    #[test]
    fn test_derive_dispatches_on_driver() {
        let cost = Decimal::from(30000);

        assert_eq!(
            PricingCalculator::derive(PriceDriver::Percent, cost, "25", &config()),
            Derivation::Set(Decimal::from(37500))
        );
        assert_eq!(
            PricingCalculator::derive(PriceDriver::Price, cost, "37500", &config()),
            Derivation::Set(Decimal::from(25))
        );
    }

    #[test]
    fn test_apply_to_field() {
        let mut field = "old".to_string();

        Derivation::Unchanged.apply_to(&mut field);
        assert_eq!(field, "old");

        Derivation::Set(Decimal::new(667, 1)).apply_to(&mut field);
        assert_eq!(field, "66.7");

        Derivation::Clear.apply_to(&mut field);
        assert!(field.is_empty());
    }
}
