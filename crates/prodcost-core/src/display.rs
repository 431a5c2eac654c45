//! 顯示格式（千分位分組、貨幣、百分比）

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::DisplayConfig;
use crate::numeric::NumericInput;

/// 貨幣顯示，無小數位（`Rp 30.000`）
pub fn format_currency(value: Decimal, config: &DisplayConfig) -> String {
    format!(
        "{} {}",
        config.currency_symbol,
        format_grouped(value, 0, config)
    )
}

/// 千分位分組數字
pub fn format_grouped(value: Decimal, decimal_places: u32, config: &DisplayConfig) -> String {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(config.thousands_separator);
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push(config.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// 利潤百分比顯示
///
/// 欄位有數值時顯示固定小數位（`66.7%`），否則顯示 `0%`。
pub fn format_percent(raw: &str, decimal_places: u32) -> String {
    match NumericInput::parse(raw).value() {
        Some(percent) => {
            let mut rounded = percent
                .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimal_places);
            format!("{rounded}%")
        }
        None => "0%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::from(30000), "Rp 30.000")]
    #[case(Decimal::from(1234567), "Rp 1.234.567")]
    #[case(Decimal::from(999), "Rp 999")]
    #[case(Decimal::ZERO, "Rp 0")]
    #[case(Decimal::from(-40000), "Rp -40.000")]
    #[case(Decimal::new(375005, 1), "Rp 37.501")]
    fn test_format_currency(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(value, &DisplayConfig::default()), expected);
    }

    #[test]
    fn test_format_grouped_with_fraction() {
        let config = DisplayConfig::default();
        assert_eq!(
            format_grouped(Decimal::new(12345678, 2), 2, &config),
            "123.456,78"
        );
        // 負零不顯示負號
        assert_eq!(format_grouped(Decimal::new(-4, 1), 0, &config), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent("66.666", 1), "66.7%");
        assert_eq!(format_percent("25", 1), "25.0%");
        assert_eq!(format_percent("", 1), "0%");
        assert_eq!(format_percent("abc", 1), "0%");
    }
}
