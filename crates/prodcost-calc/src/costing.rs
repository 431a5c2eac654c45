//! 單件成本計算

use prodcost_core::LineItem;
use rust_decimal::Decimal;

/// 單件成本計算器
pub struct CostCalculator;

impl CostCalculator {
    /// 單筆明細對單件成本的貢獻：單價 × 每件用量
    ///
    /// 缺值一律視為 0，明細不會被排除。
    pub fn line_cost(line: &LineItem) -> Decimal {
        line.unit_price_input()
            .or_zero()
            .saturating_mul(line.quantity_per_item_input().or_zero())
    }

    /// 單件成本：所有明細貢獻的總和
    pub fn cost_per_item<'a>(lines: impl IntoIterator<Item = &'a LineItem>) -> Decimal {
        lines
            .into_iter()
            .map(Self::line_cost)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodcost_core::{LineId, Unit};

    fn line(id: u64, unit_price: &str, quantity_per_item: &str) -> LineItem {
        LineItem::new(LineId(id), Unit::Meter)
            .with_unit_price(unit_price)
            .with_quantity_per_item(quantity_per_item)
    }

    #[test]
    fn test_line_cost() {
        assert_eq!(
            CostCalculator::line_cost(&line(1, "10000", "3")),
            Decimal::from(30000)
        );
        assert_eq!(
            CostCalculator::line_cost(&line(1, "2500", "0.5")),
            Decimal::from(1250)
        );
    }

    #[test]
    fn test_missing_values_contribute_zero() {
        assert_eq!(CostCalculator::line_cost(&line(1, "", "3")), Decimal::ZERO);
        assert_eq!(CostCalculator::line_cost(&line(1, "10000", "")), Decimal::ZERO);
        assert_eq!(CostCalculator::line_cost(&line(1, "abc", "3")), Decimal::ZERO);
    }

    #[test]
    fn test_cost_per_item_sums_all_lines() {
        let lines = vec![
            line(1, "10000", "3"), // 30000
            line(2, "5000", "2"),  // 10000
            line(3, "", "4"),      // 0
        ];
        assert_eq!(CostCalculator::cost_per_item(&lines), Decimal::from(40000));
    }

    #[test]
    fn test_cost_per_item_empty_iterator() {
        let lines: Vec<LineItem> = Vec::new();
        assert_eq!(CostCalculator::cost_per_item(&lines), Decimal::ZERO);
    }
}
