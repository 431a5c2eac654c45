//! 成本與利潤彙總

use prodcost_core::NumericInput;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 彙總結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    /// 單件成本
    pub cost_per_item: Decimal,
    /// 生產總數
    pub total_items: Decimal,
    /// 單件售價
    pub selling_price: Decimal,
    /// 總成本
    pub total_cost: Decimal,
    /// 總營收
    pub revenue: Decimal,
    /// 淨利
    pub profit: Decimal,
    /// 利潤率（%）
    pub profit_margin: Decimal,
    /// 單件利潤
    pub profit_per_item: Decimal,
}

/// 彙總計算器
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// 彙總計算
    pub fn aggregate(cost_per_item: Decimal, total_items: Decimal, selling_price: Decimal) -> CostSummary {
        let total_cost = cost_per_item.saturating_mul(total_items);
        let revenue = selling_price.saturating_mul(total_items);
        let profit = revenue.saturating_sub(total_cost);

        let profit_margin = if revenue > Decimal::ZERO {
            profit
                .checked_div(revenue)
                .map(|ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        CostSummary {
            cost_per_item,
            total_items,
            selling_price,
            total_cost,
            revenue,
            profit,
            profit_margin,
            profit_per_item: selling_price.saturating_sub(cost_per_item),
        }
    }

    /// 由欄位文字彙總（缺值視為 0）
    pub fn from_inputs(cost_per_item: Decimal, total_items: &str, selling_price: &str) -> CostSummary {
        Self::aggregate(
            cost_per_item,
            NumericInput::parse(total_items).or_zero(),
            NumericInput::parse(selling_price).or_zero(),
        )
    }
}
