//! 可生產數量計算

use prodcost_core::{LineItem, NumericInput};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 可生產數量上限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProducibleCap {
    /// 有限上限（整數）
    Bounded(Decimal),
    /// 無上限（每件用量 ≤ 0，不參與最小值限制）
    Unbounded,
}

impl ProducibleCap {
    /// 取兩者中較嚴格的上限
    pub fn min(self, other: Self) -> Self {
        match (self, other) {
            (Self::Unbounded, cap) | (cap, Self::Unbounded) => cap,
            (Self::Bounded(a), Self::Bounded(b)) => Self::Bounded(a.min(b)),
        }
    }

    /// 有限上限值
    pub fn bounded(self) -> Option<Decimal> {
        match self {
            Self::Bounded(value) => Some(value),
            Self::Unbounded => None,
        }
    }

    /// 可顯示的上限：僅在有限且為正時回傳
    pub fn display_value(self) -> Option<Decimal> {
        self.bounded().filter(|value| *value > Decimal::ZERO)
    }
}

/// 可生產數量計算器
pub struct ProducibleCalculator;

impl ProducibleCalculator {
    /// 單筆明細的可生產上限
    ///
    /// 回傳 `None` 表示該明細缺少用量或購買量，不參與整體計算。
    pub fn per_line(line: &LineItem) -> Option<ProducibleCap> {
        Self::from_inputs(line.quantity_per_item_input(), line.total_purchased_input())
    }

    /// 由用量與購買量計算上限
    pub fn from_inputs(
        quantity_per_item: NumericInput,
        total_purchased: NumericInput,
    ) -> Option<ProducibleCap> {
        let quantity_per_item = quantity_per_item.value()?;
        let total_purchased = total_purchased.value()?;

        if quantity_per_item <= Decimal::ZERO {
            return Some(ProducibleCap::Unbounded);
        }

        // 商溢位時視同無上限
        let cap = total_purchased
            .checked_div(quantity_per_item)
            .map(|ratio| ProducibleCap::Bounded(ratio.floor().normalize()))
            .unwrap_or(ProducibleCap::Unbounded);

        Some(cap)
    }

    /// 整體可生產上限：所有參與明細的最小值
    ///
    /// 沒有任何明細參與時回傳 `Bounded(0)`（尚無法計算）。
    pub fn overall<'a>(lines: impl IntoIterator<Item = &'a LineItem>) -> ProducibleCap {
        lines
            .into_iter()
            .filter_map(Self::per_line)
            .reduce(ProducibleCap::min)
            .unwrap_or(ProducibleCap::Bounded(Decimal::ZERO))
    }
}
