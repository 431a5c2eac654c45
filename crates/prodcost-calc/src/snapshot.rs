//! 工作階段快照（供顯示與匯出使用的純資料）

use prodcost_core::LineItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::PriceDriver;
use crate::producible::ProducibleCap;
use crate::summary::CostSummary;

/// 單筆明細快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSnapshot {
    /// 明細內容（原始文字）
    pub item: LineItem,

    /// 可生產上限（`None` = 缺值未參與計算）
    pub cap: Option<ProducibleCap>,

    /// 對單件成本的貢獻
    pub line_cost: Decimal,
}

/// 工作階段快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub lines: Vec<LineSnapshot>,
    pub total_items: String,
    pub profit_percent: String,
    pub selling_price: String,
    pub driver: Option<PriceDriver>,
    pub overall_cap: ProducibleCap,
    pub summary: CostSummary,
}

impl SessionSnapshot {
    /// 序列化為 JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::CostSession;
    use prodcost_core::{LineEdit, LineId};

    #[test]
    fn test_snapshot_json() {
        let mut session = CostSession::default();
        session
            .update_line(LineId(1), LineEdit::UnitPrice("10000".to_string()))
            .unwrap();
        session
            .update_line(LineId(1), LineEdit::QuantityPerItem("3".to_string()))
            .unwrap();

        let json = session.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["lines"][0]["item"]["id"], 1);
        assert_eq!(value["lines"][0]["item"]["unit"], "meter");
        assert_eq!(value["lines"][0]["item"]["unit_price"], "10000");
        assert!(value["lines"][0]["cap"].is_null());
        assert_eq!(value["driver"], serde_json::Value::Null);
    }
}
