//! 互動式計算工作階段
//!
//! 保存表單狀態（原料明細、生產總數、利潤百分比、售價），
//! 每個編輯事件都同步呼叫推導引擎。工作階段不做持久化。

use prodcost_core::{CalculatorConfig, LineEdit, LineId, LineItem, LineItems, TotalItemsPolicy};
use rust_decimal::Decimal;

use crate::costing::CostCalculator;
use crate::pricing::{PriceDriver, PricingCalculator};
use crate::producible::{ProducibleCalculator, ProducibleCap};
use crate::snapshot::{LineSnapshot, SessionSnapshot};
use crate::summary::{CostSummary, SummaryCalculator};

/// 成本計算工作階段
#[derive(Debug, Clone)]
pub struct CostSession {
    config: CalculatorConfig,
    lines: LineItems,
    total_items: String,
    total_items_manual: bool,
    profit_percent: String,
    selling_price: String,
    driver: Option<PriceDriver>,
}

impl CostSession {
    /// 創建新的工作階段（一筆空白明細）
    pub fn new(config: CalculatorConfig) -> Self {
        let lines = LineItems::new(config.default_unit);
        Self {
            config,
            lines,
            total_items: String::new(),
            total_items_manual: false,
            profit_percent: String::new(),
            selling_price: String::new(),
            driver: None,
        }
    }

    /// 新增空白明細
    pub fn add_line(&mut self) -> LineId {
        let id = self.lines.add();
        tracing::debug!("新增原料明細 {}", id);
        id
    }

    /// 刪除明細（最後一筆會被拒絕）
    pub fn remove_line(&mut self, id: LineId) -> prodcost_core::Result<()> {
        match self.lines.remove(id) {
            Ok(_) => {
                tracing::debug!("刪除原料明細 {}，剩餘 {} 筆", id, self.lines.len());
                Ok(())
            }
            Err(err) => {
                tracing::debug!("刪除原料明細 {} 被拒絕: {}", id, err);
                Err(err)
            }
        }
    }

    /// 編輯明細欄位，並重新計算生產總數
    pub fn update_line(&mut self, id: LineId, edit: LineEdit) -> prodcost_core::Result<()> {
        tracing::debug!("編輯原料明細 {}: {:?}", id, edit);
        self.lines.update(id, edit)?;
        self.refresh_total_items();
        Ok(())
    }

    /// 自動帶入生產總數
    ///
    /// 僅在整體上限為正的有限值時覆蓋；這是單向推送，手動輸入不回寫明細。
    fn refresh_total_items(&mut self) {
        let cap = ProducibleCalculator::overall(&self.lines);
        let Some(count) = cap.display_value() else {
            tracing::debug!("整體可生產數量無法決定: {:?}", cap);
            return;
        };

        if self.config.total_items_policy == TotalItemsPolicy::KeepManual && self.total_items_manual {
            tracing::debug!("保留手動輸入的生產總數 {}", self.total_items);
            return;
        }

        tracing::debug!("自動帶入生產總數 {}", count);
        self.total_items = count.to_string();
        self.total_items_manual = false;
    }

    /// 手動輸入生產總數
    pub fn set_total_items(&mut self, raw: &str) {
        self.total_items = raw.to_string();
        self.total_items_manual = !raw.trim().is_empty();
    }

    /// 編輯利潤百分比，推導售價
    pub fn set_profit_percent(&mut self, raw: &str) {
        self.profit_percent = raw.to_string();
        self.driver = Some(PriceDriver::Percent);

        let derivation = PricingCalculator::derive_from_percent(self.cost_per_item(), raw, &self.config);
        tracing::debug!("利潤百分比 {:?} → 售價 {:?}", raw, derivation);
        derivation.apply_to(&mut self.selling_price);
    }

    /// 編輯售價，推導利潤百分比
    pub fn set_selling_price(&mut self, raw: &str) {
        self.selling_price = raw.to_string();
        self.driver = Some(PriceDriver::Price);

        let derivation = PricingCalculator::derive_from_price(self.cost_per_item(), raw, &self.config);
        tracing::debug!("售價 {:?} → 利潤百分比 {:?}", raw, derivation);
        derivation.apply_to(&mut self.profit_percent);
    }

    /// 依最後的驅動欄位，以目前成本重新推導另一欄位
    ///
    /// 明細變動不會自動觸發，須由呼叫端明確要求。
    pub fn resync_pricing(&mut self) {
        let Some(driver) = self.driver else {
            return;
        };

        let cost = self.cost_per_item();
        match driver {
            PriceDriver::Percent => {
                PricingCalculator::derive(driver, cost, &self.profit_percent, &self.config)
                    .apply_to(&mut self.selling_price);
            }
            PriceDriver::Price => {
                PricingCalculator::derive(driver, cost, &self.selling_price, &self.config)
                    .apply_to(&mut self.profit_percent);
            }
        }
        tracing::debug!(
            "重新同步定價（{:?}）：百分比 {:?}，售價 {:?}",
            driver,
            self.profit_percent,
            self.selling_price
        );
    }

    /// 單件成本
    pub fn cost_per_item(&self) -> Decimal {
        CostCalculator::cost_per_item(&self.lines)
    }

    /// 整體可生產上限
    pub fn overall_cap(&self) -> ProducibleCap {
        ProducibleCalculator::overall(&self.lines)
    }

    /// 彙總結果（每次依目前欄位重新計算）
    pub fn summary(&self) -> CostSummary {
        SummaryCalculator::from_inputs(self.cost_per_item(), &self.total_items, &self.selling_price)
    }

    /// 匯出用的純資料快照
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            lines: self
                .lines
                .iter()
                .map(|item| LineSnapshot {
                    item: item.clone(),
                    cap: ProducibleCalculator::per_line(item),
                    line_cost: CostCalculator::line_cost(item),
                })
                .collect(),
            total_items: self.total_items.clone(),
            profit_percent: self.profit_percent.clone(),
            selling_price: self.selling_price.clone(),
            driver: self.driver,
            overall_cap: self.overall_cap(),
            summary: self.summary(),
        }
    }

    pub fn lines(&self) -> &LineItems {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&LineItem> {
        self.lines.get(id)
    }

    pub fn total_items(&self) -> &str {
        &self.total_items
    }

    pub fn profit_percent(&self) -> &str {
        &self.profit_percent
    }

    pub fn selling_price(&self) -> &str {
        &self.selling_price
    }

    /// 最後被編輯的定價欄位
    pub fn driver(&self) -> Option<PriceDriver> {
        self.driver
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for CostSession {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}
