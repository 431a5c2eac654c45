//! # Production Cost Calculator
//!
//! 生產成本與定價計算器：由原料明細推導可生產數量、單件成本、
//! 售價/利潤百分比與彙總數字，並匯出為 CSV 或 XLSX。

pub use prodcost_calc as calc;
pub use prodcost_core as model;
pub use prodcost_export as export;

pub use prodcost_calc::{CostSession, CostSummary, PriceDriver, ProducibleCap, SessionSnapshot};
pub use prodcost_core::{CalculatorConfig, CostError, LineEdit, LineId, LineItem, Unit};
pub use prodcost_export::{ExportConfig, ExportFormat, ExportReport};
