//! # Production Cost Derivation Engine
//!
//! 由原料明細推導可生產數量、單件成本、售價/利潤百分比與彙總數字。
//! 所有計算都是純函數；[`CostSession`] 保存互動表單狀態並在每個編輯事件呼叫它們。

pub mod costing;
pub mod pricing;
pub mod producible;
pub mod session;
pub mod snapshot;
pub mod summary;

// Re-export 主要類型
pub use costing::CostCalculator;
pub use pricing::{Derivation, PriceDriver, PricingCalculator};
pub use producible::{ProducibleCalculator, ProducibleCap};
pub use session::CostSession;
pub use snapshot::{LineSnapshot, SessionSnapshot};
pub use summary::{CostSummary, SummaryCalculator};
