//! # Production Cost Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod display;
pub mod line_item;
pub mod numeric;
pub mod unit;

// Re-export 主要類型
pub use config::{CalculatorConfig, DisplayConfig, TotalItemsPolicy};
pub use line_item::{LineEdit, LineId, LineItem, LineItems};
pub use numeric::NumericInput;
pub use unit::Unit;

/// 成本計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CostError {
    #[error("無法刪除最後一筆原料")]
    LastLineItem,

    #[error("找不到原料: {0}")]
    LineNotFound(LineId),

    #[error("未知的計量單位: {0}")]
    UnknownUnit(String),
}

pub type Result<T> = std::result::Result<T, CostError>;
