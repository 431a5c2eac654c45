//! 原料明細模型

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::numeric::NumericInput;
use crate::unit::Unit;
use crate::{CostError, Result};

/// 原料明細ID
///
/// 以遞增計數器配發，刪除後不再重用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 原料明細
///
/// 數值欄位保留使用者輸入的原始文字，計算時再經 [`NumericInput`] 解讀。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// 明細ID
    pub id: LineId,

    /// 原料名稱（可空白、可重複）
    pub name: String,

    /// 單價
    pub unit_price: String,

    /// 每件成品用量
    pub quantity_per_item: String,

    /// 總購買量（現有庫存）
    pub total_purchased: String,

    /// 計量單位
    pub unit: Unit,
}

impl LineItem {
    /// 創建空白明細
    pub fn new(id: LineId, unit: Unit) -> Self {
        Self {
            id,
            name: String::new(),
            unit_price: String::new(),
            quantity_per_item: String::new(),
            total_purchased: String::new(),
            unit,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 建構器模式：設置單價
    pub fn with_unit_price(mut self, price: impl Into<String>) -> Self {
        self.unit_price = price.into();
        self
    }

    /// 建構器模式：設置每件用量
    pub fn with_quantity_per_item(mut self, quantity: impl Into<String>) -> Self {
        self.quantity_per_item = quantity.into();
        self
    }

    /// 建構器模式：設置總購買量
    pub fn with_total_purchased(mut self, quantity: impl Into<String>) -> Self {
        self.total_purchased = quantity.into();
        self
    }

    /// 建構器模式：設置單位
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn unit_price_input(&self) -> NumericInput {
        NumericInput::parse(&self.unit_price)
    }

    pub fn quantity_per_item_input(&self) -> NumericInput {
        NumericInput::parse(&self.quantity_per_item)
    }

    pub fn total_purchased_input(&self) -> NumericInput {
        NumericInput::parse(&self.total_purchased)
    }

    /// 套用單一欄位編輯
    pub fn apply(&mut self, edit: LineEdit) {
        match edit {
            LineEdit::Name(value) => self.name = value,
            LineEdit::UnitPrice(value) => self.unit_price = value,
            LineEdit::QuantityPerItem(value) => self.quantity_per_item = value,
            LineEdit::TotalPurchased(value) => self.total_purchased = value,
            LineEdit::Unit(unit) => self.unit = unit,
        }
    }
}

/// 單一欄位編輯
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEdit {
    Name(String),
    UnitPrice(String),
    QuantityPerItem(String),
    TotalPurchased(String),
    Unit(Unit),
}

/// 原料明細清單
///
/// 以ID為鍵的有序集合；ID 單調遞增，因此迭代順序即建立順序（顯示順序）。
/// 清單永不為空。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItems {
    items: BTreeMap<LineId, LineItem>,
    next_id: u64,
    default_unit: Unit,
}

impl LineItems {
    /// 創建只含一筆空白明細的清單
    pub fn new(default_unit: Unit) -> Self {
        let mut lines = Self {
            items: BTreeMap::new(),
            next_id: 1,
            default_unit,
        };
        lines.add();
        lines
    }

    /// 由既有明細建立清單
    ///
    /// 計數器從最大ID之後開始；空輸入時退回單筆空白明細。
    pub fn from_items(items: impl IntoIterator<Item = LineItem>, default_unit: Unit) -> Self {
        let items: BTreeMap<LineId, LineItem> =
            items.into_iter().map(|item| (item.id, item)).collect();

        if items.is_empty() {
            return Self::new(default_unit);
        }

        let next_id = items.keys().map(|id| id.0).max().unwrap_or(0) + 1;
        Self {
            items,
            next_id,
            default_unit,
        }
    }

    /// 新增空白明細，回傳新ID
    pub fn add(&mut self) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, LineItem::new(id, self.default_unit));
        id
    }

    /// 刪除明細
    ///
    /// 最後一筆不可刪除，狀態保持不變。
    pub fn remove(&mut self, id: LineId) -> Result<LineItem> {
        if !self.items.contains_key(&id) {
            return Err(CostError::LineNotFound(id));
        }
        if self.items.len() == 1 {
            return Err(CostError::LastLineItem);
        }
        self.items.remove(&id).ok_or(CostError::LineNotFound(id))
    }

    /// 套用欄位編輯
    pub fn update(&mut self, id: LineId, edit: LineEdit) -> Result<&LineItem> {
        let item = self.items.get_mut(&id).ok_or(CostError::LineNotFound(id))?;
        item.apply(edit);
        Ok(item)
    }

    pub fn get(&self, id: LineId) -> Option<&LineItem> {
        self.items.get(&id)
    }

    /// 依顯示順序迭代
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.values()
    }

    pub fn ids(&self) -> Vec<LineId> {
        self.items.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 清單永不為空，恆為 `false`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for LineItems {
    fn default() -> Self {
        Self::new(Unit::default())
    }
}

impl<'a> IntoIterator for &'a LineItems {
    type Item = &'a LineItem;
    type IntoIter = std::collections::btree_map::Values<'a, LineId, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}
