//! 匯出報表的邏輯結構
//!
//! 兩種輸出格式共用同一份列資料：標題、匯出日期、彙總區塊、空白列、原料明細表。

use chrono::NaiveDate;
use prodcost_calc::{LineSnapshot, SessionSnapshot};
use prodcost_core::NumericInput;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::ExportConfig;

/// 明細表欄位標題
pub const LINE_HEADERS: [&str; 6] = [
    "Nama Bahan",
    "Harga/Unit",
    "Jml/Item",
    "Total Beli",
    "Satuan",
    "Maks Produksi",
];

/// 報表寬度（欄數）
pub const REPORT_WIDTH: usize = LINE_HEADERS.len();

/// 儲存格
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(Decimal),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// 數值儲存格（去除尾端零）
    pub fn number(value: Decimal) -> Self {
        Self::Number(value.normalize())
    }

    /// 由欄位原始文字建立：可解析為數值則為數值，空白則為空，其餘保留文字
    pub fn from_raw(raw: &str) -> Self {
        match NumericInput::parse(raw) {
            NumericInput::Numeric(value) => Self::number(value),
            NumericInput::Empty => Self::Empty,
            NumericInput::Invalid => Self::text(raw),
        }
    }

    /// 純文字表示
    pub fn to_plain(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
            Self::Empty => String::new(),
        }
    }
}

/// 列樣式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Plain,
    /// 粗體加底色
    Emphasis,
}

/// 報表列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub cells: Vec<Cell>,
    pub style: RowStyle,
}

impl ReportRow {
    fn plain(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            style: RowStyle::Plain,
        }
    }

    fn emphasis(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            style: RowStyle::Emphasis,
        }
    }

    /// 空白分隔列
    fn blank() -> Self {
        Self::plain(Vec::new())
    }
}

/// 匯出報表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub title: String,
    pub sheet_name: String,
    pub export_date: NaiveDate,
    /// 彙總區塊（標籤, 值）
    pub summary: Vec<(String, Cell)>,
    /// 明細表資料列
    pub lines: Vec<Vec<Cell>>,
}

impl ExportReport {
    /// 由工作階段快照建立報表
    pub fn from_snapshot(
        snapshot: &SessionSnapshot,
        export_date: NaiveDate,
        config: &ExportConfig,
    ) -> Self {
        let summary = &snapshot.summary;
        let profit_percent = match NumericInput::parse(&snapshot.profit_percent) {
            NumericInput::Numeric(value) => Cell::number(value),
            NumericInput::Empty | NumericInput::Invalid => Cell::Empty,
        };
        let profit_margin = summary
            .profit_margin
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

        let summary_rows = vec![
            ("Total Item".to_string(), Cell::number(summary.total_items)),
            ("Keuntungan yang Diinginkan (%)".to_string(), profit_percent),
            ("Harga Jual".to_string(), Cell::number(summary.selling_price)),
            ("Biaya per Item".to_string(), Cell::number(summary.cost_per_item)),
            ("Total Biaya".to_string(), Cell::number(summary.total_cost)),
            ("Total Pendapatan".to_string(), Cell::number(summary.revenue)),
            ("Keuntungan Bersih".to_string(), Cell::number(summary.profit)),
            ("Margin Keuntungan (%)".to_string(), Cell::number(profit_margin)),
        ];

        Self {
            title: config.title.clone(),
            sheet_name: config.sanitized_sheet_name(),
            export_date,
            summary: summary_rows,
            lines: snapshot.lines.iter().map(line_cells).collect(),
        }
    }

    /// 攤平成輸出列（兩種格式共用）
    pub fn rows(&self) -> Vec<ReportRow> {
        let mut rows = Vec::with_capacity(self.summary.len() + self.lines.len() + 4);

        rows.push(ReportRow::emphasis(vec![Cell::text(self.title.clone())]));
        rows.push(ReportRow::plain(vec![
            Cell::text("Tanggal Ekspor"),
            Cell::text(self.export_date.format("%Y-%m-%d").to_string()),
        ]));

        for (label, value) in &self.summary {
            rows.push(ReportRow::plain(vec![Cell::text(label.clone()), value.clone()]));
        }

        rows.push(ReportRow::blank());
        rows.push(ReportRow::emphasis(
            LINE_HEADERS.iter().map(|header| Cell::text(*header)).collect(),
        ));
        rows.extend(self.lines.iter().cloned().map(ReportRow::plain));

        rows
    }
}

/// 單筆明細的表格列
fn line_cells(line: &LineSnapshot) -> Vec<Cell> {
    let item = &line.item;
    let max_producible = line
        .cap
        .and_then(|cap| cap.display_value())
        .map(Cell::number)
        .unwrap_or_else(|| Cell::text("-"));

    vec![
        Cell::text(item.name.clone()),
        Cell::from_raw(&item.unit_price),
        Cell::from_raw(&item.quantity_per_item),
        Cell::from_raw(&item.total_purchased),
        Cell::text(item.unit.as_str()),
        max_producible,
    ]
}
