//! 匯出配置

use serde::{Deserialize, Serialize};

/// 工作表名稱長度上限
const SHEET_NAME_MAX_LEN: usize = 31;

/// 匯出配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// 檔名前綴（後接匯出日期）
    pub base_name: String,

    /// 報表標題
    pub title: String,

    /// 工作表名稱
    pub sheet_name: String,
}

impl ExportConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            base_name: "kalkulator-biaya-produksi".to_string(),
            title: "Kalkulator Biaya Produksi".to_string(),
            sheet_name: "Ringkasan".to_string(),
        }
    }

    /// 建構器模式：設置檔名前綴
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    /// 建構器模式：設置報表標題
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// 建構器模式：設置工作表名稱
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    /// 合法的工作表名稱
    ///
    /// `[]:*?/\` 以 `_` 取代，最多 31 字元，空白時退回 `Sheet1`。
    pub fn sanitized_sheet_name(&self) -> String {
        let name: String = self
            .sheet_name
            .chars()
            .map(|c| match c {
                '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
                other => other,
            })
            .take(SHEET_NAME_MAX_LEN)
            .collect();

        if name.trim().is_empty() {
            "Sheet1".to_string()
        } else {
            name
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}
