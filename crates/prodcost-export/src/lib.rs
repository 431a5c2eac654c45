//! # Production Cost Export
//!
//! 將彙總結果與原料明細匯出為 CSV 或 XLSX。
//! 輸出緩衝區在記憶體中完整建立後才一次寫入，失敗時不會留下不完整的檔案。

pub mod config;
pub mod delimited;
pub mod report;
pub mod spreadsheet;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use prodcost_calc::SessionSnapshot;

// Re-export 主要類型
pub use config::ExportConfig;
pub use report::{Cell, ExportReport, ReportRow, RowStyle};

/// 匯出錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("寫入檔案失敗 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV 輸出錯誤: {0}")]
    Csv(#[from] csv::Error),

    #[error("ZIP 封裝錯誤: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML 輸出錯誤: {message}")]
    Xml { message: String },

    #[error("輸出緩衝區錯誤: {message}")]
    Buffer { message: String },
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// 匯出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// 逗號分隔文字
    Csv,
    /// 試算表
    Xlsx,
}

impl ExportFormat {
    /// 副檔名
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    /// 產生完整輸出緩衝區
    pub fn render(self, report: &ExportReport) -> Result<Vec<u8>> {
        match self {
            Self::Csv => delimited::to_bytes(report),
            Self::Xlsx => spreadsheet::to_bytes(report),
        }
    }
}

/// 匯出檔名：`<前綴>-YYYY-MM-DD.<副檔名>`
pub fn export_file_name(base_name: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}-{}.{}",
        base_name,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// 匯出報表到目錄，回傳檔案路徑
pub fn write_report(
    report: &ExportReport,
    format: ExportFormat,
    dir: &Path,
    config: &ExportConfig,
) -> Result<PathBuf> {
    let bytes = format.render(report)?;
    let path = dir.join(export_file_name(&config.base_name, report.export_date, format));

    std::fs::write(&path, &bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(
        "匯出 {:?} 完成：{}（{} 位元組，明細 {} 筆）",
        format,
        path.display(),
        bytes.len(),
        report.lines.len()
    );

    Ok(path)
}

/// 以今天日期匯出工作階段快照
pub fn export_snapshot(
    snapshot: &SessionSnapshot,
    format: ExportFormat,
    dir: &Path,
    config: &ExportConfig,
) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();
    let report = ExportReport::from_snapshot(snapshot, today, config);
    write_report(&report, format, dir, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodcost_calc::CostSession;

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();

        assert_eq!(
            export_file_name("kalkulator-biaya-produksi", date, ExportFormat::Csv),
            "kalkulator-biaya-produksi-2025-03-07.csv"
        );
        assert_eq!(
            export_file_name("laporan", date, ExportFormat::Xlsx),
            "laporan-2025-03-07.xlsx"
        );
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let report = ExportReport::from_snapshot(&CostSession::default().snapshot(), date, &config);

        let path = write_report(&report, ExportFormat::Csv, dir.path(), &config).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "kalkulator-biaya-produksi-2025-11-20.csv"
        );
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .starts_with("Kalkulator Biaya Produksi"));
    }

    #[test]
    fn test_write_report_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("tidak-ada");
        let config = ExportConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let report = ExportReport::from_snapshot(&CostSession::default().snapshot(), date, &config);

        let err = write_report(&report, ExportFormat::Xlsx, &missing, &config).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
