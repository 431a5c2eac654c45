//! 逗號分隔文字輸出（CSV）

use crate::report::{ExportReport, REPORT_WIDTH};
use crate::{ExportError, Result};

/// 產生完整的 CSV 緩衝區
///
/// 每列補齊到報表寬度，空白分隔列輸出為只含逗號的一行。
pub fn to_bytes(report: &ExportReport) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    for row in report.rows() {
        let mut record: Vec<String> = row.cells.iter().map(|cell| cell.to_plain()).collect();
        record.resize(REPORT_WIDTH.max(record.len()), String::new());
        writer.write_record(&record)?;
    }

    writer.into_inner().map_err(|err| ExportError::Buffer {
        message: err.to_string(),
    })
}

/// 產生 CSV 文字
pub fn to_string(report: &ExportReport) -> Result<String> {
    let bytes = to_bytes(report)?;
    String::from_utf8(bytes).map_err(|err| ExportError::Buffer {
        message: err.to_string(),
    })
}
