//! 試算表輸出（XLSX）
//!
//! 產生最小的 SpreadsheetML 封裝：內容類型、關聯、活頁簿、樣式與單一工作表。
//! 字串以 inline string 寫入，不使用共用字串表。

use std::io::{Cursor, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::report::{Cell, ExportReport, RowStyle};
use crate::{ExportError, Result};

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// 樣式索引（對應 styles.xml 的 cellXfs）
const STYLE_PLAIN: &str = "0";
const STYLE_EMPHASIS: &str = "1";

/// 第一欄（標籤/名稱）寬度
const LABEL_COLUMN_WIDTH: &str = "34";
const VALUE_COLUMN_WIDTH: &str = "16";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/><Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

// cellXfs: 0 = 一般，1 = 粗體加淺藍底色
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><fonts count="2"><font><sz val="11"/><name val="Calibri"/></font><font><b/><sz val="11"/><name val="Calibri"/></font></fonts><fills count="3"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill><fill><patternFill patternType="solid"><fgColor rgb="FFD9E1F2"/><bgColor indexed="64"/></patternFill></fill></fills><borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders><cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs><cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="0" fontId="1" fillId="2" borderId="0" xfId="0" applyFont="1" applyFill="1"/></cellXfs><cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles></styleSheet>"#;

/// 產生完整的 XLSX 緩衝區
pub fn to_bytes(report: &ExportReport) -> Result<Vec<u8>> {
    let parts: [(&str, Vec<u8>); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes().to_vec()),
        ("_rels/.rels", ROOT_RELS_XML.as_bytes().to_vec()),
        ("xl/workbook.xml", workbook_xml(&report.sheet_name)?),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML.as_bytes().to_vec()),
        ("xl/styles.xml", STYLES_XML.as_bytes().to_vec()),
        ("xl/worksheets/sheet1.xml", worksheet_xml(report)?),
    ];

    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, content) in parts {
        archive.start_file(name, options)?;
        archive.write_all(&content).map_err(|err| ExportError::Buffer {
            message: format!("{name}: {err}"),
        })?;
    }

    Ok(archive.finish()?.into_inner())
}

/// 欄位字母（0 → A，26 → AA）
pub fn column_name(index: usize) -> String {
    let mut name = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

fn workbook_xml(sheet_name: &str) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_decl(&mut writer)?;

    let mut root = BytesStart::new("workbook");
    root.push_attribute(("xmlns", MAIN_NS));
    root.push_attribute(("xmlns:r", REL_NS));
    write(&mut writer, Event::Start(root))?;
    write(&mut writer, Event::Start(BytesStart::new("sheets")))?;

    let mut sheet = BytesStart::new("sheet");
    sheet.push_attribute(("name", sheet_name));
    sheet.push_attribute(("sheetId", "1"));
    sheet.push_attribute(("r:id", "rId1"));
    write(&mut writer, Event::Empty(sheet))?;

    write(&mut writer, Event::End(BytesEnd::new("sheets")))?;
    write(&mut writer, Event::End(BytesEnd::new("workbook")))?;

    Ok(writer.into_inner().into_inner())
}

fn worksheet_xml(report: &ExportReport) -> Result<Vec<u8>> {
    let rows = report.rows();
    let width = rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);

    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_decl(&mut writer)?;

    let mut root = BytesStart::new("worksheet");
    root.push_attribute(("xmlns", MAIN_NS));
    root.push_attribute(("xmlns:r", REL_NS));
    write(&mut writer, Event::Start(root))?;

    if width > 0 {
        write(&mut writer, Event::Start(BytesStart::new("cols")))?;
        let mut label_col = BytesStart::new("col");
        label_col.push_attribute(("min", "1"));
        label_col.push_attribute(("max", "1"));
        label_col.push_attribute(("width", LABEL_COLUMN_WIDTH));
        label_col.push_attribute(("customWidth", "1"));
        write(&mut writer, Event::Empty(label_col))?;

        if width > 1 {
            let max = width.to_string();
            let mut value_cols = BytesStart::new("col");
            value_cols.push_attribute(("min", "2"));
            value_cols.push_attribute(("max", max.as_str()));
            value_cols.push_attribute(("width", VALUE_COLUMN_WIDTH));
            value_cols.push_attribute(("customWidth", "1"));
            write(&mut writer, Event::Empty(value_cols))?;
        }
        write(&mut writer, Event::End(BytesEnd::new("cols")))?;
    }

    write(&mut writer, Event::Start(BytesStart::new("sheetData")))?;

    for (row_index, row) in rows.iter().enumerate() {
        let row_number = (row_index + 1).to_string();
        let style = match row.style {
            RowStyle::Plain => STYLE_PLAIN,
            RowStyle::Emphasis => STYLE_EMPHASIS,
        };

        let mut row_start = BytesStart::new("row");
        row_start.push_attribute(("r", row_number.as_str()));
        if row.cells.is_empty() {
            write(&mut writer, Event::Empty(row_start))?;
            continue;
        }
        write(&mut writer, Event::Start(row_start))?;

        for (col_index, cell) in row.cells.iter().enumerate() {
            let reference = format!("{}{}", column_name(col_index), row_number);
            write_cell(&mut writer, &reference, cell, style)?;
        }

        write(&mut writer, Event::End(BytesEnd::new("row")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("sheetData")))?;
    write(&mut writer, Event::End(BytesEnd::new("worksheet")))?;

    Ok(writer.into_inner().into_inner())
}

fn write_cell(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    reference: &str,
    cell: &Cell,
    style: &str,
) -> Result<()> {
    let mut start = BytesStart::new("c");
    start.push_attribute(("r", reference));
    if style != STYLE_PLAIN {
        start.push_attribute(("s", style));
    }

    match cell {
        Cell::Empty => write(writer, Event::Empty(start)),
        Cell::Number(value) => {
            let text = value.to_string();
            write(writer, Event::Start(start))?;
            write(writer, Event::Start(BytesStart::new("v")))?;
            write(writer, Event::Text(BytesText::new(&text)))?;
            write(writer, Event::End(BytesEnd::new("v")))?;
            write(writer, Event::End(BytesEnd::new("c")))
        }
        Cell::Text(text) => {
            start.push_attribute(("t", "inlineStr"));
            write(writer, Event::Start(start))?;
            write(writer, Event::Start(BytesStart::new("is")))?;
            let mut t = BytesStart::new("t");
            t.push_attribute(("xml:space", "preserve"));
            write(writer, Event::Start(t))?;
            write(writer, Event::Text(BytesText::new(text)))?;
            write(writer, Event::End(BytesEnd::new("t")))?;
            write(writer, Event::End(BytesEnd::new("is")))?;
            write(writer, Event::End(BytesEnd::new("c")))
        }
    }
}

fn write_decl(writer: &mut Writer<Cursor<Vec<u8>>>) -> Result<()> {
    write(
        writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
    )
}

fn write(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|err| ExportError::Xml {
            message: err.to_string(),
        })
}
