//! Per-category spreadsheet output.
//!
//! The workbook is assembled as a minimal Office Open XML package: a zip
//! archive with the content types, the package and workbook relationships,
//! the workbook part and one worksheet part per partition. Text cells are
//! written as inline strings so no shared string table is needed.

use std::borrow::Cow;
use std::io::{Cursor, Write};

use anyhow::{Context, Result, bail};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use stock_model::{AnnotatedRecord, CellValue, format_numeric};
use stock_transform::Partition;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::sheet_name::unique_sheet_names;

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PACKAGE_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const OFFICE_DOCUMENT_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const WORKSHEET_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
const WORKBOOK_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const WORKSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
const RELS_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// A worksheet ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    pub name: String,
    /// Header row followed by data rows.
    pub rows: Vec<Vec<CellValue>>,
}

/// Builds one sheet per partition with normalized column headers.
///
/// Sheet names are sanitized and deduplicated; see
/// [`unique_sheet_names`](crate::sheet_name::unique_sheet_names).
pub fn build_sheets(columns: &[String], partitions: &[Partition<'_>]) -> Vec<SheetData> {
    let names: Vec<&str> = partitions.iter().map(|p| p.name.as_str()).collect();
    let sheet_names = unique_sheet_names(&names);
    partitions
        .iter()
        .zip(sheet_names)
        .map(|(partition, name)| {
            let header: Vec<CellValue> = columns.iter().map(CellValue::text).collect();
            let mut rows = Vec::with_capacity(partition.records.len() + 1);
            rows.push(header);
            rows.extend(
                partition
                    .records
                    .iter()
                    .map(|record| row_values(record, columns)),
            );
            SheetData { name, rows }
        })
        .collect()
}

fn row_values(record: &AnnotatedRecord, columns: &[String]) -> Vec<CellValue> {
    columns
        .iter()
        .map(|column| record.output_value(column))
        .collect()
}

/// Renders the per-category workbook to xlsx bytes.
pub fn render_partitioned_xlsx(
    columns: &[String],
    partitions: &[Partition<'_>],
) -> Result<Vec<u8>> {
    if partitions.is_empty() {
        bail!("no categories selected: a workbook needs at least one sheet");
    }
    let sheets = build_sheets(columns, partitions);
    render_workbook(&sheets)
}

/// Serializes worksheets into an xlsx package.
pub fn render_workbook(sheets: &[SheetData]) -> Result<Vec<u8>> {
    if sheets.is_empty() {
        bail!("a workbook needs at least one sheet");
    }
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    add_part(&mut zip, "[Content_Types].xml", &content_types_xml(sheets.len())?)?;
    add_part(&mut zip, "_rels/.rels", &package_rels_xml()?)?;
    add_part(&mut zip, "xl/workbook.xml", &workbook_xml(sheets)?)?;
    add_part(
        &mut zip,
        "xl/_rels/workbook.xml.rels",
        &workbook_rels_xml(sheets.len())?,
    )?;
    for (idx, sheet) in sheets.iter().enumerate() {
        let part = format!("xl/worksheets/sheet{}.xml", idx + 1);
        add_part(&mut zip, &part, &worksheet_xml(sheet)?)?;
    }

    let cursor = zip.finish().context("finish xlsx archive")?;
    Ok(cursor.into_inner())
}

fn add_part(zip: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, bytes: &[u8]) -> Result<()> {
    zip.start_file(name, SimpleFileOptions::default())
        .with_context(|| format!("start xlsx part {name}"))?;
    zip.write_all(bytes)
        .with_context(|| format!("write xlsx part {name}"))?;
    Ok(())
}

fn xml_writer() -> Result<Writer<Vec<u8>>> {
    let mut xml = Writer::new(Vec::new());
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(xml)
}

fn content_types_xml(sheet_count: usize) -> Result<Vec<u8>> {
    let mut xml = xml_writer()?;
    let mut types = BytesStart::new("Types");
    types.push_attribute(("xmlns", CONTENT_TYPES_NS));
    xml.write_event(Event::Start(types))?;

    let mut rels = BytesStart::new("Default");
    rels.push_attribute(("Extension", "rels"));
    rels.push_attribute(("ContentType", RELS_CONTENT_TYPE));
    xml.write_event(Event::Empty(rels))?;

    let mut plain = BytesStart::new("Default");
    plain.push_attribute(("Extension", "xml"));
    plain.push_attribute(("ContentType", "application/xml"));
    xml.write_event(Event::Empty(plain))?;

    let mut workbook = BytesStart::new("Override");
    workbook.push_attribute(("PartName", "/xl/workbook.xml"));
    workbook.push_attribute(("ContentType", WORKBOOK_CONTENT_TYPE));
    xml.write_event(Event::Empty(workbook))?;

    for idx in 1..=sheet_count {
        let part_name = format!("/xl/worksheets/sheet{idx}.xml");
        let mut sheet = BytesStart::new("Override");
        sheet.push_attribute(("PartName", part_name.as_str()));
        sheet.push_attribute(("ContentType", WORKSHEET_CONTENT_TYPE));
        xml.write_event(Event::Empty(sheet))?;
    }

    xml.write_event(Event::End(BytesEnd::new("Types")))?;
    Ok(xml.into_inner())
}

fn package_rels_xml() -> Result<Vec<u8>> {
    let mut xml = xml_writer()?;
    let mut root = BytesStart::new("Relationships");
    root.push_attribute(("xmlns", PACKAGE_RELATIONSHIPS_NS));
    xml.write_event(Event::Start(root))?;

    let mut rel = BytesStart::new("Relationship");
    rel.push_attribute(("Id", "rId1"));
    rel.push_attribute(("Type", OFFICE_DOCUMENT_REL));
    rel.push_attribute(("Target", "xl/workbook.xml"));
    xml.write_event(Event::Empty(rel))?;

    xml.write_event(Event::End(BytesEnd::new("Relationships")))?;
    Ok(xml.into_inner())
}

fn workbook_xml(sheets: &[SheetData]) -> Result<Vec<u8>> {
    let mut xml = xml_writer()?;
    let mut root = BytesStart::new("workbook");
    root.push_attribute(("xmlns", SPREADSHEET_NS));
    root.push_attribute(("xmlns:r", RELATIONSHIPS_NS));
    xml.write_event(Event::Start(root))?;
    xml.write_event(Event::Start(BytesStart::new("sheets")))?;

    for (idx, sheet) in sheets.iter().enumerate() {
        let sheet_id = (idx + 1).to_string();
        let rel_id = format!("rId{}", idx + 1);
        let mut elem = BytesStart::new("sheet");
        elem.push_attribute(("name", sheet.name.as_str()));
        elem.push_attribute(("sheetId", sheet_id.as_str()));
        elem.push_attribute(("r:id", rel_id.as_str()));
        xml.write_event(Event::Empty(elem))?;
    }

    xml.write_event(Event::End(BytesEnd::new("sheets")))?;
    xml.write_event(Event::End(BytesEnd::new("workbook")))?;
    Ok(xml.into_inner())
}

fn workbook_rels_xml(sheet_count: usize) -> Result<Vec<u8>> {
    let mut xml = xml_writer()?;
    let mut root = BytesStart::new("Relationships");
    root.push_attribute(("xmlns", PACKAGE_RELATIONSHIPS_NS));
    xml.write_event(Event::Start(root))?;

    for idx in 1..=sheet_count {
        let rel_id = format!("rId{idx}");
        let target = format!("worksheets/sheet{idx}.xml");
        let mut rel = BytesStart::new("Relationship");
        rel.push_attribute(("Id", rel_id.as_str()));
        rel.push_attribute(("Type", WORKSHEET_REL));
        rel.push_attribute(("Target", target.as_str()));
        xml.write_event(Event::Empty(rel))?;
    }

    xml.write_event(Event::End(BytesEnd::new("Relationships")))?;
    Ok(xml.into_inner())
}

fn worksheet_xml(sheet: &SheetData) -> Result<Vec<u8>> {
    let mut xml = xml_writer()?;
    let mut root = BytesStart::new("worksheet");
    root.push_attribute(("xmlns", SPREADSHEET_NS));
    xml.write_event(Event::Start(root))?;
    xml.write_event(Event::Start(BytesStart::new("sheetData")))?;

    for (row_idx, row) in sheet.rows.iter().enumerate() {
        let row_number = row_idx + 1;
        let row_ref = row_number.to_string();
        let mut row_elem = BytesStart::new("row");
        row_elem.push_attribute(("r", row_ref.as_str()));
        xml.write_event(Event::Start(row_elem))?;
        for (col_idx, value) in row.iter().enumerate() {
            let cell_ref = format!("{}{row_number}", column_letters(col_idx));
            write_cell(&mut xml, &cell_ref, value)?;
        }
        xml.write_event(Event::End(BytesEnd::new("row")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("sheetData")))?;
    xml.write_event(Event::End(BytesEnd::new("worksheet")))?;
    Ok(xml.into_inner())
}

fn write_cell(xml: &mut Writer<Vec<u8>>, cell_ref: &str, value: &CellValue) -> Result<()> {
    let mut cell = BytesStart::new("c");
    cell.push_attribute(("r", cell_ref));
    match value {
        CellValue::Empty => return Ok(()),
        CellValue::Int(v) => {
            xml.write_event(Event::Start(cell))?;
            write_text_element(xml, "v", &v.to_string(), false)?;
        }
        CellValue::Float(v) => {
            xml.write_event(Event::Start(cell))?;
            write_text_element(xml, "v", &format_numeric(*v), false)?;
        }
        CellValue::Bool(v) => {
            cell.push_attribute(("t", "b"));
            xml.write_event(Event::Start(cell))?;
            write_text_element(xml, "v", if *v { "1" } else { "0" }, false)?;
        }
        CellValue::Text(text) => {
            cell.push_attribute(("t", "inlineStr"));
            xml.write_event(Event::Start(cell))?;
            xml.write_event(Event::Start(BytesStart::new("is")))?;
            write_text_element(xml, "t", &escape_control_chars(text), true)?;
            xml.write_event(Event::End(BytesEnd::new("is")))?;
        }
    }
    xml.write_event(Event::End(BytesEnd::new("c")))?;
    Ok(())
}

fn write_text_element(
    xml: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
    preserve_space: bool,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    if preserve_space {
        start.push_attribute(("xml:space", "preserve"));
    }
    xml.write_event(Event::Start(start))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Encodes characters XML 1.0 cannot carry as `_xHHHH_`.
///
/// A literal `_` that would otherwise read back as the start of an escape is
/// itself encoded as `_x005F_`.
fn escape_control_chars(text: &str) -> Cow<'_, str> {
    let needs_escape = |ch: char| {
        matches!(ch, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}')
            || matches!(ch, '\u{fffe}' | '\u{ffff}')
    };
    if !text.contains(needs_escape) && !text.contains("_x") {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for (idx, ch) in text.char_indices() {
        if needs_escape(ch) {
            out.push_str(&format!("_x{:04X}_", u32::from(ch)));
        } else if ch == '_' && starts_escape(&text[idx..]) {
            out.push_str("_x005F_");
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Whether `text` begins with an `_xHHHH_` sequence.
fn starts_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 7
        && bytes[1] == b'x'
        && bytes[2..6].iter().all(u8::is_ascii_hexdigit)
        && bytes[6] == b'_'
}

/// Spreadsheet column letters for a zero-based index (`0` is `A`, `26` is `AA`).
pub fn column_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}
