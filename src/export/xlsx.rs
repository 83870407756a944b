// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{ColumnKind, column_kinds, entry_to_row, get_headers};
use crate::export::{EntryExport, notify_export_success};
use crate::sheet::serial::date_to_serial_number;
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;
use chrono::Timelike;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with styling and auto-sized columns.
pub(crate) fn export_xlsx(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if entries.is_empty() {
        worksheet.write(0, 0, "No data available")?;
        workbook.save(path)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();
    let kinds = column_kinds();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, entry) in entries.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in entry_to_row(entry).iter().enumerate() {
            let kind = kinds.get(col).copied().unwrap_or(ColumnKind::Text);
            write_xlsx_cell(worksheet, row, col as u16, value, kind, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell as a spreadsheet date/time when the column calls for it,
/// falling back to text when the value does not parse.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    kind: ColumnKind,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let numeric = match kind {
        ColumnKind::Date => parse_date(s).map(|d| ("dd.mm.yyyy", date_to_serial_number(d))),
        ColumnKind::Clock | ColumnKind::Duration => parse_time(s).map(|t| {
            let fraction = t.num_seconds_from_midnight() as f64 / 86400.0;
            let fmt = if kind == ColumnKind::Clock { "hh:mm" } else { "[h]:mm" };
            (fmt, fraction)
        }),
        ColumnKind::Text => None,
    };

    match numeric {
        Some((num_format, value)) => {
            let fmt = base.set_num_format(num_format).set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, value, &fmt)?;
        }
        None => {
            worksheet.write_with_format(row, col, s, &base)?;
        }
    }

    Ok(())
}
