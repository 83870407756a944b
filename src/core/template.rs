//! Blank year workbook in the layout the loader and writer expect.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::sheet::serial::date_to_serial_number;
use crate::sheet::{SheetLayout, cell_ref, month_sheet_names};
use crate::utils::date::{all_days_of_month, is_weekend, weekday_label};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use tracing::info;

const MONTH_NAMES: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober",
    "November", "Dezember",
];

const COLUMN_TITLES: [&str; 13] = [
    "Datum",
    "Tag",
    "Beginn",
    "Ende",
    "Pause",
    "Projekt-Nr.",
    "Projekt",
    "Kunde",
    "Tätigkeit",
    "Stunden",
    "Urlaub",
    "Krank",
    "Bemerkung",
];

/// Rows below the last day that the overview sums still cover, so entries
/// added later stay inside the summed range.
const OVERVIEW_HEADROOM: u32 = 60;

pub struct TemplateLogic;

impl TemplateLogic {
    pub fn create(path: &Path, year: i32, cfg: &Config) -> AppResult<()> {
        if !(1900..=9999).contains(&year) {
            return Err(AppError::Other(format!("year out of range: {year}")));
        }

        let layout = cfg.layout();
        let mut workbook = Workbook::new();

        for (i, name) in month_sheet_names().iter().enumerate() {
            let month = i as u32 + 1;
            let sheet = workbook.add_worksheet();
            sheet.set_name(name)?;
            write_month_sheet(sheet, &layout, year, month)?;
        }

        let projects = workbook.add_worksheet();
        projects.set_name(&cfg.projects_sheet)?;
        write_projects_sheet(projects, cfg.projects_header_rows)?;

        let overview = workbook.add_worksheet();
        overview.set_name(&cfg.overview_sheet)?;
        write_overview_sheet(overview, &layout, year, &cfg.overview())?;
        overview.set_active(true);

        workbook.save(path)?;
        info!(file = %path.display(), year, "template written");
        Ok(())
    }
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD9E1F2))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_month_sheet(
    sheet: &mut Worksheet,
    layout: &SheetLayout,
    year: i32,
    month: u32,
) -> AppResult<()> {
    let title = Format::new().set_bold().set_font_size(14);
    let date_fmt = Format::new().set_num_format("dd.mm.yyyy");
    let weekend_fmt = Format::new()
        .set_num_format("dd.mm.yyyy")
        .set_background_color(Color::RGB(0xEDEDED))
        .set_pattern(FormatPattern::Solid);
    // zero stays invisible so blank days look blank
    let hours_fmt = Format::new().set_num_format("[h]:mm;;");

    sheet.write_string_with_format(
        0,
        0,
        format!("Arbeitszeitnachweis {} {year}", MONTH_NAMES[month as usize - 1]),
        &title,
    )?;

    let header_row = layout.start_row.saturating_sub(1);
    let header = header_format();
    for (col, text) in COLUMN_TITLES.iter().enumerate() {
        sheet.write_string_with_format(header_row, col as u16, *text, &header)?;
    }

    let col = |c: u32| c as u16;
    let worked_col = layout.col_hours;

    for (i, date) in all_days_of_month(year, month).into_iter().enumerate() {
        let row = layout.start_row + i as u32;
        let r = row + 1;

        let fmt = if is_weekend(date) { &weekend_fmt } else { &date_fmt };
        sheet.write_number_with_format(row, col(layout.col_date), date_to_serial_number(date), fmt)?;
        sheet.write_string(row, col(layout.col_day), weekday_label(date))?;

        let start = cell_ref(layout.col_start, r);
        let end = cell_ref(layout.col_end, r);
        let pause = cell_ref(layout.col_pause, r);
        sheet.write_formula_with_format(
            row,
            col(worked_col),
            format!("=IF({end}>{start},{end}-{start}-{pause},0)").as_str(),
            &hours_fmt,
        )?;
        // vacation and sickness start at zero
        sheet.write_number_with_format(row, col(worked_col + 1), 0.0, &hours_fmt)?;
        sheet.write_number_with_format(row, col(worked_col + 2), 0.0, &hours_fmt)?;
    }

    sheet.set_column_width(col(layout.col_date), 12)?;
    sheet.set_column_width(col(layout.col_description), 40)?;
    sheet.set_freeze_panes(layout.start_row, 0)?;
    Ok(())
}

fn write_projects_sheet(sheet: &mut Worksheet, header_rows: usize) -> AppResult<()> {
    let title = Format::new().set_bold().set_font_size(14);
    sheet.write_string_with_format(0, 0, "Projektnummern", &title)?;

    let header = header_format();
    let row = header_rows.saturating_sub(1) as u32;
    for (col, text) in ["Projekt-Nr.", "Projekt", "Kunde"].iter().enumerate() {
        sheet.write_string_with_format(row, col as u16, *text, &header)?;
    }

    sheet.set_column_width(1, 30)?;
    sheet.set_column_width(2, 30)?;
    Ok(())
}

fn write_overview_sheet(
    sheet: &mut Worksheet,
    layout: &SheetLayout,
    year: i32,
    overview: &crate::sheet::OverviewLayout,
) -> AppResult<()> {
    let title = Format::new().set_bold().set_font_size(14);
    let hours_fmt = Format::new().set_num_format("[h]:mm");
    sheet.write_string_with_format(0, 0, format!("Gesamtübersicht {year}"), &title)?;

    let header = header_format();
    let header_row = overview.first_row.saturating_sub(2);
    for (col, text) in [(4u16, "Monat"), (5, "Stunden"), (6, "Urlaub"), (7, "Krank")] {
        sheet.write_string_with_format(header_row, col, text, &header)?;
    }

    let first = layout.first_data_row();
    let last = layout.start_row + 31 + OVERVIEW_HEADROOM;
    let summed = [layout.col_hours, layout.col_hours + 1, layout.col_hours + 2];

    for (i, name) in month_sheet_names().iter().enumerate() {
        let row = overview.first_row - 1 + i as u32;
        if row + 1 > overview.last_row {
            break;
        }

        sheet.write_string(row, 4, MONTH_NAMES[i])?;
        for (j, src) in summed.iter().enumerate() {
            let formula = format!(
                "=SUM('{name}'!{}:{})",
                cell_ref(*src, first),
                cell_ref(*src, last)
            );
            sheet.write_formula_with_format(row, 5 + j as u16, formula.as_str(), &hours_fmt)?;
        }
    }

    sheet.set_column_width(4, 12)?;
    Ok(())
}
