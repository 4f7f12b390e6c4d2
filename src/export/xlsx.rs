// src/export/xlsx.rs

use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use unicode_width::UnicodeWidthStr;

use crate::errors::{AppError, AppResult};
use crate::export::model::{
    session_headers, session_to_row, withdrawal_headers, withdrawal_to_row, SessionExport,
    WithdrawalExport,
};

/// Build the two-sheet workbook ("Work Sessions" + "Withdrawals") with
/// styled headers, banded rows, and auto column widths.
pub(crate) fn write_workbook(
    sessions: &[SessionExport],
    withdrawals: &[WithdrawalExport],
) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let session_rows: Vec<Vec<String>> = sessions.iter().map(session_to_row).collect();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Work Sessions").map_err(to_export_error)?;
    write_sheet(sheet, &session_headers(), &session_rows)?;

    let withdrawal_rows: Vec<Vec<String>> = withdrawals.iter().map(withdrawal_to_row).collect();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Withdrawals").map_err(to_export_error)?;
    write_sheet(sheet, &withdrawal_headers(), &withdrawal_rows)?;

    workbook.save_to_buffer().map_err(to_export_error)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    headers: &[&'static str],
    rows: &[Vec<String>],
) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Data rows
    // ---------------------------
    for (row_index, row) in rows.iter().enumerate() {
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in row.iter().enumerate() {
            write_cell(worksheet, (row_index + 1) as u32, col as u16, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (col, width) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    Ok(())
}

/// Write one cell, as a right-aligned number when the value parses as one.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    bg: Color,
) -> AppResult<()> {
    if let Ok(num) = value.parse::<f64>() {
        let fmt = Format::new()
            .set_align(FormatAlign::Right)
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(row, col, value, &fmt)
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
