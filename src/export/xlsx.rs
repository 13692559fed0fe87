use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, task_to_row};
use crate::export::{TaskExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with styling and auto-sized columns.
pub(crate) fn export_xlsx(tasks: &[TaskExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if tasks.is_empty() {
        worksheet
            .write(0, 0, "No tasks available")
            .map_err(to_export_error)?;
        workbook.save(path_str(path)?).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x37474F))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xF1F5F4);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, task) in tasks.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let values = task_to_row(task);

        for (col, value) in values.iter().enumerate() {
            let v = value.as_str();

            let mut fmt = Format::new()
                .set_background_color(band_color)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin);

            // ids are genuine numbers; everything else stays text
            if col == 0 {
                if let Ok(num) = v.parse::<f64>() {
                    fmt = fmt.set_align(FormatAlign::Right);
                    worksheet
                        .write_with_format(row, col as u16, num, &fmt)
                        .map_err(to_export_error)?;
                    col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
                    continue;
                }
            }

            worksheet
                .write_with_format(row, col as u16, v, &fmt)
                .map_err(to_export_error)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))
}
