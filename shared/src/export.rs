//! Plain-text export of the crop table
//!
//! Columns are padded to their widest cell and separated by ` | `, with a
//! dashed rule under the header. The text starts with a byte-order mark so
//! that editors pick UTF-8 for the Cyrillic content.

use crate::models::CropTableRow;

/// File name offered for the exported table
pub const EXPORT_FILE_NAME: &str = "harvest_data.txt";

const BOM: char = '\u{feff}';

const HEADER_NAME: &str = "Назва культури";
const HEADER_START: &str = "Початок збору";
const HEADER_END: &str = "Кінець збору";
const HEADER_DURATION: &str = "Тривалість (днів)";
const HEADER_PERIOD_YIELD: &str = "Збір за період, т";
const HEADER_TOTAL_YIELD: &str = "Валовий збір (т)";

/// Header cells; the period column only appears when a month is selected
pub fn export_headers(month_selected: bool) -> Vec<&'static str> {
    let mut headers = vec![HEADER_NAME, HEADER_START, HEADER_END, HEADER_DURATION];
    if month_selected {
        headers.push(HEADER_PERIOD_YIELD);
    }
    headers.push(HEADER_TOTAL_YIELD);
    headers
}

/// One decimal, exact ties rounded away from zero (`0.25` gives `0.3`)
fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

fn row_cells(row: &CropTableRow, month_selected: bool) -> Vec<String> {
    let crop = &row.crop;
    let mut cells = vec![
        crop.crop.name.clone(),
        crop.crop.start_date.clone(),
        crop.crop.end_date.clone(),
        crop.harvest_duration.to_string(),
    ];
    if month_selected {
        cells.push(format_one_decimal(row.yield_for_period));
    }
    cells.push(crop.crop.yield_tonnes.to_string());
    cells
}

/// Render the table rows, in the order given, as export text
pub fn export_table(rows: &[CropTableRow], month_selected: bool) -> String {
    let header: Vec<String> = export_headers(month_selected)
        .into_iter()
        .map(str::to_string)
        .collect();
    let data: Vec<Vec<String>> = rows.iter().map(|row| row_cells(row, month_selected)).collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(data.iter())
                .map(|cells| cells[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let separator = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-|-");

    let mut lines = Vec::with_capacity(data.len() + 2);
    lines.push(format_row(&header));
    lines.push(separator);
    lines.extend(data.iter().map(|cells| format_row(cells)));

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&lines.join("\n"));
    out
}
