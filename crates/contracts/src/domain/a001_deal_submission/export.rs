//! CSV rendering of the (filtered) standardized rows for local export.

use super::aggregate::{cell_text, DataRow};

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    // Если ячейка содержит разделитель, кавычки или перевод строки, оборачиваем в кавычки
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

/// Собирает CSV: строка заголовков, затем строки данных в порядке заголовков
pub fn rows_to_csv<'a, I>(headers: &[String], rows: I) -> String
where
    I: IntoIterator<Item = &'a DataRow>,
{
    let mut csv_content = String::new();

    let header_line: Vec<String> = headers.iter().map(|h| escape_csv_cell(h)).collect();
    csv_content.push_str(&header_line.join(","));
    csv_content.push('\n');

    for row in rows {
        let line: Vec<String> = headers
            .iter()
            .map(|h| escape_csv_cell(&cell_text(row, h)))
            .collect();
        csv_content.push_str(&line.join(","));
        csv_content.push('\n');
    }

    csv_content
}
