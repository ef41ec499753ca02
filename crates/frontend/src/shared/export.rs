/// Сохранение файлов в браузере: архив выгрузки и CSV отфильтрованных строк
use crate::domain::a001_deal_submission::api::DownloadSink;
use chrono::{DateTime, Local};
use contracts::domain::a001_deal_submission::{rows_to_csv, DataRow};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Скачивание через временную ссылку `<a download>`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownloads;

impl DownloadSink for BrowserDownloads {
    fn save(&self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
        let blob = create_bytes_blob(bytes, mime)?;
        download_blob(&blob, filename)
    }
}

/// Имя файла локальной выгрузки: `standardized_data_filtered_YYYYMMDD_HHMMSS.csv`
pub fn filtered_csv_filename(at: DateTime<Local>) -> String {
    format!(
        "standardized_data_filtered_{}.csv",
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Сохраняет текущие отфильтрованные строки без обращения к серверу.
/// Возвращает имя сохранённого файла.
pub fn export_filtered_csv(headers: &[String], rows: &[&DataRow]) -> Result<String, String> {
    let content = rows_to_csv(headers, rows.iter().copied());
    let filename = filtered_csv_filename(Local::now());
    BrowserDownloads.save(&filename, CSV_MIME, content.as_bytes())?;
    log::info!("saved {} ({} rows)", filename, rows.len());
    Ok(filename)
}

fn create_bytes_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    // Освобождаем URL
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
