use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Одна строка стандартизированных данных: значения по заголовкам колонок
pub type DataRow = Map<String, Value>;

/// Заголовок сделки, извлечённый сервером из файла
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealSummary {
    #[serde(default)]
    pub deal_name: String,
    #[serde(default)]
    pub vendor_id: String,
    #[serde(default)]
    pub deal_start_date: String,
    #[serde(default)]
    pub deal_end_date: String,
    #[serde(default)]
    pub deal_cost_date: String,
}

impl DealSummary {
    /// Пары (подпись, значение) в порядке отображения
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Deal Name", self.deal_name.as_str()),
            ("Vendor", self.vendor_id.as_str()),
            ("Start Date", self.deal_start_date.as_str()),
            ("End Date", self.deal_end_date.as_str()),
            ("Cost Date", self.deal_cost_date.as_str()),
        ]
    }
}

/// Result of a successful `/api/process-file` call.
///
/// Built once from the response body and never edited afterwards: the
/// session replaces it wholesale on a new submission or drops it on reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub output_headers: Vec<String>,
    pub standardized_data: Vec<DataRow>,
    #[serde(default)]
    pub deal_summary: Option<DealSummary>,
    #[serde(default)]
    pub html_summary: String,
    #[serde(default)]
    pub text_summary: String,
    #[serde(default)]
    pub company: String,
}

impl ProcessingResult {
    pub fn row_count(&self) -> usize {
        self.standardized_data.len()
    }
}

/// Текстовое представление ячейки для фильтрации, таблицы и CSV
pub fn cell_text(row: &DataRow, header: &str) -> String {
    match row.get(header) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
