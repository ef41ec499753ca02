use super::aggregate::{cell_text, DataRow};
use std::collections::BTreeMap;

/// Фильтры по колонкам: заголовок -> подстрока (без учёта регистра)
///
/// Хранятся отдельно от результата обработки и никогда его не меняют.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilters {
    by_header: BTreeMap<String, String>,
}

impl ColumnFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one header's needle; other headers keep theirs. An empty needle
    /// removes the filter for that header.
    pub fn set(&mut self, header: impl Into<String>, needle: impl Into<String>) {
        let header = header.into();
        let needle = needle.into();
        if needle.is_empty() {
            self.by_header.remove(&header);
        } else {
            self.by_header.insert(header, needle);
        }
    }

    pub fn get(&self, header: &str) -> &str {
        self.by_header.get(header).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.by_header.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.by_header.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.by_header.len()
    }

    /// Проверка одной строки
    pub fn matches(&self, row: &DataRow) -> bool {
        self.by_header.iter().all(|(header, needle)| {
            cell_text(row, header)
                .to_lowercase()
                .contains(&needle.to_lowercase())
        })
    }

    /// Возвращает ссылки на строки, прошедшие все фильтры, в исходном порядке
    pub fn apply<'a>(&self, rows: &'a [DataRow]) -> Vec<&'a DataRow> {
        if !self.is_active() {
            return rows.iter().collect();
        }
        let needles: Vec<(&str, String)> = self
            .by_header
            .iter()
            .map(|(header, needle)| (header.as_str(), needle.to_lowercase()))
            .collect();

        rows.iter()
            .filter(|row| {
                needles
                    .iter()
                    .all(|(header, needle)| cell_text(row, header).to_lowercase().contains(needle))
            })
            .collect()
    }
}
