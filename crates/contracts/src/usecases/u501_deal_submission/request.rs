use crate::domain::a001_deal_submission::{DataRow, DealSummary, ProcessingResult};
use serde::{Deserialize, Serialize};

/// Запрос на выгрузку архива (`POST /api/download-csv`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub headers: Vec<String>,
    pub rows: Vec<DataRow>,
    pub deal_summary: Option<DealSummary>,
}

impl DownloadRequest {
    pub fn from_result(result: &ProcessingResult) -> Self {
        Self {
            headers: result.output_headers.clone(),
            rows: result.standardized_data.clone(),
            deal_summary: result.deal_summary.clone(),
        }
    }
}

/// Запрос на отправку сводки по почте (`POST /api/email-summary`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub recipient_email: String,
    pub html_summary: String,
    pub text_summary: String,
    pub deal_summary: Option<DealSummary>,
    pub standardized_data: Vec<DataRow>,
    pub output_headers: Vec<String>,
}

impl EmailRequest {
    pub fn from_result(recipient_email: impl Into<String>, result: &ProcessingResult) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            html_summary: result.html_summary.clone(),
            text_summary: result.text_summary.clone(),
            deal_summary: result.deal_summary.clone(),
            standardized_data: result.standardized_data.clone(),
            output_headers: result.output_headers.clone(),
        }
    }
}

/// Вопрос к чату; контекст: весь текущий результат
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub data_context: Vec<DataRow>,
    pub output_headers: Vec<String>,
    pub company: String,
}

impl ChatRequest {
    pub fn from_result(message: impl Into<String>, result: &ProcessingResult) -> Self {
        Self {
            message: message.into(),
            data_context: result.standardized_data.clone(),
            output_headers: result.output_headers.clone(),
            company: result.company.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result() -> ProcessingResult {
        serde_json::from_value(json!({
            "output_headers": ["SKU", "Cost"],
            "standardized_data": [{"SKU": "123", "Cost": "4.50"}],
            "deal_summary": {
                "deal_name": "Q1 Promo",
                "vendor_id": "V-77",
                "deal_start_date": "01/06/2025",
                "deal_end_date": "01/27/2025",
                "deal_cost_date": "12/30/2024"
            },
            "html_summary": "<h1>Q1</h1>",
            "text_summary": "Q1",
            "company": "AcmeCo"
        }))
        .unwrap()
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let body = serde_json::to_value(ChatRequest::from_result("How many items?", &result())).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "How many items?",
                "data_context": [{"SKU": "123", "Cost": "4.50"}],
                "output_headers": ["SKU", "Cost"],
                "company": "AcmeCo"
            })
        );
    }

    #[test]
    fn test_download_request_wire_shape() {
        let body = serde_json::to_value(DownloadRequest::from_result(&result())).unwrap();
        assert_eq!(body["headers"], json!(["SKU", "Cost"]));
        assert_eq!(body["rows"][0]["SKU"], json!("123"));
        assert_eq!(body["deal_summary"]["vendor_id"], json!("V-77"));
    }

    #[test]
    fn test_email_request_carries_summaries() {
        let req = EmailRequest::from_result("buyer@acme.co", &result());
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["recipient_email"], json!("buyer@acme.co"));
        assert_eq!(body["html_summary"], json!("<h1>Q1</h1>"));
        assert_eq!(body["text_summary"], json!("Q1"));
        assert_eq!(body["output_headers"], json!(["SKU", "Cost"]));
        assert_eq!(body["standardized_data"].as_array().map(Vec::len), Some(1));
    }
}
