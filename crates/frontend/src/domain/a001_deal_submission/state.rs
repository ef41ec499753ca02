//! Deal Submission - session state
//!
//! Plain data plus synchronous transitions. Every network action is split in
//! a `begin_*` half (checks, sets the busy flag, hands out a [`Ticket`] and
//! the request) and a `finish_*` half (applies the outcome unless the ticket
//! went stale because the session was reset in between).

use contracts::domain::a001_deal_submission::{
    cell_text, validate_email, ChatTranscript, ColumnFilters, DataRow, ProcessFileRequest,
    ProcessingResult, UploadDraft, UploadFile, ValidationError,
};
use contracts::shared::ApiError;
use contracts::usecases::u501_deal_submission::{
    ChatRequest, ChatResponse, CompaniesResponse, DownloadRequest, EmailRequest, EmailResponse,
};

pub const PROCESS_FALLBACK: &str = "Error processing file";
pub const DOWNLOAD_FALLBACK: &str = "Error downloading file";
pub const EMAIL_FALLBACK: &str = "Failed to send email";
pub const CHAT_FALLBACK: &str = "Error sending message";
pub const COMPANIES_FALLBACK: &str = "Failed to load companies";
pub const FILE_READ_FALLBACK: &str = "Could not read file";
pub const EXPORT_FALLBACK: &str = "Error exporting CSV";

/// Вкладки просмотра результата
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Summary,
    Data,
    Report,
    Chat,
}

impl ResultTab {
    pub const ALL: [ResultTab; 4] = [
        ResultTab::Summary,
        ResultTab::Data,
        ResultTab::Report,
        ResultTab::Chat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResultTab::Summary => "Summary",
            ResultTab::Data => "Data",
            ResultTab::Report => "Report",
            ResultTab::Chat => "Chat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Уведомление пользователю (канал для результатов отправки email)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Эпоха сессии на момент старта операции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Чтение выбранного файла: эпоха сессии и номер выбора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTicket {
    epoch: u64,
    selection: u64,
}

/// Отфильтрованная таблица, готовая к отрисовке
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub total: usize,
    pub rows: Vec<Vec<String>>,
}

/// Почему действие не было начато
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Такое же действие уже выполняется
    Busy,
    Invalid(ValidationError),
    NoResult,
    EmptyMessage,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub draft: UploadDraft,
    pub reading_file: bool,
    pub companies: Vec<String>,
    pub companies_loading: bool,
    pub processing: bool,
    pub result: Option<ProcessingResult>,
    pub error: Option<String>,
    pub notice: Option<Notice>,
    pub filters: ColumnFilters,
    pub active_tab: ResultTab,
    pub chat: ChatTranscript,
    pub chat_input: String,
    pub chat_loading: bool,
    pub downloading: bool,
    pub emailing: bool,
    pub email_recipient: String,
    epoch: u64,
    selection: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn ticket(&self) -> Ticket {
        Ticket(self.epoch)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.epoch
    }

    // ------------------------------------------------------------------
    // Upload form
    // ------------------------------------------------------------------

    pub fn set_company(&mut self, company: impl Into<String>) {
        self.draft.company = company.into();
    }

    pub fn set_deal_name(&mut self, deal_name: impl Into<String>) {
        self.draft.deal_name = deal_name.into();
    }

    /// Новый файл сбрасывает прежний результат и ошибку. Any read still
    /// in flight for an earlier selection becomes stale.
    pub fn select_file(&mut self, file: UploadFile) {
        self.selection = self.selection.wrapping_add(1);
        self.reading_file = false;
        self.draft.file = Some(file);
        self.result = None;
        self.error = None;
    }

    /// Starts reading a newly chosen file; only the latest read may land.
    pub fn begin_file_read(&mut self) -> FileTicket {
        self.selection = self.selection.wrapping_add(1);
        self.reading_file = true;
        FileTicket {
            epoch: self.epoch,
            selection: self.selection,
        }
    }

    pub fn finish_file_read(&mut self, ticket: FileTicket, outcome: Result<UploadFile, String>) -> bool {
        if ticket.epoch != self.epoch || ticket.selection != self.selection {
            return false;
        }
        match outcome {
            Ok(file) => self.select_file(file),
            Err(e) => {
                self.reading_file = false;
                self.error = Some(format!("{}: {}", FILE_READ_FALLBACK, e));
            }
        }
        true
    }

    pub fn begin_submit(&mut self) -> Result<(Ticket, ProcessFileRequest), Rejection> {
        if self.processing || self.reading_file {
            return Err(Rejection::Busy);
        }
        match self.draft.validate() {
            Ok(request) => {
                self.processing = true;
                self.error = None;
                Ok((self.ticket(), request))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(Rejection::Invalid(e))
            }
        }
    }

    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        outcome: Result<ProcessingResult, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.processing = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.active_tab = ResultTab::Summary;
            }
            Err(e) => self.error = Some(e.user_message(PROCESS_FALLBACK)),
        }
        true
    }

    /// Back to the pre-upload state. The company list survives; every
    /// in-flight completion started before the reset is discarded.
    pub fn reset(&mut self) {
        let companies = std::mem::take(&mut self.companies);
        let companies_loading = self.companies_loading;
        let epoch = self.epoch.wrapping_add(1);
        *self = Self {
            companies,
            companies_loading,
            epoch,
            ..Self::default()
        };
    }

    // ------------------------------------------------------------------
    // Company list
    // ------------------------------------------------------------------

    pub fn begin_companies(&mut self) -> bool {
        if self.companies_loading {
            return false;
        }
        self.companies_loading = true;
        true
    }

    pub fn finish_companies(&mut self, outcome: Result<CompaniesResponse, ApiError>) {
        self.companies_loading = false;
        match outcome {
            Ok(body) => self.companies = body.companies,
            Err(_) => {
                self.companies.clear();
                self.error = Some(COMPANIES_FALLBACK.to_string());
            }
        }
    }

    // ------------------------------------------------------------------
    // Result view
    // ------------------------------------------------------------------

    pub fn set_filter(&mut self, header: impl Into<String>, needle: impl Into<String>) {
        self.filters.set(header, needle);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn filtered_rows(&self) -> Vec<&DataRow> {
        match &self.result {
            Some(result) => self.filters.apply(&result.standardized_data),
            None => Vec::new(),
        }
    }

    /// Cells of the filtered rows in header order, plus the unfiltered count.
    pub fn table_view(&self) -> TableView {
        let Some(result) = &self.result else {
            return TableView::default();
        };
        let rows = self
            .filters
            .apply(&result.standardized_data)
            .into_iter()
            .map(|row| {
                result
                    .output_headers
                    .iter()
                    .map(|h| cell_text(row, h))
                    .collect()
            })
            .collect();
        TableView {
            total: result.row_count(),
            rows,
        }
    }

    /// Итог локальной выгрузки CSV; ошибка показывается пользователю
    pub fn finish_local_export(&mut self, outcome: Result<String, String>) {
        match outcome {
            Ok(filename) => log::info!("exported {}", filename),
            Err(e) => self.error = Some(format!("{}: {}", EXPORT_FALLBACK, e)),
        }
    }

    pub fn set_tab(&mut self, tab: ResultTab) {
        self.active_tab = tab;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ------------------------------------------------------------------
    // Export / email
    // ------------------------------------------------------------------

    pub fn begin_download(&mut self) -> Result<(Ticket, DownloadRequest), Rejection> {
        if self.downloading {
            return Err(Rejection::Busy);
        }
        let request = match &self.result {
            Some(result) => DownloadRequest::from_result(result),
            None => return Err(Rejection::NoResult),
        };
        self.downloading = true;
        Ok((self.ticket(), request))
    }

    pub fn finish_download(&mut self, ticket: Ticket, saved: bool) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.downloading = false;
        if !saved {
            self.error = Some(DOWNLOAD_FALLBACK.to_string());
        }
        true
    }

    pub fn set_email_recipient(&mut self, recipient: impl Into<String>) {
        self.email_recipient = recipient.into();
    }

    pub fn begin_email(&mut self, recipient: &str) -> Result<(Ticket, EmailRequest), Rejection> {
        if self.emailing {
            return Err(Rejection::Busy);
        }
        let recipient = match validate_email(recipient) {
            Ok(r) => r,
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                return Err(Rejection::Invalid(e));
            }
        };
        let request = match &self.result {
            Some(result) => EmailRequest::from_result(recipient, result),
            None => return Err(Rejection::NoResult),
        };
        self.emailing = true;
        self.notice = None;
        Ok((self.ticket(), request))
    }

    pub fn finish_email(&mut self, ticket: Ticket, outcome: Result<EmailResponse, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.emailing = false;
        self.notice = Some(match outcome {
            Ok(body) => Notice::success(body.message),
            Err(e) => Notice::error(e.user_message(EMAIL_FALLBACK)),
        });
        true
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    pub fn set_chat_input(&mut self, text: impl Into<String>) {
        self.chat_input = text.into();
    }

    /// Overlapping sends are rejected, not queued.
    /// The message is sent as typed; trimming only decides whether it is blank.
    pub fn begin_chat(&mut self, message: &str) -> Result<(Ticket, ChatRequest), Rejection> {
        if message.trim().is_empty() {
            return Err(Rejection::EmptyMessage);
        }
        if self.chat_loading {
            return Err(Rejection::Busy);
        }
        let request = match &self.result {
            Some(result) => ChatRequest::from_result(message, result),
            None => return Err(Rejection::NoResult),
        };
        self.chat.push_user(message);
        self.chat_input.clear();
        self.chat_loading = true;
        self.error = None;
        Ok((self.ticket(), request))
    }

    pub fn finish_chat(&mut self, ticket: Ticket, outcome: Result<ChatResponse, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.chat_loading = false;
        match outcome {
            Ok(body) => {
                if let Err(e) = self.chat.push_assistant(body.response) {
                    log::warn!("chat reply dropped: {}", e);
                }
            }
            Err(_) => self.error = Some(CHAT_FALLBACK.to_string()),
        }
        true
    }
}
