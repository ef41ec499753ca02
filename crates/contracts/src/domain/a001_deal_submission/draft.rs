use thiserror::Error;

/// Ошибки локальной валидации: до сети не доходят
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a company")]
    MissingCompany,

    #[error("Please enter a deal name")]
    MissingDealName,

    #[error("Please select a file")]
    MissingFile,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Файл, выбранный пользователем, уже прочитанный в память
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Черновик загрузки: то, что пользователь ввёл в форму
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub company: String,
    pub deal_name: String,
    pub file: Option<UploadFile>,
}

/// Проверенный набор полей, готовый к отправке
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessFileRequest {
    pub company: String,
    pub deal_name: String,
    pub file: UploadFile,
}

impl UploadDraft {
    /// Checks fields in form order; the first missing one wins.
    pub fn validate(&self) -> Result<ProcessFileRequest, ValidationError> {
        let company = self.company.trim();
        if company.is_empty() {
            return Err(ValidationError::MissingCompany);
        }
        let deal_name = self.deal_name.trim();
        if deal_name.is_empty() {
            return Err(ValidationError::MissingDealName);
        }
        let file = self.file.as_ref().ok_or(ValidationError::MissingFile)?;

        Ok(ProcessFileRequest {
            company: company.to_string(),
            deal_name: deal_name.to_string(),
            file: file.clone(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.company.is_empty() && self.deal_name.is_empty() && self.file.is_none()
    }
}

/// Минимальная проверка адреса получателя (нужен символ `@`)
pub fn validate_email(recipient: &str) -> Result<String, ValidationError> {
    let trimmed = recipient.trim();
    if trimmed.contains('@') {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}
