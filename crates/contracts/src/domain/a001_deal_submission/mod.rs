pub mod aggregate;
pub mod chat;
pub mod draft;
pub mod export;
pub mod filter;

pub use aggregate::{cell_text, DataRow, DealSummary, ProcessingResult};
pub use chat::{ChatRole, ChatTranscript, ChatTurn, TranscriptError};
pub use draft::{validate_email, ProcessFileRequest, UploadDraft, UploadFile, ValidationError};
pub use export::rows_to_csv;
pub use filter::ColumnFilters;
