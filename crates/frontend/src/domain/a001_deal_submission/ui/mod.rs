//! Deal Submission UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: DealSessionVm (session signal + task submission)
//! - page.rs: DealSubmissionPage, switches between form and result
//! - upload_form.rs / result_view.rs / chat_panel.rs: page parts
//! - health_badge.rs: backend status for the top header

mod chat_panel;
mod health_badge;
mod page;
mod result_view;
mod upload_form;
mod view_model;

pub use health_badge::HealthBadge;
pub use page::DealSubmissionPage;
pub use view_model::DealSessionVm;
