use super::result_view::ResultView;
use super::upload_form::UploadForm;
use super::view_model::DealSessionVm;
use crate::domain::a001_deal_submission::state::NoticeKind;
use crate::shared::http::HttpDealApi;
use leptos::prelude::*;
use thaw::*;

/// Страница подачи сделки: форма до обработки, результат после
#[component]
#[allow(non_snake_case)]
pub fn DealSubmissionPage() -> impl IntoView {
    let api = leptos::context::use_context::<HttpDealApi>().expect("HttpDealApi context not found");
    let vm = DealSessionVm::new(api);
    let state = vm.state;

    let companies_task = vm.load_companies();
    let abort = companies_task.abort_handle();
    on_cleanup(move || abort.abort());

    let has_result = move || state.with(|s| s.result.is_some());
    let subtitle = move || {
        state.with(|s| {
            s.result
                .as_ref()
                .map(|r| format!("{} - {} rows", r.company, r.row_count()))
                .unwrap_or_else(|| "Upload a deal file to standardize it".to_string())
        })
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__text">
                    <h1 class="page-header__title">"Deal Submission"</h1>
                    <div class="page-header__subtitle">{subtitle}</div>
                </div>
                <Show when=has_result>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.reset()>
                        "New Submission"
                    </Button>
                </Show>
            </div>

            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|e| {
                        view! {
                            <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                                <span style="color: var(--color-error);">{e}</span>
                            </div>
                        }
                    })
            }}

            {move || {
                state
                    .with(|s| s.notice.clone())
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "notice notice--success",
                            NoticeKind::Error => "notice notice--error",
                        };
                        view! {
                            <div class=class>
                                <span>{notice.text}</span>
                                <button
                                    class="notice__close"
                                    on:click=move |_| state.update(|s| s.dismiss_notice())
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}

            <Show
                when=has_result
                fallback=move || view! { <UploadForm vm=vm /> }
            >
                <ResultView vm=vm />
            </Show>
        </div>
    }
}
