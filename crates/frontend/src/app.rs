use crate::domain::a001_deal_submission::ui::DealSubmissionPage;
use crate::layout::Shell;
use crate::shared::api_utils::resolve_api_config;
use crate::shared::http::HttpDealApi;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Configuration is resolved once and shared through context.
    let api = HttpDealApi::new(resolve_api_config());
    provide_context(api);

    view! {
        <ConfigProvider>
            <Shell>
                <DealSubmissionPage />
            </Shell>
        </ConfigProvider>
    }
}
