use crate::domain::a001_deal_submission::health::{run_probe, HealthProbe, HealthStatus};
use crate::shared::http::HttpDealApi;
use crate::shared::task::submit_task;
use leptos::prelude::*;

/// Статус бэкенда в шапке. Одна проверка на монтирование.
#[component]
#[allow(non_snake_case)]
pub fn HealthBadge() -> impl IntoView {
    let api = leptos::context::use_context::<HttpDealApi>().expect("HttpDealApi context not found");
    let probe = RwSignal::new(HealthProbe::new());

    let task = submit_task(async move {
        run_probe(&api, &probe).await;
    });
    let abort = task.abort_handle();
    on_cleanup(move || {
        abort.abort();
        probe.try_update(HealthProbe::deactivate);
    });

    let class = move || {
        let modifier = match probe.with(|p| p.status) {
            HealthStatus::Idle => "idle",
            HealthStatus::Loading => "loading",
            HealthStatus::Ok => "ok",
            HealthStatus::Error => "error",
        };
        format!("health-badge health-badge--{}", modifier)
    };

    view! {
        <span class=class title=move || probe.with(|p| p.message.clone())>
            <span class="health-badge__dot"></span>
            {move || probe.with(|p| p.message.clone())}
        </span>
    }
}
