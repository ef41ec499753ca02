//! Deal Submission - result view (tabs Summary / Data / Report / Chat)

use super::chat_panel::ChatPanel;
use super::view_model::DealSessionVm;
use crate::domain::a001_deal_submission::state::ResultTab;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ResultView(vm: DealSessionVm) -> impl IntoView {
    let state = vm.state;
    let active_tab = move || state.with(|s| s.active_tab);

    view! {
        <div class="result-view">
            <div class="result-view__tabs">
                {ResultTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if active_tab() == tab {
                                        "result-view__tab result-view__tab--active"
                                    } else {
                                        "result-view__tab"
                                    }
                                }
                                on:click=move |_| vm.set_tab(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="result-view__body">
                {move || match active_tab() {
                    ResultTab::Summary => view! { <SummaryTab vm=vm /> }.into_any(),
                    ResultTab::Data => view! { <DataTab vm=vm /> }.into_any(),
                    ResultTab::Report => view! { <ReportTab vm=vm /> }.into_any(),
                    ResultTab::Chat => view! { <ChatPanel vm=vm /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn SummaryTab(vm: DealSessionVm) -> impl IntoView {
    let state = vm.state;
    let emailing = Signal::derive(move || state.with(|s| s.emailing));
    let downloading = Signal::derive(move || state.with(|s| s.downloading));

    let deal_fields = move || {
        state.with(|s| {
            s.result
                .as_ref()
                .and_then(|r| r.deal_summary.as_ref())
                .map(|summary| {
                    summary
                        .fields()
                        .iter()
                        .map(|(label, value)| (label.to_string(), value.to_string()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };
    let html_summary = move || {
        state.with(|s| {
            s.result
                .as_ref()
                .map(|r| r.html_summary.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="summary-tab">
            <dl class="deal-summary">
                {move || {
                    deal_fields()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt class="deal-summary__label">{label}</dt>
                                <dd class="deal-summary__value">{value}</dd>
                            }
                        })
                        .collect_view()
                }}
            </dl>

            <div class="summary-tab__html" inner_html=html_summary></div>

            <Flex align=FlexAlign::Center style="gap: 8px; margin-top: 16px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=downloading
                    on_click=move |_| {
                        let _ = vm.download();
                    }
                >
                    {move || if downloading.get() { "Downloading..." } else { "Download Export" }}
                </Button>

                <input
                    class="summary-tab__email"
                    type="email"
                    placeholder="recipient@example.com"
                    prop:value=move || state.with(|s| s.email_recipient.clone())
                    on:input=move |ev| {
                        let recipient = event_target_value(&ev);
                        state.update(|s| s.set_email_recipient(recipient));
                    }
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=emailing
                    on_click=move |_| {
                        let _ = vm.email_summary();
                    }
                >
                    {move || if emailing.get() { "Sending..." } else { "Email Summary" }}
                </Button>
            </Flex>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn DataTab(vm: DealSessionVm) -> impl IntoView {
    let state = vm.state;

    let headers = Memo::new(move |_| {
        state.with(|s| {
            s.result
                .as_ref()
                .map(|r| r.output_headers.clone())
                .unwrap_or_default()
        })
    });
    let table = Memo::new(move |_| state.with(|s| s.table_view()));
    let row_counter = move || table.with(|t| format!("{} of {} rows", t.rows.len(), t.total));
    let has_filters = Signal::derive(move || state.with(|s| s.filters.is_active()));
    let indexed_headers = move || headers.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="data-tab">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 8px;">
                <span class="data-tab__counter">{row_counter}</span>
                <Flex style="gap: 8px;">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(move || !has_filters.get())
                        on_click=move |_| state.update(|s| s.clear_filters())
                    >
                        "Clear Filters"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.export_filtered()
                    >
                        "Export CSV"
                    </Button>
                </Flex>
            </Flex>

            <div class="data-tab__scroll">
                <table class="data-table">
                    <thead>
                        <tr>
                            <For each=indexed_headers key=|(i, _)| *i let:column>
                                <th>{column.1.clone()}</th>
                            </For>
                        </tr>
                        <tr class="data-table__filters">
                            <For each=indexed_headers key=|(i, _)| *i let:column>
                                {
                                    let header = column.1;
                                    let shown = header.clone();
                                    view! {
                                        <th>
                                            <input
                                                class="data-table__filter"
                                                type="text"
                                                placeholder="Filter..."
                                                prop:value=move || state.with(|s| s.filters.get(&shown).to_string())
                                                on:input=move |ev| {
                                                    let needle = event_target_value(&ev);
                                                    state.update(|s| s.set_filter(header.clone(), needle));
                                                }
                                            />
                                        </th>
                                    }
                                }
                            </For>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            table
                                .get()
                                .rows
                                .into_iter()
                                .map(|cells| {
                                    view! {
                                        <tr>
                                            {cells
                                                .into_iter()
                                                .map(|cell| view! { <td>{cell}</td> })
                                                .collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ReportTab(vm: DealSessionVm) -> impl IntoView {
    let text = move || {
        vm.state.with(|s| {
            s.result
                .as_ref()
                .map(|r| r.text_summary.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <pre class="report-tab">{text}</pre>
    }
}
