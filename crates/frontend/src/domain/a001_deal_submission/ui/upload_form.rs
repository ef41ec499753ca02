use super::view_model::DealSessionVm;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Форма загрузки: компания, название сделки, файл
#[component]
#[allow(non_snake_case)]
pub fn UploadForm(vm: DealSessionVm) -> impl IntoView {
    let state = vm.state;

    let companies = move || state.with(|s| s.companies.clone());
    let processing = Signal::derive(move || state.with(|s| s.processing));
    let busy = Signal::derive(move || state.with(|s| s.processing || s.reading_file));
    let file_label = move || {
        state.with(|s| {
            if s.reading_file {
                return "Reading file...".to_string();
            }
            s.draft
                .file
                .as_ref()
                .map(|f| format!("{} ({:.1} KB)", f.name, f.size() as f64 / 1024.0))
                .unwrap_or_else(|| "No file selected".to_string())
        })
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            let _ = vm.select_file(file);
        }
    };

    view! {
        <div class="upload-form">
            <label class="upload-form__field">
                <span class="upload-form__label">"Company"</span>
                <select
                    class="upload-form__input"
                    prop:value=move || state.with(|s| s.draft.company.clone())
                    prop:disabled=move || state.with(|s| s.companies_loading || s.processing)
                    on:change=move |ev| {
                        let company = event_target_value(&ev);
                        state.update(|s| s.set_company(company));
                    }
                >
                    <option value="">
                        {move || if state.with(|s| s.companies_loading) {
                            "Loading companies..."
                        } else {
                            "Select a company"
                        }}
                    </option>
                    <For each=companies key=|c| c.clone() let:company>
                        <option value=company.clone()>{company.clone()}</option>
                    </For>
                </select>
            </label>

            <label class="upload-form__field">
                <span class="upload-form__label">"Deal Name"</span>
                <input
                    class="upload-form__input"
                    type="text"
                    placeholder="e.g. Q1 Promo"
                    prop:value=move || state.with(|s| s.draft.deal_name.clone())
                    prop:disabled=move || state.with(|s| s.processing)
                    on:input=move |ev| {
                        let name = event_target_value(&ev);
                        state.update(|s| s.set_deal_name(name));
                    }
                />
            </label>

            <label class="upload-form__field">
                <span class="upload-form__label">"Deal File"</span>
                <input
                    class="upload-form__input"
                    type="file"
                    accept=".xlsx,.xls,.csv"
                    prop:disabled=move || state.with(|s| s.processing)
                    on:change=on_file_change
                />
                <span class="upload-form__hint">{file_label}</span>
            </label>

            <Flex align=FlexAlign::Center style="gap: 12px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=busy
                    on_click=move |_| {
                        let _ = vm.submit();
                    }
                >
                    {move || if processing.get() { "Processing..." } else { "Process File" }}
                </Button>
                <Show when=move || processing.get()>
                    <Spinner />
                </Show>
            </Flex>
        </div>
    }
}
