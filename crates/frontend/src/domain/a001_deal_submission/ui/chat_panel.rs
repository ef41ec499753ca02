use super::view_model::DealSessionVm;
use contracts::domain::a001_deal_submission::{ChatRole, ChatTurn};
use leptos::prelude::*;
use thaw::*;

/// Вопросы по загруженному результату
#[component]
#[allow(non_snake_case)]
pub fn ChatPanel(vm: DealSessionVm) -> impl IntoView {
    let state = vm.state;
    let sending = Signal::derive(move || state.with(|s| s.chat_loading));
    let turns = move || state.with(|s| s.chat.turns().to_vec());

    let send = move || {
        let _ = vm.send_chat();
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages">
                <Show when=move || state.with(|s| s.chat.is_empty())>
                    <div class="chat-panel__empty">
                        "Ask a question about the standardized data."
                    </div>
                </Show>
                <For each=turns key=|turn: &ChatTurn| turn.id let:turn>
                    {
                        let is_user = turn.role == ChatRole::User;
                        view! {
                            <div
                                class="chat-panel__turn"
                                style=if is_user {
                                    "align-self: flex-end; max-width: 70%;"
                                } else {
                                    "align-self: flex-start; max-width: 70%;"
                                }
                            >
                                <div
                                    style=if is_user {
                                        "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
                                    } else {
                                        "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                                    }
                                >
                                    <div style="white-space: pre-wrap;">{turn.content.clone()}</div>
                                </div>
                            </div>
                        }
                    }
                </For>
                <Show when=move || sending.get()>
                    <div class="chat-panel__typing">
                        <Spinner />
                    </div>
                </Show>
            </div>

            <Flex style="gap: 8px; align-items: flex-end;">
                <textarea
                    class="chat-panel__input"
                    placeholder="Type a question... (Ctrl+Enter to send)"
                    prop:value=move || state.with(|s| s.chat_input.clone())
                    prop:disabled=move || sending.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.set_chat_input(text));
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && ev.ctrl_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                ></textarea>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=sending
                    on_click=move |_| send()
                >
                    {move || if sending.get() { "Sending..." } else { "Send" }}
                </Button>
            </Flex>
        </div>
    }
}
