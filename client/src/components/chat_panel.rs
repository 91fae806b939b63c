//! Assistant chat panel: history, prompt input and citation hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! Prompts go to `POST /api/chat`; replies are appended to `ChatState` and
//! rendered through `MessageContent`, whose citations call the host-supplied
//! `on_page_click`.

use leptos::prelude::*;

use crate::components::message_content::MessageContent;
use crate::net::types::ChatRole;
use crate::state::chat::ChatState;

/// Chat history with a prompt input.
#[component]
pub fn ChatPanel(on_page_click: Callback<(String, u32)>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.sending));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if !chat.with(|c| c.can_send(&text)) {
            return;
        }

        let prompt = text.trim().to_owned();
        chat.update(|c| c.push_user(prompt.clone()));
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_chat_message(&prompt).await {
                Ok(reply) => chat.update(|c| c.push_reply(reply.content)),
                Err(e) => {
                    log::warn!("chat request failed: {e}");
                    chat.update(|c| c.push_error(format!("Assistant request failed: {e}")));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = prompt;
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || {
        let text = input.get();
        chat.with(|c| c.can_send(&text))
    };

    view! {
        <section class="chat-panel">
            <header class="chat-panel__header">
                <h2>"Assistant"</h2>
                <button
                    class="btn chat-panel__clear"
                    disabled=move || chat.with(|c| c.messages.is_empty() || c.sending)
                    on:click=move |_| chat.update(ChatState::clear)
                >
                    "Clear"
                </button>
            </header>
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"Ask a question about your documents."</div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|msg| {
                            let citation_count = citations::references(&msg.content).len();
                            let is_user = msg.role == ChatRole::User;
                            let is_assistant = msg.role == ChatRole::Assistant;
                            let is_error = msg.role == ChatRole::Error;
                            let body = match msg.role {
                                ChatRole::Assistant => {
                                    view! { <MessageContent content=msg.content on_page_click=on_page_click/> }
                                        .into_any()
                                }
                                ChatRole::User | ChatRole::Error => view! { <span>{msg.content}</span> }.into_any(),
                            };

                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--user=is_user
                                    class:chat-panel__message--assistant=is_assistant
                                    class:chat-panel__message--error=is_error
                                >
                                    {body}
                                    {(is_assistant && citation_count > 0)
                                        .then(|| {
                                            let noun = if citation_count == 1 { "citation" } else { "citations" };
                                            view! {
                                                <span class="chat-panel__citations">{format!("{citation_count} {noun}")}</span>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}

                {move || {
                    chat.with(|c| c.sending)
                        .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about your documents..."
                    disabled=move || chat.with(|c| c.sending)
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=move |_| do_send() disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </section>
    }
}
