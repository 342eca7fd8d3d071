use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::components::RecommendationContext;
use crate::types::{ChatRequest, ChatResponse, Transcript, CHAT_ENDPOINT};

/// Floating chat widget. Keeps a local transcript for the lifetime of the
/// tab and relays it to the server on every send.
#[component]
pub fn ChatBox() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (input, set_input) = signal(String::new());
    let (transcript, set_transcript) = signal(Transcript::default());
    let (sending, set_sending) = signal(false);

    let recommendation = use_context::<RecommendationContext>();

    let bottom_ref = NodeRef::<Div>::new();

    // Keep the newest message in view whenever the transcript changes.
    Effect::new(move |_| {
        transcript.track();
        if let Some(el) = bottom_ref.get() {
            el.scroll_into_view();
        }
    });

    let send_message = move || {
        // One request in flight at a time; replies always land in order.
        if sending.get_untracked() {
            return;
        }

        let mut updated = transcript.get_untracked();
        if !updated.push_user(&input.get_untracked()) {
            return;
        }

        let wire = updated.wire_messages();
        set_transcript.set(updated);
        set_input.set(String::new());
        set_sending.set(true);

        let current_page = web_sys::window().and_then(|w| w.location().pathname().ok());
        let recommendation_data = recommendation.map(|ctx| ctx.results.get_untracked());

        let request = ChatRequest {
            messages: wire,
            current_page,
            recommendation_data,
        };

        wasm_bindgen_futures::spawn_local(async move {
            match post_chat(&request).await {
                Ok(response) => {
                    set_transcript.update(|t| t.push_ai(response.reply));
                }
                Err(e) => {
                    // Silent failure: the user's message stays visible and
                    // the widget remains usable.
                    log::error!("Chat error: {:?}", e);
                }
            }
            set_sending.set(false);
        });
    };

    let handle_key_press = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send_message();
        }
    };

    view! {
        // Floating toggle button
        <button
            class="fixed bottom-6 right-6 w-14 h-14 rounded-full bg-rose-500
            shadow-lg flex items-center justify-center text-white text-xl
            cursor-pointer z-50 hover:bg-rose-600 transition-colors"
            on:click=move |_| set_open.update(|o| *o = !*o)
        >
            "💬"
        </button>

        {move || {
            open.get()
                .then(|| {
                    view! {
                        <div class="fixed bottom-24 right-6 w-[380px] h-[520px] bg-white
                        border border-rose-100 shadow-2xl rounded-2xl flex flex-col z-50">
                            // Header
                            <div class="p-4 border-b border-rose-100">
                                <h3 class="font-semibold text-rose-600">"Materna AI Assistant"</h3>
                            </div>

                            // Messages
                            <div class="flex-1 overflow-y-auto p-4 space-y-3">
                                {move || {
                                    if transcript.get().is_empty() {
                                        view! {
                                            <p class="text-sm text-gray-400 text-center mt-4">
                                                "Ask about your recommendations."
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <For
                                                each=move || {
                                                    transcript
                                                        .get()
                                                        .messages()
                                                        .iter()
                                                        .cloned()
                                                        .enumerate()
                                                        .collect::<Vec<_>>()
                                                }
                                                key=|(index, _)| *index
                                                children=move |(_, message)| {
                                                    let is_user = message.role == "user";
                                                    view! {
                                                        <div class=format!(
                                                            "max-w-[80%] px-4 py-2 rounded-xl text-sm {}",
                                                            if is_user {
                                                                "ml-auto bg-rose-500 text-white"
                                                            } else {
                                                                "bg-rose-50 text-gray-800"
                                                            },
                                                        )>
                                                            <div class="whitespace-pre-wrap text-left">
                                                                {message.content}
                                                            </div>
                                                        </div>
                                                    }
                                                }
                                            />
                                        }
                                            .into_any()
                                    }
                                }}
                                <div node_ref=bottom_ref></div>
                            </div>

                            // Input
                            <div class="p-3 border-t border-rose-100 flex space-x-2">
                                <input
                                    class="flex-1 px-3 py-2 rounded-lg border border-rose-100
                                    bg-white text-gray-800 focus:outline-none focus:ring-2
                                    focus:ring-rose-400 transition"
                                    placeholder="Ask about your recommendations..."
                                    prop:value=input
                                    on:input=move |ev| set_input.set(event_target_value(&ev))
                                    on:keydown=handle_key_press
                                    prop:disabled=sending
                                />
                                <button
                                    class="px-4 py-2 rounded-lg bg-rose-500 text-white
                                    hover:bg-rose-600 transition-colors
                                    disabled:bg-gray-300 disabled:cursor-not-allowed"
                                    on:click=move |_| send_message()
                                    prop:disabled=sending
                                >
                                    {move || if sending.get() { "..." } else { "Send" }}
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

async fn post_chat(request: &ChatRequest) -> Result<ChatResponse, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let body =
        serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let req = Request::new_with_str_and_init(CHAT_ENDPOINT, &opts)?;
    req.headers().set("Content-Type", "application/json")?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "chat endpoint returned {}",
            resp.status()
        )));
    }

    let json = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}
