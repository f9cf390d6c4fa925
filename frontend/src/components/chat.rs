//! 悬浮的分析助手
//!
//! 对话状态在核心库 `truthlens::chat` 中，请求复用 `AnalysisClient::try_analyze`。

use crate::auth::use_auth;
use crate::components::icons::{Activity, Bot, Close, FileText, MessageSquare, Send};
use leptos::prelude::*;
use leptos::task::spawn_local;
use truthlens::PsychologicalProfile;
use truthlens::chat::{ChatMessage, ChatRole, ChatTranscript, TOPICS};

#[component]
fn ImpactMeter(label: &'static str, value: u8, bar_class: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <div class="flex justify-between text-xs">
                <span>{label}</span>
                <span class="font-bold">{format!("{}%", value)}</span>
            </div>
            <progress class=bar_class value=value.to_string() max="100"></progress>
        </div>
    }
}

#[component]
fn TriggerCard(profile: PsychologicalProfile) -> impl IntoView {
    view! {
        <div class="w-[90%] mt-2 rounded-lg bg-base-300 p-3 space-y-2">
            <div class="flex items-center gap-2 text-xs font-semibold uppercase tracking-widest text-base-content/60">
                <Activity attr:class="h-3 w-3" /> "Emotional Triggers"
            </div>
            <ImpactMeter label="Fear" value=profile.fear bar_class="progress progress-secondary w-full" />
            <ImpactMeter label="Anger" value=profile.anger bar_class="progress progress-error w-full" />
            <ImpactMeter label="Urgency" value=profile.urgency bar_class="progress progress-warning w-full" />
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (row, bubble) = match message.role {
        ChatRole::User => ("chat chat-end", "chat-bubble chat-bubble-primary text-sm"),
        ChatRole::Assistant => ("chat chat-start", "chat-bubble text-sm"),
    };

    view! {
        <div class=row>
            <div class=bubble>{message.text}</div>
            {message.analysis.map(|profile| view! { <TriggerCard profile=profile /> })}
        </div>
    }
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let auth = use_auth();

    let (open, set_open) = signal(false);
    let (transcript, set_transcript) = signal(ChatTranscript::new());
    let (input, set_input) = signal(String::new());
    let (topic, set_topic) = signal("General");

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        let Some(req) = set_transcript.try_update(|t| t.submit(&text)).flatten() else {
            return;
        };
        set_input.set(String::new());

        let client = auth.client();
        spawn_local(async move {
            let outcome = client.analysis.try_analyze(&req).await;
            // 组件卸载后丢弃回复
            set_transcript.try_update(|t| t.receive(outcome));
        });
    };

    let messages = move || {
        transcript.with(|t| {
            t.messages()
                .iter()
                .cloned()
                .map(|message| view! { <MessageBubble message=message /> })
                .collect_view()
        })
    };

    let topics = move || {
        TOPICS
            .into_iter()
            .map(|name| {
                view! {
                    <button
                        type="button"
                        class=move || if topic.get() == name { "badge badge-primary cursor-pointer" } else { "badge badge-outline cursor-pointer" }
                        on:click=move |_| set_topic.set(name)
                    >
                        {name}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || !open.get()>
            <button
                class="btn btn-primary btn-circle btn-lg fixed bottom-6 right-6 z-50 shadow-xl"
                aria-label="Open assistant"
                on:click=move |_| set_open.set(true)
            >
                <MessageSquare attr:class="h-7 w-7" />
            </button>
        </Show>

        <Show when=move || open.get()>
            <div class="card fixed bottom-6 right-6 z-50 w-[350px] sm:w-[420px] h-[600px] bg-base-100 shadow-2xl flex flex-col">
                <div class="flex items-center justify-between p-4 border-b border-base-300">
                    <div>
                        <span class="font-bold text-primary">"Psych-Ops Analyzer"</span>
                        <p class="text-xs text-success">"Online"</p>
                    </div>
                    <button class="btn btn-ghost btn-sm btn-square" aria-label="Close assistant" on:click=move |_| set_open.set(false)>
                        <Close attr:class="h-4 w-4" />
                    </button>
                </div>

                <div class="flex gap-2 p-2 overflow-x-auto border-b border-base-300">{topics}</div>

                <div class="flex-1 overflow-y-auto p-4 space-y-2">
                    {messages}
                    <Show when=move || transcript.with(|t| t.is_waiting())>
                        <div class="flex items-center gap-2 text-xs text-base-content/60">
                            <Bot attr:class="h-3 w-3 animate-bounce" /> "Analyzing patterns..."
                        </div>
                    </Show>
                </div>

                <div class="p-3 border-t border-base-300 space-y-2">
                    <button
                        type="button"
                        class="btn btn-outline btn-xs gap-1"
                        on:click=move |_| set_transcript.update(|t| t.summarize())
                    >
                        <FileText attr:class="h-3 w-3" /> "Summarize"
                    </button>
                    <form class="flex gap-2" on:submit=on_submit>
                        <input
                            type="text"
                            class="input input-bordered input-sm flex-1"
                            placeholder="Paste text or URL..."
                            prop:value=input
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="btn btn-primary btn-sm btn-square"
                            disabled=move || input.with(|s| s.trim().is_empty())
                        >
                            <Send attr:class="h-4 w-4" />
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
