//! 新闻真实性验证页面
//!
//! 三种输入方式（文本 / URL / 文档），结果卡片总会有内容：
//! 后端不可用时显示降级结果。

use crate::auth::use_auth;
use crate::components::icons::{AlertTriangle, CheckCircle, FileText, Globe, ShieldAlert, Upload};
use crate::components::media::selected_file_name;
use leptos::prelude::*;
use leptos::task::spawn_local;
use truthlens::{AnalysisRequest, AnalysisResult, InputKind, PsychologicalProfile, Verdict};

fn verdict_badge(status: Verdict) -> (&'static str, &'static str) {
    match status {
        Verdict::Real => ("badge badge-success badge-lg", "Verified Real"),
        Verdict::Fake => ("badge badge-error badge-lg", "Likely Fake"),
        Verdict::Partial => ("badge badge-warning badge-lg", "Partially True"),
    }
}

#[component]
fn TabButton(
    kind: InputKind,
    active: ReadSignal<InputKind>,
    set_active: WriteSignal<InputKind>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            role="tab"
            class=move || if active.get() == kind { "tab tab-active gap-2" } else { "tab gap-2" }
            on:click=move |_| set_active.set(kind)
        >
            {children()}
        </a>
    }
}

#[component]
fn EmotionBar(label: &'static str, value: u8) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between text-sm">
                <span>{label}</span>
                <span>{format!("{}%", value)}</span>
            </div>
            <progress class="progress progress-secondary w-full" value=value.to_string() max="100"></progress>
        </div>
    }
}

#[component]
fn PsychologicalCard(profile: PsychologicalProfile) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-2">
                <h4 class="card-title text-base">"Psychological Manipulation"</h4>
                <EmotionBar label="Fear" value=profile.fear />
                <EmotionBar label="Anger" value=profile.anger />
                <EmotionBar label="Urgency" value=profile.urgency />
            </div>
        </div>
    }
}

#[component]
fn ResultCard(result: AnalysisResult) -> impl IntoView {
    let (badge_class, badge_label) = verdict_badge(result.status);
    let icon = match result.status {
        Verdict::Real => view! { <CheckCircle attr:class="h-10 w-10 text-success" /> }.into_any(),
        Verdict::Fake => view! { <ShieldAlert attr:class="h-10 w-10 text-error" /> }.into_any(),
        Verdict::Partial => view! { <AlertTriangle attr:class="h-10 w-10 text-warning" /> }.into_any(),
    };

    let sources = if result.cross_reference_sources.is_empty() {
        view! { <p class="text-sm text-base-content/50">"No sources available."</p> }.into_any()
    } else {
        result
            .cross_reference_sources
            .into_iter()
            .map(|source| {
                view! {
                    <li class="flex justify-between">
                        <span class="font-medium">{source.name}</span>
                        <span class="badge badge-outline">{source.reliability_label}</span>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex items-center gap-4">
                        {icon}
                        <div class="flex-1">
                            <span class=badge_class>{badge_label}</span>
                            <p class="mt-2 text-base-content/80">{result.summary_text}</p>
                        </div>
                        <div class="radial-progress text-primary" style=format!("--value:{};", result.confidence_score) role="progressbar">
                            {format!("{}%", result.confidence_score)}
                        </div>
                    </div>
                </div>
            </div>

            <div class="grid gap-6 md:grid-cols-2">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h4 class="card-title text-base">"Cross-Reference Sources"</h4>
                        <ul class="space-y-2">{sources}</ul>
                    </div>
                </div>
                {result.psychological.map(|profile| view! { <PsychologicalCard profile=profile /> })}
            </div>
        </div>
    }
}

#[component]
pub fn VerifyPage() -> impl IntoView {
    let auth = use_auth();

    let (tab, set_tab) = signal(InputKind::Text);
    let (text_input, set_text_input) = signal(String::new());
    let (url_input, set_url_input) = signal(String::new());
    let (document, set_document) = signal(Option::<String>::None);
    let (analyzing, set_analyzing) = signal(false);
    let (result, set_result) = signal(Option::<AnalysisResult>::None);
    let (hint, set_hint) = signal(Option::<&'static str>::None);

    let handle_analyze = move |kind: InputKind| {
        let req = match kind {
            InputKind::Text => AnalysisRequest::text(text_input.get_untracked()),
            InputKind::Url => AnalysisRequest::url(url_input.get_untracked()),
            InputKind::Document => {
                AnalysisRequest::document(document.get_untracked().unwrap_or_default())
            }
        };

        // 没有选中文件时不发请求
        if kind == InputKind::Document && !req.has_payload() {
            set_hint.set(Some("Select a PDF file before analyzing."));
            return;
        }
        set_hint.set(None);

        set_analyzing.set(true);
        set_result.set(None);

        let client = auth.client();
        spawn_local(async move {
            let outcome = client.analysis.analyze(&req).await;
            set_result.set(Some(outcome));
            set_analyzing.set(false);
        });
    };

    let tab_content = move || match tab.get() {
        InputKind::Text => view! {
            <div class="space-y-4">
                <textarea
                    class="textarea textarea-bordered w-full min-h-[200px]"
                    placeholder="Paste the news text here to analyze..."
                    prop:value=text_input
                    on:input=move |ev| set_text_input.set(event_target_value(&ev))
                ></textarea>
                <div class="flex justify-end">
                    <button class="btn btn-primary" disabled=move || analyzing.get() on:click=move |_| handle_analyze(InputKind::Text)>
                        {move || if analyzing.get() { "Analyzing..." } else { "Analyze Text" }}
                    </button>
                </div>
            </div>
        }
        .into_any(),
        InputKind::Url => view! {
            <div class="flex gap-4">
                <input
                    type="url"
                    class="input input-bordered flex-1"
                    placeholder="https://example.com/news-article"
                    prop:value=url_input
                    on:input=move |ev| set_url_input.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" disabled=move || analyzing.get() on:click=move |_| handle_analyze(InputKind::Url)>
                    {move || if analyzing.get() { "Scanning..." } else { "Scan URL" }}
                </button>
            </div>
        }
        .into_any(),
        InputKind::Document => view! {
            <div class="space-y-4">
                <label class="border-2 border-dashed rounded-lg p-12 flex flex-col items-center cursor-pointer text-base-content/60">
                    <Upload attr:class="h-12 w-12 mb-4 text-primary" />
                    <span class="text-lg font-medium">
                        {move || document.get().unwrap_or_else(|| "Drop PDF file here".to_string())}
                    </span>
                    <span class="text-sm">"or click to browse"</span>
                    <input
                        type="file"
                        accept="application/pdf"
                        class="hidden"
                        on:change=move |ev| {
                            set_hint.set(None);
                            set_document.set(selected_file_name(&ev));
                        }
                    />
                </label>
                <Show when=move || hint.get().is_some()>
                    <div role="alert" class="alert alert-warning text-sm py-2">
                        <span>{move || hint.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                <div class="flex justify-end">
                    <button
                        class="btn btn-primary"
                        disabled=move || analyzing.get() || document.with(Option::is_none)
                        on:click=move |_| handle_analyze(InputKind::Document)
                    >
                        {move || if analyzing.get() { "Processing..." } else { "Analyze Document" }}
                    </button>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="max-w-4xl mx-auto space-y-8">
            <div class="text-center space-y-2">
                <h1 class="text-4xl font-extrabold">"Truth Verification Engine"</h1>
                <p class="text-base-content/70">
                    "AI-powered fake news detection for text, URLs, and documents."
                </p>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div role="tablist" class="tabs tabs-boxed mb-6">
                        <TabButton kind=InputKind::Text active=tab set_active=set_tab>
                            <FileText attr:class="h-4 w-4" /> "Text Analysis"
                        </TabButton>
                        <TabButton kind=InputKind::Url active=tab set_active=set_tab>
                            <Globe attr:class="h-4 w-4" /> "News URL"
                        </TabButton>
                        <TabButton kind=InputKind::Document active=tab set_active=set_tab>
                            <Upload attr:class="h-4 w-4" /> "Upload PDF"
                        </TabButton>
                    </div>
                    {tab_content}
                </div>
            </div>

            {move || result.get().map(|r| view! { <ResultCard result=r /> })}
        </div>
    }
}
