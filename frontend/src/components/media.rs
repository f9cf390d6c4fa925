//! 深度伪造检测页面
//!
//! 扫描进度由 100ms 的 `Interval` 推进，状态机在核心库 `truthlens::media` 中。

use crate::components::icons::{AlertTriangle, CheckCircle, ScanFace, Upload};
use crate::web::Interval;
use leptos::prelude::*;
use truthlens::media::{MediaScan, MediaVerdict, SignalLevel};

/// 扫描推进间隔（毫秒）
const SCAN_TICK_MILLIS: u32 = 100;

/// 读取 `<input type="file">` 选中的第一个文件名
pub(crate) fn selected_file_name(ev: &web_sys::Event) -> Option<String> {
    let input: web_sys::HtmlInputElement = event_target(ev);
    input.files()?.get(0).map(|file| file.name())
}

#[component]
fn VerdictCard(verdict: MediaVerdict) -> impl IntoView {
    let (title, alert_class) = if verdict.is_deepfake {
        ("Deepfake Detected", "alert alert-error")
    } else {
        ("Authentic Media", "alert alert-success")
    };
    let icon = if verdict.is_deepfake {
        view! { <AlertTriangle attr:class="h-6 w-6" /> }.into_any()
    } else {
        view! { <CheckCircle attr:class="h-6 w-6" /> }.into_any()
    };

    let signals = verdict
        .signals
        .into_iter()
        .map(|signal| {
            let badge = match signal.level {
                SignalLevel::High => "badge badge-error",
                SignalLevel::Low => "badge badge-success",
            };
            view! {
                <div>
                    <div class="flex justify-between text-sm">
                        <span>{signal.label}</span>
                        <span class=badge>{signal.level.as_str()}</span>
                    </div>
                    <progress class="progress progress-primary w-full" value=signal.score.to_string() max="100"></progress>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-4">
            <div role="alert" class=alert_class>
                {icon}
                <span class="font-bold">{title}</span>
                <span>{format!("Confidence: {}%", verdict.confidence)}</span>
            </div>
            <div class="space-y-3">{signals}</div>
        </div>
    }
}

#[component]
pub fn MediaPage() -> impl IntoView {
    let (scan, set_scan) = signal(MediaScan::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let ticker = StoredValue::new_local(Option::<Interval>::None);

    let on_select = move |ev: web_sys::Event| {
        if let Some(name) = selected_file_name(&ev) {
            set_error_msg.set(None);
            set_scan.update(|s| s.select(name));
        }
    };

    let start_scan = move |_| {
        let started = set_scan.try_update(|s| s.start()).unwrap_or(Ok(()));
        if let Err(e) = started {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        let interval = Interval::new(SCAN_TICK_MILLIS, move || {
            let mut rng = rand::thread_rng();
            let running = set_scan.try_update(|s| s.tick(&mut rng)).unwrap_or(false);
            if !running {
                // 不能在回调内部 drop 自身，只取消；句柄在下次开始或页面卸载时释放
                ticker.update_value(|t| {
                    if let Some(interval) = t.as_mut() {
                        interval.cancel();
                    }
                });
            }
        });
        ticker.set_value(Some(interval));
    };

    let reset = move |_| {
        ticker.update_value(|t| *t = None);
        set_error_msg.set(None);
        set_scan.update(|s| s.reset());
    };

    on_cleanup(move || {
        ticker.try_update_value(|t| *t = None);
    });

    view! {
        <div class="max-w-3xl mx-auto space-y-8">
            <div class="text-center space-y-2">
                <h1 class="text-4xl font-extrabold">"Deepfake Detection"</h1>
                <p class="text-base-content/70">"Forensic analysis of images and video for synthetic manipulation."</p>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-6">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-warning text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <label class="border-2 border-dashed rounded-lg p-12 flex flex-col items-center cursor-pointer text-base-content/60">
                        <Upload attr:class="h-12 w-12 mb-4 text-primary" />
                        <span class="text-lg font-medium">
                            {move || scan.with(|s| s.file_name().map(str::to_string))
                                .unwrap_or_else(|| "Drop an image or video here".to_string())}
                        </span>
                        <span class="text-sm">"or click to browse"</span>
                        <input type="file" accept="image/*,video/*" class="hidden" on:change=on_select />
                    </label>

                    <Show when=move || scan.with(|s| s.is_scanning())>
                        <div class="space-y-2">
                            <div class="flex items-center gap-2 text-sm">
                                <ScanFace attr:class="h-4 w-4 animate-pulse" />
                                {move || format!("Scanning frames... {}%", scan.with(|s| s.progress()))}
                            </div>
                            <progress class="progress progress-primary w-full" value=move || scan.with(|s| s.progress()).to_string() max="100"></progress>
                        </div>
                    </Show>

                    {move || scan.with(|s| s.verdict().cloned()).map(|v| view! { <VerdictCard verdict=v /> })}

                    <div class="flex justify-end gap-2">
                        <button class="btn btn-ghost" on:click=reset>"Reset"</button>
                        <button
                            class="btn btn-primary"
                            disabled=move || scan.with(|s| s.is_scanning() || s.file_name().is_none())
                            on:click=start_scan
                        >
                            "Start Analysis"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
