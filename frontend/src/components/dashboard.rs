use crate::auth::use_auth;
use crate::components::icons::*;
use crate::web::BrowserScheduler;
use leptos::prelude::*;
use truthlens::DashboardMetrics;

/// 千位分隔，例如 `1204 -> "1,204"`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
fn StatCard(
    title: &'static str,
    desc: &'static str,
    color: &'static str,
    #[prop(into)] value: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="stat">
            <div class=format!("stat-figure {}", color)>{children()}</div>
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value {}", color)>{move || value.get()}</div>
            <div class="stat-desc">{desc}</div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let client = auth.client();

    // 重新进入页面时先显示上一次的数据；第一次拉取结束前为 None，显示 "..."
    let (metrics, set_metrics) = signal(client.stats.displayed());

    // 挂载时立即拉取，之后按配置的间隔轮询
    let handle = client.stats.start(
        BrowserScheduler,
        client.config.poll_interval,
        move |m| set_metrics.set(Some(m)),
    );
    let handle = StoredValue::new_local(handle);

    // 离开页面时停止轮询
    on_cleanup(move || {
        handle.try_update_value(|h| h.stop());
    });

    let stat = move |pick: fn(&DashboardMetrics) -> u64| {
        Signal::derive(move || {
            metrics
                .get()
                .map(|m| group_thousands(pick(&m)))
                .unwrap_or_else(|| "...".to_string())
        })
    };

    view! {
        <div class="space-y-8">
            <div>
                <h2 class="text-3xl font-bold">"Global Overwatch"</h2>
                <p class="text-base-content/70">"Real-time threat intelligence and system metrics."</p>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <StatCard title="Total Verified" desc="Claims checked by the platform" color="text-success" value=stat(|m| m.verified_count)>
                    <ShieldCheck attr:class="h-8 w-8" />
                </StatCard>
                <StatCard title="Threats Blocked" desc="High priority alerts" color="text-error" value=stat(|m| m.threats_blocked_count)>
                    <ShieldAlert attr:class="h-8 w-8" />
                </StatCard>
                <StatCard title="Deepfakes Detected" desc="Media manipulation" color="text-warning" value=stat(|m| m.deepfakes_detected_count)>
                    <ScanFace attr:class="h-8 w-8" />
                </StatCard>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Threat Stream"</h3>
                    <ul class="space-y-3">
                        <li class="flex items-center gap-2">
                            <AlertTriangle attr:class="h-4 w-4 text-error" />
                            "Deepfake detected in APAC Region"
                        </li>
                        <li class="flex items-center gap-2">
                            <AlertTriangle attr:class="h-4 w-4 text-warning" />
                            "Anomalous traffic spike detected"
                        </li>
                        <li class="flex items-center gap-2">
                            <CheckCircle attr:class="h-4 w-4 text-success" />
                            "Phishing campaign neutralized"
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1204), "1,204");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
