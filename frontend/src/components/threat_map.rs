//! 实时威胁地图页面
//!
//! 热点强度每 2 秒由 `Interval` 重新随机一次，模拟状态在核心库 `truthlens::threat_map` 中。

use crate::components::icons::Radio;
use crate::web::Interval;
use leptos::prelude::*;
use truthlens::threat_map::{
    HOTSPOT_COUNT, Hotspot, HotspotKind, REFRESH_INTERVAL_MILLIS, ThreatMap,
};

fn hotspot_rgb(kind: HotspotKind) -> &'static str {
    match kind {
        HotspotKind::BotFarm => "239, 68, 68",
        HotspotKind::Misinformation => "234, 179, 8",
    }
}

/// 热点的定位与发光样式，亮度随强度变化
fn hotspot_style(spot: &Hotspot) -> String {
    let rgb = hotspot_rgb(spot.kind);
    format!(
        "left: {:.2}%; top: {:.2}%; width: {:.0}px; height: {:.0}px; \
         background-color: rgba({}, {:.2}); box-shadow: 0 0 {:.0}px rgba({}, 0.6); \
         transform: translate(-50%, -50%);",
        spot.x,
        spot.y,
        spot.size,
        spot.size,
        rgb,
        spot.intensity * 0.4,
        spot.intensity * 30.0,
        rgb
    )
}

fn hotspot_tip(spot: &Hotspot) -> String {
    let (x, y) = spot.origin();
    format!(
        "{} | Severity: Critical | Origin: Masked IP ({}, {})",
        spot.kind.label(),
        x,
        y
    )
}

#[component]
pub fn ThreatMapPage() -> impl IntoView {
    let (map, set_map) = signal(ThreatMap::generate(
        HOTSPOT_COUNT,
        &mut rand::thread_rng(),
    ));

    let interval = Interval::new(REFRESH_INTERVAL_MILLIS, move || {
        set_map.try_update(|m| m.refresh(&mut rand::thread_rng()));
    });
    let ticker = StoredValue::new_local(Some(interval));

    // 离开页面时清除定时器
    on_cleanup(move || {
        ticker.try_update_value(|t| *t = None);
    });

    let hotspots = move || {
        map.with(|m| {
            m.hotspots()
                .iter()
                .map(|spot| {
                    let core = match spot.kind {
                        HotspotKind::BotFarm => "absolute inset-[30%] rounded-full animate-bounce bg-error",
                        HotspotKind::Misinformation => "absolute inset-[30%] rounded-full animate-bounce bg-warning",
                    };
                    view! {
                        <div
                            class="absolute rounded-full tooltip transition-all duration-1000 ease-in-out cursor-pointer"
                            data-tip=hotspot_tip(spot)
                            style=hotspot_style(spot)
                        >
                            <div class=core></div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h2 class="text-3xl font-bold flex items-center gap-3">
                        <Radio attr:class="h-6 w-6 text-error animate-pulse" /> "Live Threat Map"
                    </h2>
                    <p class="text-base-content/70">"Monitoring global information vectors."</p>
                </div>
                <div class="flex gap-2">
                    <span class="badge badge-error badge-outline">
                        {move || format!("{} Bot Farms", map.with(|m| m.bot_farm_count()))}
                    </span>
                    <span class="badge badge-info badge-outline">
                        {move || format!("{} Vectors Analyzed", map.with(|m| m.vectors_analyzed()))}
                    </span>
                </div>
            </div>

            <div
                class="card relative overflow-hidden bg-base-300 shadow-xl h-[calc(100vh-14rem)] min-h-[24rem]"
                style="background-image: linear-gradient(rgba(0, 240, 255, 0.05) 1px, transparent 1px), linear-gradient(90deg, rgba(0, 240, 255, 0.05) 1px, transparent 1px); background-size: 40px 40px;"
            >
                {hotspots}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(kind: HotspotKind, intensity: f64) -> Hotspot {
        Hotspot {
            id: 3,
            x: 25.5,
            y: 60.25,
            size: 20.0,
            intensity,
            kind,
        }
    }

    #[test]
    fn test_hotspot_style_tracks_intensity() {
        let style = hotspot_style(&spot(HotspotKind::BotFarm, 0.5));
        assert!(style.contains("left: 25.50%; top: 60.25%;"));
        assert!(style.contains("background-color: rgba(239, 68, 68, 0.20)"));
        assert!(style.contains("box-shadow: 0 0 15px"));

        let dim = hotspot_style(&spot(HotspotKind::Misinformation, 0.0));
        assert!(dim.contains("rgba(234, 179, 8, 0.00)"));
    }

    #[test]
    fn test_hotspot_tip() {
        assert_eq!(
            hotspot_tip(&spot(HotspotKind::Misinformation, 0.1)),
            "Viral Misinformation | Severity: Critical | Origin: Masked IP (25, 60)"
        );
    }
}
