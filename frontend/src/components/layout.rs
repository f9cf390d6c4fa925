//! 受保护页面的外壳：侧边导航 + 用户信息 + 注销 + 分析助手

use crate::auth::{logout, use_auth};
use crate::components::chat::ChatWidget;
use crate::components::dashboard::DashboardPage;
use crate::components::icons::{LayoutDashboard, LogOut, Radio, ScanFace, Search, ShieldCheck};
use crate::components::media::MediaPage;
use crate::components::threat_map::ThreatMapPage;
use crate::components::verify::VerifyPage;
use crate::web::router::Link;
use leptos::prelude::*;
use truthlens::route::AppRoute;

fn nav_class(active: bool) -> &'static str {
    if active { "active" } else { "" }
}

#[component]
pub fn ProtectedLayout(route: AppRoute) -> impl IntoView {
    let auth = use_auth();
    let display_name = auth.display_name();

    // 注销后守卫变为 Unauthenticated，路由服务负责跳转到登录页
    let on_logout = move |_| logout(&auth);

    let content = match route {
        AppRoute::Verify => view! { <VerifyPage /> }.into_any(),
        AppRoute::Media => view! { <MediaPage /> }.into_any(),
        AppRoute::Map => view! { <ThreatMapPage /> }.into_any(),
        _ => view! { <DashboardPage /> }.into_any(),
    };

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200">
            <input id="nav-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content p-4 md:p-8">
                <div class="max-w-7xl mx-auto">{content}</div>
                <ChatWidget />
            </div>
            <div class="drawer-side">
                <label for="nav-drawer" aria-label="close sidebar" class="drawer-overlay"></label>
                <aside class="w-64 min-h-full bg-base-100 flex flex-col">
                    <div class="flex items-center gap-2 p-6">
                        <ShieldCheck attr:class="h-6 w-6 text-primary" />
                        <span class="text-xl font-bold">"TruthLens"</span>
                    </div>
                    <ul class="menu px-4 gap-1 flex-1">
                        <li>
                            <Link to=AppRoute::Dashboard class=nav_class(route == AppRoute::Dashboard)>
                                <LayoutDashboard attr:class="h-4 w-4" /> "Overview"
                            </Link>
                        </li>
                        <li>
                            <Link to=AppRoute::Verify class=nav_class(route == AppRoute::Verify)>
                                <Search attr:class="h-4 w-4" /> "Verify News"
                            </Link>
                        </li>
                        <li>
                            <Link to=AppRoute::Media class=nav_class(route == AppRoute::Media)>
                                <ScanFace attr:class="h-4 w-4" /> "Media Forensics"
                            </Link>
                        </li>
                        <li>
                            <Link to=AppRoute::Map class=nav_class(route == AppRoute::Map)>
                                <Radio attr:class="h-4 w-4" /> "Threat Map"
                            </Link>
                        </li>
                    </ul>
                    <div class="p-4 border-t border-base-200 space-y-2">
                        <div class="text-sm">
                            <span class="text-base-content/50">"Signed in as "</span>
                            <span class="font-semibold">{move || display_name.get().unwrap_or_default()}</span>
                        </div>
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm w-full gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Sign Out"
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
