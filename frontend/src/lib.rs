//! TruthLens 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `truthlens::route` / `truthlens::guard`: 路由定义与守卫（核心库）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod chat;
    pub mod dashboard;
    mod icons;
    pub mod landing;
    pub mod layout;
    pub mod login;
    pub mod media;
    pub mod signup;
    pub mod threat_map;
    pub mod verify;
}

use crate::auth::{AuthContext, build_config, init_auth};
use crate::components::landing::LandingPage;
use crate::components::layout::ProtectedLayout;
use crate::components::login::LoginPage;
use crate::components::signup::SignupPage;

use leptos::prelude::*;
use truthlens::TruthLens;
use truthlens::route::AppRoute;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积，同时为核心库提供 HTTP / 存储 / 调度实现。
pub(crate) mod web {
    mod http;
    mod logger;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::FetchHttpClient;
    pub use logger::init_logger;
    pub use storage::BrowserStorage;
    pub use timer::{BrowserScheduler, Interval};
}

pub use web::init_logger;

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Dashboard | AppRoute::Verify | AppRoute::Media | AppRoute::Map => {
            view! { <ProtectedLayout route=route /> }.into_any()
        }
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// 会话恢复前的占位视图
fn pending_view() -> AnyView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
    .into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 组装客户端并创建认证上下文
    let client = TruthLens::new(build_config(), web::FetchHttpClient, web::BrowserStorage);
    let auth_ctx = AuthContext::new(client);
    provide_context(auth_ctx);

    // 2. 初始化认证状态（从 LocalStorage 恢复会话）
    init_auth(&auth_ctx);

    // 3. 获取守卫信号，用于注入路由服务（解耦！）
    let guard = auth_ctx.guard_signal();

    view! {
        // 4. 路由器组件：注入守卫信号
        <Router guard=guard>
            <RouterOutlet matcher=route_matcher pending=pending_view />
        </Router>
    }
}
