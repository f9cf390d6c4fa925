//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程，验证步骤委托给核心库的 [`RouteGuard`]。

use leptos::prelude::*;
use truthlens::guard::{GuardDecision, HistoryMode, RouteGuard};
use truthlens::route::AppRoute;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 写入 History 状态
fn write_history_state(path: &str, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
    };
    if let Err(e) = result {
        log::warn!("[Router] Failed to update history for {}: {:?}", path, e);
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入守卫信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 路由守卫（注入的信号）
    guard: Signal<RouteGuard>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// # Arguments
    /// * `guard` - 守卫信号，由外部注入实现解耦
    fn new(guard: Signal<RouteGuard>) -> Self {
        // 1. 初始化当前路由（从 URL 解析）
        let path = current_path();
        let initial_route = AppRoute::from_path(&path);
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            guard,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 获取守卫信号
    pub fn guard(&self) -> Signal<RouteGuard> {
        self.guard
    }

    /// 导航到指定路由
    pub fn navigate_to(&self, target_route: AppRoute) {
        self.navigate_to_route(target_route, HistoryMode::Push);
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `mode` - 允许访问时的历史写入方式；重定向总是替换
    fn navigate_to_route(&self, target_route: AppRoute, mode: HistoryMode) {
        // --- Step 1: 验证目标路由 ---
        let decision = self.guard.get_untracked().decide(target_route);
        let mode = decision.history_mode(mode);
        let route = match decision {
            // 会话尚未恢复：先记下目标，恢复完成后由 setup_auth_redirect 重新判定
            GuardDecision::Wait => target_route,
            GuardDecision::Allow(route) => route,
            GuardDecision::Redirect(redirect) => {
                log::info!(
                    "[Router] Access to {} denied. Redirecting to {}.",
                    target_route,
                    redirect
                );
                redirect
            }
        };

        // --- Step 2: 加载页面 (更新状态) ---
        write_history_state(route.to_path(), mode);
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        // popstate 时也执行守卫逻辑，重定向使用 replaceState
        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            router.navigate_to_route(target_route, HistoryMode::Replace);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置守卫状态变化时的自动重定向
    ///
    /// 覆盖三种情况：会话恢复完成、登录、注销。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let guard = self.guard;

        // 使用 Effect 监听守卫状态变化
        Effect::new(move |_| {
            let guard = guard.get();
            let route = current_route.get_untracked();

            let decision = guard.decide(route);
            if let GuardDecision::Redirect(redirect) = decision {
                log::info!(
                    "[Router] Auth state changed ({:?}), redirecting {} -> {}.",
                    guard.state(),
                    route,
                    redirect
                );
                write_history_state(redirect.to_path(), decision.history_mode(HistoryMode::Push));
                set_route.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(guard: Signal<RouteGuard>) -> RouterService {
    let router = RouterService::new(guard);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 守卫信号
    guard: Signal<RouteGuard>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(guard);

    children()
}

/// 路由出口组件
///
/// 根据当前路由与守卫决策渲染对应的组件；会话恢复前渲染 `pending`。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
    /// 等待会话恢复时的视图
    pending: fn() -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        match router.guard().get().decide(current) {
            GuardDecision::Allow(route) => matcher(route),
            // 重定向由 setup_auth_redirect 完成，期间不渲染受保护内容
            GuardDecision::Wait | GuardDecision::Redirect(_) => pending(),
        }
    }
}

/// 站内链接
///
/// 拦截点击，通过路由服务导航而不是整页刷新。
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional, into)] class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
