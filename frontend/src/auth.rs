//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 会话的持久化与事件由核心库的 `SessionStore` 负责，这里只把事件映射为信号；
//! 路由服务通过注入的守卫信号来检查认证状态。

use leptos::prelude::*;
use truthlens::config::{ClientConfig, ENV_API_URL, ENV_POLL_SECS, ENV_SESSION_KEY};
use truthlens::error::AuthError;
use truthlens::guard::RouteGuard;
use truthlens::session::SessionEvent;
use truthlens::{Session, TruthLens};

use crate::web::{BrowserStorage, FetchHttpClient};

/// 浏览器端组装好的客户端
pub type Client = TruthLens<FetchHttpClient, BrowserStorage>;

/// 认证状态
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// 当前会话
    pub session: Option<Session>,
    /// 路由守卫（会话恢复前为 Unknown）
    pub guard: RouteGuard,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。客户端本身不是 `Send`，
/// 因此放在本地 `StoredValue` 中。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    set_state: WriteSignal<AuthState>,
    client: StoredValue<Client, LocalStorage>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new(client: Client) -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self {
            state,
            set_state,
            client: StoredValue::new_local(client),
        }
    }

    /// 获取守卫信号（用于路由服务注入）
    ///
    /// 只在守卫状态真正变化时通知，会话内容的更新不会触发路由重新渲染。
    pub fn guard_signal(&self) -> Signal<RouteGuard> {
        let state = self.state;
        let guard = Memo::new(move |_| state.with(|s| s.guard));
        Signal::derive(move || guard.get())
    }

    /// 当前用户名（未登录时为 `None`）
    pub fn display_name(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.as_ref().map(|u| u.display_name.clone())))
    }

    /// 客户端句柄（内部共享同一份状态）
    pub fn client(&self) -> Client {
        self.client.get_value()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 构建期注入的配置
///
/// `TRUTHLENS_API_URL` 等变量在编译时读取，未设置时使用默认值。
pub fn build_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| {
        let value = match key {
            ENV_API_URL => option_env!("TRUTHLENS_API_URL"),
            ENV_POLL_SECS => option_env!("TRUTHLENS_POLL_SECS"),
            ENV_SESSION_KEY => option_env!("TRUTHLENS_SESSION_KEY"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// 初始化认证状态
///
/// 先订阅会话事件，再从 LocalStorage 恢复会话；恢复完成后守卫离开 Unknown。
pub fn init_auth(ctx: &AuthContext) {
    let set_state = ctx.set_state;
    let client = ctx.client();

    client.session.subscribe(move |event| {
        set_state.update(|state| {
            state.guard.apply(event);
            match event {
                SessionEvent::SignedIn(session) => state.session = Some(session.clone()),
                SessionEvent::SignedOut => state.session = None,
                SessionEvent::Restored { .. } => {}
            }
        });
    });

    let restored = client.session.restore();
    set_state.update(|state| state.session = restored);
}

/// 登录
///
/// 成功后会话事件会更新状态，路由服务自动离开登录页。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> Result<Session, AuthError> {
    let client = ctx.client();
    client.auth.login(&email, &password).await
}

/// 注册并直接登录
pub async fn signup(
    ctx: &AuthContext,
    name: String,
    email: String,
    password: String,
) -> Result<Session, AuthError> {
    let client = ctx.client();
    client.auth.signup(&name, &email, &password).await
}

/// 注销并清除状态
///
/// 导航将由路由服务的守卫状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    ctx.client().auth.logout();
    // 注意：不需要手动导航，路由服务会监听守卫状态变化并自动重定向
}
