//! 认证模块
//!
//! 应用根部提供唯一的 `AuthContext`：每次页面加载只发一次 whoami，
//! 登录、注册、注销时直接更新状态，各视图不再各自探测。

use claims_portal::AuthStatus;
use claims_portal::auth::check_auth;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::PortalApi;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    status: RwSignal<AuthStatus>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            status: RwSignal::new(AuthStatus::CHECKING),
        }
    }

    pub fn status(&self) -> Signal<AuthStatus> {
        self.status.into()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.get().is_authenticated
    }

    /// 登录 / 注册 / 注销后写入新的状态
    pub fn set(&self, status: AuthStatus) {
        self.status.set(status);
    }

    /// 探测结果只在仍处于 loading 时生效
    fn settle(&self, authenticated: bool) {
        self.status
            .try_update(|s| *s = s.settle(authenticated));
    }
}

/// 创建认证上下文并发出本次页面加载的认证探测
pub fn provide_auth(api: PortalApi) -> AuthContext {
    let ctx = AuthContext::new();
    provide_context(ctx);

    spawn_local(async move {
        let status = check_auth(&api).await;
        ctx.settle(status.is_authenticated);
    });

    ctx
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
