//! 理赔门户前端应用
//!
//! 采用 Context-Driven 架构：
//! - `api`: 全局唯一的 API 客户端
//! - `auth`: 认证状态，页面加载时探测一次
//! - `query`: 受保护数据查询，与组件生命周期绑定
//! - `web::router`: History API 路由
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod auth_button;
    pub mod claim_detail;
    pub mod claims;
    pub mod create_claim;
    pub mod credentials;
    pub mod home;
    mod icons;
    pub mod not_found;
    pub mod site_header;
    pub mod skeleton;
    pub mod toast;
}
mod query;

use claims_portal::AppRoute;
use leptos::prelude::*;

use crate::api::provide_api;
use crate::auth::provide_auth;
use crate::components::claim_detail::ClaimDetailPage;
use crate::components::claims::ClaimsPage;
use crate::components::create_claim::CreateClaimPage;
use crate::components::credentials::{LoginPage, RegisterPage};
use crate::components::home::HomePage;
use crate::components::not_found::NotFoundPage;
use crate::components::toast::{ToastHost, provide_toaster};

// 原生 Web API 封装模块
// 直接基于 web_sys 实现 HTTP、存储与路由，不引入 gloo-* 系列 crate。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::BrowserHttpClient;
    pub use router::{Link, use_router};
    pub use storage::LocalStorage;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Claims => view! { <ClaimsPage /> }.into_any(),
        AppRoute::ClaimDetail(id) => view! { <ClaimDetailPage id=id /> }.into_any(),
        AppRoute::CreateClaim => view! { <CreateClaimPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. API 客户端与会话
    let api = provide_api();

    // 2. 认证上下文，发出唯一一次 whoami
    provide_auth(api);

    // 3. 全局提示
    provide_toaster();

    view! {
        <Router>
            <ToastHost />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
