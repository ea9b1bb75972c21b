//! 浏览器端 API 客户端装配
//!
//! 构建时选定后端地址，令牌从 LocalStorage 读取。整个应用共用一个实例。

use claims_portal::{ClaimsApi, ClientConfig, Session};
use leptos::prelude::{provide_context, use_context};

use crate::web::{BrowserHttpClient, LocalStorage};

pub type PortalApi = ClaimsApi<BrowserHttpClient, LocalStorage>;

pub fn provide_api() -> PortalApi {
    let config = ClientConfig::from_build_env();
    let api = ClaimsApi::new(&config, BrowserHttpClient, Session::new(LocalStorage));
    provide_context(api.clone());
    api
}

pub fn use_api() -> PortalApi {
    use_context::<PortalApi>().expect("PortalApi should be provided")
}
