//! 受保护数据查询的 Leptos 绑定
//!
//! 查询与调用它的组件同生共死：组件销毁时 guard 被丢弃，
//! 仍在进行的请求随之中止，结果不会写回。

use std::future::Future;

use claims_portal::{ClientResult, ViewState, pending_query};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{PortalApi, use_api};
use crate::auth::use_auth;

/// 等待认证结果后拉取一次数据
///
/// 返回的信号只会从 `Loading` 迁移一次。
pub fn use_guarded_query<T, F, Fut>(fetch: F) -> ReadSignal<ViewState<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce(PortalApi) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ClientResult<T>> + 'static,
{
    let auth = use_auth();
    let api = use_api();
    let (state, set_state) = signal(ViewState::<T>::Loading);

    let (guard, pending) = pending_query(move || fetch(api));
    let pending = StoredValue::new(pending);
    on_cleanup(move || drop(guard));

    Effect::new(move |_| {
        let status = auth.status().get();
        let Some(run) = pending.try_update_value(|p| p.start(status)).flatten() else {
            return;
        };

        spawn_local(async move {
            if let Some(next) = run.await {
                set_state.try_update(|s| s.resolve(next));
            }
        });
    });

    state
}
