//! 受认证保护的数据查询
//!
//! 列表、详情、创建三个视图共用同一套流程：
//! 等待认证探测 → 未认证则停在登录提示 → 已认证则拉取一次数据。
//! 每个查询绑定一个 [`QueryGuard`]，视图销毁时丢弃 guard 即中止查询，
//! 迟到的响应不会再写入已经不存在的视图。

use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use crate::auth::AuthStatus;
use crate::error::{ClientError, ClientResult};
use crate::log_warn;

/// 视图状态
///
/// 初始为 `Loading`，只能迁移一次，之后保持不变，直到视图重新挂载。
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Unauthenticated,
    Ready(T),
    Failed(ClientError),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    /// 从 `Loading` 迁移到 `next`；已处于终态时忽略
    pub fn settle(self, next: ViewState<T>) -> Self {
        match self {
            ViewState::Loading => next,
            terminal => terminal,
        }
    }

    /// 原地执行 [`ViewState::settle`]，用于信号的更新闭包
    pub fn resolve(&mut self, next: ViewState<T>) {
        *self = std::mem::take(self).settle(next);
    }
}

impl<T> From<ClientResult<T>> for ViewState<T> {
    fn from(result: ClientResult<T>) -> Self {
        match result {
            Ok(data) => ViewState::Ready(data),
            Err(e) => ViewState::Failed(e),
        }
    }
}

/// 在已知认证结果的前提下拉取数据
///
/// 认证仍在进行时保持 `Loading` 且不发请求；未认证时不发请求。
pub async fn guarded_fetch<T, F, Fut>(auth: AuthStatus, fetch: F) -> ViewState<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ClientResult<T>>,
{
    if auth.is_loading {
        return ViewState::Loading;
    }
    if !auth.is_authenticated {
        return ViewState::Unauthenticated;
    }
    let result = fetch().await;
    if let Err(e) = &result {
        log_warn!("[Query] fetch failed: {}", e);
    }
    ViewState::from(result)
}

// =========================================================
// 生命周期绑定 (Cancellation)
// =========================================================

/// 查询的持有端，由视图保存；被丢弃时中止对应的 [`QueryTicket`]
#[derive(Debug)]
pub struct QueryGuard {
    handle: AbortHandle,
}

impl Drop for QueryGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// 查询的执行端，只能使用一次
#[derive(Debug)]
pub struct QueryTicket {
    registration: AbortRegistration,
}

impl QueryTicket {
    /// 运行 `fut`；若 guard 在完成前被丢弃，返回 None
    pub async fn run<F: Future>(self, fut: F) -> Option<F::Output> {
        Abortable::new(fut, self.registration).await.ok()
    }
}

/// 创建一对绑定在一起的 guard / ticket
pub fn query_lifetime() -> (QueryGuard, QueryTicket) {
    let (handle, registration) = AbortHandle::new_pair();
    (QueryGuard { handle }, QueryTicket { registration })
}

/// 尚未启动的查询
///
/// 认证探测结束前不会启动；启动至多一次，之后认证状态再变化也不会重新拉取。
#[derive(Debug)]
pub struct PendingQuery<F> {
    slot: Option<(QueryTicket, F)>,
}

impl<F> PendingQuery<F> {
    /// 认证已有结果时取出查询并返回待执行的 future，否则返回 None
    ///
    /// future 的输出为 None 表示对应的 guard 已被丢弃，结果应当丢弃。
    pub fn start<T, Fut>(
        &mut self,
        auth: AuthStatus,
    ) -> Option<impl Future<Output = Option<ViewState<T>>> + use<F, T, Fut>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        if auth.is_loading {
            return None;
        }
        let (ticket, fetch) = self.slot.take()?;
        Some(ticket.run(guarded_fetch(auth, fetch)))
    }
}

/// 为 `fetch` 创建查询：guard 交给视图持有，pending 等待认证结果
pub fn pending_query<F>(fetch: F) -> (QueryGuard, PendingQuery<F>) {
    let (guard, ticket) = query_lifetime();
    (
        guard,
        PendingQuery {
            slot: Some((ticket, fetch)),
        },
    )
}
