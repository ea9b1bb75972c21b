//! 视图渲染策略
//!
//! 把 [`ViewState`] 翻译为视图应当呈现的画面。与 DOM 无关，
//! 前端组件只负责把 [`Screen`] 画出来。

pub mod claim_detail;
pub mod claims_table;
pub mod create_claim;

use crate::error::ClientError;
use crate::query::ViewState;
use crate::route::AppRoute;

/// 受保护视图的画面
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<T> {
    /// 骨架占位
    Skeleton,
    /// 未登录提示，带登录入口
    LoginPrompt,
    Content(T),
    /// 立即跳转
    Redirect(AppRoute),
}

impl<T> Screen<T> {
    /// 加载与未认证两种情况对所有视图一致，其余交给调用方
    pub fn gate<U>(
        state: &ViewState<U>,
        ready: impl FnOnce(&U) -> Screen<T>,
        failed: impl FnOnce(&ClientError) -> Screen<T>,
    ) -> Screen<T> {
        match state {
            ViewState::Loading => Screen::Skeleton,
            ViewState::Unauthenticated => Screen::LoginPrompt,
            ViewState::Ready(data) => ready(data),
            ViewState::Failed(e) => failed(e),
        }
    }
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
