//! 理赔门户客户端核心
//!
//! 与平台无关的部分：HTTP 抽象、会话、API 封装、认证探测、
//! 受保护的数据查询以及各视图的渲染策略。浏览器相关实现在 frontend crate 中。

#[macro_use]
pub mod logging;

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod notify;
pub mod query;
pub mod request;
pub mod route;
pub mod session;
pub mod views;

#[cfg(test)]
mod testing;

pub use api::ClaimsApi;
pub use auth::{AuthAttempt, AuthMode, AuthOutcome, AuthStatus};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorStatus};
pub use notify::{Notification, NotificationLevel, ToastSlot};
pub use query::{PendingQuery, QueryGuard, ViewState, pending_query};
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use route::AppRoute;
pub use session::{MemoryStore, Session, SessionStore};
pub use views::Screen;
