//! 认证模块
//!
//! - `AuthStatus`: 认证探测的结果，每次页面加载只从 loading 迁移一次
//! - `check_auth`: 发出唯一一次 whoami 请求
//! - `authenticate` / `sign_out`: 登录、注册、注销流程

use claims_portal_shared::Credentials;
use claims_portal_shared::validation::{CredentialField, ValidationErrors};

use crate::api::ClaimsApi;
use crate::error::{ClientError, ErrorStatus};
use crate::notify::{GENERIC_FAILURE, Notification};
use crate::request::HttpClient;
use crate::route::AppRoute;
use crate::session::SessionStore;
use crate::{log_error, log_info};

/// 认证状态
///
/// 探测进行中为 `(loading, !authenticated)`；结束后 loading 恒为 false，
/// authenticated 仅取决于 whoami 是否成功，不区分“未登录”与“服务不可达”。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthStatus {
    pub is_loading: bool,
    pub is_authenticated: bool,
}

impl AuthStatus {
    pub const CHECKING: Self = Self {
        is_loading: true,
        is_authenticated: false,
    };

    pub const SIGNED_IN: Self = Self {
        is_loading: false,
        is_authenticated: true,
    };

    pub const SIGNED_OUT: Self = Self {
        is_loading: false,
        is_authenticated: false,
    };

    /// 以探测结果结束 loading；已结束的状态不再变化
    pub fn settle(self, authenticated: bool) -> Self {
        if !self.is_loading {
            return self;
        }
        if authenticated {
            Self::SIGNED_IN
        } else {
            Self::SIGNED_OUT
        }
    }
}

impl Default for AuthStatus {
    fn default() -> Self {
        Self::CHECKING
    }
}

/// 探测当前会话
///
/// 只发一次请求，不重试；任何失败都视为未认证。
pub async fn check_auth<C: HttpClient, S: SessionStore>(api: &ClaimsApi<C, S>) -> AuthStatus {
    let authenticated = match api.whoami().await {
        Ok(()) => true,
        Err(e) => {
            log_info!("[Auth] whoami failed, treating as signed out: {}", e);
            false
        }
    };
    AuthStatus::CHECKING.settle(authenticated)
}

// =========================================================
// 登录 / 注册 / 注销
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub notification: Notification,
    /// 成功时的跳转目标
    pub redirect: Option<AppRoute>,
    pub status: AuthStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAttempt {
    /// 表单未通过校验，未发请求
    Invalid(ValidationErrors<CredentialField>),
    Done(AuthOutcome),
}

/// 服务端给出的拒绝原因可以直接展示，网络/解析类错误只展示通用文案
fn failure_text(err: &ClientError) -> String {
    match err.status {
        ErrorStatus::Network | ErrorStatus::Decode | ErrorStatus::Invalid => {
            GENERIC_FAILURE.to_string()
        }
        _ => err.message().to_string(),
    }
}

/// 登录或注册
///
/// 成功后令牌写入会话，调用方据 `redirect` 跳转。
pub async fn authenticate<C: HttpClient, S: SessionStore>(
    api: &ClaimsApi<C, S>,
    mode: AuthMode,
    credentials: Credentials,
) -> AuthAttempt {
    if let Err(errors) = credentials.validate() {
        return AuthAttempt::Invalid(errors);
    }
    let credentials = Credentials {
        email: credentials.email.trim().to_string(),
        password: credentials.password,
    };

    let result = match mode {
        AuthMode::Login => api.login(credentials).await,
        AuthMode::Register => api.register(credentials).await,
    };

    let outcome = match result {
        Ok(resp) => {
            api.session()
                .store_tokens(&resp.access_token, &resp.refresh_token);
            log_info!("[Auth] {:?} succeeded", mode);
            AuthOutcome {
                notification: Notification::success(resp.message),
                redirect: Some(match mode {
                    AuthMode::Login => AppRoute::after_login(),
                    AuthMode::Register => AppRoute::after_register(),
                }),
                status: AuthStatus::SIGNED_IN,
            }
        }
        Err(e) => {
            log_error!("[Auth] {:?} failed: {}", mode, e);
            AuthOutcome {
                notification: Notification::error(failure_text(&e)),
                redirect: None,
                status: AuthStatus::SIGNED_OUT,
            }
        }
    };
    AuthAttempt::Done(outcome)
}

/// 注销：清除两个令牌，返回登录页路由
pub fn sign_out<C: HttpClient, S: SessionStore>(api: &ClaimsApi<C, S>) -> AppRoute {
    api.session().clear();
    log_info!("[Auth] signed out");
    AppRoute::Login
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REFRESH_TOKEN_KEY;
    use crate::notify::NotificationLevel;
    use crate::testing::{test_api, test_api_with_store, url};
    use serde_json::json;

    fn creds() -> Credentials {
        Credentials {
            email: " john@example.com ".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn settle_happens_once() {
        let status = AuthStatus::default();
        assert!(status.is_loading);
        assert!(!status.is_authenticated);

        let settled = status.settle(true);
        assert_eq!(settled, AuthStatus::SIGNED_IN);
        assert_eq!(settled.settle(false), AuthStatus::SIGNED_IN);
        assert_eq!(AuthStatus::CHECKING.settle(false).settle(true), AuthStatus::SIGNED_OUT);
    }

    #[tokio::test]
    async fn test_check_auth_success() {
        let (api, client) = test_api();
        client.mock_response(&url("/api/auth/whoami"), 200, json!({ "email": "a@b.io" }));

        assert_eq!(check_auth(&api).await, AuthStatus::SIGNED_IN);
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test]
    async fn test_check_auth_rejected_or_unreachable() {
        let (api, client) = test_api();
        client.mock_response(&url("/api/auth/whoami"), 401, json!({}));
        assert_eq!(check_auth(&api).await, AuthStatus::SIGNED_OUT);

        client.mock_network_error(&url("/api/auth/whoami"));
        assert_eq!(check_auth(&api).await, AuthStatus::SIGNED_OUT);

        client.mock_response(&url("/api/auth/whoami"), 500, json!({}));
        assert_eq!(check_auth(&api).await, AuthStatus::SIGNED_OUT);
    }

    #[tokio::test]
    async fn test_login_stores_tokens_and_redirects_to_claims() {
        let (api, client, store) = test_api_with_store();
        client.mock_response(
            &url("/api/auth/login"),
            200,
            json!({ "message": "Logged in successfully", "access_token": "acc", "refresh_token": "ref" }),
        );

        let AuthAttempt::Done(outcome) = authenticate(&api, AuthMode::Login, creds()).await else {
            panic!("expected a completed attempt");
        };

        assert_eq!(outcome.notification, Notification::success("Logged in successfully"));
        assert_eq!(outcome.redirect, Some(AppRoute::Claims));
        assert_eq!(outcome.status, AuthStatus::SIGNED_IN);
        assert_eq!(api.session().access_token().as_deref(), Some("acc"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("ref"));
    }

    #[tokio::test]
    async fn test_register_redirects_home() {
        let (api, client) = test_api();
        client.mock_response(
            &url("/api/auth/register"),
            200,
            json!({ "message": "User created successfully", "access_token": "a", "refresh_token": "r" }),
        );

        let AuthAttempt::Done(outcome) = authenticate(&api, AuthMode::Register, creds()).await
        else {
            panic!("expected a completed attempt");
        };
        assert_eq!(outcome.redirect, Some(AppRoute::Home));
    }

    #[tokio::test]
    async fn test_login_failure_shows_server_error() {
        let (api, client) = test_api();
        client.mock_response(&url("/api/auth/login"), 401, json!({ "error": "Invalid credentials" }));

        let AuthAttempt::Done(outcome) = authenticate(&api, AuthMode::Login, creds()).await else {
            panic!("expected a completed attempt");
        };

        assert_eq!(outcome.notification.level, NotificationLevel::Error);
        assert_eq!(outcome.notification.message, "Invalid credentials");
        assert_eq!(outcome.redirect, None);
        assert_eq!(api.session().access_token(), None);
    }

    #[tokio::test]
    async fn test_network_failure_shows_generic_message() {
        let (api, client) = test_api();
        client.mock_network_error(&url("/api/auth/register"));

        let AuthAttempt::Done(outcome) = authenticate(&api, AuthMode::Register, creds()).await
        else {
            panic!("expected a completed attempt");
        };
        assert_eq!(outcome.notification, Notification::generic_failure());
    }

    #[tokio::test]
    async fn test_invalid_credentials_send_nothing() {
        let (api, client) = test_api();
        let attempt = authenticate(
            &api,
            AuthMode::Login,
            Credentials {
                email: "not-an-email".into(),
                password: String::new(),
            },
        )
        .await;

        let AuthAttempt::Invalid(errors) = attempt else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(client.request_count(), 0);
    }

    #[test]
    fn sign_out_clears_both_tokens() {
        let (api, _client, store) = test_api_with_store();
        api.session().store_tokens("a", "r");

        assert_eq!(sign_out(&api), AppRoute::Login);
        assert_eq!(api.session().access_token(), None);
        assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
    }
}
