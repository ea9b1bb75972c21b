//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Login,
    Register,
    /// 理赔列表
    Claims,
    /// 理赔详情
    ClaimDetail(i64),
    /// 提交理赔
    CreateClaim,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/claims" => Self::Claims,
            "/claims/create" => Self::CreateClaim,
            other => match other.strip_prefix("/claims/").map(str::parse::<i64>) {
                Some(Ok(id)) => Self::ClaimDetail(id),
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Claims => "/claims".to_string(),
            Self::ClaimDetail(id) => format!("/claims/{}", id),
            Self::CreateClaim => "/claims/create".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 登录成功后的去向
    pub fn after_login() -> Self {
        Self::Claims
    }

    /// 注册成功后的去向
    pub fn after_register() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register/"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/claims"), AppRoute::Claims);
        assert_eq!(AppRoute::from_path("/claims/create"), AppRoute::CreateClaim);
        assert_eq!(AppRoute::from_path("/claims/17"), AppRoute::ClaimDetail(17));
        assert_eq!(AppRoute::from_path("/claims/17?tab=images"), AppRoute::ClaimDetail(17));
        assert_eq!(AppRoute::from_path("/claims/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/claims/1/2"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Claims,
            AppRoute::ClaimDetail(3),
            AppRoute::CreateClaim,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }
}
