// =========================================================
// 客户端配置 (Client Configuration)
// =========================================================

/// 这些是默认值，构建时若设置了 `CLAIMS_API_URL` 则以其为准
pub const DEV_BASE_URL: &str = "http://127.0.0.1:5328";
pub const PROD_BASE_URL: &str = "https://claims-api.fly.dev";

/// 列表页固定拉取第一页的大页
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// 会话令牌在本地存储中的键
pub const ACCESS_TOKEN_KEY: &str = "jwt";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// 按构建环境选择后端地址
    ///
    /// debug 构建指向本地开发服务，release 构建指向线上服务。
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("CLAIMS_API_URL"), cfg!(debug_assertions))
    }

    fn resolve(override_url: Option<&str>, development: bool) -> Self {
        match override_url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => Self::new(url),
            None if development => Self::new(DEV_BASE_URL),
            None => Self::new(PROD_BASE_URL),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
