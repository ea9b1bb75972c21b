use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;
pub mod validation;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 理赔记录
///
/// 对应 API 返回的 claim 对象。`date_of_accident` 保留服务端原始字符串，
/// 展示时再经 [`date::display_date`] 解析，保证列表与详情两处读到的值一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub author: Option<i64>,
    #[serde(default)]
    pub policy_number: String,
    pub date_of_accident: String,
    pub accident_type: String,
    pub description: String,
    pub damage_details: String,
    #[serde(default)]
    pub injuries_reported: bool,
    /// 关联图片的 ID 列表，只用于计数
    #[serde(default)]
    pub images: Vec<i64>,
}

impl Claim {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// `GET /api/claims` 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimListResponse {
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub current_page: u32,
}

/// `GET /api/claims/:id` 的响应，图片 URL 由服务端解析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimDetailResponse {
    pub claim: Claim,
    #[serde(default)]
    pub images: Vec<String>,
}

/// `POST /api/claims` 的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClaimResponse {
    pub claim_id: i64,
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// 登录/注册请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// 登录/注册成功后的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhoAmI {
    #[serde(default)]
    pub email: Option<String>,
}

/// 服务端错误响应体，`error` 与 `message` 两种写法都存在
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_text(self) -> Option<String> {
        self.error.or(self.message).filter(|s| !s.trim().is_empty())
    }
}
