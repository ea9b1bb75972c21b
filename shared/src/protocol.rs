use crate::validation::NewClaim;
use crate::{
    AuthResponse, ClaimDetailResponse, ClaimListResponse, CreateClaimResponse, Credentials, WhoAmI,
};
use serde::de::DeserializeOwned;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

// =========================================================
// 请求体 (Request Body)
// =========================================================

/// 待上传的文件，内容已读入内存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// 平台无关的 multipart/form-data 描述
///
/// 由具体的 HTTP 客户端负责转换为浏览器 `FormData` 等实际载体。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: UploadFile) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file,
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn get(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.name() == name)
    }

    /// 读取文本字段的值
    pub fn text_value(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            FormPart::Text { value, .. } => Some(value),
            FormPart::File { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(String),
    Multipart(MultipartForm),
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (or prefix for parameterised paths).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// 实际请求路径，带路径参数或查询串的请求覆盖此方法
    fn path(&self) -> String {
        Self::PATH.to_string()
    }

    fn body(&self) -> Result<RequestBody, serde_json::Error> {
        Ok(RequestBody::Empty)
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// 探测当前会话是否有效
#[derive(Debug, Clone, Copy, Default)]
pub struct WhoAmIRequest;

impl ApiRequest for WhoAmIRequest {
    type Response = WhoAmI;
    const PATH: &'static str = "/api/auth/whoami";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone)]
pub struct LoginRequest(pub Credentials);

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn body(&self) -> Result<RequestBody, serde_json::Error> {
        Ok(RequestBody::Json(serde_json::to_string(&self.0)?))
    }
}

#[derive(Debug, Clone)]
pub struct RegisterRequest(pub Credentials);

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/api/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn body(&self) -> Result<RequestBody, serde_json::Error> {
        Ok(RequestBody::Json(serde_json::to_string(&self.0)?))
    }
}

/// List claims (分页参数固定由调用方给出)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListClaimsRequest {
    pub page: u32,
    pub per_page: u32,
}

impl ApiRequest for ListClaimsRequest {
    type Response = ClaimListResponse;
    const PATH: &'static str = "/api/claims";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}?page={}&per_page={}", Self::PATH, self.page, self.per_page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetClaimRequest {
    pub id: i64,
}

impl ApiRequest for GetClaimRequest {
    type Response = ClaimDetailResponse;
    const PATH: &'static str = "/api/claims";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}/{}", Self::PATH, self.id)
    }
}

/// Create a claim (multipart 上传，图片按下标编入 `images[i]`)
#[derive(Debug, Clone)]
pub struct CreateClaimRequest(pub NewClaim);

impl ApiRequest for CreateClaimRequest {
    type Response = CreateClaimResponse;
    const PATH: &'static str = "/api/claims";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn body(&self) -> Result<RequestBody, serde_json::Error> {
        Ok(RequestBody::Multipart(self.0.to_multipart()))
    }
}
