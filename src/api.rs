use claims_portal_shared::protocol::{
    ApiRequest, CreateClaimRequest, GetClaimRequest, ListClaimsRequest, LoginRequest,
    RegisterRequest, WhoAmIRequest,
};
use claims_portal_shared::validation::NewClaim;
use claims_portal_shared::{
    AuthResponse, ClaimDetailResponse, ClaimListResponse, CreateClaimResponse, Credentials,
    HEADER_AUTHORIZATION,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::log_info;
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use crate::session::{Session, SessionStore};

/// 理赔 API 客户端
///
/// 所有请求都发往配置的 `base_url`。发送前读取会话令牌，
/// 存在时附加 `Authorization: Bearer <token>`，否则以匿名身份发送。
/// 不做令牌刷新，也不做重试。
#[derive(Clone)]
pub struct ClaimsApi<C, S> {
    base_url: String,
    page_size: u32,
    client: C,
    session: Session<S>,
}

impl<C: HttpClient, S: SessionStore> ClaimsApi<C, S> {
    pub fn new(config: &ClientConfig, client: C, session: Session<S>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            client,
            session,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 构建请求并执行拦截：附加认证头
    pub fn prepare<R: ApiRequest>(&self, request: &R) -> ClientResult<HttpRequest> {
        let body = request
            .body()
            .map_err(|e| ClientError::invalid(e.to_string()))?;
        let mut req = HttpRequest::new(&self.url(&request.path()), R::METHOD).with_body(body);

        if let Some(bearer) = self.session.bearer() {
            req = req.with_header(HEADER_AUTHORIZATION, &bearer);
        }
        Ok(req)
    }

    /// 发送请求，非 2xx 视为错误，不解析响应体
    pub async fn execute<R: ApiRequest>(&self, request: &R) -> ClientResult<HttpResponse> {
        let req = self.prepare(request)?;
        log_info!("[Api] {} {}", R::METHOD.as_str(), request.path());

        let resp = self
            .client
            .send(req)
            .await
            .map_err(|e| e.in_op_with("http.send", request.path()))?;
        resp.error_for_status()
    }

    /// 发送请求并解析为该请求对应的响应类型
    pub async fn send<R: ApiRequest>(&self, request: &R) -> ClientResult<R::Response> {
        let resp = self.execute(request).await?;
        resp.json::<R::Response>()
            .map_err(|e| e.in_op_with("http.decode", request.path()))
    }

    // =========================================================
    // Endpoints
    // =========================================================

    /// 探测会话，2xx 即视为已认证，响应体不作约束
    pub async fn whoami(&self) -> ClientResult<()> {
        self.execute(&WhoAmIRequest)
            .await
            .map(|_| ())
            .map_err(|e| e.in_op("auth.whoami"))
    }

    pub async fn login(&self, credentials: Credentials) -> ClientResult<AuthResponse> {
        self.send(&LoginRequest(credentials))
            .await
            .map_err(|e| e.in_op("auth.login"))
    }

    pub async fn register(&self, credentials: Credentials) -> ClientResult<AuthResponse> {
        self.send(&RegisterRequest(credentials))
            .await
            .map_err(|e| e.in_op("auth.register"))
    }

    /// 第一页，页大小取配置值
    pub async fn list_claims(&self) -> ClientResult<ClaimListResponse> {
        let request = ListClaimsRequest {
            page: 1,
            per_page: self.page_size,
        };
        self.send(&request)
            .await
            .map_err(|e| e.in_op("claims.list"))
    }

    pub async fn get_claim(&self, id: i64) -> ClientResult<ClaimDetailResponse> {
        self.send(&GetClaimRequest { id })
            .await
            .map_err(|e| e.in_op_with("claims.get", id.to_string()))
    }

    pub async fn create_claim(&self, claim: NewClaim) -> ClientResult<CreateClaimResponse> {
        self.send(&CreateClaimRequest(claim))
            .await
            .map_err(|e| e.in_op("claims.create"))
    }
}

#[cfg(test)]
mod tests;
