use std::fmt;

use claims_portal_shared::ErrorBody;

// =========================================================
// 错误状态枚举
// =========================================================

/// 错误状态枚举
/// 描述一次 API 调用失败的语义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    /// 请求未能到达服务端或未得到响应
    Network,
    /// 401 / 422: 会话缺失、过期或被拒
    Unauthorized,
    /// 404: 资源未找到
    NotFound,
    /// 其余 4xx 以及意料之外的 1xx / 3xx: 服务端拒绝了请求内容
    Rejected(u16),
    /// 5xx
    Server(u16),
    /// 响应体无法解析
    Decode,
    /// 请求在发出前就无法构建
    Invalid,
}

impl ErrorStatus {
    /// 将非 2xx 状态码映射为错误语义
    pub fn from_status_code(code: u16) -> Self {
        match code {
            401 | 422 => ErrorStatus::Unauthorized,
            404 => ErrorStatus::NotFound,
            500..=599 => ErrorStatus::Server(code),
            _ => ErrorStatus::Rejected(code),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ErrorStatus::Network => "NETWORK_ERROR",
            ErrorStatus::Unauthorized => "UNAUTHORIZED",
            ErrorStatus::NotFound => "RESOURCE_NOT_FOUND",
            ErrorStatus::Rejected(_) => "REQUEST_REJECTED",
            ErrorStatus::Server(_) => "SERVER_ERROR",
            ErrorStatus::Decode => "RESPONSE_PARSE_ERROR",
            ErrorStatus::Invalid => "INVALID_REQUEST",
        }
    }
}

// =========================================================
// 错误上下文追踪
// =========================================================

/// 结构化的错误追踪片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSpan {
    /// 操作名称，如 "claims.list", "auth.login"
    pub operation: String,
    pub detail: Option<String>,
}

// =========================================================
// 核心错误类型
// =========================================================

/// 客户端错误
///
/// - status: 错误语义
/// - message: 错误消息（服务端给出的 `error` / `message` 优先）
/// - spans: 结构化的调用追踪栈
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub status: ErrorStatus,
    pub message: String,
    spans: Vec<ErrorSpan>,
}

impl ClientError {
    pub fn new(status: ErrorStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorStatus::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorStatus::Decode, message)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorStatus::Invalid, message)
    }

    /// 由非 2xx 响应构造，尽量取出服务端的错误文本
    pub fn from_response(code: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_text)
            .unwrap_or_else(|| format!("request failed with status {}", code));
        Self::new(ErrorStatus::from_status_code(code), message)
    }

    // --- Context builders ---

    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan {
            operation: operation.into(),
            detail: None,
        });
        self
    }

    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan {
            operation: operation.into(),
            detail: Some(detail.into()),
        });
        self
    }

    // --- Accessors ---

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.error_code(), self.message)?;

        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::decode(e.to_string())
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
