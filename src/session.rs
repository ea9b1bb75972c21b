//! 会话模块
//!
//! 会话令牌通过显式的 `Session` 对象注入到 API 客户端，
//! 具体存放位置由 `SessionStore` 实现决定（浏览器 localStorage、内存等）。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use claims_portal_shared::BEARER_PREFIX;

use crate::config::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// 键值存储抽象
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    /// 写入成功返回 true
    fn set(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str) -> bool;
}

/// 内存存储，页面/进程结束即丢失
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.borrow_mut().remove(key);
        true
    }
}

/// 会话
///
/// 只持有令牌，不做过期检查；令牌是否有效由服务端判定。
#[derive(Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Option<String> {
        self.store
            .get(ACCESS_TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
    }

    /// `Authorization` 头的值，无令牌时为 None
    pub fn bearer(&self) -> Option<String> {
        self.access_token()
            .map(|token| format!("{}{}", BEARER_PREFIX, token))
    }

    /// 登录/注册成功后保存两个令牌
    pub fn store_tokens(&self, access_token: &str, refresh_token: &str) {
        self.store.set(ACCESS_TOKEN_KEY, access_token);
        self.store.set(REFRESH_TOKEN_KEY, refresh_token);
    }

    /// 注销
    pub fn clear(&self) {
        self.store.delete(ACCESS_TOKEN_KEY);
        self.store.delete(REFRESH_TOKEN_KEY);
    }
}
