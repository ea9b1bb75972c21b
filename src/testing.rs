//! 测试辅助：预置的 API 客户端与样例数据

use std::rc::Rc;

use serde_json::{Value, json};

use crate::api::ClaimsApi;
use crate::config::ClientConfig;
use crate::request::MockHttpClient;
use crate::session::{MemoryStore, Session};

pub const BASE: &str = "http://api.test";

pub type TestApi = ClaimsApi<Rc<MockHttpClient>, MemoryStore>;

pub fn test_api() -> (TestApi, Rc<MockHttpClient>) {
    let (api, client, _store) = test_api_with_store();
    (api, client)
}

/// 额外返回底层存储，便于直接检查写入的键
pub fn test_api_with_store() -> (TestApi, Rc<MockHttpClient>, MemoryStore) {
    let client = Rc::new(MockHttpClient::new());
    let store = MemoryStore::new();
    let api = ClaimsApi::new(
        &ClientConfig::new(BASE),
        client.clone(),
        Session::new(store.clone()),
    );
    (api, client, store)
}

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

pub fn claim_json(id: i64) -> Value {
    json!({
        "id": id,
        "user_id": 7,
        "author": 7,
        "policy_number": format!("pol-{}", id),
        "date_of_accident": "Fri, 05 Jan 2024 00:00:00 GMT",
        "accident_type": "Car accident",
        "description": "Rear-ended at a light",
        "damage_details": "Bumper and trunk",
        "injuries_reported": true,
        "images": [id * 10, id * 10 + 1]
    })
}

pub fn list_json(ids: &[i64]) -> Value {
    json!({
        "claims": ids.iter().map(|id| claim_json(*id)).collect::<Vec<_>>(),
        "pages": 1,
        "total": ids.len(),
        "current_page": 1
    })
}

pub fn detail_json(id: i64) -> Value {
    json!({
        "claim": claim_json(id),
        "images": [
            format!("https://files.test/{}/0.png", id),
            format!("https://files.test/{}/1.png", id)
        ]
    })
}
