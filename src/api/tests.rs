use super::*;
use crate::error::ErrorStatus;
use crate::request::RequestBody;
use crate::testing::{claim_json, detail_json, list_json, test_api, url};
use chrono::NaiveDate;
use claims_portal_shared::protocol::{FormPart, HttpMethod, UploadFile};
use serde_json::json;

// =========================================================
// 拦截器 (Authorization 头)
// =========================================================

#[tokio::test]
async fn test_no_token_sends_no_authorization_header() {
    let (api, client) = test_api();
    client.mock_response(&url("/api/claims?page=1&per_page=1000"), 200, list_json(&[]));

    api.list_claims().await.unwrap();

    let req = client.last_request().unwrap();
    assert_eq!(req.header("Authorization"), None);
}

#[tokio::test]
async fn test_every_request_carries_bearer_token() {
    let (api, client) = test_api();
    api.session().store_tokens("tok-123", "ref-456");
    client.mock_response(&url("/api/auth/whoami"), 200, json!({ "email": "a@b.io" }));
    client.mock_response(&url("/api/claims?page=1&per_page=1000"), 200, list_json(&[1]));
    client.mock_response(&url("/api/claims/1"), 200, detail_json(1));

    api.whoami().await.unwrap();
    api.list_claims().await.unwrap();
    api.get_claim(1).await.unwrap();

    let reqs = client.requests.borrow();
    assert_eq!(reqs.len(), 3);
    for req in reqs.iter() {
        assert_eq!(req.header("Authorization"), Some("Bearer tok-123"));
    }
}

#[tokio::test]
async fn test_token_is_read_per_request() {
    let (api, client) = test_api();
    client.mock_response(&url("/api/auth/whoami"), 200, json!({}));

    api.whoami().await.unwrap();
    api.session().store_tokens("late", "r");
    api.whoami().await.unwrap();
    api.session().clear();
    api.whoami().await.unwrap();

    let reqs = client.requests.borrow();
    assert_eq!(reqs[0].header("Authorization"), None);
    assert_eq!(reqs[1].header("Authorization"), Some("Bearer late"));
    assert_eq!(reqs[2].header("Authorization"), None);
}

// =========================================================
// Endpoints
// =========================================================

#[tokio::test]
async fn test_list_uses_fixed_page_size() {
    let (api, client) = test_api();
    client.mock_response(&url("/api/claims?page=1&per_page=1000"), 200, list_json(&[1, 2]));

    let list = api.list_claims().await.unwrap();

    assert_eq!(list.claims.len(), 2);
    assert_eq!(list.total, 2);
    let req = client.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.url, url("/api/claims?page=1&per_page=1000"));
}

#[tokio::test]
async fn test_get_claim_by_id() {
    let (api, client) = test_api();
    client.mock_response(&url("/api/claims/9"), 200, detail_json(9));

    let detail = api.get_claim(9).await.unwrap();

    assert_eq!(detail.claim.id, 9);
    assert_eq!(detail.images.len(), 2);
}

#[tokio::test]
async fn test_whoami_failure_statuses() {
    let (api, client) = test_api();
    client.mock_response(&url("/api/auth/whoami"), 401, json!({ "msg": "Missing Authorization Header" }));

    let err = api.whoami().await.unwrap_err();
    assert_eq!(err.status, ErrorStatus::Unauthorized);

    client.mock_network_error(&url("/api/auth/whoami"));
    let err = api.whoami().await.unwrap_err();
    assert_eq!(err.status, ErrorStatus::Network);
}

#[tokio::test]
async fn test_login_posts_json_credentials() {
    let (api, client) = test_api();
    client.mock_response(
        &url("/api/auth/login"),
        200,
        json!({ "message": "Logged in successfully", "access_token": "a", "refresh_token": "r" }),
    );

    let resp = api
        .login(Credentials {
            email: "john@example.com".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();

    assert_eq!(resp.access_token, "a");
    let req = client.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    let RequestBody::Json(body) = &req.body else {
        panic!("expected json body");
    };
    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(body["email"], "john@example.com");
}

#[tokio::test]
async fn test_create_claim_posts_multipart() {
    let (api, client) = test_api();
    api.session().store_tokens("tok", "ref");
    client.mock_response(
        &url("/api/claims"),
        201,
        json!({ "claim_id": 5, "message": "Claim created", "token": "t" }),
    );

    let claim = NewClaim {
        policy_number: "pol-1".into(),
        date_of_accident: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        accident_type: "Car".into(),
        description: "d".into(),
        damage_details: "dd".into(),
        injuries_reported: false,
        images: vec![
            UploadFile::new("a.png", "image/png", vec![1]),
            UploadFile::new("b.gif", "image/gif", vec![2]),
        ],
    };
    let resp = api.create_claim(claim).await.unwrap();
    assert_eq!(resp.claim_id, 5);

    let req = client.last_request().unwrap();
    assert_eq!(req.header("Authorization"), Some("Bearer tok"));
    assert_eq!(req.header("Content-Type"), None);
    let RequestBody::Multipart(form) = &req.body else {
        panic!("expected multipart body");
    };
    assert_eq!(form.text_value("injuries_reported"), Some("false"));
    match form.get("images[1]") {
        Some(FormPart::File { file, .. }) => assert_eq!(file.file_name, "b.gif"),
        other => panic!("unexpected part {:?}", other),
    }
}

#[tokio::test]
async fn test_decode_failure_is_reported() {
    let (api, client) = test_api();
    client.mock_response(&url("/api/claims/3"), 200, json!({ "unexpected": true }));

    let err = api.get_claim(3).await.unwrap_err();
    assert_eq!(err.status, ErrorStatus::Decode);
    assert!(err.to_string().contains("claims.get(3)"));
}

#[tokio::test]
async fn test_list_and_detail_agree_on_claim_fields() {
    let (api, client) = test_api();
    client.mock_response(&url("/api/claims?page=1&per_page=1000"), 200, list_json(&[4, 8]));
    client.mock_response(&url("/api/claims/8"), 200, detail_json(8));

    let list = api.list_claims().await.unwrap();
    let from_list = list.claims.iter().find(|c| c.id == 8).unwrap();
    let from_detail = api.get_claim(8).await.unwrap().claim;

    assert_eq!(from_list.policy_number, from_detail.policy_number);
    assert_eq!(from_list.accident_type, from_detail.accident_type);
    assert_eq!(from_list.damage_details, from_detail.damage_details);
    assert_eq!(from_list.date_of_accident, from_detail.date_of_accident);
    assert_eq!(claim_json(8)["policy_number"], from_detail.policy_number.as_str());
}
