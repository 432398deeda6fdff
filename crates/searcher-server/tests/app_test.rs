use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use searcher_config::{BackendConfig, ServerConfig};
use searcher_rest::create_router_from_module;
use searcher_server::di::{build_module, ServiceResolver};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_backend(server: &MockServer, users_status: u16) {
    Mock::given(method("GET"))
        .and(path("/api.php/users"))
        .respond_with(ResponseTemplate::new(users_status).set_body_json(serde_json::json!({
            "users": [
                {"id": "u1", "name": "Ada Lovelace", "email": "ada@example.com"},
                {"id": "u2", "name": "Grace Hopper", "email": "grace@example.com"}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api.php/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "memberships": [
                {"id": "m1", "user_id": "u2", "role": "instructor"},
                {"id": "m2", "user_id": "u7", "role": "student"}
            ]
        })))
        .mount(server)
        .await;
}

fn backend_config(server: &MockServer) -> BackendConfig {
    BackendConfig {
        base_url: format!("{}/", server.uri()),
        ..BackendConfig::default()
    }
}

async fn get(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn requests_to(server: &MockServer, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.url.path() == request_path)
        .count()
}

#[tokio::test]
async fn test_course_members_through_assembled_module() {
    let backend = MockServer::start().await;
    mount_backend(&backend, 200).await;

    let module = build_module(&backend_config(&backend)).unwrap();
    let router = create_router_from_module(module.as_ref(), &ServerConfig::default());

    let (status, body) = get(&router, "/course/members").await;
    assert_eq!(status, StatusCode::OK);
    let memberships = body["memberships"].as_array().unwrap();
    assert_eq!(memberships[0]["id"], "m1");
    assert_eq!(memberships[0]["user"]["name"], "Grace Hopper");
    assert!(memberships[1]["user"].is_null());

    let (status, _) = get(&router, "/course/members").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(requests_to(&backend, "/api.php/users").await, 1);
    assert_eq!(requests_to(&backend, "/api.php/members").await, 2);

    let status = module.membership_service().cache_status();
    assert!(status.loaded);
    assert_eq!(status.cached_users, 2);
}

#[tokio::test]
async fn test_health_reflects_cache_fill() {
    let backend = MockServer::start().await;
    mount_backend(&backend, 200).await;

    let module = build_module(&backend_config(&backend)).unwrap();
    let router = create_router_from_module(module.as_ref(), &ServerConfig::default());

    let (_, before) = get(&router, "/health").await;
    assert_eq!(before["user_cache"]["loaded"], false);

    get(&router, "/course/members").await;

    let (_, after) = get(&router, "/health").await;
    assert_eq!(after["user_cache"]["loaded"], true);
    assert_eq!(after["user_cache"]["cached_users"], 2);
}

#[tokio::test]
async fn test_user_directory_failure_surfaces_as_bad_gateway() {
    let backend = MockServer::start().await;
    mount_backend(&backend, 503).await;

    let module = build_module(&backend_config(&backend)).unwrap();
    let router = create_router_from_module(module.as_ref(), &ServerConfig::default());

    let (status, body) = get(&router, "/course/members").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "CLIENT_REQUEST_ERROR");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Error creating User Cache: "));
    assert_eq!(requests_to(&backend, "/api.php/members").await, 0);
}
