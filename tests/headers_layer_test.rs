//! Security headers applied through the Axum layer.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use tower::ServiceExt;

use secure_remediation::security::{with_security_headers, SECURITY_HEADERS};

fn request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_router_emits_security_headers() {
    let app = with_security_headers(Router::new().route("/", get(|| async { "ok" })));

    let response = app.oneshot(request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    for (name, value) in SECURITY_HEADERS {
        assert_eq!(response.headers().get(name).unwrap(), value, "header {name}");
    }
}

#[tokio::test]
async fn test_layer_overrides_handler_values() {
    let app = with_security_headers(Router::new().route(
        "/",
        get(|| async { ([("x-frame-options", "SAMEORIGIN")], "ok") }),
    ));

    let response = app.oneshot(request("/")).await.unwrap();
    let values: Vec<_> = response.headers().get_all("x-frame-options").iter().collect();
    assert_eq!(values, ["DENY"]);
}

#[tokio::test]
async fn test_stateful_router() {
    #[derive(Clone)]
    struct AppState {
        greeting: &'static str,
    }

    let router = Router::new().route(
        "/",
        get(|axum::extract::State(state): axum::extract::State<AppState>| async move {
            state.greeting
        }),
    );
    let app = with_security_headers(router).with_state(AppState { greeting: "hi" });

    let response = app.oneshot(request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("referrer-policy").unwrap(), "strict-origin-when-cross-origin");
}
