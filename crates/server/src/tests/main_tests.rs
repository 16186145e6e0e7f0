use super::*;
use axum::{body, body::Body, http::Request};
use tower::ServiceExt;

fn test_app() -> Router {
    build_router(AppState {
        activities: Arc::new(RwLock::new(seed_catalog())),
    })
}

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

async fn fetch_catalog(app: &Router) -> ActivityCatalog {
    let request = Request::get("/activities")
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_slice(&read_body(response).await).expect("catalog json")
}

async fn detail_of(response: axum::response::Response) -> String {
    let body: ErrorDetail = serde_json::from_slice(&read_body(response).await).expect("detail");
    body.detail
}

#[tokio::test]
async fn healthz_reports_ok() {
    let request = Request::get("/healthz")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_body(response).await, b"ok");
}

#[tokio::test]
async fn activities_route_returns_seeded_catalog_in_order() {
    let catalog = fetch_catalog(&test_app()).await;

    assert_eq!(catalog.len(), 9);
    assert_eq!(
        catalog.keys().next().map(String::as_str),
        Some("Chess Club")
    );
    assert!(catalog.contains_key("Club de Robótica"));
    assert_eq!(catalog["Chess Club"].max_participants, 12);
}

#[tokio::test]
async fn signup_route_adds_participant() {
    let app = test_app();
    let request = Request::post("/activities/Chess%20Club/signup?email=tester@mergington.edu")
        .body(Body::empty())
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body: MessageResponse =
        serde_json::from_slice(&read_body(response).await).expect("message json");
    assert_eq!(
        body.message,
        "Signed up tester@mergington.edu for Chess Club"
    );

    let catalog = fetch_catalog(&app).await;
    assert!(catalog["Chess Club"]
        .participants
        .contains(&"tester@mergington.edu".to_string()));
}

#[tokio::test]
async fn signup_route_rejects_duplicate_with_detail() {
    let app = test_app();
    let request = Request::post("/activities/Chess%20Club/signup?email=michael@mergington.edu")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        detail_of(response).await,
        "Student already signed up for this activity"
    );
}

#[tokio::test]
async fn signup_route_normalizes_before_duplicate_check() {
    let app = test_app();
    let request =
        Request::post("/activities/Chess%20Club/signup?email=%20%20MICHAEL@MERGINGTON.EDU%20")
            .body(Body::empty())
            .expect("request");

    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_route_rejects_malformed_email() {
    let app = test_app();
    let request = Request::post("/activities/Chess%20Club/signup?email=not-an-email")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(detail_of(response).await, "Invalid email format");
}

#[tokio::test]
async fn signup_route_maps_unknown_activity_to_not_found() {
    let app = test_app();
    let request = Request::post("/activities/Knitting%20Circle/signup?email=kid@mergington.edu")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail_of(response).await, "Activity not found");
}

#[tokio::test]
async fn delete_route_removes_participant() {
    let app = test_app();
    let request =
        Request::delete("/activities/Chess%20Club/participants?email=michael@mergington.edu")
            .body(Body::empty())
            .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body: MessageResponse =
        serde_json::from_slice(&read_body(response).await).expect("message json");
    assert_eq!(
        body.message,
        "Removed michael@mergington.edu from Chess Club"
    );

    let catalog = fetch_catalog(&app).await;
    assert!(!catalog["Chess Club"]
        .participants
        .contains(&"michael@mergington.edu".to_string()));
}

#[tokio::test]
async fn delete_route_rejects_student_who_never_signed_up() {
    let app = test_app();
    let request =
        Request::delete("/activities/Chess%20Club/participants?email=ghost@mergington.edu")
            .body(Body::empty())
            .expect("request");

    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        detail_of(response).await,
        "Student not signed up for this activity"
    );
}

#[tokio::test]
async fn delete_route_maps_unknown_activity_to_not_found() {
    let app = test_app();
    let request =
        Request::delete("/activities/Knitting%20Circle/participants?email=kid@mergington.edu")
            .body(Body::empty())
            .expect("request");

    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
