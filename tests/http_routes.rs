use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use mergington::database::seed::default_seed;
use mergington::database::ActivityRegistry;
use mergington::web::app::build_router;

fn app() -> Router {
    app_with_static("static")
}

fn app_with_static(static_dir: impl AsRef<std::path::Path>) -> Router {
    let registry = ActivityRegistry::from_seed(default_seed()).unwrap();
    build_router(Arc::new(registry), static_dir)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn root_redirects_to_index() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn listing_returns_full_records() {
    let (status, body) = send(&app(), "GET", "/activities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 9);
    assert_eq!(
        body["Chess Club"],
        json!({
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
        })
    );

    let (_, all) = send(&app(), "GET", "/activities/all").await;
    assert_eq!(all, body);
}

#[tokio::test]
async fn list_names_is_not_shadowed_by_detail_route() {
    let (status, body) = send(&app(), "GET", "/activities/list").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0], "Chess Club");
    assert_eq!(body.as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn field_projections_are_keyed_by_name() {
    let app = app();
    let (_, schedules) = send(&app, "GET", "/activities/schedules").await;
    assert_eq!(schedules["Math Club"], "Thursdays, 3:30 PM - 4:30 PM");

    let (_, caps) = send(&app, "GET", "/activities/max_participants/all").await;
    assert_eq!(caps["Gym Class"], 30);

    let (_, rosters) = send(&app, "GET", "/activities/participants").await;
    assert_eq!(rosters["Soccer Team"], json!([]));
}

#[tokio::test]
async fn listing_aliases_match_their_projections() {
    let app = app();
    let (_, full) = send(&app, "GET", "/activities").await;
    let (status, details) = send(&app, "GET", "/activities/details").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details, full);

    let (status, descriptions) = send(&app, "GET", "/activities/descriptions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        descriptions["Art Club"],
        "Explore your creativity through painting and drawing"
    );
    let (_, descriptions_all) = send(&app, "GET", "/activities/descriptions/all").await;
    assert_eq!(descriptions_all, descriptions);

    let (_, schedules) = send(&app, "GET", "/activities/schedules").await;
    let (status, schedules_all) = send(&app, "GET", "/activities/schedules/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(schedules_all, schedules);
    assert_eq!(schedules_all.as_object().unwrap().len(), 9);
}

#[tokio::test]
async fn unknown_field_is_404() {
    let (status, body) = send(&app(), "GET", "/activities/Chess%20Club/bogus").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Unknown activity field");
}

#[tokio::test]
async fn detail_and_single_field() {
    let app = app();
    let (status, body) = send(&app, "GET", "/activities/Chess%20Club").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["max_participants"], 12);

    let (status, body) = send(&app, "GET", "/activities/Chess%20Club/schedule").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Fridays, 3:30 PM - 5:00 PM");

    let (status, body) = send(&app, "GET", "/activities/Quidditch").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (status, _) = send(&app, "GET", "/activities/Quidditch/participants").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn signup_and_unsignup_flow() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=x@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully signed up for Chess Club");

    let (_, roster) = send(&app, "GET", "/activities/Chess%20Club/participants").await;
    assert_eq!(roster.as_array().unwrap().len(), 3);

    let (status, body) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?student_email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student already signed up for this activity");

    let (status, body) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/unsignup?email=x@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully unsignup from Chess Club");

    let (status, body) = send(
        &app,
        "DELETE",
        "/activities/Chess%20Club/unregister?email=x@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student not signed up for this activity");
}

#[tokio::test]
async fn full_activity_rejects_with_400() {
    let app = app();
    for i in 0..25 {
        let uri = format!("/activities/Soccer%20Team/signup?email=p{}@mergington.edu", i);
        let (status, _) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = send(
        &app,
        "POST",
        "/activities/Soccer%20Team/signup?email=late@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is full");
}

#[tokio::test]
async fn signup_errors_for_missing_activity_or_email() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/activities/Quidditch/signup?email=x@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (status, body) = send(&app, "POST", "/activities/Chess%20Club/signup").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student email is required");
}

#[tokio::test]
async fn unknown_activity_is_404_even_without_email() {
    let app = app();
    let (status, body) = send(&app, "POST", "/activities/Quidditch/signup?email=").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (status, body) = send(&app, "POST", "/activities/Quidditch/unsignup").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (status, _) = send(&app, "DELETE", "/activities/Quidditch/unregister?email=").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_are_not_cached_and_health_reports_count() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok", "activities": 9 }));
}

#[tokio::test]
async fn serves_static_assets() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Activities</h1>").unwrap();

    let response = app_with_static(dir.path())
        .oneshot(
            Request::builder()
                .uri("/static/index.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>Activities</h1>");
}
