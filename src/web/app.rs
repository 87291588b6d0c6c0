use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::models::ActivityField;
use crate::services::activities_service::SharedRegistry;
use crate::web::routes::{activities, activity, health};

/// Builds the full application router over `registry`.
///
/// Fixed collection paths such as `/activities/list` are matched before the
/// `:activity_name` segment.
pub fn build_router(registry: SharedRegistry, static_dir: impl AsRef<Path>) -> Router {
    let collection_routes = Router::new()
        .route("/activities", get(activities::list_activities_handler))
        .route("/activities/all", get(activities::list_activities_handler))
        .route("/activities/details", get(activities::list_activities_handler))
        .route("/activities/list", get(activities::list_names_handler))
        .route(
            "/activities/participants",
            activities::projection_route(ActivityField::Participants),
        )
        .route(
            "/activities/participants/all",
            activities::projection_route(ActivityField::Participants),
        )
        .route(
            "/activities/schedules",
            activities::projection_route(ActivityField::Schedule),
        )
        .route(
            "/activities/schedules/all",
            activities::projection_route(ActivityField::Schedule),
        )
        .route(
            "/activities/descriptions",
            activities::projection_route(ActivityField::Description),
        )
        .route(
            "/activities/descriptions/all",
            activities::projection_route(ActivityField::Description),
        )
        .route(
            "/activities/max_participants",
            activities::projection_route(ActivityField::MaxParticipants),
        )
        .route(
            "/activities/max_participants/all",
            activities::projection_route(ActivityField::MaxParticipants),
        );

    let activity_routes = Router::new()
        .route(
            "/activities/:activity_name",
            get(activity::activity_detail_handler),
        )
        .route(
            "/activities/:activity_name/:field",
            get(activity::activity_field_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(activity::signup_handler),
        )
        .route(
            "/activities/:activity_name/unsignup",
            post(activity::unsignup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activity::unsignup_handler),
        );

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/health", get(health::health_handler))
        .merge(collection_routes)
        .merge(activity_routes)
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(registry)
}
