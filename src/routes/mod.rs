pub mod analytics;
pub mod reports;
pub mod swimlanes;

use crate::AppState;
use crate::db::models::api::ApiResponse;
use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/boards/:board_id/analytics",
            get(analytics::get_board_analytics),
        )
        .route(
            "/boards/:board_id/analytics/columns",
            get(analytics::get_column_analytics),
        )
        .route(
            "/boards/:board_id/analytics/users",
            get(analytics::get_user_analytics),
        )
        .route(
            "/boards/:board_id/metrics/refresh",
            post(analytics::refresh_board_metrics),
        )
        .route("/boards/:board_id/reports", post(reports::create_report))
        .route("/boards/:board_id/reports", get(reports::get_board_reports))
        .route("/reports/:report_id", get(reports::get_report))
        .route(
            "/reports/:report_id/generate",
            post(reports::generate_report_data),
        )
        .route("/report-types", get(reports::get_report_types))
        .route(
            "/boards/:board_id/swimlanes",
            get(swimlanes::get_board_swimlanes),
        )
        .route(
            "/boards/:board_id/swimlanes/reorder",
            post(swimlanes::reorder_swimlanes),
        )
        .route(
            "/boards/:board_id/swimlanes/:swimlane_id/user-settings",
            get(swimlanes::get_user_swimlane_settings),
        )
        .route(
            "/boards/:board_id/swimlanes/:swimlane_id/user-settings",
            put(swimlanes::update_user_swimlane_settings),
        )
        .route("/swimlanes", post(swimlanes::create_swimlane))
        .route("/swimlanes/:swimlane_id", get(swimlanes::get_swimlane))
        .route("/swimlanes/:swimlane_id", put(swimlanes::update_swimlane))
        .route(
            "/swimlanes/:swimlane_id",
            delete(swimlanes::delete_swimlane),
        )
        .route(
            "/swimlanes/:swimlane_id/stats",
            get(swimlanes::get_swimlane_stats),
        )
        .route(
            "/swimlanes/:swimlane_id/groups",
            get(swimlanes::get_swimlane_groups),
        )
        .route(
            "/swimlanes/:swimlane_id/groups",
            post(swimlanes::create_swimlane_group),
        )
        .route(
            "/swimlanes/:swimlane_id/groups/auto",
            post(swimlanes::auto_create_swimlane_groups),
        )
        .route(
            "/swimlane-groups/:group_id",
            put(swimlanes::update_swimlane_group),
        )
        .route(
            "/swimlane-groups/:group_id",
            delete(swimlanes::delete_swimlane_group),
        )
        .route("/swimlane-types", get(swimlanes::get_swimlane_types))
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    let response = ApiResponse::<()>::ok("Service is healthy");
    (StatusCode::OK, Json(response)).into_response()
}
