use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::middleware::CurrentUser;
use crate::validation::{ValidatedQuery, analytics::AnalyticsQuery};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_board_analytics(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(board_id): Path<Uuid>,
    ValidatedQuery(query): ValidatedQuery<AnalyticsQuery>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match state.analytics.get_board_analytics(&mut conn, board_id, &query) {
        Ok(analytics) => {
            let response =
                ApiResponse::success(analytics, "Board analytics retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_column_analytics(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(board_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match state.analytics.get_column_analytics(&mut conn, board_id) {
        Ok(columns) => {
            let response =
                ApiResponse::success(columns, "Column analytics retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_user_analytics(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(board_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match state.analytics.get_user_analytics(&mut conn, board_id) {
        Ok(users) => {
            let response = ApiResponse::success(users, "User analytics retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Manual trigger for the daily snapshot; the metrics worker hits the same
/// service path on its own schedule.
pub async fn refresh_board_metrics(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(board_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match state.analytics.update_board_metrics(&mut conn, board_id) {
        Ok(snapshot) => {
            let response = ApiResponse::success(snapshot, "Board metrics refreshed successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
