use crate::AppState;
use crate::db::enums::ReportType;
use crate::db::models::api::{ApiResponse, ResponseMeta};
use crate::db::models::report::ReportTypeInfo;
use crate::middleware::CurrentUser;
use crate::validation::{ValidatedJson, report::CreateReportRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_report(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(board_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateReportRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match state
        .analytics
        .create_report(&mut conn, board_id, current_user.user_id, &payload)
    {
        Ok(report) => {
            let response = ApiResponse::created(report, "Report created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_board_reports(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(board_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match state
        .analytics
        .get_board_reports(&mut conn, board_id, current_user.user_id)
    {
        Ok(reports) => {
            let response = ApiResponse::success(reports, "Reports retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_report(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(report_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match state
        .analytics
        .get_report(&mut conn, report_id, current_user.user_id)
    {
        Ok(report) => {
            let response = ApiResponse::success(report, "Report retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn generate_report_data(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(report_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match state
        .analytics
        .generate_report_data(&mut conn, report_id, current_user.user_id)
    {
        Ok(report) => {
            let response = ApiResponse::success(report, "Report data generated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_report_types() -> impl IntoResponse {
    let types: Vec<ReportTypeInfo> = ReportType::all()
        .iter()
        .map(|report_type| ReportTypeInfo {
            value: report_type.as_str(),
            label: report_type.label(),
        })
        .collect();

    let meta = ResponseMeta {
        request_id: None,
        pagination: None,
        total_count: Some(types.len() as i64),
    };

    let response =
        ApiResponse::success_with_meta(types, "Report types retrieved successfully", meta);
    (StatusCode::OK, Json(response)).into_response()
}
