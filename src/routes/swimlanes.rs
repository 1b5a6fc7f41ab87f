use crate::AppState;
use crate::db::enums::SwimlaneType;
use crate::db::models::api::{ApiResponse, ResponseMeta};
use crate::db::models::swimlane::SwimlaneTypeInfo;
use crate::middleware::CurrentUser;
use crate::services::SwimlanesService;
use crate::validation::{
    ValidatedJson, ValidatedPath,
    swimlane::{
        CreateSwimlaneGroupRequest, CreateSwimlaneRequest, ReorderSwimlanesRequest,
        UpdateSwimlaneGroupRequest, UpdateSwimlaneRequest, UpsertUserSettingsRequest,
        UserSettingsPath,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_swimlane(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateSwimlaneRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::create_swimlane(&mut conn, &payload) {
        Ok(swimlane) => {
            let response = ApiResponse::created(swimlane, "Swimlane created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_board_swimlanes(
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

    match SwimlanesService::get_board_swimlanes(&mut conn, board_id) {
        Ok(swimlanes) => {
            let response = ApiResponse::success(swimlanes, "Swimlanes retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_swimlane(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(swimlane_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::get_swimlane_by_id(&mut conn, swimlane_id) {
        Ok(swimlane) => {
            let response = ApiResponse::success(swimlane, "Swimlane retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_swimlane(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(swimlane_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateSwimlaneRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::update_swimlane(&mut conn, swimlane_id, &payload) {
        Ok(swimlane) => {
            let response = ApiResponse::success(swimlane, "Swimlane updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn delete_swimlane(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(swimlane_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::delete_swimlane(&mut conn, swimlane_id) {
        Ok(()) => {
            let response = ApiResponse::<()>::ok("Swimlane deleted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn reorder_swimlanes(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(board_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ReorderSwimlanesRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::reorder_swimlanes(&mut conn, board_id, &payload.moves) {
        Ok(()) => {
            let response = ApiResponse::<()>::ok("Swimlanes reordered successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_swimlane_stats(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(swimlane_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::get_swimlane_stats(&mut conn, swimlane_id) {
        Ok(stats) => {
            let response = ApiResponse::success(stats, "Swimlane stats retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_swimlane_groups(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(swimlane_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::get_swimlane_groups(&mut conn, swimlane_id) {
        Ok(groups) => {
            let response = ApiResponse::success(groups, "Swimlane groups retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn create_swimlane_group(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(swimlane_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateSwimlaneGroupRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::create_swimlane_group(&mut conn, swimlane_id, &payload) {
        Ok(group) => {
            let response = ApiResponse::created(group, "Swimlane group created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn auto_create_swimlane_groups(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(swimlane_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::auto_create_groups(&mut conn, swimlane_id) {
        Ok(groups) => {
            let response = ApiResponse::success(groups, "Swimlane groups generated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_swimlane_group(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(group_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateSwimlaneGroupRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::update_swimlane_group(&mut conn, group_id, &payload) {
        Ok(group) => {
            let response = ApiResponse::success(group, "Swimlane group updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn delete_swimlane_group(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(group_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::delete_swimlane_group(&mut conn, group_id) {
        Ok(()) => {
            let response = ApiResponse::<()>::ok("Swimlane group deleted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_user_swimlane_settings(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    ValidatedPath(path): ValidatedPath<UserSettingsPath>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::get_user_settings(
        &mut conn,
        current_user.user_id,
        path.board_id,
        path.swimlane_id,
    ) {
        Ok(prefs) => {
            let response = ApiResponse::success(prefs, "Swimlane settings retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_user_swimlane_settings(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    ValidatedPath(path): ValidatedPath<UserSettingsPath>,
    ValidatedJson(payload): ValidatedJson<UpsertUserSettingsRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match SwimlanesService::update_user_settings(
        &mut conn,
        current_user.user_id,
        path.swimlane_id,
        &payload,
    ) {
        Ok(prefs) => {
            let response = ApiResponse::success(prefs, "Swimlane settings saved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_swimlane_types() -> impl IntoResponse {
    let types: Vec<SwimlaneTypeInfo> = SwimlaneType::all()
        .iter()
        .map(|lane_type| SwimlaneTypeInfo {
            value: lane_type.as_str(),
            label: lane_type.label(),
            supports_auto_groups: lane_type.supports_auto_groups(),
        })
        .collect();

    let meta = ResponseMeta {
        request_id: None,
        pagination: None,
        total_count: Some(types.len() as i64),
    };

    let response =
        ApiResponse::success_with_meta(types, "Swimlane types retrieved successfully", meta);
    (StatusCode::OK, Json(response)).into_response()
}
