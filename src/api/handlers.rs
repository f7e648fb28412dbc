//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::Coords;
use crate::error::EngineError;
use crate::models::RecordCorrection;

use super::request::{
    CheckInRequest, CheckOutRequest, CorrectionRequest, CreateUserRequest, LoginRequest,
    SlipRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Reason recorded on corrections that do not supply one.
const DEFAULT_CORRECTION_REASON: &str = "Admin Correction";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/check-in", post(check_in_handler))
        .route("/check-out", post(check_out_handler))
        .route("/corrections", post(correction_handler))
        .route("/payroll/preview", post(payroll_preview_handler))
        .route("/payroll/generate", post(payroll_generate_handler))
        .route("/login", post(login_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/reports/daily/:date", get(daily_report_handler))
        .route("/reports/monthly/:user_id/:month", get(monthly_report_handler))
        .route("/summary/:date", get(daily_summary_handler))
        .route("/alerts/:user_id", get(alerts_handler))
        .route("/slips/:user_id", get(slips_handler))
        .with_state(state)
}

/// Builds a JSON response with an explicit content type.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a body rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Maps an engine error to its HTTP response, logging it on the way out.
fn engine_error_response(correlation_id: Uuid, err: EngineError, context: &str) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "{}", context);
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Handler for the POST /check-in endpoint.
///
/// Records a check-in for the user at the current time. Repeating a
/// check-in on the same day returns the existing record unchanged.
async fn check_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        user_id = %request.user_id,
        has_position = request.position.is_some(),
        "Processing check-in"
    );

    let position = request.position.map(Coords::from);
    match state.engine().check_in(&request.user_id, position) {
        Ok(record) => json_response(StatusCode::OK, record),
        Err(err) => engine_error_response(correlation_id, err, "Check-in failed"),
    }
}

/// Handler for the POST /check-out endpoint.
async fn check_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckOutRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        user_id = %request.user_id,
        "Processing check-out"
    );

    match state.engine().check_out(&request.user_id) {
        Ok(record) => json_response(StatusCode::OK, record),
        Err(err) => engine_error_response(correlation_id, err, "Check-out failed"),
    }
}

/// Handler for the POST /corrections endpoint.
///
/// Applies an admin correction to a stored record and appends an audit
/// entry describing the change.
async fn correction_handler(
    State(state): State<AppState>,
    payload: Result<Json<CorrectionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        record_id = %request.record_id,
        actor_id = %request.actor_id,
        "Processing correction"
    );

    let actor = match state.engine().user(&request.actor_id) {
        Ok(user) => user,
        Err(err) => return engine_error_response(correlation_id, err, "Correction actor unknown"),
    };

    let record_id = request.record_id;
    let reason = request
        .reason
        .clone()
        .unwrap_or_else(|| DEFAULT_CORRECTION_REASON.to_string());
    let updates: RecordCorrection = request.into();

    match state
        .engine()
        .correct_record(record_id, updates, &actor, &reason)
    {
        Ok(record) => json_response(StatusCode::OK, record),
        Err(err) => engine_error_response(correlation_id, err, "Correction failed"),
    }
}

/// Handler for the POST /payroll/preview endpoint.
///
/// Computes a salary slip without storing it.
async fn payroll_preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<SlipRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        user_id = %request.user_id,
        month = %request.month,
        "Previewing salary slip"
    );

    match state.engine().preview_slip(&request.user_id, &request.month) {
        Ok(slip) => json_response(StatusCode::OK, slip),
        Err(err) => engine_error_response(correlation_id, err, "Slip preview failed"),
    }
}

/// Handler for the POST /payroll/generate endpoint.
///
/// Computes and stores a salary slip, replacing any earlier slip for the
/// same user and month.
async fn payroll_generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SlipRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        user_id = %request.user_id,
        month = %request.month,
        "Generating salary slip"
    );

    match state.engine().generate_slip(&request.user_id, &request.month) {
        Ok(slip) => json_response(StatusCode::OK, slip),
        Err(err) => engine_error_response(correlation_id, err, "Slip generation failed"),
    }
}

/// Handler for the POST /login endpoint.
async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(correlation_id = %correlation_id, "Processing login");

    match state.engine().login(&request.email) {
        Ok(user) => json_response(StatusCode::OK, user),
        Err(err) => engine_error_response(correlation_id, err, "Login failed"),
    }
}

/// Handler for the GET /users endpoint.
async fn list_users_handler(State(state): State<AppState>) -> impl IntoResponse {
    json_response(StatusCode::OK, state.engine().users())
}

/// Handler for the POST /users endpoint.
async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        email = %request.email,
        "Creating user"
    );

    match state.engine().create_user(request.into()) {
        Ok(user) => json_response(StatusCode::CREATED, user),
        Err(err) => engine_error_response(correlation_id, err, "User creation failed"),
    }
}

/// Handler for the GET /reports/daily/:date endpoint.
async fn daily_report_handler(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Building daily report");

    json_response(StatusCode::OK, state.engine().daily_report(date))
}

/// Handler for the GET /reports/monthly/:user_id/:month endpoint.
async fn monthly_report_handler(
    State(state): State<AppState>,
    Path((user_id, month)): Path<(String, String)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        user_id = %user_id,
        month = %month,
        "Building monthly report"
    );

    match state.engine().monthly_report(&user_id, &month) {
        Ok(report) => json_response(StatusCode::OK, report),
        Err(err) => engine_error_response(correlation_id, err, "Monthly report failed"),
    }
}

/// Handler for the GET /summary/:date endpoint.
async fn daily_summary_handler(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> impl IntoResponse {
    json_response(StatusCode::OK, state.engine().daily_summary(date))
}

/// Handler for the GET /alerts/:user_id endpoint.
async fn alerts_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.engine().late_arrival_alerts(&user_id) {
        Ok(alerts) => json_response(StatusCode::OK, alerts),
        Err(err) => engine_error_response(correlation_id, err, "Alert lookup failed"),
    }
}

/// Handler for the GET /slips/:user_id endpoint.
async fn slips_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.engine().slips_for_user(&user_id) {
        Ok(slips) => json_response(StatusCode::OK, slips),
        Err(err) => engine_error_response(correlation_id, err, "Slip lookup failed"),
    }
}
