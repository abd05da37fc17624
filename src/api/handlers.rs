//! HTTP request handlers for the Annual Leave Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::assemble_result;
use crate::export::{CsvExporter, DocumentRenderer};
use crate::models::LeaveCalculationResult;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/export/csv", post(export_csv_handler))
        .route("/export/document", post(export_document_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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

    ApiErrorResponse::bad_request(error).into_response()
}

/// Parses, validates and runs a calculation request.
fn run_calculation(
    state: &AppState,
    correlation_id: Uuid,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<LeaveCalculationResult, Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return Err(rejection_response(correlation_id, rejection)),
    };

    if let Err(error) = request.validate(state.config().schedule_rules().horizon_years) {
        warn!(
            correlation_id = %correlation_id,
            error = %error.message,
            "Request validation failed"
        );
        return Err(ApiErrorResponse::bad_request(error).into_response());
    }

    let period = request.tenure_period(state.today()).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Invalid tenure period"
        );
        ApiErrorResponse::from(err).into_response()
    })?;

    let result = assemble_result(&period, state.config().config(), request.options());

    info!(
        correlation_id = %correlation_id,
        hire_date = %period.hire_date(),
        end_date = %period.end_date(),
        elapsed_months = result.elapsed_months,
        hire_anniversary_total = result.entitlements.hire_anniversary_total,
        fiscal_year_total = result.entitlements.fiscal_year_total,
        duration_us = result.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    Ok(result)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the full result as JSON.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    match run_calculation(&state, correlation_id, payload) {
        Ok(result) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(result),
        )
            .into_response(),
        Err(response) => response,
    }
}

/// Handler for POST /export/csv endpoint.
///
/// Returns every report table, summary first, as one CSV attachment.
async fn export_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CSV export request");

    let result = match run_calculation(&state, correlation_id, payload) {
        Ok(result) => result,
        Err(response) => return response,
    };

    match CsvExporter::new().render_tables(&result.report_tables()) {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"annual_leave.csv\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "CSV export failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /export/document endpoint.
///
/// Returns the rendered text document as an attachment.
async fn export_document_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing document export request");

    match run_calculation(&state, correlation_id, payload) {
        Ok(result) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"annual_leave.txt\"",
                ),
            ],
            DocumentRenderer::new().render(&result),
        )
            .into_response(),
        Err(response) => response,
    }
}
