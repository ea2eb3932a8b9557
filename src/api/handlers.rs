//! HTTP request handlers for the Quote Pricing Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::QuoteInput;
use crate::models::{Event, Package};

use super::request::QuoteRequest;
use super::response::{
    ApiError, ApiErrorResponse, AuditTrace, HealthResponse, QuoteResponse, SuccessEnvelope,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quotes/generate", post(generate_quote_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let engine = state.config().engine();
    Json(SuccessEnvelope::new(HealthResponse {
        name: engine.name.clone(),
        config_code: engine.code.clone(),
        config_version: engine.version.clone(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Handler for POST /quotes/generate.
///
/// Validates the request, prices it and returns the breakdown together with
/// the per-rule audit trail.
async fn generate_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    if let Err(err) = request.validate(config) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Quote request rejected"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    let now = request.quoted_at.unwrap_or_else(Utc::now);
    let currency = request.resolved_currency(config);
    let base_price = request.effective_base_price();
    let travellers = request.travellers;
    let event: Event = request.event.into();
    let package: Package = request.package.into();

    let input = QuoteInput {
        base_price,
        event: &event,
        package: &package,
        travellers,
        travel_dates: &request.travel_dates,
        addons_total: request.addons_total,
        itineraries_total: request.itineraries_total,
        currency: &currency,
    };

    let start_time = Instant::now();
    let calculation = state.aggregator().calculate_quote_with_audit(&input, now);
    let duration_us = start_time.elapsed().as_micros() as u64;
    let quote_id = Uuid::new_v4();

    info!(
        correlation_id = %correlation_id,
        quote_id = %quote_id,
        event_id = %event.id,
        package_id = %package.id,
        days_until_event = calculation.days_until_event,
        final_price = %calculation.breakdown.final_price,
        duration_us,
        "Quote generated"
    );

    let response = QuoteResponse {
        quote_id,
        generated_at: now,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        event_id: event.id,
        package_id: package.id,
        travellers,
        breakdown: calculation.breakdown,
        audit_trace: AuditTrace {
            days_until_event: calculation.days_until_event,
            travel_month: calculation.travel_month,
            steps: calculation.audit_steps,
            duration_us,
        },
    };

    (StatusCode::OK, Json(SuccessEnvelope::new(response))).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message lives in the body text, not the Display impl
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
