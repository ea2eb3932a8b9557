//! Response types for the Quote Pricing Engine API.
//!
//! Successful responses wrap their payload in a `{"success": true, "data": ...}`
//! envelope; failures use `{"success": false, "error": {...}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditStep, PricingBreakdown};

/// Success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    /// Always `true`.
    pub success: bool,
    /// The response payload.
    pub data: T,
}

impl<T> SuccessEnvelope<T> {
    /// Wraps `data` in a success envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,
    /// What went wrong.
    pub error: ApiError,
}

/// The audit trail returned with a quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTrace {
    /// Whole days between the quote instant and the event start.
    pub days_until_event: i64,
    /// Calendar month the seasonal rule was keyed on.
    pub travel_month: u32,
    /// One step per pricing rule.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Payload of a successful `/quotes/generate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// The instant the quote was priced at.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that priced the quote.
    pub engine_version: String,
    /// The event the quote is for.
    pub event_id: String,
    /// The package the quote is for.
    pub package_id: String,
    /// Number of travellers quoted.
    pub travellers: u32,
    /// The priced breakdown.
    pub breakdown: PricingBreakdown,
    /// How each rule contributed.
    pub audit_trace: AuditTrace,
}

/// Payload of `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Display name of the pricing configuration.
    pub name: String,
    /// Pricing configuration code.
    pub config_code: String,
    /// Pricing configuration version.
    pub config_version: String,
    /// Crate version.
    pub engine_version: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorEnvelope {
                success: false,
                error: self.error,
            }),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidQuoteRequest { field, .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Field '{}' failed validation", field),
                ))
            }
            EngineError::InvalidTravelDates { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_TRAVEL_DATES",
                    message,
                    "travel_dates must be a non-empty list in chronological order",
                ))
            }
            EngineError::UnsupportedCurrency { code } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "UNSUPPORTED_CURRENCY",
                    message,
                    format!("The currency '{}' is not configured for quoting", code),
                ))
            }
        }
    }
}
