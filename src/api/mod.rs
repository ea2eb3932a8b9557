//! HTTP API module for the Quote Pricing Engine.
//!
//! This module provides the REST endpoints for generating priced quotes and
//! reporting service health.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EventRequest, MAX_AMOUNT, PackageRequest, QuoteRequest};
pub use response::{
    ApiError, ApiErrorResponse, AuditTrace, ErrorEnvelope, HealthResponse, QuoteResponse,
    SuccessEnvelope,
};
pub use state::AppState;
