//! Core data models for the Quote Pricing Engine.
//!
//! This module contains the entities the engine reads (events and packages)
//! and the values it produces (breakdowns and audit steps).

mod event;
mod package;
mod pricing_breakdown;

pub use event::Event;
pub use package::Package;
pub use pricing_breakdown::{AdjustmentDirection, AuditStep, PricingBreakdown, QuoteCalculation};
