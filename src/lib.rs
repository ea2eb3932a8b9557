//! Quote Pricing Engine for sports travel packages
//!
//! This crate prices a travel package for an event: it applies seasonal,
//! early-bird, last-minute, group and weekend adjustments to a base price,
//! adds precomputed add-on and itinerary totals, and returns an itemised
//! breakdown with a per-rule audit trail.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
