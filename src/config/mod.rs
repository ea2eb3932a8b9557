//! Configuration loading and management for the Quote Pricing Engine.
//!
//! This module provides functionality to load engine metadata and pricing
//! rule parameters from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use quote_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded configuration: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EarlyBirdConfig, EngineConfig, EngineMetadata, GroupConfig, LastMinuteConfig, PricingConfig,
    SeasonalConfig, WeekendConfig,
};
