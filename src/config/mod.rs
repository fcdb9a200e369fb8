//! Configuration loading and management for the Travel Companion Engine.
//!
//! This module provides functionality to load planner and billing settings
//! from YAML files. Every setting has a built-in default, so hosts that do
//! not ship a configuration directory can use [`ConfigLoader::default`].
//!
//! # Example
//!
//! ```no_run
//! use travel_companion_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/companion").unwrap();
//! println!("Safety buffer: {} minutes", config.planner().safety_buffer_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BillingConfig, CompanionConfig, ConfidenceThresholds, PlannerConfig, QueueThresholds,
    WaitComparisonRatios,
};
