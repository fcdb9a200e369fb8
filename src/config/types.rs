//! Configuration types for the travel companion.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every section has a
//! default matching the app's built-in behavior, so a file only needs to
//! name what it changes.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::DEFAULT_SAFETY_BUFFER_MINUTES;

/// Upper bounds, in minutes, of the short and medium queue tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QueueThresholds {
    /// Longest wait still counted as short.
    pub short: u32,
    /// Longest wait still counted as medium.
    pub medium: u32,
}

impl Default for QueueThresholds {
    fn default() -> Self {
        Self {
            short: 10,
            medium: 20,
        }
    }
}

/// Ratios of the usual wait that separate below, near and above average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WaitComparisonRatios {
    /// At or under this share of the usual wait counts as below average.
    pub below_ratio: Decimal,
    /// At or under this share of the usual wait counts as near average.
    pub above_ratio: Decimal,
}

impl Default for WaitComparisonRatios {
    fn default() -> Self {
        Self {
            below_ratio: Decimal::new(8, 1),
            above_ratio: Decimal::new(12, 1),
        }
    }
}

/// Minimum confidence percentages for the high and moderate levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ConfidenceThresholds {
    /// Minimum percentage for high confidence.
    pub high: u8,
    /// Minimum percentage for moderate confidence.
    pub moderate: u8,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 85,
            moderate: 70,
        }
    }
}

/// Settings for recommendations and queue display, from planner.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Minutes held back from every time budget.
    pub safety_buffer_minutes: u32,
    /// Queue severity tier bounds.
    pub queue_thresholds: QueueThresholds,
    /// Wait comparison ratios.
    pub wait_comparison: WaitComparisonRatios,
    /// Confidence level thresholds.
    pub confidence: ConfidenceThresholds,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            safety_buffer_minutes: DEFAULT_SAFETY_BUFFER_MINUTES,
            queue_thresholds: QueueThresholds::default(),
            wait_comparison: WaitComparisonRatios::default(),
            confidence: ConfidenceThresholds::default(),
        }
    }
}

/// Settings for bill splitting, from billing.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// ISO currency code shown next to amounts.
    pub currency: String,
    /// Decimal places of the currency's minor unit (2 for cents).
    pub minor_unit_scale: u32,
    /// Location recorded on bills that do not name one.
    pub default_location: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            minor_unit_scale: 2,
            default_location: crate::models::DEFAULT_BILL_LOCATION.to_string(),
        }
    }
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanionConfig {
    /// Recommendation and queue settings.
    planner: PlannerConfig,
    /// Bill splitting settings.
    billing: BillingConfig,
}

impl CompanionConfig {
    /// Creates a new CompanionConfig from its component parts.
    pub fn new(planner: PlannerConfig, billing: BillingConfig) -> Self {
        Self { planner, billing }
    }

    /// Returns the planner settings.
    pub fn planner(&self) -> &PlannerConfig {
        &self.planner
    }

    /// Returns the billing settings.
    pub fn billing(&self) -> &BillingConfig {
        &self.billing
    }
}
