//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading travel
//! companion configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{BillRequest, Budget};

use super::types::{BillingConfig, CompanionConfig, PlannerConfig};

/// The largest minor unit scale a decimal amount can carry.
const MAX_MINOR_UNIT_SCALE: u32 = 28;

/// The largest accepted wait comparison ratio.
const MAX_WAIT_RATIO: Decimal = Decimal::ONE_HUNDRED;

/// Loads, validates and provides access to the companion configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/companion/
/// ├── planner.yaml   # Time budget buffer and queue thresholds
/// └── billing.yaml   # Currency and bill defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use travel_companion_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/companion").unwrap();
///
/// // A budget carrying the configured safety buffer
/// let budget = loader.budget(45);
/// println!("Threshold: {} minutes", budget.threshold());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CompanionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/companion")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The thresholds or ratios are inconsistent
    ///
    /// # Example
    ///
    /// ```no_run
    /// use travel_companion_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/companion")?;
    /// # Ok::<(), travel_companion_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let planner = Self::load_yaml::<PlannerConfig>(&path.join("planner.yaml"))?;
        let billing = Self::load_yaml::<BillingConfig>(&path.join("billing.yaml"))?;

        let loader = Self::from_config(CompanionConfig::new(planner, billing))?;

        info!(
            path = %path.display(),
            buffer = loader.planner().safety_buffer_minutes,
            currency = %loader.billing().currency,
            "Loaded companion configuration"
        );

        Ok(loader)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: CompanionConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks that thresholds and ratios are ordered and in range.
    fn validate(config: &CompanionConfig) -> EngineResult<()> {
        let planner = config.planner();

        if planner.queue_thresholds.short > planner.queue_thresholds.medium {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "short queue threshold {} exceeds medium threshold {}",
                    planner.queue_thresholds.short, planner.queue_thresholds.medium
                ),
            });
        }

        let ratios = &planner.wait_comparison;
        if ratios.below_ratio.is_sign_negative()
            || ratios.below_ratio > ratios.above_ratio
            || ratios.above_ratio > MAX_WAIT_RATIO
        {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "wait comparison ratios must satisfy 0 <= below ({}) <= above ({}) <= {}",
                    ratios.below_ratio, ratios.above_ratio, MAX_WAIT_RATIO
                ),
            });
        }

        let confidence = &planner.confidence;
        if confidence.moderate > confidence.high || confidence.high > 100 {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "confidence thresholds must satisfy moderate ({}) <= high ({}) <= 100",
                    confidence.moderate, confidence.high
                ),
            });
        }

        if config.billing().minor_unit_scale > MAX_MINOR_UNIT_SCALE {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "minor unit scale {} exceeds {}",
                    config.billing().minor_unit_scale,
                    MAX_MINOR_UNIT_SCALE
                ),
            });
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CompanionConfig {
        &self.config
    }

    /// Returns the planner settings.
    pub fn planner(&self) -> &PlannerConfig {
        self.config.planner()
    }

    /// Returns the billing settings.
    pub fn billing(&self) -> &BillingConfig {
        self.config.billing()
    }

    /// Builds a time budget carrying the configured safety buffer.
    pub fn budget(&self, available: u32) -> Budget {
        Budget::with_buffer(available, self.planner().safety_buffer_minutes)
    }

    /// Builds a bill request at the configured default location.
    pub fn bill_request(
        &self,
        description: impl Into<String>,
        total: Decimal,
    ) -> BillRequest {
        BillRequest::new(description, total).at(self.billing().default_location.clone())
    }
}
