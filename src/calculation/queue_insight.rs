//! Live queue insight.
//!
//! Puts a crowd-sourced [`QueueReport`] into context: how the current wait
//! compares with the usual wait, and how far the estimate can be trusted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{ConfidenceThresholds, PlannerConfig, WaitComparisonRatios};
use crate::models::QueueReport;

use super::queue_severity::{QueueSeverity, classify_queue_with};

/// How the current wait compares with the usual wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitComparison {
    /// Noticeably shorter than usual.
    BelowAverage,
    /// About the usual wait.
    NearAverage,
    /// Noticeably longer than usual.
    AboveAverage,
}

/// How much the crowd-sourced estimate can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Below the moderate threshold.
    Low,
    /// At or above the moderate threshold.
    Moderate,
    /// At or above the high threshold.
    High,
}

/// The combined view of a queue report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueAssessment {
    /// The ID of the assessed report.
    pub report_id: String,
    /// The display tier of the current wait.
    pub severity: QueueSeverity,
    /// The current wait relative to the usual wait.
    pub comparison: WaitComparison,
    /// How far the estimate can be trusted.
    pub confidence: ConfidenceLevel,
}

/// Compares a current wait with the usual wait.
///
/// The wait is below average when `current <= average * below_ratio`, near
/// average when `current <= average * above_ratio`, and above average
/// otherwise.
///
/// # Examples
///
/// ```
/// use travel_companion_engine::calculation::{compare_to_average, WaitComparison};
/// use travel_companion_engine::config::WaitComparisonRatios;
///
/// let ratios = WaitComparisonRatios::default();
/// assert_eq!(compare_to_average(24, 30, &ratios), WaitComparison::BelowAverage);
/// assert_eq!(compare_to_average(36, 30, &ratios), WaitComparison::NearAverage);
/// assert_eq!(compare_to_average(45, 30, &ratios), WaitComparison::AboveAverage);
/// ```
pub fn compare_to_average(
    current: u32,
    average: u32,
    ratios: &WaitComparisonRatios,
) -> WaitComparison {
    let current = Decimal::from(current);
    let average = Decimal::from(average);
    // An overflowing limit is larger than any wait.
    let within = |ratio: Decimal| {
        average
            .checked_mul(ratio)
            .is_none_or(|limit| current <= limit)
    };

    if within(ratios.below_ratio) {
        WaitComparison::BelowAverage
    } else if within(ratios.above_ratio) {
        WaitComparison::NearAverage
    } else {
        WaitComparison::AboveAverage
    }
}

/// Classifies a confidence percentage.
///
/// # Examples
///
/// ```
/// use travel_companion_engine::calculation::{classify_confidence, ConfidenceLevel};
/// use travel_companion_engine::config::ConfidenceThresholds;
///
/// let thresholds = ConfidenceThresholds::default();
/// assert_eq!(classify_confidence(85, &thresholds), ConfidenceLevel::High);
/// assert_eq!(classify_confidence(70, &thresholds), ConfidenceLevel::Moderate);
/// assert_eq!(classify_confidence(69, &thresholds), ConfidenceLevel::Low);
/// ```
pub fn classify_confidence(percent: u8, thresholds: &ConfidenceThresholds) -> ConfidenceLevel {
    if percent >= thresholds.high {
        ConfidenceLevel::High
    } else if percent >= thresholds.moderate {
        ConfidenceLevel::Moderate
    } else {
        ConfidenceLevel::Low
    }
}

/// Assesses a queue report against the planner configuration.
pub fn assess_queue(report: &QueueReport, planner: &PlannerConfig) -> QueueAssessment {
    QueueAssessment {
        report_id: report.id.clone(),
        severity: classify_queue_with(Some(report.current_wait), &planner.queue_thresholds),
        comparison: compare_to_average(
            report.current_wait,
            report.average_wait,
            &planner.wait_comparison,
        ),
        confidence: classify_confidence(report.confidence, &planner.confidence),
    }
}
