//! Queue severity classification.
//!
//! Turns a queue wait into one of four display tiers. The tiers are used to
//! label recommendations; they play no part in deciding which places fit.

use serde::{Deserialize, Serialize};

use crate::config::QueueThresholds;

/// How long the queue at a place is, as a display tier.
///
/// Variants are ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueSeverity {
    /// No queue at all.
    NoWait,
    /// Up to the short threshold (10 minutes by default).
    ShortWait,
    /// Up to the medium threshold (20 minutes by default).
    MediumWait,
    /// Anything longer.
    LongWait,
}

impl QueueSeverity {
    /// Returns the label shown to travelers.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_companion_engine::calculation::QueueSeverity;
    ///
    /// assert_eq!(QueueSeverity::MediumWait.label(), "Medium wait");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            QueueSeverity::NoWait => "No wait",
            QueueSeverity::ShortWait => "Short wait",
            QueueSeverity::MediumWait => "Medium wait",
            QueueSeverity::LongWait => "Long wait",
        }
    }
}

/// Classifies a queue wait using the default 10 and 20 minute thresholds.
///
/// An absent wait, and a wait of zero minutes, both mean there is no queue.
///
/// # Examples
///
/// ```
/// use travel_companion_engine::calculation::{classify_queue, QueueSeverity};
///
/// assert_eq!(classify_queue(None), QueueSeverity::NoWait);
/// assert_eq!(classify_queue(Some(10)), QueueSeverity::ShortWait);
/// assert_eq!(classify_queue(Some(11)), QueueSeverity::MediumWait);
/// assert_eq!(classify_queue(Some(21)), QueueSeverity::LongWait);
/// ```
pub fn classify_queue(queue_wait: Option<u32>) -> QueueSeverity {
    classify_queue_with(queue_wait, &QueueThresholds::default())
}

/// Classifies a queue wait against explicit thresholds.
///
/// Both thresholds are inclusive upper bounds.
pub fn classify_queue_with(queue_wait: Option<u32>, thresholds: &QueueThresholds) -> QueueSeverity {
    match queue_wait {
        None | Some(0) => QueueSeverity::NoWait,
        Some(wait) if wait <= thresholds.short => QueueSeverity::ShortWait,
        Some(wait) if wait <= thresholds.medium => QueueSeverity::MediumWait,
        Some(_) => QueueSeverity::LongWait,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_queue_is_no_wait() {
        assert_eq!(classify_queue(None), QueueSeverity::NoWait);
    }

    #[test]
    fn test_zero_queue_is_no_wait() {
        assert_eq!(classify_queue(Some(0)), QueueSeverity::NoWait);
    }

    #[test]
    fn test_short_wait_boundaries() {
        assert_eq!(classify_queue(Some(1)), QueueSeverity::ShortWait);
        assert_eq!(classify_queue(Some(10)), QueueSeverity::ShortWait);
    }

    #[test]
    fn test_medium_wait_boundaries() {
        assert_eq!(classify_queue(Some(11)), QueueSeverity::MediumWait);
        assert_eq!(classify_queue(Some(20)), QueueSeverity::MediumWait);
    }

    #[test]
    fn test_long_wait_boundaries() {
        assert_eq!(classify_queue(Some(21)), QueueSeverity::LongWait);
        assert_eq!(classify_queue(Some(u32::MAX)), QueueSeverity::LongWait);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = QueueThresholds {
            short: 5,
            medium: 15,
        };
        assert_eq!(
            classify_queue_with(Some(6), &thresholds),
            QueueSeverity::MediumWait
        );
        assert_eq!(
            classify_queue_with(Some(16), &thresholds),
            QueueSeverity::LongWait
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(QueueSeverity::NoWait.label(), "No wait");
        assert_eq!(QueueSeverity::ShortWait.label(), "Short wait");
        assert_eq!(QueueSeverity::MediumWait.label(), "Medium wait");
        assert_eq!(QueueSeverity::LongWait.label(), "Long wait");
    }

    #[test]
    fn test_severity_orders_best_to_worst() {
        assert!(QueueSeverity::NoWait < QueueSeverity::ShortWait);
        assert!(QueueSeverity::MediumWait < QueueSeverity::LongWait);
    }
}
