//! Time budget filtering for nearby recommendations.
//!
//! This module decides which nearby places a traveler can fit in before
//! their next itinerary item. A place fits when walking there and queueing
//! takes no longer than the available time minus a safety buffer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::QueueThresholds;
use crate::models::{AuditStep, Budget, Place};

use super::queue_severity::{QueueSeverity, classify_queue_with};

/// How a single candidate place measured up against the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceEvaluation {
    /// The ID of the evaluated place.
    pub place_id: String,
    /// Walk time plus queue wait, in minutes.
    pub time_needed: u32,
    /// Whether the place fits within the budget.
    pub fits: bool,
    /// The display tier of the place's queue.
    pub queue_severity: QueueSeverity,
}

/// The result of filtering places by a time budget.
#[derive(Debug, Clone)]
pub struct TimeBudgetResult {
    /// The places that fit, in input order.
    pub places: Vec<Place>,
    /// One evaluation per input place, in input order.
    pub evaluations: Vec<PlaceEvaluation>,
    /// The audit step recording this filter.
    pub audit_step: AuditStep,
}

/// Returns true if a place needing `time_needed` minutes fits the budget.
///
/// The comparison is inclusive and done in signed arithmetic, so nothing
/// fits when the buffer exceeds the available time.
///
/// # Examples
///
/// ```
/// use travel_companion_engine::calculation::fits_budget;
/// use travel_companion_engine::models::Budget;
///
/// assert!(fits_budget(40, &Budget::new(45)));
/// assert!(!fits_budget(41, &Budget::new(45)));
/// assert!(!fits_budget(0, &Budget::new(4)));
/// ```
pub fn fits_budget(time_needed: u32, budget: &Budget) -> bool {
    i64::from(time_needed) <= budget.threshold()
}

/// Filters places down to those that fit the time budget.
///
/// Uses the default queue thresholds for the severity of each evaluation.
/// See [`filter_places_with`].
///
/// # Examples
///
/// ```
/// use travel_companion_engine::calculation::filter_places;
/// use travel_companion_engine::models::{Budget, Place, PlaceCategory};
///
/// let places = vec![
///     Place::new("1", "Ichiran Ramen", PlaceCategory::Food, 3).with_queue(15),
///     Place::new("2", "Roastery", PlaceCategory::Cafe, 2).with_queue(5),
///     Place::new("3", "Shibuya Sky", PlaceCategory::Attraction, 5).with_queue(25),
/// ];
///
/// let result = filter_places(&places, Budget::new(20));
/// assert_eq!(result.places.len(), 1);
/// assert_eq!(result.places[0].id, "2");
/// ```
pub fn filter_places(places: &[Place], budget: Budget) -> TimeBudgetResult {
    filter_places_with(places, budget, &QueueThresholds::default())
}

/// Filters places down to those that fit the time budget.
///
/// A place is kept iff `walk_time + queue_wait.unwrap_or(0) <= available - buffer`.
/// The output preserves input order and ties at the threshold are kept. An
/// empty input yields an empty output.
///
/// # Arguments
///
/// * `places` - The candidate places, in display order
/// * `budget` - The traveler's available time and safety buffer
/// * `thresholds` - Queue thresholds used to label each evaluation
pub fn filter_places_with(
    places: &[Place],
    budget: Budget,
    thresholds: &QueueThresholds,
) -> TimeBudgetResult {
    let evaluations: Vec<PlaceEvaluation> = places
        .iter()
        .map(|place| {
            let time_needed = place.time_needed();
            PlaceEvaluation {
                place_id: place.id.clone(),
                time_needed,
                fits: fits_budget(time_needed, &budget),
                queue_severity: classify_queue_with(place.queue_wait, thresholds),
            }
        })
        .collect();

    let kept: Vec<Place> = places
        .iter()
        .zip(&evaluations)
        .filter(|(_, evaluation)| evaluation.fits)
        .map(|(place, _)| place.clone())
        .collect();

    let threshold = budget.threshold();
    let included: Vec<&str> = kept.iter().map(|p| p.id.as_str()).collect();

    debug!(
        available = budget.available,
        buffer = budget.buffer,
        candidates = places.len(),
        included = kept.len(),
        "Filtered places by time budget"
    );

    let audit_step = AuditStep {
        rule_id: "time_budget_filter".to_string(),
        rule_name: "Time Budget Filter".to_string(),
        input: serde_json::json!({
            "available": budget.available,
            "buffer": budget.buffer,
            "candidates": places.len()
        }),
        output: serde_json::json!({
            "threshold": threshold,
            "included": included
        }),
        reasoning: format!(
            "{} of {} places fit within {} minutes ({} available - {} buffer)",
            kept.len(),
            places.len(),
            threshold,
            budget.available,
            budget.buffer
        ),
    };

    TimeBudgetResult {
        places: kept,
        evaluations,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceCategory;

    fn create_test_places() -> Vec<Place> {
        vec![
            Place::new("1", "Ichiran Ramen Shibuya", PlaceCategory::Food, 3).with_queue(15),
            Place::new("2", "Starbucks Reserve Roastery", PlaceCategory::Cafe, 2).with_queue(5),
            Place::new("3", "Shibuya Sky", PlaceCategory::Attraction, 5).with_queue(25),
        ]
    }

    fn ids(result: &TimeBudgetResult) -> Vec<&str> {
        result.places.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_all_fit_with_45_minutes() {
        let result = filter_places(&create_test_places(), Budget::new(45));
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_only_short_stop_fits_with_20_minutes() {
        let result = filter_places(&create_test_places(), Budget::new(20));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_place_exactly_at_threshold_is_included() {
        let places = vec![Place::new("1", "Edge", PlaceCategory::Food, 10).with_queue(5)];
        let result = filter_places(&places, Budget::new(20));
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_place_one_over_threshold_is_excluded() {
        let places = vec![Place::new("1", "Edge", PlaceCategory::Food, 10).with_queue(6)];
        let result = filter_places(&places, Budget::new(20));
        assert!(result.places.is_empty());
    }

    #[test]
    fn test_missing_queue_counts_as_zero() {
        let places = vec![Place::new("4", "Center Gai", PlaceCategory::Shopping, 15)];
        let result = filter_places(&places, Budget::new(20));
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let result = filter_places(&[], Budget::new(45));
        assert!(result.places.is_empty());
        assert!(result.evaluations.is_empty());
    }

    #[test]
    fn test_budget_below_buffer_admits_nothing() {
        let places = vec![Place::new("1", "Doorstep", PlaceCategory::Cafe, 0)];
        for available in 0..5 {
            let result = filter_places(&places, Budget::new(available));
            assert!(result.places.is_empty(), "available = {}", available);
        }
    }

    #[test]
    fn test_budget_equal_to_buffer_admits_zero_time_places() {
        let places = vec![Place::new("1", "Doorstep", PlaceCategory::Cafe, 0)];
        let result = filter_places(&places, Budget::new(5));
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_custom_buffer_is_respected() {
        let result = filter_places(&create_test_places(), Budget::with_buffer(45, 20));
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let places = vec![
            Place::new("c", "Third", PlaceCategory::Food, 1),
            Place::new("a", "First", PlaceCategory::Food, 30),
            Place::new("b", "Second", PlaceCategory::Food, 2),
        ];
        let result = filter_places(&places, Budget::new(20));
        assert_eq!(ids(&result), vec!["c", "b"]);
    }

    #[test]
    fn test_evaluations_cover_every_place() {
        let result = filter_places(&create_test_places(), Budget::new(20));

        assert_eq!(result.evaluations.len(), 3);
        assert_eq!(result.evaluations[0].time_needed, 18);
        assert!(!result.evaluations[0].fits);
        assert_eq!(result.evaluations[0].queue_severity, QueueSeverity::MediumWait);
        assert_eq!(result.evaluations[1].time_needed, 7);
        assert!(result.evaluations[1].fits);
        assert_eq!(result.evaluations[1].queue_severity, QueueSeverity::ShortWait);
        assert_eq!(result.evaluations[2].time_needed, 30);
        assert_eq!(result.evaluations[2].queue_severity, QueueSeverity::LongWait);
    }

    #[test]
    fn test_custom_thresholds_change_severity_only() {
        let thresholds = QueueThresholds {
            short: 30,
            medium: 60,
        };
        let result = filter_places_with(&create_test_places(), Budget::new(20), &thresholds);

        assert_eq!(ids(&result), vec!["2"]);
        assert!(
            result
                .evaluations
                .iter()
                .all(|e| e.queue_severity == QueueSeverity::ShortWait)
        );
    }

    #[test]
    fn test_audit_step_records_threshold() {
        let result = filter_places(&create_test_places(), Budget::new(20));

        assert_eq!(result.audit_step.rule_id, "time_budget_filter");
        assert_eq!(result.audit_step.input["available"].as_u64().unwrap(), 20);
        assert_eq!(result.audit_step.input["buffer"].as_u64().unwrap(), 5);
        assert_eq!(result.audit_step.output["threshold"].as_i64().unwrap(), 15);
        assert_eq!(result.audit_step.output["included"][0].as_str().unwrap(), "2");
        assert_eq!(
            result.audit_step.reasoning,
            "1 of 3 places fit within 15 minutes (20 available - 5 buffer)"
        );
    }
}
