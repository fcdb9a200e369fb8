//! Calculation logic for the Travel Companion Engine.
//!
//! This module contains the pure calculations behind the app's screens:
//! equal bill splitting and settlement into currency minor units, time
//! budget filtering of nearby places, queue severity classification, live
//! queue insight, and the booking overview.

mod bill_split;
mod booking_summary;
mod queue_insight;
mod queue_severity;
mod settlement;
mod time_budget;

pub use bill_split::{BillSplitResult, split_bill};
pub use booking_summary::{BookingSummary, order_itinerary, summarize_bookings};
pub use queue_insight::{
    ConfidenceLevel, QueueAssessment, WaitComparison, assess_queue, classify_confidence,
    compare_to_average,
};
pub use queue_severity::{QueueSeverity, classify_queue, classify_queue_with};
pub use settlement::settle_to_minor_units;
pub use time_budget::{
    PlaceEvaluation, TimeBudgetResult, filter_places, filter_places_with, fits_budget,
};
