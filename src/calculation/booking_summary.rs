//! Booking overview for the trip screen.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::Booking;

/// Counts and completion rate across a trip's bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    /// Number of confirmed bookings.
    pub confirmed: usize,
    /// Number of bookings in total.
    pub total: usize,
    /// Confirmed bookings as a percentage of all bookings; zero when there are none.
    pub completion_rate: Decimal,
    /// Number of bookings the traveler's tag has synced.
    pub tag_synced: usize,
}

impl BookingSummary {
    /// Returns the completion rate rounded to a whole percentage.
    pub fn rounded_completion_rate(&self) -> Decimal {
        self.completion_rate
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Summarizes a trip's bookings.
///
/// # Examples
///
/// ```
/// use travel_companion_engine::calculation::summarize_bookings;
/// use rust_decimal::Decimal;
///
/// let summary = summarize_bookings(&[]);
/// assert_eq!(summary.total, 0);
/// assert_eq!(summary.completion_rate, Decimal::ZERO);
/// ```
pub fn summarize_bookings(bookings: &[Booking]) -> BookingSummary {
    let confirmed = bookings.iter().filter(|b| b.is_confirmed()).count();
    let total = bookings.len();
    let tag_synced = bookings.iter().filter(|b| b.tag_detected).count();

    let completion_rate = if total == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(confirmed) * Decimal::ONE_HUNDRED / Decimal::from(total)
    };

    BookingSummary {
        confirmed,
        total,
        completion_rate,
        tag_synced,
    }
}

/// Orders bookings chronologically. Bookings at the same time keep their order.
pub fn order_itinerary(mut bookings: Vec<Booking>) -> Vec<Booking> {
    bookings.sort_by_key(|b| b.scheduled_at);
    bookings
}
