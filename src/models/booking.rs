//! Booking model for the trip itinerary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of thing that was booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    /// A flight.
    Flight,
    /// A hotel stay.
    Hotel,
    /// A rental car.
    Car,
    /// A tour or other activity.
    Activity,
}

/// Where a booking stands with the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Confirmed by the provider.
    Confirmed,
    /// Awaiting confirmation.
    Pending,
    /// Confirmed but running late.
    Delayed,
    /// Cancelled.
    Cancelled,
}

/// A single itinerary booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking.
    pub id: String,
    /// What was booked.
    pub kind: BookingKind,
    /// Short title (e.g. "Tokyo Flight").
    pub title: String,
    /// When the booking starts.
    pub scheduled_at: DateTime<Utc>,
    /// Current status with the provider.
    pub status: BookingStatus,
    /// Where the booking takes place.
    pub location: String,
    /// Provider confirmation code.
    pub confirmation_code: String,
    /// Price paid.
    pub price: Decimal,
    /// Whether the traveler's tag has picked up this booking's ticket.
    #[serde(default)]
    pub tag_detected: bool,
}

impl Booking {
    /// Returns true if the provider has confirmed the booking.
    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_booking() {
        let json = r#"{
            "id": "3",
            "kind": "car",
            "title": "Car Rental",
            "scheduled_at": "2024-12-16T10:00:00Z",
            "status": "pending",
            "location": "Tokyo Haneda Airport",
            "confirmation_code": "RC9012",
            "price": "450"
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.kind, BookingKind::Car);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.price, Decimal::new(450, 0));
        assert!(!booking.tag_detected);
        assert!(!booking.is_confirmed());
    }
}
