//! Bill models for group expense splitting.
//!
//! This module contains the [`Bill`] type produced by a split, the
//! per-participant [`ParticipantShare`] lines it carries, and the
//! [`BillRequest`] a caller fills in to create one.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The location recorded on a bill when the caller does not supply one.
pub const DEFAULT_BILL_LOCATION: &str = "Current Location";

/// The details a caller supplies to create a bill.
///
/// # Example
///
/// ```
/// use travel_companion_engine::models::BillRequest;
/// use rust_decimal::Decimal;
///
/// let request = BillRequest::new("Lunch at Ichiran", Decimal::new(12000, 2));
/// assert_eq!(request.location, "Current Location");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillRequest {
    /// Free-text description of what was paid for.
    pub description: String,
    /// The total amount to split. Must be positive.
    pub total: Decimal,
    /// Where the bill was incurred.
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String {
    DEFAULT_BILL_LOCATION.to_string()
}

impl BillRequest {
    /// Creates a request at the default location.
    pub fn new(description: impl Into<String>, total: Decimal) -> Self {
        Self {
            description: description.into(),
            total,
            location: default_location(),
        }
    }

    /// Sets the location recorded on the bill.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// The amount a single participant owes on a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantShare {
    /// The ID of the participant who owes this share.
    pub participant_id: String,
    /// The participant's display name at the time of the split.
    pub name: String,
    /// The amount owed, at full precision.
    pub amount: Decimal,
}

impl ParticipantShare {
    /// Returns the share rounded half away from zero to `scale` decimal places.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_companion_engine::models::ParticipantShare;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let share = ParticipantShare {
    ///     participant_id: "1".to_string(),
    ///     name: "Sarah".to_string(),
    ///     amount: Decimal::from_str("33.335").unwrap(),
    /// };
    /// assert_eq!(share.display_amount(2), Decimal::from_str("33.34").unwrap());
    /// ```
    pub fn display_amount(&self, scale: u32) -> Decimal {
        self.amount
            .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// A bill split between the eligible members of a group.
///
/// The share list is never empty and its amounts sum to `total` within
/// decimal rounding tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier for the bill.
    pub id: Uuid,
    /// Free-text description of what was paid for.
    pub description: String,
    /// The total amount of the bill.
    pub total: Decimal,
    /// Where the bill was incurred.
    pub location: String,
    /// When the bill was created.
    pub created_at: DateTime<Utc>,
    /// One share per eligible participant, in input order.
    pub shares: Vec<ParticipantShare>,
}

impl Bill {
    /// Returns the sum of all participant shares.
    pub fn share_total(&self) -> Decimal {
        self.shares.iter().map(|s| s.amount).sum()
    }

    /// Returns true if the shares sum to the total within `tolerance`.
    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        (self.share_total() - self.total).abs() <= tolerance
    }

    /// Returns the share owed by the given participant, if they are on the bill.
    pub fn share_for(&self, participant_id: &str) -> Option<&ParticipantShare> {
        self.shares
            .iter()
            .find(|s| s.participant_id == participant_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn share(id: &str, amount: &str) -> ParticipantShare {
        ParticipantShare {
            participant_id: id.to_string(),
            name: format!("member_{}", id),
            amount: dec(amount),
        }
    }

    fn create_test_bill(total: &str, shares: Vec<ParticipantShare>) -> Bill {
        Bill {
            id: Uuid::nil(),
            description: "Dinner".to_string(),
            total: dec(total),
            location: DEFAULT_BILL_LOCATION.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 12, 16, 12, 30, 0).unwrap(),
            shares,
        }
    }

    #[test]
    fn test_bill_request_defaults_location() {
        let request = BillRequest::new("Lunch", dec("45.00"));
        assert_eq!(request.location, "Current Location");
        assert_eq!(request.total, dec("45.00"));
    }

    #[test]
    fn test_bill_request_with_location() {
        let request = BillRequest::new("Lunch", dec("45.00")).at("Shibuya Crossing");
        assert_eq!(request.location, "Shibuya Crossing");
    }

    #[test]
    fn test_deserialize_bill_request_without_location() {
        let json = r#"{ "description": "Taxi", "total": "30.50" }"#;

        let request: BillRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.total, dec("30.50"));
        assert_eq!(request.location, DEFAULT_BILL_LOCATION);
    }

    #[test]
    fn test_share_total_sums_all_shares() {
        let bill = create_test_bill(
            "120.00",
            vec![share("1", "40.00"), share("2", "40.00"), share("3", "40.00")],
        );
        assert_eq!(bill.share_total(), dec("120.00"));
        assert!(bill.is_balanced(Decimal::ZERO));
    }

    #[test]
    fn test_is_balanced_respects_tolerance() {
        let bill = create_test_bill("100.00", vec![share("1", "33.33"), share("2", "66.66")]);
        assert!(!bill.is_balanced(Decimal::ZERO));
        assert!(bill.is_balanced(dec("0.01")));
    }

    #[test]
    fn test_share_for_finds_participant() {
        let bill = create_test_bill("20.00", vec![share("1", "10.00"), share("2", "10.00")]);
        assert_eq!(bill.share_for("2").unwrap().amount, dec("10.00"));
        assert!(bill.share_for("9").is_none());
    }

    #[test]
    fn test_display_amount_rounds_half_away_from_zero() {
        assert_eq!(share("1", "13.3333").display_amount(2), dec("13.33"));
        assert_eq!(share("1", "13.335").display_amount(2), dec("13.34"));
        assert_eq!(share("1", "40").display_amount(2), dec("40"));
    }
}
