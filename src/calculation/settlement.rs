//! Settling bill shares into whole currency minor units.
//!
//! An equal split is kept at full precision on the [`Bill`]. When money
//! actually has to move, each share must be a whole number of cents (or
//! whatever the currency's minor unit is) and the cents must add up to the
//! total exactly. [`settle_to_minor_units`] does that reconciliation.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Bill, ParticipantShare};

/// The largest scale a [`Decimal`] can represent.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Rounds every share down to `scale` decimal places, then hands out the
/// leftover minor units one at a time in share order.
///
/// The returned shares sum to `bill.total` exactly. Shares differ by at most
/// one minor unit when the input shares were equal.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `scale` is out of range, if the
/// bill total cannot be expressed at `scale`, or if the bill's shares do not
/// add up to its total.
///
/// # Examples
///
/// ```
/// use travel_companion_engine::calculation::{settle_to_minor_units, split_bill};
/// use travel_companion_engine::clock::SystemClock;
/// use travel_companion_engine::models::{BillRequest, Participant};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let group = vec![
///     Participant::nearby("1", "Sarah"),
///     Participant::nearby("2", "Mike"),
///     Participant::nearby("4", "Emma"),
/// ];
/// let request = BillRequest::new("Taxi", Decimal::from_str("100.00").unwrap());
/// let bill = split_bill(&request, &group, &SystemClock).unwrap().bill;
///
/// let settled = settle_to_minor_units(&bill, 2).unwrap();
/// assert_eq!(settled[0].amount, Decimal::from_str("33.34").unwrap());
/// assert_eq!(settled[1].amount, Decimal::from_str("33.33").unwrap());
/// assert_eq!(settled[2].amount, Decimal::from_str("33.33").unwrap());
/// ```
pub fn settle_to_minor_units(bill: &Bill, scale: u32) -> EngineResult<Vec<ParticipantShare>> {
    if scale > MAX_DECIMAL_SCALE {
        return Err(EngineError::invalid_input(
            "scale",
            format!("must be at most {}, got {}", MAX_DECIMAL_SCALE, scale),
        ));
    }

    if bill.shares.is_empty() {
        return Err(EngineError::invalid_input("shares", "bill has no shares"));
    }

    if bill.total.round_dp(scale) != bill.total {
        return Err(EngineError::invalid_input(
            "total",
            format!(
                "{} has more than {} decimal places",
                bill.total.normalize(),
                scale
            ),
        ));
    }

    let unit = Decimal::new(1, scale);

    let mut settled: Vec<ParticipantShare> = bill
        .shares
        .iter()
        .map(|s| ParticipantShare {
            amount: s
                .amount
                .round_dp_with_strategy(scale, RoundingStrategy::ToZero),
            ..s.clone()
        })
        .collect();

    let distributed: Decimal = settled.iter().map(|s| s.amount).sum();
    let mut remainder = bill.total - distributed;

    for share in settled.iter_mut() {
        if remainder < unit {
            break;
        }
        share.amount += unit;
        remainder -= unit;
    }

    if remainder != Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "shares",
            format!(
                "shares do not add up to total {} ({} left over)",
                bill.total.normalize(),
                remainder.normalize()
            ),
        ));
    }

    debug!(
        bill_id = %bill.id,
        scale,
        shares = settled.len(),
        "Settled bill to minor units"
    );

    Ok(settled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_bill(total: &str, amounts: &[&str]) -> Bill {
        Bill {
            id: Uuid::nil(),
            description: "Test".to_string(),
            total: dec(total),
            location: "Current Location".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 12, 16, 12, 0, 0).unwrap(),
            shares: amounts
                .iter()
                .enumerate()
                .map(|(i, a)| ParticipantShare {
                    participant_id: (i + 1).to_string(),
                    name: format!("member_{}", i + 1),
                    amount: dec(a),
                })
                .collect(),
        }
    }

    fn third_of(total: &str) -> String {
        (dec(total) / Decimal::from(3)).to_string()
    }

    #[test]
    fn test_even_split_is_unchanged() {
        let bill = create_test_bill("120.00", &["40", "40", "40"]);
        let settled = settle_to_minor_units(&bill, 2).unwrap();

        for share in &settled {
            assert_eq!(share.amount, dec("40.00"));
        }
    }

    #[test]
    fn test_leftover_cent_goes_to_first_share() {
        let third = third_of("100.00");
        let bill = create_test_bill("100.00", &[&third, &third, &third]);

        let settled = settle_to_minor_units(&bill, 2).unwrap();

        assert_eq!(settled[0].amount, dec("33.34"));
        assert_eq!(settled[1].amount, dec("33.33"));
        assert_eq!(settled[2].amount, dec("33.33"));
        let sum: Decimal = settled.iter().map(|s| s.amount).sum();
        assert_eq!(sum, dec("100.00"));
    }

    #[test]
    fn test_two_leftover_cents_are_spread() {
        let third = third_of("0.05");
        let bill = create_test_bill("0.05", &[&third, &third, &third]);

        let settled = settle_to_minor_units(&bill, 2).unwrap();

        assert_eq!(settled[0].amount, dec("0.02"));
        assert_eq!(settled[1].amount, dec("0.02"));
        assert_eq!(settled[2].amount, dec("0.01"));
    }

    #[test]
    fn test_zero_scale_settles_to_whole_units() {
        let third = third_of("1000");
        let bill = create_test_bill("1000", &[&third, &third, &third]);

        let settled = settle_to_minor_units(&bill, 0).unwrap();

        assert_eq!(settled[0].amount, dec("334"));
        assert_eq!(settled[1].amount, dec("333"));
        assert_eq!(settled[2].amount, dec("333"));
    }

    #[test]
    fn test_total_finer_than_scale_is_refused() {
        let bill = create_test_bill("10.005", &["10.005"]);

        match settle_to_minor_units(&bill, 2) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "total"),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_unbalanced_shares_are_refused() {
        let bill = create_test_bill("100.00", &["10.00", "10.00"]);

        match settle_to_minor_units(&bill, 2) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "shares"),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_scale_out_of_range_is_refused() {
        let bill = create_test_bill("10", &["10"]);
        assert!(settle_to_minor_units(&bill, 29).is_err());
    }

    #[test]
    fn test_settlement_keeps_participant_details() {
        let bill = create_test_bill("20", &["10", "10"]);
        let settled = settle_to_minor_units(&bill, 2).unwrap();

        assert_eq!(settled[1].participant_id, "2");
        assert_eq!(settled[1].name, "member_2");
    }
}
