//! Equal bill splitting between nearby group members.
//!
//! This module provides [`split_bill`], which divides a bill evenly between
//! the participants flagged as eligible and records the result as a [`Bill`].

use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Bill, BillRequest, Participant, ParticipantShare};

/// The result of splitting a bill, including the bill and audit step.
#[derive(Debug, Clone)]
pub struct BillSplitResult {
    /// The bill with one share per eligible participant.
    pub bill: Bill,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits a bill equally between the eligible participants.
///
/// Every eligible participant owes `total / eligible_count` at full decimal
/// precision. Participants who are not eligible are left off the bill. The
/// bill is stamped with the clock's current time.
///
/// # Arguments
///
/// * `request` - The description, total and location of the bill
/// * `participants` - Everyone in the group; only eligible members pay
/// * `clock` - The time source used for the creation timestamp
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the total is not positive or if
/// no participant is eligible.
///
/// # Examples
///
/// ```
/// use travel_companion_engine::calculation::split_bill;
/// use travel_companion_engine::clock::SystemClock;
/// use travel_companion_engine::models::{BillRequest, Participant};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let group = vec![
///     Participant::nearby("1", "Sarah"),
///     Participant::nearby("2", "Mike"),
///     Participant::away("3", "Alex"),
///     Participant::nearby("4", "Emma"),
/// ];
/// let request = BillRequest::new("Lunch at Ichiran", Decimal::from_str("120.00").unwrap());
///
/// let result = split_bill(&request, &group, &SystemClock).unwrap();
/// assert_eq!(result.bill.shares.len(), 3);
/// assert_eq!(result.bill.shares[0].amount, Decimal::from_str("40").unwrap());
/// ```
pub fn split_bill<C: Clock + ?Sized>(
    request: &BillRequest,
    participants: &[Participant],
    clock: &C,
) -> EngineResult<BillSplitResult> {
    if request.total <= Decimal::ZERO {
        warn!(total = %request.total, "Refusing to split non-positive total");
        return Err(EngineError::invalid_input(
            "total",
            format!("must be positive, got {}", request.total),
        ));
    }

    let eligible: Vec<&Participant> = participants.iter().filter(|p| p.eligible).collect();
    if eligible.is_empty() {
        warn!(
            participants = participants.len(),
            "Refusing to split bill with no eligible participants"
        );
        return Err(EngineError::invalid_input(
            "participants",
            "no eligible participants to split between",
        ));
    }

    let count = Decimal::from(eligible.len());
    let share = request.total / count;

    let shares: Vec<ParticipantShare> = eligible
        .iter()
        .map(|p| ParticipantShare {
            participant_id: p.id.clone(),
            name: p.name.clone(),
            amount: share,
        })
        .collect();

    let excluded: Vec<&str> = participants
        .iter()
        .filter(|p| !p.eligible)
        .map(|p| p.id.as_str())
        .collect();

    let bill = Bill {
        id: Uuid::new_v4(),
        description: request.description.clone(),
        total: request.total,
        location: request.location.clone(),
        created_at: clock.now(),
        shares,
    };

    debug!(
        bill_id = %bill.id,
        total = %bill.total,
        eligible = eligible.len(),
        share = %share.normalize(),
        "Split bill"
    );

    let audit_step = AuditStep {
        rule_id: "equal_split".to_string(),
        rule_name: "Equal Bill Split".to_string(),
        input: serde_json::json!({
            "total": request.total.normalize().to_string(),
            "participants": participants.len(),
            "eligible": eligible.len(),
            "excluded": excluded
        }),
        output: serde_json::json!({
            "share": share.normalize().to_string(),
            "shares": bill.shares.len()
        }),
        reasoning: format!(
            "${} / {} = ${}",
            request.total.normalize(),
            eligible.len(),
            share.normalize()
        ),
    };

    Ok(BillSplitResult { bill, audit_step })
}
