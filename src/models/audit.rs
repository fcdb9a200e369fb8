//! Audit records for engine decisions.
//!
//! Every calculation returns an [`AuditStep`] alongside its result so the
//! hosting app can show travelers how a split or a recommendation list was
//! worked out.

use serde::{Deserialize, Serialize};

/// A record of one rule application, with its input, output and reasoning.
///
/// # Example
///
/// ```
/// use travel_companion_engine::models::AuditStep;
///
/// let step = AuditStep {
///     rule_id: "equal_split".to_string(),
///     rule_name: "Equal Bill Split".to_string(),
///     input: serde_json::json!({"total": "120.00", "eligible": 3}),
///     output: serde_json::json!({"share": "40"}),
///     reasoning: "$120.00 / 3 = $40".to_string(),
/// };
/// assert_eq!(step.input["eligible"], 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_step_serializes_nested_json() {
        let step = AuditStep {
            rule_id: "time_budget_filter".to_string(),
            rule_name: "Time Budget Filter".to_string(),
            input: serde_json::json!({"available": 45, "buffer": 5}),
            output: serde_json::json!({"included": ["1", "2"]}),
            reasoning: "2 of 2 places fit within 40 minutes".to_string(),
        };

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["rule_id"], "time_budget_filter");
        assert_eq!(json["input"]["available"], 45);
        assert_eq!(json["output"]["included"][1], "2");
    }
}
