//! Participant model for bill splitting.
//!
//! This module defines the [`Participant`] struct representing a group
//! member who may take part in a bill split.

use serde::{Deserialize, Serialize};

/// Represents a group member who may share the cost of a bill.
///
/// Only participants flagged as eligible (present or nearby) are included
/// in a split; everybody else is left out of the bill entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier for the participant.
    pub id: String,
    /// The participant's display name.
    pub name: String,
    /// Whether the participant is nearby and therefore shares the bill.
    #[serde(default)]
    pub eligible: bool,
}

impl Participant {
    /// Creates a participant who is nearby and eligible for splits.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_companion_engine::models::Participant;
    ///
    /// let sarah = Participant::nearby("1", "Sarah");
    /// assert!(sarah.eligible);
    /// ```
    pub fn nearby(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            eligible: true,
        }
    }

    /// Creates a participant who is away and excluded from splits.
    pub fn away(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            eligible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearby_participant_is_eligible() {
        let participant = Participant::nearby("1", "Sarah");
        assert_eq!(participant.id, "1");
        assert_eq!(participant.name, "Sarah");
        assert!(participant.eligible);
    }

    #[test]
    fn test_away_participant_is_not_eligible() {
        let participant = Participant::away("3", "Alex");
        assert!(!participant.eligible);
    }

    #[test]
    fn test_deserialize_without_eligible_defaults_to_false() {
        let json = r#"{ "id": "2", "name": "Mike" }"#;

        let participant: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(participant.name, "Mike");
        assert!(!participant.eligible);
    }
}
