//! Crowd-sourced queue report model.

use serde::{Deserialize, Serialize};

/// The kind of venue a queue report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueKind {
    /// A restaurant.
    Restaurant,
    /// A sight or attraction.
    Attraction,
    /// A station, stop or other transport hub.
    Transport,
    /// A shop.
    Shop,
}

/// Direction the wait has been moving in recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueTrend {
    /// Waits are getting longer.
    Increasing,
    /// Waits are getting shorter.
    Decreasing,
    /// Waits are steady.
    Stable,
}

/// A live wait-time report aggregated from users at a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueReport {
    /// Unique identifier for the report.
    pub id: String,
    /// The venue the report is for.
    pub location: String,
    /// The kind of venue.
    pub venue: VenueKind,
    /// Current wait in minutes.
    pub current_wait: u32,
    /// Typical wait in minutes.
    pub average_wait: u32,
    /// Time ranges when the venue is usually busiest (e.g. "11:00-13:00").
    #[serde(default)]
    pub peak_hours: Vec<String>,
    /// Confidence in the estimate, as a percentage from 0 to 100.
    pub confidence: u8,
    /// Number of users who contributed to the estimate.
    pub user_count: u32,
    /// Recent direction of the wait.
    pub trend: QueueTrend,
}
