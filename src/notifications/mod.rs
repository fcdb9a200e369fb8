//! Proactive notifications for the traveler.
//!
//! This module provides the [`NotificationFeed`] state container and the
//! [`SuggestionSource`] trait through which simulated "real-time"
//! suggestions reach it.

mod feed;
mod source;

pub use feed::{NotificationFeed, SUGGESTION_POLL_INTERVAL_SECONDS, format_time_ago};
pub use source::{
    DEFAULT_SUGGESTION_CHANCE, DEFAULT_SUGGESTION_THRESHOLD, ProbabilisticSource, ScriptedSource,
    SuggestionSource, nearby_spot_suggestion,
};
