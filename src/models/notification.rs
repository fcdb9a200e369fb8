//! Proactive notification models.
//!
//! This module defines the [`Notification`] shown in the traveler's feed and
//! the [`NotificationSettings`] that decide which kinds are accepted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of event a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A booking has been delayed.
    Delay,
    /// A queue is unusually long.
    Queue,
    /// Something nearby worth a look.
    Suggestion,
    /// An upcoming itinerary item.
    Reminder,
    /// A weather change affecting plans.
    Weather,
}

/// How urgently a notification needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Informational.
    Low,
    /// Worth a look soon.
    Medium,
    /// Needs attention now.
    High,
}

/// A single entry in the notification feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: String,
    /// The kind of event being reported.
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Label of the action the traveler can take, if any.
    #[serde(default)]
    pub action: Option<String>,
    /// Whether the action can be taken right now.
    #[serde(default)]
    pub actionable: bool,
    /// How urgent the notification is.
    pub priority: Priority,
    /// When the notification was raised.
    pub timestamp: DateTime<Utc>,
    /// Whether the traveler has dismissed it.
    #[serde(default)]
    pub dismissed: bool,
}

impl Notification {
    /// Returns true if the notification is flagged actionable and has an
    /// action label to perform.
    pub fn is_actionable(&self) -> bool {
        self.actionable && self.action.is_some()
    }
}

/// Per-kind switches for which notifications the traveler wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Accept delay notifications.
    pub delays: bool,
    /// Accept queue notifications.
    pub queues: bool,
    /// Accept suggestions.
    pub suggestions: bool,
    /// Accept reminders.
    pub reminders: bool,
    /// Accept weather notifications.
    pub weather: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            delays: true,
            queues: true,
            suggestions: true,
            reminders: true,
            weather: true,
        }
    }
}

impl NotificationSettings {
    /// Returns true if notifications of `kind` are enabled.
    pub fn allows(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Delay => self.delays,
            NotificationKind::Queue => self.queues,
            NotificationKind::Suggestion => self.suggestions,
            NotificationKind::Reminder => self.reminders,
            NotificationKind::Weather => self.weather,
        }
    }
}
