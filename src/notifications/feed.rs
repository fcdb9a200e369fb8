//! The traveler's notification feed.
//!
//! [`NotificationFeed`] is the state container the hosting app keeps for
//! proactive notifications. It owns the notifications, newest first, and the
//! settings that decide which kinds are accepted.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::{EngineError, EngineResult};
use crate::models::{Notification, NotificationSettings, Priority};

use super::source::SuggestionSource;

/// Seconds between polls of the suggestion source.
pub const SUGGESTION_POLL_INTERVAL_SECONDS: i64 = 30;

/// Formats how long ago `timestamp` was, relative to `now`.
///
/// Under a minute (including timestamps in the future) reads "Just now",
/// under an hour reads in whole minutes, anything older in whole hours.
///
/// # Examples
///
/// ```
/// use travel_companion_engine::notifications::format_time_ago;
/// use chrono::{Duration, TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 12, 16, 12, 0, 0).unwrap();
/// assert_eq!(format_time_ago(now, now), "Just now");
/// assert_eq!(format_time_ago(now - Duration::minutes(25), now), "25m ago");
/// assert_eq!(format_time_ago(now - Duration::minutes(125), now), "2h ago");
/// ```
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else {
        format!("{}h ago", minutes / 60)
    }
}

/// Notifications for one traveler, newest first.
///
/// # Example
///
/// ```
/// use travel_companion_engine::clock::FixedClock;
/// use travel_companion_engine::models::NotificationSettings;
/// use travel_companion_engine::notifications::{NotificationFeed, ProbabilisticSource};
/// use chrono::{TimeZone, Utc};
///
/// let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 12, 16, 11, 0, 0).unwrap());
/// let mut source = ProbabilisticSource::new(|| 0.9);
/// let mut feed = NotificationFeed::new(NotificationSettings::default());
///
/// let id = feed.tick(&clock, &mut source).map(|n| n.id.clone()).unwrap();
/// assert_eq!(feed.active().len(), 1);
///
/// let message = feed.act_on(&id).unwrap();
/// assert_eq!(message, "Check It Out for: Smart Suggestion");
/// assert!(feed.active().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
    settings: NotificationSettings,
    last_poll: Option<DateTime<Utc>>,
}

impl NotificationFeed {
    /// Creates an empty feed.
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            notifications: Vec::new(),
            settings,
            last_poll: None,
        }
    }

    /// Creates a feed holding `notifications` in the given order.
    ///
    /// Settings only filter future pushes; existing notifications are kept.
    pub fn with_notifications(
        settings: NotificationSettings,
        notifications: Vec<Notification>,
    ) -> Self {
        Self {
            notifications,
            settings,
            last_poll: None,
        }
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    /// Replaces the settings.
    pub fn set_settings(&mut self, settings: NotificationSettings) {
        self.settings = settings;
    }

    /// Returns every notification, dismissed or not, newest first.
    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    /// Adds a notification to the top of the feed.
    ///
    /// Returns false, leaving the feed unchanged, if its kind is disabled.
    pub fn push(&mut self, notification: Notification) -> bool {
        if !self.settings.allows(notification.kind) {
            debug!(
                id = %notification.id,
                kind = ?notification.kind,
                "Dropped notification of disabled kind"
            );
            return false;
        }
        self.notifications.insert(0, notification);
        true
    }

    /// Marks a notification as dismissed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotificationNotFound`] if no notification has `id`.
    pub fn dismiss(&mut self, id: &str) -> EngineResult<()> {
        let notification = self.find_mut(id)?;
        notification.dismissed = true;
        debug!(id = %id, "Dismissed notification");
        Ok(())
    }

    /// Performs a notification's action and dismisses it.
    ///
    /// Returns the confirmation text "<action> for: <title>".
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotificationNotFound`] if no notification has
    /// `id`, or [`EngineError::NotActionable`] if it is not flagged
    /// actionable or carries no action.
    pub fn act_on(&mut self, id: &str) -> EngineResult<String> {
        let notification = self.find_mut(id)?;
        let action = notification
            .action
            .clone()
            .filter(|_| notification.actionable)
            .ok_or_else(|| EngineError::NotActionable { id: id.to_string() })?;

        let confirmation = format!("{} for: {}", action, notification.title);
        notification.dismissed = true;
        info!(id = %id, action = %action, "Performed notification action");
        Ok(confirmation)
    }

    /// Returns the notifications that have not been dismissed, newest first.
    pub fn active(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.dismissed).collect()
    }

    /// Counts active high priority notifications.
    pub fn high_priority_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| !n.dismissed && n.priority == Priority::High)
            .count()
    }

    /// Counts active notifications that offer an action.
    pub fn actionable_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| !n.dismissed && n.is_actionable())
            .count()
    }

    /// Polls the suggestion source if the poll interval has elapsed.
    ///
    /// The first tick always polls. Returns the notification added to the
    /// feed, if any.
    pub fn tick<C, S>(&mut self, clock: &C, source: &mut S) -> Option<&Notification>
    where
        C: Clock + ?Sized,
        S: SuggestionSource + ?Sized,
    {
        let now = clock.now();
        if let Some(last) = self.last_poll {
            if now - last < Duration::seconds(SUGGESTION_POLL_INTERVAL_SECONDS) {
                return None;
            }
        }
        self.last_poll = Some(now);

        let notification = source.poll(now)?;
        let id = notification.id.clone();
        if self.push(notification) {
            info!(id = %id, "Added suggestion to feed");
            self.notifications.first()
        } else {
            None
        }
    }

    fn find_mut(&mut self, id: &str) -> EngineResult<&mut Notification> {
        self.notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| EngineError::NotificationNotFound { id: id.to_string() })
    }
}
