//! Sources of simulated suggestions.
//!
//! The feed does not roll dice or read timers itself. It asks a
//! [`SuggestionSource`] whether something new turned up at a given instant,
//! which keeps the feed deterministic under test.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Notification, NotificationKind, Priority};

/// Chance that a poll of [`ProbabilisticSource`] produces a suggestion.
pub const DEFAULT_SUGGESTION_CHANCE: f64 = 0.3;

/// Roll that a default [`ProbabilisticSource`] must exceed.
pub const DEFAULT_SUGGESTION_THRESHOLD: f64 = 0.7;

/// Something that may produce a new notification when polled.
pub trait SuggestionSource {
    /// Returns a new notification raised at `now`, if there is one.
    fn poll(&mut self, now: DateTime<Utc>) -> Option<Notification>;
}

/// Builds the stock "nearby spot" suggestion raised at `now`.
pub fn nearby_spot_suggestion(now: DateTime<Utc>) -> Notification {
    Notification {
        id: Uuid::new_v4().to_string(),
        kind: NotificationKind::Suggestion,
        title: "Smart Suggestion".to_string(),
        message: "Found a great local spot nearby that matches your interests!".to_string(),
        action: Some("Check It Out".to_string()),
        actionable: true,
        priority: Priority::Low,
        timestamp: now,
        dismissed: false,
    }
}

/// Emits a suggestion whenever an injected roll lands inside the chance.
///
/// `roll` must return values in `[0, 1)`. A suggestion is produced when the
/// roll is strictly greater than `1 - chance`. A chance of 1 always produces
/// one and a chance of 0 never does.
///
/// # Example
///
/// ```
/// use travel_companion_engine::notifications::{ProbabilisticSource, SuggestionSource};
/// use chrono::Utc;
///
/// let mut rolls = vec![0.95, 0.1].into_iter();
/// let mut source = ProbabilisticSource::new(move || rolls.next().unwrap_or(0.0));
///
/// assert!(source.poll(Utc::now()).is_some());
/// assert!(source.poll(Utc::now()).is_none());
/// ```
pub struct ProbabilisticSource<R> {
    roll: R,
    threshold: f64,
}

impl<R: FnMut() -> f64> ProbabilisticSource<R> {
    /// Creates a source with the default 30% chance per poll.
    pub fn new(roll: R) -> Self {
        Self {
            roll,
            threshold: DEFAULT_SUGGESTION_THRESHOLD,
        }
    }

    /// Creates a source with an explicit chance per poll, clamped to `[0, 1]`.
    pub fn with_chance(roll: R, chance: f64) -> Self {
        Self {
            roll,
            threshold: 1.0 - chance.clamp(0.0, 1.0),
        }
    }
}

impl<R: FnMut() -> f64> SuggestionSource for ProbabilisticSource<R> {
    fn poll(&mut self, now: DateTime<Utc>) -> Option<Notification> {
        let emit = if self.threshold >= 1.0 {
            false
        } else if self.threshold <= 0.0 {
            true
        } else {
            (self.roll)() > self.threshold
        };

        emit.then(|| nearby_spot_suggestion(now))
    }
}

/// Replays a fixed script of notifications, one entry per poll.
///
/// `None` entries are polls that produce nothing. Once the script runs out
/// every poll produces nothing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<Option<Notification>>,
}

impl ScriptedSource {
    /// Creates a source that replays `script` in order.
    pub fn new(script: impl IntoIterator<Item = Option<Notification>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Returns the number of polls left in the script.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl SuggestionSource for ScriptedSource {
    fn poll(&mut self, now: DateTime<Utc>) -> Option<Notification> {
        self.script.pop_front().flatten().map(|mut notification| {
            notification.timestamp = now;
            notification
        })
    }
}
