//! Time budget model.
//!
//! This module defines the [`Budget`] a traveler has before their next
//! scheduled commitment.

use serde::{Deserialize, Serialize};

/// Minutes held back from every time budget.
pub const DEFAULT_SAFETY_BUFFER_MINUTES: u32 = 5;

/// The time a traveler has before their next itinerary item.
///
/// # Example
///
/// ```
/// use travel_companion_engine::models::Budget;
///
/// let budget = Budget::new(45);
/// assert_eq!(budget.threshold(), 40);
///
/// let tight = Budget::new(3);
/// assert_eq!(tight.threshold(), -2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Minutes until the next scheduled item.
    pub available: u32,
    /// Minutes subtracted from `available` before comparing.
    #[serde(default = "default_buffer")]
    pub buffer: u32,
}

fn default_buffer() -> u32 {
    DEFAULT_SAFETY_BUFFER_MINUTES
}

impl Budget {
    /// Creates a budget with the default five minute safety buffer.
    pub fn new(available: u32) -> Self {
        Self {
            available,
            buffer: DEFAULT_SAFETY_BUFFER_MINUTES,
        }
    }

    /// Creates a budget with an explicit safety buffer.
    pub fn with_buffer(available: u32, buffer: u32) -> Self {
        Self { available, buffer }
    }

    /// Returns the largest admissible time, `available - buffer`.
    ///
    /// Negative when the buffer exceeds the available time.
    pub fn threshold(&self) -> i64 {
        i64::from(self.available) - i64::from(self.buffer)
    }
}
