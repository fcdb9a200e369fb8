//! Place model for nearby recommendations.
//!
//! This module defines the [`Place`] struct and the enums that describe a
//! candidate stop between two itinerary items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of place being recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    /// Restaurants and food stalls.
    Food,
    /// Coffee shops.
    Cafe,
    /// Sights, viewpoints and other attractions.
    Attraction,
    /// Shops and shopping streets.
    Shopping,
}

/// The mood a place suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// In and out quickly.
    Quick,
    /// Somewhere to sit down and unwind.
    Relaxed,
    /// Something new to explore.
    Adventure,
}

/// Relative price band of a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceBand {
    /// Inexpensive.
    #[serde(rename = "$")]
    Budget,
    /// Moderately priced.
    #[serde(rename = "$$")]
    Moderate,
    /// Expensive.
    #[serde(rename = "$$$")]
    Premium,
}

/// A candidate place near the traveler.
///
/// Walk and queue times are whole minutes. An absent queue wait means the
/// place has no queue.
///
/// # Example
///
/// ```
/// use travel_companion_engine::models::{Place, PlaceCategory};
///
/// let ramen = Place::new("1", "Ichiran Ramen Shibuya", PlaceCategory::Food, 3).with_queue(15);
/// assert_eq!(ramen.time_needed(), 18);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier for the place.
    pub id: String,
    /// The place's name.
    pub name: String,
    /// The category tag of the place.
    pub category: PlaceCategory,
    /// Walking time from the traveler's position, in minutes.
    pub walk_time: u32,
    /// Current queue wait in minutes, if there is a queue.
    #[serde(default)]
    pub queue_wait: Option<u32>,
    /// Distance from the traveler in metres.
    #[serde(default)]
    pub distance_m: Option<u32>,
    /// Average visitor rating.
    #[serde(default)]
    pub rating: Option<Decimal>,
    /// The mood the place suits.
    #[serde(default)]
    pub mood: Option<Mood>,
    /// Relative price band.
    #[serde(default)]
    pub price: Option<PriceBand>,
}

impl Place {
    /// Creates a place with no queue and no display metadata.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: PlaceCategory,
        walk_time: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            walk_time,
            queue_wait: None,
            distance_m: None,
            rating: None,
            mood: None,
            price: None,
        }
    }

    /// Sets the current queue wait in minutes.
    pub fn with_queue(mut self, minutes: u32) -> Self {
        self.queue_wait = Some(minutes);
        self
    }

    /// Returns the minutes needed to walk there and get through the queue.
    pub fn time_needed(&self) -> u32 {
        self.walk_time.saturating_add(self.queue_wait.unwrap_or(0))
    }
}
