//! Core data models for the Travel Companion Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod bill;
mod booking;
mod budget;
mod notification;
mod participant;
mod place;
mod queue;

pub use audit::AuditStep;
pub use bill::{Bill, BillRequest, DEFAULT_BILL_LOCATION, ParticipantShare};
pub use booking::{Booking, BookingKind, BookingStatus};
pub use budget::{Budget, DEFAULT_SAFETY_BUFFER_MINUTES};
pub use notification::{Notification, NotificationKind, NotificationSettings, Priority};
pub use participant::Participant;
pub use place::{Mood, Place, PlaceCategory, PriceBand};
pub use queue::{QueueReport, QueueTrend, VenueKind};
