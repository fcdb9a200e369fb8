//! Travel Companion Engine
//!
//! This crate provides the computational core of a group travel companion:
//! splitting bills between nearby group members, choosing nearby places that
//! fit before the next itinerary item, classifying queue waits, and keeping
//! the traveler's notification feed.

#![warn(missing_docs)]

pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod notifications;
