//! Client for the legacy EFA endpoints (`efa.vvo-online.de`).
//!
//! An older backend generation than [`crate::webapi`], still the only
//! source for name-based itinerary search. Responses use the scaled
//! decimal coordinate encoding rather than the projected one.

pub mod client;
pub mod convert;
pub mod types;

pub use client::{DepArr, EfaClient, EfaConfig, TripQuery};
pub use convert::{FoundLocation, Trip, TripHalt, TripLeg, TripsResult};
