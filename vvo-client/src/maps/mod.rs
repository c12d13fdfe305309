//! Client for the DVB map apps (`www.dvb.de/apps/map`).
//!
//! Pins inside a bounding box, point-of-interest coordinates and reverse
//! geocoding. The pins endpoint speaks pipe-delimited records rather than
//! structured JSON; [`pins`] holds the per-kind decoders.

pub mod client;
pub mod pins;

pub use client::{Address, MapsClient, MapsConfig};
pub use pins::{Pin, PinKind, PlatformPin, PoiPin, StopPin, decode_pin};
