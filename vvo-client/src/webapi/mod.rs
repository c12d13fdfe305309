//! Client for the VVO web API (`webapi.vvo-online.de`).
//!
//! Covers the departure monitor, stop search, trip search and route
//! changes endpoints. Wire DTOs live in [`types`], request bodies in
//! [`requests`], and [`convert`] normalises responses into the domain
//! types from [`crate::domain`].

pub mod client;
pub mod convert;
pub mod requests;
pub mod types;

pub use client::{WebApiClient, WebApiConfig};
pub use convert::{
    FindResult, LineChanges, MonitorResult, NormalizeError, RouteChange, RouteChangesResult,
    RouteResult, ValidityPeriod,
};
pub use requests::{
    Entrance, MaxChanges, MobilitySettings, MonitorOptions, StandardSettings, TripOptions,
    WalkingSpeed,
};
