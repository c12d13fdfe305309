//! Client for the VVO/DVB (Dresden) public transit open-data services.
//!
//! The upstream provider exposes three unrelated API generations, and this
//! crate wraps all of them:
//!
//! - [`webapi`] — the JSON web API (`webapi.vvo-online.de`): departure
//!   monitor, point finder, trip search, route changes
//! - [`efa`] — the legacy EFA endpoints (`efa.vvo-online.de`): stop finder
//!   and trip request via query-parameter GETs
//! - [`maps`] — the map widget endpoints (`www.dvb.de/apps/map`): pins,
//!   POI coordinates, reverse address lookup
//!
//! The hard part is not the HTTP plumbing but the decoding: the provider
//! returns pipe-delimited flat strings, epoch timestamps wrapped in
//! `/Date(...)/` markers, Gauss-Krüger projected coordinates, and JSON whose
//! shape changes between one and many results. The [`geo`], [`sap_date`],
//! and [`domain`] modules hold those decoders; the per-API `convert` modules
//! reshape raw payloads into the uniform domain types.

pub mod domain;
pub mod efa;
pub mod error;
pub mod geo;
pub mod maps;
pub mod sap_date;
pub mod webapi;

pub use domain::{
    Departure, DepartureState, Diva, InterchangePosition, Leg, Mode, Platform, PlatformKind,
    RegularStop, Route, Stop,
};
pub use error::VvoError;
pub use geo::Point;
