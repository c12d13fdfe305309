//! Domain types for the VVO services.
//!
//! Immutable value objects, constructed once per response during
//! normalisation and never mutated. Everything exposed here is already in
//! decoded form: geographic coordinates, `chrono` instants, closed mode
//! vocabularies with explicit `Unknown` escape hatches.

mod departure;
mod diva;
mod interchange;
mod mode;
mod platform;
mod route;
mod stop;

pub use departure::{Departure, DepartureState};
pub use diva::Diva;
pub use interchange::{
    InterchangePosition, classify_interchange, classify_points, classify_route,
};
pub use mode::Mode;
pub use platform::{Platform, PlatformKind};
pub use route::{Leg, Mot, RegularStop, Route, parse_map_data};
pub use stop::{DEFAULT_CITY, Stop};
