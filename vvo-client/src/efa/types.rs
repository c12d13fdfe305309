//! Wire types for the EFA endpoints.
//!
//! The EFA backend serialises a container that holds exactly one element as
//! a bare object under a singular key instead of a one-element list. Every
//! field with that behaviour deserialises through an untagged enum here, so
//! the shape wobble is absorbed at the deserialisation boundary and nothing
//! downstream ever branches on it.

use serde::Deserialize;

/// Stop finder response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct StopfinderResponse {
    #[serde(rename = "stopFinder")]
    pub stop_finder: Option<StopFinderDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopFinderDto {
    pub points: Option<PointsField>,
}

/// Either `{"point": {...}}` (single match) or a plain list of points.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PointsField {
    Wrapped { point: EfaPoint },
    List(Vec<EfaPoint>),
}

impl PointsField {
    pub fn into_vec(self) -> Vec<EfaPoint> {
        match self {
            PointsField::Wrapped { point } => vec![point],
            PointsField::List(points) => points,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EfaPoint {
    /// Bare stop name; present together with `posttown` on richer records.
    pub object: Option<String>,
    pub name: Option<String>,
    pub posttown: Option<String>,
    #[serde(rename = "ref")]
    pub reference: Option<EfaRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EfaRef {
    pub id: Option<String>,
    /// Scaled decimal pair, e.g. `"51029946,13721873"`.
    pub coords: Option<String>,
}

/// Trip request response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRequestResponse {
    pub origin: Option<TripEndpointDto>,
    pub destination: Option<TripEndpointDto>,
    pub trips: Option<TripsField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TripEndpointDto {
    pub points: Option<PointsField>,
}

/// Either `{"trip": {...}}` (single itinerary) or a plain list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TripsField {
    Wrapped { trip: TripDto },
    List(Vec<TripDto>),
}

impl TripsField {
    pub fn into_vec(self) -> Vec<TripDto> {
        match self {
            TripsField::Wrapped { trip } => vec![trip],
            TripsField::List(trips) => trips,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TripDto {
    /// Formatted as `"HH:MM"`.
    pub duration: Option<String>,
    /// Interchange count as a decimal string.
    pub interchange: Option<String>,
    pub legs: Option<Vec<LegDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    pub mode: Option<LegModeDto>,
    /// Exactly two entries on well-formed legs: board and alight.
    pub points: Option<Vec<LegPointDto>>,
    /// Space-separated scaled coordinate pairs.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegModeDto {
    pub product: Option<String>,
    pub number: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegPointDto {
    #[serde(rename = "nameWO")]
    pub name_wo: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "dateTime")]
    pub date_time: Option<LegDateTimeDto>,
    #[serde(rename = "ref")]
    pub reference: Option<EfaRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegDateTimeDto {
    pub date: Option<String>,
    pub time: Option<String>,
}
