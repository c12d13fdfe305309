//! Normalisation of EFA responses.

use tracing::warn;

use crate::domain::Mode;
use crate::geo::{self, Point};

use super::types::{EfaPoint, LegDto, StopfinderResponse, TripDto, TripRequestResponse};

/// A location found by the stop finder.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundLocation {
    pub name: String,
    pub city: Option<String>,
    pub location: Option<Point>,
}

/// Result of a trip request.
#[derive(Debug, Clone, PartialEq)]
pub struct TripsResult {
    /// Resolved origin stop name, as echoed by the backend.
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub trips: Vec<Trip>,
}

/// One itinerary option.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Departure clock time of the first leg, `"HH:MM"`.
    pub departure: Option<String>,
    /// Arrival clock time of the last leg, `"HH:MM"`.
    pub arrival: Option<String>,
    /// Overall duration, `"HH:MM"`.
    pub duration: Option<String>,
    pub interchanges: u32,
    pub legs: Vec<TripLeg>,
}

/// One leg of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct TripLeg {
    pub mode: Mode,
    /// Line number, e.g. `"3"`.
    pub line: Option<String>,
    pub direction: Option<String>,
    pub departure: Option<TripHalt>,
    pub arrival: Option<TripHalt>,
    pub path: Vec<Point>,
}

/// Board or alight point of a leg.
#[derive(Debug, Clone, PartialEq)]
pub struct TripHalt {
    pub stop: String,
    /// Clock time, `"HH:MM"`.
    pub time: Option<String>,
    pub location: Option<Point>,
}

pub fn convert_stopfinder(resp: StopfinderResponse) -> Vec<FoundLocation> {
    let points = resp
        .stop_finder
        .and_then(|sf| sf.points)
        .map(|p| p.into_vec())
        .unwrap_or_default();
    points.into_iter().filter_map(convert_point).collect()
}

fn convert_point(point: EfaPoint) -> Option<FoundLocation> {
    // Richer records carry the bare name in `object` with the city in
    // `posttown`; sparse ones only have `name`.
    let name = match (point.object, point.name) {
        (Some(object), _) => object,
        (None, Some(name)) => name,
        (None, None) => {
            warn!("dropping stop finder point without a name");
            return None;
        }
    };
    let location = point
        .reference
        .and_then(|r| r.coords)
        .and_then(|c| geo::parse_scaled_pair(&c));
    Some(FoundLocation {
        name,
        city: point.posttown,
        location,
    })
}

pub fn convert_trip_request(resp: TripRequestResponse) -> TripsResult {
    let endpoint_name = |ep: Option<super::types::TripEndpointDto>| {
        ep.and_then(|e| e.points)
            .map(|p| p.into_vec())
            .and_then(|points| points.into_iter().next())
            .and_then(|p| p.name.or(p.object))
    };
    TripsResult {
        origin: endpoint_name(resp.origin),
        destination: endpoint_name(resp.destination),
        trips: resp
            .trips
            .map(|t| t.into_vec())
            .unwrap_or_default()
            .into_iter()
            .map(convert_trip)
            .collect(),
    }
}

fn convert_trip(dto: TripDto) -> Trip {
    let legs: Vec<TripLeg> = dto
        .legs
        .unwrap_or_default()
        .into_iter()
        .map(convert_leg)
        .collect();
    Trip {
        departure: legs
            .first()
            .and_then(|l| l.departure.as_ref())
            .and_then(|h| h.time.clone()),
        arrival: legs
            .last()
            .and_then(|l| l.arrival.as_ref())
            .and_then(|h| h.time.clone()),
        duration: dto.duration,
        interchanges: dto.interchange.and_then(|i| i.parse().ok()).unwrap_or(0),
        legs,
    }
}

fn convert_leg(dto: LegDto) -> TripLeg {
    let path = dto
        .path
        .as_deref()
        .map(|p| {
            p.split_whitespace()
                .filter_map(geo::parse_scaled_pair)
                .collect()
        })
        .unwrap_or_default();

    let mut points = dto.points.unwrap_or_default().into_iter();
    let halt = |point: Option<super::types::LegPointDto>| -> Option<TripHalt> {
        let point = point?;
        Some(TripHalt {
            stop: point.name_wo.or(point.name)?,
            time: point.date_time.and_then(|dt| dt.time),
            location: point
                .reference
                .and_then(|r| r.coords)
                .and_then(|c| geo::parse_scaled_pair(&c)),
        })
    };
    let departure = halt(points.next());
    let arrival = halt(points.next());

    let (mode, line, direction) = match dto.mode {
        Some(mode) => (
            mode.product
                .as_deref()
                .map(Mode::parse)
                .unwrap_or(Mode::Unknown(String::new())),
            mode.number,
            mode.destination,
        ),
        None => (Mode::Unknown(String::new()), None, None),
    };

    TripLeg {
        mode,
        line,
        direction,
        departure,
        arrival,
        path,
    }
}
