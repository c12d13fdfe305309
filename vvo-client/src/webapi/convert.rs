//! Normalisation of web API DTOs into domain types.
//!
//! Policy: a missing or non-`Ok` status envelope fails the whole response;
//! individually malformed records (a stop string that does not decode, a
//! departure without a parseable scheduled time) are dropped from the list
//! with a warning instead of failing the call.

use chrono::{DateTime, FixedOffset};
use tracing::warn;

use crate::domain::{
    Departure, DepartureState, Diva, Leg, Mode, Mot, Platform, PlatformKind, RegularStop, Route,
    Stop, parse_map_data,
};
use crate::geo;
use crate::sap_date;

use super::types::{
    ChangeDto, DepartureDto, DivaDto, LineDto, MonitorResponse, MotDto, PartialRouteDto,
    PlatformDto, PointfinderResponse, RegularStopDto, RouteChangesResponse, RouteDto, StatusDto,
    TripsResponse, ValidityPeriodDto,
};

/// Error during response normalisation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NormalizeError {
    /// The provider's status envelope flagged the request as failed.
    #[error("provider status {code}: {}", message.as_deref().unwrap_or("(no message)"))]
    Status {
        code: String,
        message: Option<String>,
    },
}

/// Departure monitor result.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorResult {
    pub name: Option<String>,
    pub place: Option<String>,
    pub expiration_time: Option<DateTime<FixedOffset>>,
    pub departures: Vec<Departure>,
}

/// Point finder result.
#[derive(Debug, Clone, PartialEq)]
pub struct FindResult {
    pub stops: Vec<Stop>,
    pub expiration_time: Option<DateTime<FixedOffset>>,
}

/// Trip search result.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub routes: Vec<Route>,
    pub session_id: Option<String>,
}

/// Route changes result.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteChangesResult {
    pub lines: Vec<LineChanges>,
    pub changes: Vec<RouteChange>,
}

/// A line together with the change ids that affect it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChanges {
    pub id: Option<String>,
    pub name: Option<String>,
    pub mode: Option<Mode>,
    pub operator: Option<String>,
    pub change_ids: Vec<String>,
}

/// One announced route change.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteChange {
    pub id: Option<String>,
    /// Provider change category, e.g. `"Scheduled"` — an open vocabulary,
    /// kept raw.
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub publish_date: Option<DateTime<FixedOffset>>,
    pub validity_periods: Vec<ValidityPeriod>,
    pub line_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidityPeriod {
    pub begin: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
}

impl From<NormalizeError> for crate::error::VvoError {
    fn from(err: NormalizeError) -> Self {
        let NormalizeError::Status { code, message } = err;
        crate::error::VvoError::Status { code, message }
    }
}

fn check_status(status: Option<&StatusDto>) -> Result<(), NormalizeError> {
    match status {
        Some(s) if s.code != "Ok" => Err(NormalizeError::Status {
            code: s.code.clone(),
            message: s.message.clone(),
        }),
        _ => Ok(()),
    }
}

pub fn convert_monitor(resp: MonitorResponse) -> Result<MonitorResult, NormalizeError> {
    check_status(resp.status.as_ref())?;
    let departures = resp
        .departures
        .unwrap_or_default()
        .into_iter()
        .filter_map(convert_departure)
        .collect();
    Ok(MonitorResult {
        name: resp.name,
        place: resp.place,
        expiration_time: sap_date::decode_opt(resp.expiration_time.as_deref()),
        departures,
    })
}

fn convert_departure(dto: DepartureDto) -> Option<Departure> {
    let Some(scheduled_time) = sap_date::decode_opt(dto.scheduled_time.as_deref()) else {
        warn!(
            line = dto.line_name.as_deref().unwrap_or("?"),
            "dropping departure without parseable scheduled time"
        );
        return None;
    };
    Some(Departure {
        id: dto.id,
        line_name: dto.line_name,
        direction: dto.direction,
        mode: dto.mot.as_deref().map(Mode::parse).unwrap_or_else(|| {
            // An absent mode field is itself protocol drift worth surfacing.
            Mode::Unknown(String::new())
        }),
        state: dto.state.as_deref().map(DepartureState::parse),
        scheduled_time,
        real_time: sap_date::decode_opt(dto.real_time.as_deref()),
        platform: dto.platform.and_then(convert_platform),
        route_changes: dto.route_changes.unwrap_or_default(),
        diva: dto.diva.and_then(convert_diva),
    })
}

fn convert_platform(dto: PlatformDto) -> Option<Platform> {
    Some(Platform {
        name: dto.name?,
        kind: dto
            .kind
            .as_deref()
            .map(PlatformKind::parse)
            .unwrap_or(PlatformKind::Unknown(String::new())),
    })
}

fn convert_diva(dto: DivaDto) -> Option<Diva> {
    Some(Diva {
        number: dto.number?,
        network: dto.network?,
    })
}

pub fn convert_pointfinder(resp: PointfinderResponse) -> Result<FindResult, NormalizeError> {
    check_status(resp.status.as_ref())?;
    let records = resp.points.unwrap_or_default();
    let mut stops = Vec::with_capacity(records.len());
    for record in &records {
        match Stop::from_record(record) {
            Some(stop) => stops.push(stop),
            None => warn!(%record, "dropping undecodable point record"),
        }
    }
    Ok(FindResult {
        stops,
        expiration_time: sap_date::decode_opt(resp.expiration_time.as_deref()),
    })
}

pub fn convert_trips(resp: TripsResponse) -> Result<RouteResult, NormalizeError> {
    check_status(resp.status.as_ref())?;
    let routes = resp
        .routes
        .unwrap_or_default()
        .into_iter()
        .map(convert_route)
        .collect();
    Ok(RouteResult {
        routes,
        session_id: resp.session_id,
    })
}

fn convert_route(dto: RouteDto) -> Route {
    // Per-segment geometry; each partial route indexes into this list.
    let chains: Vec<(Mode, Vec<crate::geo::Point>)> = dto
        .map_data
        .unwrap_or_default()
        .iter()
        .map(|chain| parse_map_data(chain))
        .collect();

    let legs = dto
        .partial_routes
        .unwrap_or_default()
        .into_iter()
        .map(|pr| convert_leg(pr, &chains))
        .collect();

    Route {
        route_id: dto.route_id,
        duration: dto.duration,
        interchanges: dto.interchanges.unwrap_or(0),
        mot_chain: dto
            .mot_chain
            .unwrap_or_default()
            .into_iter()
            .map(convert_mot)
            .collect(),
        legs,
        price: dto.price,
        price_level: dto.price_level,
        fare_zone_origin: dto.fare_zone_origin,
        fare_zone_destination: dto.fare_zone_destination,
    }
}

fn convert_leg(dto: PartialRouteDto, chains: &[(Mode, Vec<crate::geo::Point>)]) -> Leg {
    let path = dto
        .map_data_index
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| chains.get(idx))
        .map(|(_, points)| points.clone())
        .unwrap_or_default();

    Leg {
        mot: dto.mot.map(convert_mot).unwrap_or(Mot {
            mode: Mode::Unknown(String::new()),
            name: None,
            direction: None,
            diva: None,
            changes: Vec::new(),
        }),
        duration: dto.duration,
        stops: dto
            .regular_stops
            .unwrap_or_default()
            .into_iter()
            .filter_map(convert_regular_stop)
            .collect(),
        path,
    }
}

fn convert_mot(dto: MotDto) -> Mot {
    Mot {
        mode: dto
            .kind
            .as_deref()
            .map(Mode::parse)
            .unwrap_or(Mode::Unknown(String::new())),
        name: dto.name,
        // The provider pads directions with a leading space.
        direction: dto.direction.map(|d| d.trim().to_string()),
        diva: dto.diva.and_then(convert_diva),
        changes: dto.changes.unwrap_or_default(),
    }
}

fn convert_regular_stop(dto: RegularStopDto) -> Option<RegularStop> {
    let name = dto.name?;
    let location = match (dto.latitude, dto.longitude) {
        (Some(x), Some(y)) => geo::gk4_to_wgs(x as f64, y as f64).ok(),
        _ => None,
    };
    Some(RegularStop {
        name,
        place: dto.place,
        arrival_time: sap_date::decode_opt(dto.arrival_time.as_deref()),
        departure_time: sap_date::decode_opt(dto.departure_time.as_deref()),
        location,
        platform: dto.platform.and_then(convert_platform),
        data_id: dto.data_id,
    })
}

pub fn convert_route_changes(
    resp: RouteChangesResponse,
) -> Result<RouteChangesResult, NormalizeError> {
    check_status(resp.status.as_ref())?;
    Ok(RouteChangesResult {
        lines: resp
            .lines
            .unwrap_or_default()
            .into_iter()
            .map(convert_line)
            .collect(),
        changes: resp
            .changes
            .unwrap_or_default()
            .into_iter()
            .map(convert_change)
            .collect(),
    })
}

fn convert_line(dto: LineDto) -> LineChanges {
    LineChanges {
        id: dto.id,
        name: dto.name,
        mode: dto.mot.as_deref().map(Mode::parse),
        operator: dto.transportation_company,
        change_ids: dto.changes.unwrap_or_default(),
    }
}

fn convert_change(dto: ChangeDto) -> RouteChange {
    RouteChange {
        id: dto.id,
        kind: dto.kind,
        title: dto.title,
        description: dto.description,
        publish_date: sap_date::decode_opt(dto.publish_date.as_deref()),
        validity_periods: dto
            .validity_periods
            .unwrap_or_default()
            .into_iter()
            .map(|p: ValidityPeriodDto| ValidityPeriod {
                begin: sap_date::decode_opt(p.begin.as_deref()),
                end: sap_date::decode_opt(p.end.as_deref()),
            })
            .collect(),
        line_ids: dto.line_ids.unwrap_or_default(),
    }
}
