//! Web API response DTOs.
//!
//! These map the raw JSON of `webapi.vvo-online.de`, which uses PascalCase
//! keys and a status envelope on every response. `Option` is used liberally
//! because the provider omits fields freely; the decoded timestamps stay as
//! strings here and run through the temporal codec during normalisation.

use serde::Deserialize;

/// Status envelope attached to every web API response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusDto {
    pub code: String,
    pub message: Option<String>,
}

/// Response shape of `POST /dm` (departure monitor).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitorResponse {
    pub name: Option<String>,
    pub place: Option<String>,
    pub expiration_time: Option<String>,
    pub departures: Option<Vec<DepartureDto>>,
    pub status: Option<StatusDto>,
}

/// One monitor entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepartureDto {
    pub id: Option<String>,
    pub line_name: Option<String>,
    pub direction: Option<String>,
    pub mot: Option<String>,
    pub state: Option<String>,
    pub scheduled_time: Option<String>,
    pub real_time: Option<String>,
    pub platform: Option<PlatformDto>,
    pub route_changes: Option<Vec<String>>,
    pub diva: Option<DivaDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformDto {
    pub name: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DivaDto {
    pub number: Option<String>,
    pub network: Option<String>,
}

/// Response shape of `POST /tr/pointfinder`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PointfinderResponse {
    /// Pipe-delimited stop records, decoded by `Stop::from_record`.
    pub points: Option<Vec<String>>,
    pub expiration_time: Option<String>,
    pub status: Option<StatusDto>,
}

/// Response shape of `POST /tr/trips`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TripsResponse {
    pub routes: Option<Vec<RouteDto>>,
    pub session_id: Option<String>,
    pub status: Option<StatusDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteDto {
    pub route_id: Option<i64>,
    pub duration: Option<i64>,
    pub interchanges: Option<u32>,
    pub mot_chain: Option<Vec<MotDto>>,
    pub partial_routes: Option<Vec<PartialRouteDto>>,
    /// Raw per-mode-segment coordinate chains, decoded by `parse_map_data`.
    pub map_data: Option<Vec<String>>,
    pub price: Option<String>,
    pub price_level: Option<i32>,
    pub fare_zone_origin: Option<i32>,
    pub fare_zone_destination: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MotDto {
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub direction: Option<String>,
    pub diva: Option<DivaDto>,
    pub changes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartialRouteDto {
    pub partial_route_id: Option<i64>,
    pub duration: Option<i64>,
    pub mot: Option<MotDto>,
    pub map_data_index: Option<i64>,
    pub regular_stops: Option<Vec<RegularStopDto>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegularStopDto {
    pub name: Option<String>,
    pub place: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    /// Projected GK4 northing, despite the field name.
    pub latitude: Option<i64>,
    /// Projected GK4 easting, despite the field name.
    pub longitude: Option<i64>,
    pub platform: Option<PlatformDto>,
    pub data_id: Option<String>,
}

/// Response shape of `POST /rc` (route changes).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteChangesResponse {
    pub lines: Option<Vec<LineDto>>,
    pub changes: Option<Vec<ChangeDto>>,
    pub status: Option<StatusDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub mot: Option<String>,
    pub transportation_company: Option<String>,
    /// Ids into the `Changes` list.
    pub changes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeDto {
    pub id: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub publish_date: Option<String>,
    pub validity_periods: Option<Vec<ValidityPeriodDto>>,
    pub line_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidityPeriodDto {
    pub begin: Option<String>,
    pub end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_monitor_response() {
        let json = r#"{
            "Name": "Albertplatz",
            "Place": "Dresden",
            "ExpirationTime": "/Date(1518807600000+0100)/",
            "Departures": [
                {
                    "Id": "65594",
                    "LineName": "3",
                    "Direction": "Wilder Mann",
                    "Mot": "Tram",
                    "State": "InTime",
                    "ScheduledTime": "/Date(1518807600000+0100)/",
                    "RealTime": "/Date(1518807780000+0100)/",
                    "Platform": {"Name": "3", "Type": "Platform"},
                    "RouteChanges": ["510983"],
                    "Diva": {"Number": "11003", "Network": "voe"}
                }
            ],
            "Status": {"Code": "Ok"}
        }"#;

        let resp: MonitorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.name.as_deref(), Some("Albertplatz"));
        assert_eq!(resp.status.unwrap().code, "Ok");

        let deps = resp.departures.unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].line_name.as_deref(), Some("3"));
        assert_eq!(deps[0].mot.as_deref(), Some("Tram"));
        assert_eq!(deps[0].platform.as_ref().unwrap().kind.as_deref(), Some("Platform"));
        assert_eq!(deps[0].diva.as_ref().unwrap().network.as_deref(), Some("voe"));
    }

    #[test]
    fn deserialize_pointfinder_response() {
        let json = r#"{
            "PointStatus": "List",
            "Points": [
                "33000013|||Albertplatz|5660140|4622550|0||",
                "33000037|||Hauptbahnhof|5657497|4621684|0||"
            ],
            "ExpirationTime": "/Date(1518807600000+0100)/",
            "Status": {"Code": "Ok"}
        }"#;

        let resp: PointfinderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.points.unwrap().len(), 2);
    }

    #[test]
    fn deserialize_trips_response() {
        let json = r#"{
            "SessionId": "3919948",
            "Routes": [
                {
                    "RouteId": 0,
                    "Duration": 11,
                    "Interchanges": 0,
                    "MotChain": [
                        {"Type": "Tram", "Name": "3", "Direction": " Wilder Mann",
                         "Diva": {"Number": "11003", "Network": "voe"}}
                    ],
                    "MapData": ["Tram|5656388|4620895|5660124|4622534|"],
                    "PartialRoutes": [
                        {
                            "PartialRouteId": 0,
                            "Duration": 11,
                            "Mot": {"Type": "Tram", "Name": "3"},
                            "RegularStops": [
                                {
                                    "Name": "Münchner Platz",
                                    "Place": "Dresden",
                                    "Type": "Stop",
                                    "DepartureTime": "/Date(1518807600000+0100)/",
                                    "Latitude": 5656388,
                                    "Longitude": 4620895,
                                    "Platform": {"Name": "1", "Type": "Platform"}
                                }
                            ]
                        }
                    ]
                }
            ],
            "Status": {"Code": "Ok"}
        }"#;

        let resp: TripsResponse = serde_json::from_str(json).unwrap();
        let routes = resp.routes.unwrap();
        assert_eq!(routes[0].duration, Some(11));
        assert_eq!(routes[0].mot_chain.as_ref().unwrap()[0].kind.as_deref(), Some("Tram"));

        let partial = &routes[0].partial_routes.as_ref().unwrap()[0];
        let stop = &partial.regular_stops.as_ref().unwrap()[0];
        assert_eq!(stop.name.as_deref(), Some("Münchner Platz"));
        assert_eq!(stop.latitude, Some(5656388));
    }

    #[test]
    fn deserialize_route_changes_response() {
        let json = r#"{
            "Lines": [
                {"Id": "428", "Name": "3", "Mot": "Tram",
                 "TransportationCompany": "DVB", "Changes": ["510983"]}
            ],
            "Changes": [
                {
                    "Id": "510983",
                    "Type": "Scheduled",
                    "Title": "Gleisbauarbeiten",
                    "Description": "Umleitung über Pirnaischer Platz.",
                    "PublishDate": "/Date(1518700000000+0100)/",
                    "ValidityPeriods": [
                        {"Begin": "/Date(1518800000000+0100)/", "End": "/Date(1518900000000+0100)/"}
                    ],
                    "LineIds": ["428"]
                }
            ],
            "Status": {"Code": "Ok"}
        }"#;

        let resp: RouteChangesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.lines.unwrap()[0].name.as_deref(), Some("3"));
        let changes = resp.changes.unwrap();
        assert_eq!(changes[0].id.as_deref(), Some("510983"));
        assert_eq!(changes[0].validity_periods.as_ref().unwrap().len(), 1);
    }
}
