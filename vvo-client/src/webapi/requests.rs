//! Request parameter types for the web API.
//!
//! The provider's key casing is inconsistent across endpoints (lowercase
//! run-together keys on the envelope, camelCase inside the settings
//! objects); every key here reproduces the wire contract verbatim.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::domain::Mode;

/// Options for a departure monitor request.
#[derive(Debug, Clone)]
pub struct MonitorOptions {
    /// Point in time the monitor should answer for; `None` means now.
    pub time: Option<DateTime<FixedOffset>>,
    /// Ask for arrivals instead of departures.
    pub is_arrival: bool,
    /// Maximum number of entries, `0` for the provider default.
    pub limit: u32,
    /// Modes to include.
    pub modes: Vec<Mode>,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            time: None,
            is_arrival: false,
            limit: 0,
            modes: Mode::all_request(),
        }
    }
}

/// Options for a trip search.
#[derive(Debug, Clone)]
pub struct TripOptions {
    /// Point in time; `None` means now.
    pub time: Option<DateTime<FixedOffset>>,
    /// Interpret `time` as the arrival time instead of departure.
    pub is_arrival_time: bool,
    /// Whether short-term timetable changes may be used.
    pub allow_short_term_changes: bool,
    pub mobility: MobilitySettings,
    pub standard: StandardSettings,
}

impl Default for TripOptions {
    fn default() -> Self {
        Self {
            time: None,
            is_arrival_time: false,
            allow_short_term_changes: true,
            mobility: MobilitySettings::no_restriction(),
            standard: StandardSettings::default(),
        }
    }
}

/// Entrance-height options for the individual mobility profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Entrance {
    Any,
    Small,
    NoStep,
}

/// Accessibility profile for trip requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobilitySettings {
    mobility_restriction: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    solid_stairs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    escalators: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    least_change: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entrance: Option<Entrance>,
}

impl MobilitySettings {
    /// No accessibility restriction.
    pub fn no_restriction() -> Self {
        Self {
            mobility_restriction: "None",
            solid_stairs: None,
            escalators: None,
            least_change: None,
            entrance: None,
        }
    }

    /// Wheelchair without assistance.
    pub fn high() -> Self {
        Self {
            mobility_restriction: "High",
            ..Self::no_restriction()
        }
    }

    /// Walker or pram.
    pub fn medium() -> Self {
        Self {
            mobility_restriction: "Medium",
            ..Self::no_restriction()
        }
    }

    /// Individual profile with explicit staircase/escalator/entrance
    /// choices.
    pub fn individual(
        solid_stairs: bool,
        escalators: bool,
        least_change: bool,
        entrance: Entrance,
    ) -> Self {
        Self {
            mobility_restriction: "Individual",
            solid_stairs: Some(solid_stairs),
            escalators: Some(escalators),
            least_change: Some(least_change),
            entrance: Some(entrance),
        }
    }
}

/// Maximum number of changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaxChanges {
    Unlimited,
    Two,
    One,
    /// Direct connections only.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WalkingSpeed {
    VerySlow,
    Slow,
    Normal,
    Fast,
    VeryFast,
}

/// General trip search settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardSettings {
    pub max_changes: MaxChanges,
    pub walking_speed: WalkingSpeed,
    /// Accepted walking distance to the stop, in minutes (the provider
    /// accepts 5, 10, 15, 20 or 30).
    pub footpath_to_stop: u8,
    pub mot: Vec<Mode>,
    pub include_alternative_stops: bool,
}

impl Default for StandardSettings {
    fn default() -> Self {
        Self {
            max_changes: MaxChanges::Unlimited,
            walking_speed: WalkingSpeed::Normal,
            footpath_to_stop: 5,
            mot: Mode::all_request(),
            include_alternative_stops: true,
        }
    }
}

/// Body of `POST /dm`.
#[derive(Debug, Serialize)]
pub(crate) struct MonitorRequest<'a> {
    pub stopid: i64,
    pub time: String,
    pub isarrival: bool,
    pub limit: u32,
    pub mot: &'a [Mode],
}

/// Body of `POST /tr/pointfinder`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PointfinderRequest<'a> {
    pub query: &'a str,
    pub limit: u32,
    pub stops_only: bool,
    pub dvb: bool,
}

/// Body of `POST /tr/trips`.
#[derive(Debug, Serialize)]
pub(crate) struct TripsRequest<'a> {
    pub origin: String,
    pub destination: String,
    pub time: String,
    pub isarrivaltime: bool,
    pub shorttermchanges: bool,
    #[serde(rename = "mobilitySettings")]
    pub mobility_settings: &'a MobilitySettings,
    #[serde(rename = "standardSettings")]
    pub standard_settings: &'a StandardSettings,
}

/// Body of `POST /rc`.
#[derive(Debug, Serialize)]
pub(crate) struct RouteChangesRequest {
    pub shortterm: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobility_settings_wire_keys() {
        let v = serde_json::to_value(MobilitySettings::no_restriction()).unwrap();
        assert_eq!(v, serde_json::json!({"mobilityRestriction": "None"}));

        let v = serde_json::to_value(MobilitySettings::individual(
            true,
            false,
            false,
            Entrance::NoStep,
        ))
        .unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "mobilityRestriction": "Individual",
                "solidStairs": true,
                "escalators": false,
                "leastChange": false,
                "entrance": "NoStep"
            })
        );
    }

    #[test]
    fn standard_settings_defaults() {
        let v = serde_json::to_value(StandardSettings::default()).unwrap();
        assert_eq!(v["maxChanges"], "Unlimited");
        assert_eq!(v["walkingSpeed"], "Normal");
        assert_eq!(v["footpathToStop"], 5);
        assert_eq!(v["includeAlternativeStops"], true);
        assert_eq!(v["mot"].as_array().unwrap().len(), 8);
        assert_eq!(v["mot"][0], "Tram");
    }

    #[test]
    fn monitor_request_keys_are_lowercase() {
        let modes = Mode::all_request();
        let req = MonitorRequest {
            stopid: 33000013,
            time: "2018-02-16T20:00:00+01:00".to_string(),
            isarrival: false,
            limit: 5,
            mot: &modes,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["stopid"], 33000013);
        assert_eq!(v["isarrival"], false);
        assert!(v.get("isArrival").is_none());
    }
}
