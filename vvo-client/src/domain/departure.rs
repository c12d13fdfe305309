//! Departures and the ETA formatter.

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};

use super::diva::Diva;
use super::mode::Mode;
use super::platform::Platform;

/// Punctuality state reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DepartureState {
    InTime,
    Delayed,
    Unknown(String),
}

impl DepartureState {
    pub fn parse(s: &str) -> DepartureState {
        match s {
            "InTime" => DepartureState::InTime,
            "Delayed" => DepartureState::Delayed,
            other => DepartureState::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DepartureState::InTime => "InTime",
            DepartureState::Delayed => "Delayed",
            DepartureState::Unknown(raw) => raw,
        }
    }
}

impl From<String> for DepartureState {
    fn from(s: String) -> Self {
        DepartureState::parse(&s)
    }
}

impl From<DepartureState> for String {
    fn from(state: DepartureState) -> Self {
        match state {
            DepartureState::Unknown(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// One departure on a stop's monitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub id: Option<String>,
    pub line_name: Option<String>,
    pub direction: Option<String>,
    pub mode: Mode,
    pub state: Option<DepartureState>,
    /// Scheduled time of departure. Entries without a parseable scheduled
    /// time never make it out of normalisation.
    pub scheduled_time: DateTime<FixedOffset>,
    /// Real-time reading, when the vehicle reports one.
    pub real_time: Option<DateTime<FixedOffset>>,
    pub platform: Option<Platform>,
    /// Route-change ids affecting this departure (see the route-changes
    /// endpoint).
    pub route_changes: Vec<String>,
    pub diva: Option<Diva>,
}

/// Minutes of a time difference, with the day-modulo semantics the ETA
/// arithmetic is built on: the difference is reduced into `[0, 24h)` first,
/// so a departure one minute in the past reads as 1439 minutes.
fn wrapped_minutes(diff: TimeDelta) -> i64 {
    diff.num_seconds().rem_euclid(24 * 60 * 60) / 60
}

impl Departure {
    /// Scheduled minutes until departure, disregarding any real-time
    /// reading. Day-modulo semantics, see [`Self::fancy_eta`] for the
    /// wraparound-corrected presentation.
    pub fn scheduled_eta(&self, from: DateTime<FixedOffset>) -> i64 {
        wrapped_minutes(self.scheduled_time - from)
    }

    /// Minutes until departure using the real-time reading, falling back to
    /// the schedule when no reading is present.
    pub fn eta(&self, from: DateTime<FixedOffset>) -> i64 {
        match self.real_time {
            Some(real) => wrapped_minutes(real - from),
            None => self.scheduled_eta(from),
        }
    }

    /// Signed minute difference between the real-time reading and the
    /// schedule, when a reading exists.
    pub fn delay(&self) -> Option<i64> {
        self.real_time
            .map(|real| (real - self.scheduled_time).num_minutes())
    }

    /// Human-presentable ETA.
    ///
    /// The scheduled ETA is rendered as a plain minute count, or `H:MM` once
    /// the magnitude reaches an hour. When `from` has already passed the
    /// scheduled time the value is corrected by one day to a readable
    /// negative ("already departed") count — a single day boundary only;
    /// departures more than 24 hours out are outside this formatter's
    /// contract. A real-time reading that differs from the schedule appends
    /// a signed delay suffix (`+3`, `-1`); an on-time reading appends
    /// nothing.
    pub fn fancy_eta(&self, from: DateTime<FixedOffset>) -> String {
        let Some(delay) = self.delay() else {
            return self.scheduled_eta(from).to_string();
        };

        let mut eta = self.scheduled_eta(from);
        if from > self.scheduled_time {
            eta -= 24 * 60;
        }

        let eta_str = if eta.abs() >= 60 {
            format!("{}:{:02}", eta / 60, (eta % 60).abs())
        } else {
            eta.to_string()
        };

        if delay == 0 {
            eta_str
        } else if delay > 0 {
            format!("{eta_str}+{delay}")
        } else {
            format!("{eta_str}{delay}")
        }
    }
}

// Mirrors the monitor's own presentation: "3 Wilder Mann".
impl std::fmt::Display for Departure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.line_name.as_deref().unwrap_or("?"),
            self.direction.as_deref().unwrap_or("?")
        )
    }
}
