//! Modes of transport.

use serde::{Deserialize, Serialize};

/// A mode of transport as enumerated by the provider.
///
/// The wire format is a loose string; this closed set covers every value the
/// provider is known to emit. Anything else is preserved verbatim in
/// [`Mode::Unknown`] so upstream protocol drift is observable instead of
/// being silently coerced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    Tram,
    CityBus,
    IntercityBus,
    SuburbanRailway,
    Train,
    Cableway,
    Ferry,
    HailedSharedTaxi,
    /// Only seen in route mode chains, never on the departure monitor.
    Footpath,
    /// Route-only generic bus variant.
    Bus,
    /// Route-only rapid-transit variant.
    RapidTransit,
    /// A mode string this crate does not know, kept verbatim.
    Unknown(String),
}

impl Mode {
    /// The modes that are valid in departure monitor requests.
    pub fn all_request() -> Vec<Mode> {
        vec![
            Mode::Tram,
            Mode::CityBus,
            Mode::IntercityBus,
            Mode::SuburbanRailway,
            Mode::Train,
            Mode::Cableway,
            Mode::Ferry,
            Mode::HailedSharedTaxi,
        ]
    }

    /// Parses a provider mode string.
    pub fn parse(s: &str) -> Mode {
        match s {
            "Tram" => Mode::Tram,
            "CityBus" => Mode::CityBus,
            "IntercityBus" => Mode::IntercityBus,
            "SuburbanRailway" => Mode::SuburbanRailway,
            "Train" => Mode::Train,
            "Cableway" => Mode::Cableway,
            "Ferry" => Mode::Ferry,
            "HailedSharedTaxi" => Mode::HailedSharedTaxi,
            "Footpath" => Mode::Footpath,
            "Bus" => Mode::Bus,
            "RapidTransit" => Mode::RapidTransit,
            other => Mode::Unknown(other.to_string()),
        }
    }

    /// The provider's string for this mode.
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Tram => "Tram",
            Mode::CityBus => "CityBus",
            Mode::IntercityBus => "IntercityBus",
            Mode::SuburbanRailway => "SuburbanRailway",
            Mode::Train => "Train",
            Mode::Cableway => "Cableway",
            Mode::Ferry => "Ferry",
            Mode::HailedSharedTaxi => "HailedSharedTaxi",
            Mode::Footpath => "Footpath",
            Mode::Bus => "Bus",
            Mode::RapidTransit => "RapidTransit",
            Mode::Unknown(raw) => raw,
        }
    }

    /// Whether this is a value outside the known provider vocabulary.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Mode::Unknown(_))
    }
}

impl From<String> for Mode {
    fn from(s: String) -> Self {
        Mode::parse(&s)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Unknown(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!(Mode::parse("Tram"), Mode::Tram);
        assert_eq!(Mode::parse("HailedSharedTaxi"), Mode::HailedSharedTaxi);
        assert_eq!(Mode::parse("Footpath"), Mode::Footpath);
    }

    #[test]
    fn unknown_modes_are_preserved_verbatim() {
        let mode = Mode::parse("Zeppelin");
        assert_eq!(mode, Mode::Unknown("Zeppelin".to_string()));
        assert_eq!(mode.as_str(), "Zeppelin");
        assert!(mode.is_unknown());
    }

    #[test]
    fn request_set_has_no_route_only_modes() {
        let all = Mode::all_request();
        assert_eq!(all.len(), 8);
        assert!(!all.contains(&Mode::Footpath));
        assert!(!all.contains(&Mode::Bus));
        assert!(!all.contains(&Mode::RapidTransit));
    }

    #[test]
    fn serde_uses_provider_strings() {
        assert_eq!(serde_json::to_string(&Mode::Tram).unwrap(), "\"Tram\"");
        let parsed: Mode = serde_json::from_str("\"SuburbanRailway\"").unwrap();
        assert_eq!(parsed, Mode::SuburbanRailway);
        let drifted: Mode = serde_json::from_str("\"Hyperloop\"").unwrap();
        assert_eq!(drifted, Mode::Unknown("Hyperloop".to_string()));
    }
}
