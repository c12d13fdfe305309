//! Platform information attached to departures and route stops.

use serde::{Deserialize, Serialize};

/// Platform kind vocabulary.
///
/// Non-exhaustive upstream; unrecognised values are preserved in
/// [`PlatformKind::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlatformKind {
    Platform,
    Railtrack,
    Unknown(String),
}

impl PlatformKind {
    pub fn parse(s: &str) -> PlatformKind {
        match s {
            "Platform" => PlatformKind::Platform,
            "Railtrack" => PlatformKind::Railtrack,
            other => PlatformKind::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlatformKind::Platform => "Platform",
            PlatformKind::Railtrack => "Railtrack",
            PlatformKind::Unknown(raw) => raw,
        }
    }
}

impl From<String> for PlatformKind {
    fn from(s: String) -> Self {
        PlatformKind::parse(&s)
    }
}

impl From<PlatformKind> for String {
    fn from(kind: PlatformKind) -> Self {
        match kind {
            PlatformKind::Unknown(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// A platform: name plus kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub name: String,
    pub kind: PlatformKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_round_trip() {
        assert_eq!(PlatformKind::parse("Platform"), PlatformKind::Platform);
        assert_eq!(PlatformKind::parse("Railtrack"), PlatformKind::Railtrack);
        assert_eq!(PlatformKind::Platform.as_str(), "Platform");
    }

    #[test]
    fn unknown_kind_is_observable() {
        let kind = PlatformKind::parse("Pontoon");
        assert_eq!(kind, PlatformKind::Unknown("Pontoon".to_string()));
        assert_eq!(kind.as_str(), "Pontoon");
    }
}
