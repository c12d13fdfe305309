//! DIVA operator identity (network plus line number).

/// The operator identity attached to departures and route legs: which
/// network the line belongs to and the network-internal line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diva {
    pub number: String,
    pub network: String,
}

impl std::fmt::Display for Diva {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.network, self.number)
    }
}
