//! Routes (multi-leg trips) from the trip search.

use chrono::{DateTime, FixedOffset};

use crate::geo::{self, Point};

use super::diva::Diva;
use super::mode::Mode;
use super::platform::Platform;

/// Mode-of-transport block attached to legs and the route-level mode chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Mot {
    pub mode: Mode,
    /// Line name, e.g. `"3"`. Absent for footpaths.
    pub name: Option<String>,
    pub direction: Option<String>,
    pub diva: Option<Diva>,
    /// Route-change ids affecting this line.
    pub changes: Vec<String>,
}

/// One stop along a leg.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularStop {
    pub name: String,
    pub place: Option<String>,
    pub arrival_time: Option<DateTime<FixedOffset>>,
    pub departure_time: Option<DateTime<FixedOffset>>,
    /// Geographic position; the provider occasionally omits the projected
    /// pair, and a failed transform is dropped rather than invented.
    pub location: Option<Point>,
    pub platform: Option<Platform>,
    pub data_id: Option<String>,
}

/// One uninterrupted segment of a route, ridden on a single vehicle (or
/// walked).
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub mot: Mot,
    /// Leg duration in minutes, when the provider reports one.
    pub duration: Option<i64>,
    pub stops: Vec<RegularStop>,
    /// Waypoints of this leg's map geometry, already in geographic form.
    pub path: Vec<Point>,
}

impl Leg {
    /// The stop the leg departs from.
    pub fn departure(&self) -> Option<&RegularStop> {
        self.stops.first()
    }

    /// The stop the leg arrives at.
    pub fn arrival(&self) -> Option<&RegularStop> {
        self.stops.last()
    }
}

/// A complete trip option returned by the trip search.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub route_id: Option<i64>,
    /// Overall duration in minutes.
    pub duration: Option<i64>,
    /// Number of interchanges along the way.
    pub interchanges: u32,
    pub mot_chain: Vec<Mot>,
    pub legs: Vec<Leg>,
    pub price: Option<String>,
    pub price_level: Option<i32>,
    pub fare_zone_origin: Option<i32>,
    pub fare_zone_destination: Option<i32>,
}

/// Decodes one provider `MapData` chain into its mode tag and geographic
/// waypoints.
///
/// A chain looks like `Tram|5656388|4620895|...|5660124|4622534|`: a mode
/// prefix followed by alternating projected northing/easting integers.
/// Non-numeric tokens are skipped, matching the provider's trailing-pipe
/// sloppiness; pairs that fail the transform are dropped.
pub fn parse_map_data(chain: &str) -> (Mode, Vec<Point>) {
    let mut tokens = chain.split('|');
    let mode = Mode::parse(tokens.next().unwrap_or_default());
    let numbers: Vec<f64> = tokens
        .filter_map(|tok| tok.parse::<i64>().ok())
        .map(|n| n as f64)
        .collect();
    let points = numbers
        .chunks_exact(2)
        .filter_map(|pair| geo::gk4_to_wgs(pair[0], pair[1]).ok())
        .collect();
    (mode, points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_data_chain_decodes_mode_and_points() {
        let (mode, points) = parse_map_data(
            "Tram|5656388|4620895|5656402|4620920|5656534|4621144|5656555|4621180|",
        );
        assert_eq!(mode, Mode::Tram);
        assert_eq!(points.len(), 4);
        assert!((points[0].lat - 51.02994693147935).abs() < 1e-6);
        assert!((points[0].lng - 13.721873343285964).abs() < 1e-6);
    }

    #[test]
    fn map_data_footpath_chain() {
        let (mode, points) = parse_map_data("Footpath|5656398|4620868|5656399|4620867|");
        assert_eq!(mode, Mode::Footpath);
        assert_eq!(points.len(), 2);
        assert!((points[0].lat - 51.03004245071804).abs() < 1e-6);
        assert!((points[0].lng - 13.721491972240125).abs() < 1e-6);
    }

    #[test]
    fn map_data_with_unknown_mode_is_preserved() {
        let (mode, points) = parse_map_data("MagLev|5656388|4620895|");
        assert_eq!(mode, Mode::Unknown("MagLev".to_string()));
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn map_data_odd_trailing_number_is_ignored() {
        let (_, points) = parse_map_data("Tram|5656388|4620895|5656402|");
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn leg_endpoints() {
        let stop = |name: &str| RegularStop {
            name: name.to_string(),
            place: None,
            arrival_time: None,
            departure_time: None,
            location: None,
            platform: None,
            data_id: None,
        };
        let leg = Leg {
            mot: Mot {
                mode: Mode::Tram,
                name: Some("3".to_string()),
                direction: None,
                diva: None,
                changes: Vec::new(),
            },
            duration: Some(9),
            stops: vec![stop("Albertplatz"), stop("Postplatz"), stop("Münchner Platz")],
            path: Vec::new(),
        };
        assert_eq!(leg.departure().unwrap().name, "Albertplatz");
        assert_eq!(leg.arrival().unwrap().name, "Münchner Platz");
    }
}
