//! Where along the platform a connecting service departs.
//!
//! When changing vehicles it helps to know whether the connection leaves
//! roughly in the direction the arriving vehicle was heading (walk towards
//! the front), from the same point (stay put), or behind it (walk back).
//! The provider does not say, so this is estimated from route geometry:
//! the arrival heading of the incoming leg against the walking direction to
//! the outgoing leg's departure point.

use crate::geo::Point;

use super::route::{Leg, Route};

/// Relative position of a connecting departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterchangePosition {
    /// The connection continues roughly the direction of arrival.
    Front,
    /// Arrival and departure share the same physical point.
    Middle,
    /// The connection is oriented against the direction of arrival.
    Back,
}

/// Projects a geographic point into a frame that is locally Euclidean
/// around the given reference latitude. Raw lat/lng is not: a degree of
/// longitude shrinks with the cosine of the latitude.
fn flatten(p: Point, ref_lat_deg: f64) -> (f64, f64) {
    (p.lat, p.lng * ref_lat_deg.to_radians().cos())
}

/// Classifies an interchange from three geographic points: `approach`, the
/// second-to-last waypoint of the incoming leg; `arrival`, where the
/// incoming leg ends; `departure`, where the outgoing leg starts.
pub fn classify_points(
    approach: Point,
    arrival: Point,
    departure: Point,
) -> InterchangePosition {
    let (ax, ay) = flatten(approach, arrival.lat);
    let (bx, by) = flatten(arrival, arrival.lat);
    let (cx, cy) = flatten(departure, arrival.lat);

    // a: arrival heading, b: walk from arrival to the connecting departure.
    let a = (bx - ax, by - ay);
    let b = (cx - bx, cy - by);

    let b_len = (b.0 * b.0 + b.1 * b.1).sqrt();
    if b_len == 0.0 {
        return InterchangePosition::Middle;
    }
    let a_len = (a.0 * a.0 + a.1 * a.1).sqrt();
    if a_len == 0.0 {
        // No usable arrival heading; a zero-length walk was already handled,
        // so the departure is somewhere ahead by convention.
        return InterchangePosition::Front;
    }

    let cos_angle = (a.0 * b.0 + a.1 * b.1) / (a_len * b_len);
    let angle = cos_angle.clamp(-1.0, 1.0).acos().to_degrees();
    if angle > 90.0 {
        InterchangePosition::Back
    } else {
        InterchangePosition::Front
    }
}

/// Classifies the interchange between two adjacent legs.
///
/// Returns `None` when either leg lacks the geometry to decide: the
/// incoming leg needs at least two path waypoints for a heading, and both
/// legs need located endpoint stops.
pub fn classify_interchange(incoming: &Leg, outgoing: &Leg) -> Option<InterchangePosition> {
    let n = incoming.path.len();
    if n < 2 {
        return None;
    }
    let approach = incoming.path[n - 2];
    let arrival = incoming.arrival()?.location?;
    let departure = outgoing.departure()?.location?;
    Some(classify_points(approach, arrival, departure))
}

/// Classifies every adjacent leg pair of a route, in order.
pub fn classify_route(route: &Route) -> Vec<Option<InterchangePosition>> {
    route
        .legs
        .windows(2)
        .map(|pair| classify_interchange(&pair[0], &pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mode::Mode;
    use crate::domain::route::{Mot, RegularStop};

    fn p(lat: f64, lng: f64) -> Point {
        Point::new(lat, lng)
    }

    #[test]
    fn same_point_is_middle_regardless_of_heading() {
        let arrival = p(51.0500, 13.7400);
        assert_eq!(
            classify_points(p(51.0490, 13.7400), arrival, arrival),
            InterchangePosition::Middle
        );
        assert_eq!(
            classify_points(p(51.0510, 13.7390), arrival, arrival),
            InterchangePosition::Middle
        );
    }

    #[test]
    fn continuing_straight_is_front() {
        // Arriving northbound, connection further north.
        let pos = classify_points(p(51.0490, 13.7400), p(51.0500, 13.7400), p(51.0501, 13.7400));
        assert_eq!(pos, InterchangePosition::Front);
    }

    #[test]
    fn reversing_is_back() {
        // Arriving northbound, connection behind the arrival point.
        let pos = classify_points(p(51.0490, 13.7400), p(51.0500, 13.7400), p(51.0499, 13.7400));
        assert_eq!(pos, InterchangePosition::Back);
    }

    #[test]
    fn perpendicular_walk_is_front() {
        // Exactly 90 degrees does not exceed the threshold.
        let pos = classify_points(p(51.0490, 13.7400), p(51.0500, 13.7400), p(51.0500, 13.7410));
        assert_eq!(pos, InterchangePosition::Front);
    }

    #[test]
    fn oblique_backwards_walk_is_back() {
        let pos = classify_points(p(51.0490, 13.7400), p(51.0500, 13.7400), p(51.0495, 13.7405));
        assert_eq!(pos, InterchangePosition::Back);
    }

    fn leg_with(path: Vec<Point>, first: Option<Point>, last: Option<Point>) -> Leg {
        let stop = |location: Option<Point>| RegularStop {
            name: "x".to_string(),
            place: None,
            arrival_time: None,
            departure_time: None,
            location,
            platform: None,
            data_id: None,
        };
        Leg {
            mot: Mot {
                mode: Mode::Tram,
                name: None,
                direction: None,
                diva: None,
                changes: Vec::new(),
            },
            duration: None,
            stops: vec![stop(first), stop(last)],
            path,
        }
    }

    #[test]
    fn legs_without_geometry_cannot_be_classified() {
        let incoming = leg_with(Vec::new(), Some(p(51.0, 13.7)), Some(p(51.1, 13.7)));
        let outgoing = leg_with(Vec::new(), Some(p(51.1, 13.7)), Some(p(51.2, 13.7)));
        assert_eq!(classify_interchange(&incoming, &outgoing), None);
    }

    #[test]
    fn adjacent_legs_classify_from_path_and_stops() {
        let incoming = leg_with(
            vec![p(51.0480, 13.7400), p(51.0490, 13.7400), p(51.0500, 13.7400)],
            Some(p(51.0480, 13.7400)),
            Some(p(51.0500, 13.7400)),
        );
        let outgoing = leg_with(
            Vec::new(),
            Some(p(51.0501, 13.7400)),
            Some(p(51.0600, 13.7400)),
        );
        assert_eq!(
            classify_interchange(&incoming, &outgoing),
            Some(InterchangePosition::Front)
        );
    }
}
