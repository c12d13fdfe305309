//! Map pin record decoding.
//!
//! The pins endpoint answers with a JSON array of pipe-delimited strings
//! whose layout depends on the requested pin type. The delimiters nest:
//! `||` separates the record's segments and `|` the fields within a
//! segment, with the stop id additionally terminated by `|||`.

use crate::geo::{self, Point};

/// Pin categories accepted by the pins endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinKind {
    Stop,
    Platform,
    Poi,
    RentABike,
    TicketMachine,
    CarSharing,
    ParkAndRide,
}

impl PinKind {
    /// The literal request string for the `pintypes` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            PinKind::Stop => "stop",
            PinKind::Platform => "platform",
            PinKind::Poi => "poi",
            PinKind::RentABike => "rentabike",
            PinKind::TicketMachine => "ticketmachine",
            PinKind::CarSharing => "carsharing",
            PinKind::ParkAndRide => "parkandride",
        }
    }
}

/// A decoded map pin.
#[derive(Debug, Clone, PartialEq)]
pub enum Pin {
    Stop(StopPin),
    Platform(PlatformPin),
    Poi(PoiPin),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StopPin {
    pub id: i64,
    pub name: String,
    pub location: Point,
    /// Raw connection summary, e.g. `"3:Wilder Mann~Coschütz#..."`.
    pub connections: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformPin {
    pub name: String,
    pub location: Point,
    /// Trailing field of unclear meaning, kept verbatim.
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoiPin {
    pub kind: PinKind,
    /// Colon-joined id prefix, e.g. `"poiID:1:428"`.
    pub id: String,
    pub name: String,
    pub location: Point,
}

/// Decodes one pin record for the given requested kind.
///
/// Records that do not match the kind's field layout yield `None`.
pub fn decode_pin(kind: PinKind, record: &str) -> Option<Pin> {
    match kind {
        PinKind::Stop => decode_stop(record).map(Pin::Stop),
        PinKind::Platform => decode_platform(record).map(Pin::Platform),
        PinKind::Poi
        | PinKind::RentABike
        | PinKind::TicketMachine
        | PinKind::CarSharing
        | PinKind::ParkAndRide => decode_poi(kind, record).map(Pin::Poi),
    }
}

fn segments(record: &str) -> Vec<&str> {
    record.split("||").collect()
}

fn decode_stop(record: &str) -> Option<StopPin> {
    let id: i64 = record.split("|||").next()?.parse().ok()?;
    let segs = segments(record);
    let fields: Vec<&str> = segs.get(1)?.split('|').collect();
    let x: f64 = fields.get(2)?.parse().ok()?;
    let y: f64 = fields.get(3)?.parse().ok()?;
    Some(StopPin {
        id,
        name: (*fields.get(1)?).to_string(),
        location: geo::gk4_to_wgs(x, y).ok()?,
        connections: (*segs.get(2)?).to_string(),
    })
}

fn decode_platform(record: &str) -> Option<PlatformPin> {
    let segs = segments(record);
    let fields: Vec<&str> = segs.get(1)?.split('|').collect();
    let x: f64 = fields.get(1)?.parse().ok()?;
    let y: f64 = fields.get(2)?.parse().ok()?;
    Some(PlatformPin {
        name: (*fields.first()?).to_string(),
        location: geo::gk4_to_wgs(x, y).ok()?,
        detail: (*fields.get(3)?).to_string(),
    })
}

fn decode_poi(kind: PinKind, record: &str) -> Option<PoiPin> {
    let segs = segments(record);
    let id = segs
        .first()?
        .split(':')
        .take(3)
        .collect::<Vec<_>>()
        .join(":");
    let fields: Vec<&str> = segs.get(1)?.split('|').collect();
    let x: f64 = fields.get(1)?.parse().ok()?;
    let y: f64 = fields.get(2)?.parse().ok()?;
    Some(PoiPin {
        kind,
        id,
        name: (*fields.first()?).to_string(),
        location: geo::gk4_to_wgs(x, y).ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_pin_record() {
        let record = "33000013|||Albertplatz|5660140|4622550||3:Wilder~Mann#7:Pennrich";
        let pin = decode_pin(PinKind::Stop, record).unwrap();
        let Pin::Stop(stop) = pin else {
            panic!("expected a stop pin");
        };
        assert_eq!(stop.id, 33000013);
        assert_eq!(stop.name, "Albertplatz");
        assert_eq!(stop.connections, "3:Wilder~Mann#7:Pennrich");
        assert!((stop.location.lat - 51.06).abs() < 0.05);
    }

    #[test]
    fn platform_pin_record() {
        let record = "pf||Albertplatz 1|5660140|4622550|2";
        let pin = decode_pin(PinKind::Platform, record).unwrap();
        let Pin::Platform(platform) = pin else {
            panic!("expected a platform pin");
        };
        assert_eq!(platform.name, "Albertplatz 1");
        assert_eq!(platform.detail, "2");
    }

    #[test]
    fn poi_pin_record_keeps_three_part_id() {
        let record = "poiID:1:428:extra||Theaterplatz|5658500|4621300|x";
        let pin = decode_pin(PinKind::Poi, record).unwrap();
        let Pin::Poi(poi) = pin else {
            panic!("expected a poi pin");
        };
        assert_eq!(poi.id, "poiID:1:428");
        assert_eq!(poi.name, "Theaterplatz");
        assert_eq!(poi.kind, PinKind::Poi);
    }

    #[test]
    fn malformed_records_yield_none() {
        assert!(decode_pin(PinKind::Stop, "not-a-pin").is_none());
        assert!(decode_pin(PinKind::Stop, "abc|||x|1|2||c").is_none());
        assert!(decode_pin(PinKind::Platform, "pf||only|one").is_none());
    }

    #[test]
    fn query_strings() {
        assert_eq!(PinKind::Stop.as_query(), "stop");
        assert_eq!(PinKind::RentABike.as_query(), "rentabike");
        assert_eq!(PinKind::ParkAndRide.as_query(), "parkandride");
    }
}
