//! Stops and the pipe-delimited stop record decoder.

use crate::geo::{self, Point};

/// The city assumed when a record leaves its place field blank.
pub const DEFAULT_CITY: &str = "Dresden";

/// A transit stop as returned by the point finder.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: i64,
    pub place: String,
    pub name: String,
    pub location: Point,
}

impl Stop {
    /// Decodes a point finder record.
    ///
    /// A stop record is a pipe-delimited string of exactly nine fields:
    /// `id||place|name|x|y|||` with `x`/`y` in projected GK4. Records with a
    /// different field count, with the `coord` marker in the first field
    /// (a coordinate-only pseudo-point, not a stop), or with unparseable
    /// numeric fields yield `None` — callers filter these out of result
    /// lists. A blank place means [`DEFAULT_CITY`].
    pub fn from_record(record: &str) -> Option<Stop> {
        let fields: Vec<&str> = record.split('|').collect();
        if fields.len() != 9 || fields[0] == "coord" {
            return None;
        }
        let id: i64 = fields[0].parse().ok()?;
        let place = if fields[2].is_empty() {
            DEFAULT_CITY.to_string()
        } else {
            fields[2].to_string()
        };
        let name = fields[3].to_string();
        let x: f64 = fields[4].parse().ok()?;
        let y: f64 = fields[5].parse().ok()?;
        let location = geo::gk4_to_wgs(x, y).ok()?;
        Some(Stop {
            id,
            place,
            name,
            location,
        })
    }
}

impl std::fmt::Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.place)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Decoding never panics and is deterministic, whatever the input.
        #[test]
        fn decode_is_total_and_deterministic(record in ".{0,120}") {
            let first = Stop::from_record(&record);
            let second = Stop::from_record(&record);
            prop_assert_eq!(first, second);
        }

        /// Valid nine-field records always produce a stop.
        #[test]
        fn valid_records_decode(
            id in 1i64..99_999_999,
            name in "[A-Za-zßäöü ]{1,30}",
            x in 5_600_000i64..5_700_000,
            y in 4_570_000i64..4_680_000,
        ) {
            let record = format!("{id}|||{name}|{x}|{y}|0||");
            let stop = Stop::from_record(&record);
            prop_assert!(stop.is_some());
            let stop = stop.unwrap();
            prop_assert_eq!(stop.id, id);
            prop_assert_eq!(stop.name, name);
        }
    }
}
