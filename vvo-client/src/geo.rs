//! Coordinate handling for the VVO services.
//!
//! The provider works internally in DHDN Gauss-Krüger zone 4 (EPSG:5678),
//! a regional transverse Mercator frame on the Bessel ellipsoid. All
//! coordinates exposed by this crate are geographic WGS84; the projected
//! frame never escapes this module.
//!
//! Two unrelated encodings coexist upstream and both are kept as explicitly
//! named decoders:
//!
//! - the web API and the map endpoints ship projected GK4 integers,
//!   converted here through a fixed projection pair
//! - the EFA endpoints ship geographic degrees scaled by 1e6, handled by
//!   [`parse_scaled_pair`]

use serde::{Deserialize, Serialize};

use proj4rs::Proj;
use proj4rs::transform::transform;

/// DHDN / 3-degree Gauss-Krüger zone 4 (EPSG:5678), with the Potsdam
/// 7-parameter shift so the datum change to WGS84 is applied.
const GK4_DEF: &str = "+proj=tmerc +lat_0=0 +lon_0=12 +k=1 +x_0=4500000 +y_0=0 \
     +ellps=bessel +towgs84=598.1,73.7,418.2,0.202,0.045,-2.455,6.7 +units=m +no_defs";

const WGS84_DEF: &str = "+proj=longlat +ellps=WGS84 +towgs84=0,0,0 +no_defs";

/// A geographic WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Errors from the projected-coordinate transform.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// The underlying projection rejected the definition or the input.
    #[error(transparent)]
    Projection(#[from] proj4rs::errors::Error),

    /// Input or output was NaN/infinite.
    #[error("non-finite coordinate")]
    NonFinite,
}

fn projection_pair() -> Result<(Proj, Proj), GeoError> {
    let gk4 = Proj::from_proj_string(GK4_DEF)?;
    let wgs = Proj::from_proj_string(WGS84_DEF)?;
    Ok((gk4, wgs))
}

/// Converts a projected GK4 coordinate to geographic WGS84.
///
/// The provider orders projected pairs northing-first, so `x` is the
/// northing (around 5.6 million within the network area) and `y` the
/// easting (around 4.6 million).
pub fn gk4_to_wgs(x: f64, y: f64) -> Result<Point, GeoError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(GeoError::NonFinite);
    }
    let (gk4, wgs) = projection_pair()?;
    // proj wants (easting, northing) and yields (lon, lat) in radians.
    let mut point = (y, x, 0.0);
    transform(&gk4, &wgs, &mut point)?;
    let result = Point::new(point.1.to_degrees(), point.0.to_degrees());
    if !result.lat.is_finite() || !result.lng.is_finite() {
        return Err(GeoError::NonFinite);
    }
    Ok(result)
}

/// Converts geographic WGS84 to the projected GK4 pair `(northing, easting)`.
///
/// The result is truncated to integer precision, which is what the provider
/// expects in request parameters.
pub fn wgs_to_gk4(lat: f64, lng: f64) -> Result<(i64, i64), GeoError> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(GeoError::NonFinite);
    }
    let (gk4, wgs) = projection_pair()?;
    let mut point = (lng.to_radians(), lat.to_radians(), 0.0);
    transform(&wgs, &gk4, &mut point)?;
    if !point.0.is_finite() || !point.1.is_finite() {
        return Err(GeoError::NonFinite);
    }
    Ok((point.1 as i64, point.0 as i64))
}

/// Decodes the legacy EFA coordinate encoding: two decimal integers scaled
/// by 1e6, latitude first (e.g. `"51030042,13721491"`).
///
/// This is geographic data already, not a projection — the EFA subsystem and
/// the GK4-based endpoints are independently inconsistent, so the two
/// decoders are deliberately kept separate.
pub fn parse_scaled_pair(s: &str) -> Option<Point> {
    let (lat_raw, lng_raw) = s.split_once(',')?;
    let lat: i64 = lat_raw.trim().parse().ok()?;
    let lng: i64 = lng_raw.trim().parse().ok()?;
    Some(Point::new(lat as f64 / 1e6, lng as f64 / 1e6))
}
