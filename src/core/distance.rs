use crate::models::{Location, LocationError};
use geo::{GeodesicDistance, Point};
use std::cmp::Ordering;

/// Geodesic distance between two points on the WGS-84 ellipsoid, in kilometers
///
/// Uses Karney's algorithm from the `geo` crate. The result is rounded to
/// two decimal places. Points are put in a canonical order first so the
/// rounded value is identical whichever way round the call is made.
///
/// # Errors
/// Returns [`LocationError`] if either point is outside the valid
/// latitude/longitude range.
pub fn distance_km(from: &Location, to: &Location) -> Result<f64, LocationError> {
    from.validate()?;
    to.validate()?;

    let (a, b) = match compare(from, to) {
        Ordering::Greater => (to, from),
        _ => (from, to),
    };

    Ok(round_km(geodesic_km(a, b)))
}

/// Unrounded geodesic distance in kilometers; callers must pass valid points
#[inline]
pub fn geodesic_km(from: &Location, to: &Location) -> f64 {
    let a = Point::new(from.longitude, from.latitude);
    let b = Point::new(to.longitude, to.latitude);
    a.geodesic_distance(&b) / 1000.0
}

#[inline]
fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

fn compare(a: &Location, b: &Location) -> Ordering {
    a.latitude
        .total_cmp(&b.latitude)
        .then_with(|| a.longitude.total_cmp(&b.longitude))
}
