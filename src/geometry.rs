//! Planar geographic distance for small-area graphs.
//!
//! Latitude/longitude degrees are converted to meters with fixed linear
//! scale factors, then measured with the Euclidean norm. This is not
//! great-circle geometry; it is only meaningful over the few-kilometer
//! extents this crate targets.

/// Meters per degree of latitude.
const LAT_METERS_PER_DEGREE: f32 = 111_000.0;

/// Meters per degree of longitude, approximated around 40°N.
const LNG_METERS_PER_DEGREE: f32 = 85_000.0;

/// Straight-line distance in meters between two coordinates.
pub fn planar_distance_m(lat1: f32, lng1: f32, lat2: f32, lng2: f32) -> f32 {
    let dy = (lat1 - lat2) * LAT_METERS_PER_DEGREE;
    let dx = (lng1 - lng2) * LNG_METERS_PER_DEGREE;
    (dx * dx + dy * dy).sqrt()
}
