use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in degrees.
///
/// Serializes as `{"lat": .., "lng": ..}`, which is also the shape of the
/// form body posted to the location endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside the WGS84 ranges.
    ///
    /// The controller never checks this; the widget and the geolocation
    /// provider are trusted. The server checks inbound positions with it.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat: {}, lng: {}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_bounds() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn display_matches_log_format() {
        let c = Coordinate::new(48.868297, 2.353764);
        assert_eq!(c.to_string(), "lat: 48.868297, lng: 2.353764");
    }

    #[test]
    fn serializes_with_short_field_names() {
        let json = serde_json::to_value(Coordinate::new(1.5, -2.25)).unwrap();
        assert_eq!(json, serde_json::json!({"lat": 1.5, "lng": -2.25}));
    }
}
