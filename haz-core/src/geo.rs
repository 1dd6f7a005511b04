use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate pair selected on the map.
///
/// Values are carried verbatim from the map click event; no range
/// validation or longitude wrapping is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude formatted to four decimal places for display.
    pub fn display_latitude(&self) -> String {
        format!("{:.4}", self.latitude)
    }

    /// Longitude formatted to four decimal places for display.
    pub fn display_longitude(&self) -> String {
        format!("{:.4}", self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            self.display_latitude(),
            self.display_longitude()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_truncates_to_four_decimals() {
        let point = GeoPoint::new(12.879712, 121.774);
        assert_eq!(point.display_latitude(), "12.8797");
        assert_eq!(point.display_longitude(), "121.7740");
    }

    #[test]
    fn display_formats_as_lat_lng_pair() {
        let point = GeoPoint::new(12.8797, 121.774);
        assert_eq!(point.to_string(), "12.8797, 121.7740");
    }

    #[test]
    fn serializes_with_named_fields() {
        let point = GeoPoint::new(14.5, 121.0);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"latitude":14.5,"longitude":121.0}"#);
    }

    #[test]
    fn deserializes_from_response_location() {
        let point: GeoPoint =
            serde_json::from_str(r#"{"latitude":-8.25,"longitude":179.5}"#).unwrap();
        assert_eq!(point, GeoPoint::new(-8.25, 179.5));
    }
}
