//! Request and response models for the hazard service.
//!
//! The service contract is a single POST carrying the clicked coordinates
//! and returning a location echo plus a mapping from hazard-type name to
//! risk level. A fresh report replaces the previous one wholesale.

use crate::geo::GeoPoint;
use crate::risk::RiskLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON body of the hazard analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HazardRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoPoint> for HazardRequest {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

/// Hazard categories returned for one analyzed location.
///
/// `hazards` maps hazard-type name (e.g. "flood", "landslide") to its risk
/// level. A `BTreeMap` keeps the panel's row order deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardReport {
    pub location: GeoPoint,
    pub hazards: BTreeMap<String, RiskLevel>,
}

impl HazardReport {
    /// True when the service returned no hazard categories at all.
    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_plain_coordinate_body() {
        let request = HazardRequest::from(GeoPoint::new(14.5, 121.0));
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"latitude":14.5,"longitude":121.0}"#
        );
    }

    #[test]
    fn report_parses_service_response() {
        let report: HazardReport = serde_json::from_str(
            r#"{
                "location": {"latitude": 14.5995, "longitude": 120.9842},
                "hazards": {"flood": "high", "landslide": "low", "storm_surge": "medium"}
            }"#,
        )
        .unwrap();

        assert_eq!(report.location, GeoPoint::new(14.5995, 120.9842));
        assert_eq!(report.hazards.len(), 3);
        assert_eq!(report.hazards["flood"], RiskLevel::High);
        assert_eq!(report.hazards["landslide"], RiskLevel::Low);
        assert_eq!(report.hazards["storm_surge"], RiskLevel::Medium);
    }

    #[test]
    fn hazard_rows_iterate_alphabetically() {
        let report: HazardReport = serde_json::from_str(
            r#"{
                "location": {"latitude": 0.0, "longitude": 0.0},
                "hazards": {"landslide": "low", "flood": "high"}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = report.hazards.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["flood", "landslide"]);
    }

    #[test]
    fn report_with_no_hazards_is_empty() {
        let report: HazardReport = serde_json::from_str(
            r#"{"location": {"latitude": 1.0, "longitude": 2.0}, "hazards": {}}"#,
        )
        .unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn report_with_unknown_risk_level_is_rejected() {
        let parsed = serde_json::from_str::<HazardReport>(
            r#"{"location": {"latitude": 1.0, "longitude": 2.0}, "hazards": {"flood": "extreme"}}"#,
        );
        assert!(parsed.is_err());
    }
}
