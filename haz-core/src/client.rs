//! HTTP client for the hazard analysis service.
//!
//! Stateless: one POST per call, no retry, and no cancellation of an
//! earlier in-flight request. Errors are mapped to the user-visible
//! strings the UI displays directly.

use gloo_net::http::Request;

use crate::error;
use crate::geo::GeoPoint;
use crate::report::{HazardReport, HazardRequest};

/// Client for the hazard endpoint.
#[derive(Clone)]
pub struct HazardClient {
    base_url: String,
}

impl HazardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Request hazard risk categories for a clicked location.
    pub async fn analyze(&self, point: GeoPoint) -> Result<HazardReport, String> {
        let url = format!("{}/hazards", self.base_url);
        let request = HazardRequest::from(point);

        log::debug!("POST {} for ({})", url, point);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Hazard request failed with HTTP {}: {}", status, body);
            return Err(error::extract_detail(&body)
                .unwrap_or_else(|| error::GENERIC_FETCH_ERROR.to_string()));
        }

        response
            .json::<HazardReport>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}
