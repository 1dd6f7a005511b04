//! Extraction of user-visible messages from error-response bodies.

/// Fallback message when an error response carries no usable detail.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch hazard data";

/// Pull a human-readable message out of an error-response body.
///
/// The service nests its message under `detail`; older handlers used
/// `error`. Returns the first non-empty string found, or `None` for
/// non-JSON bodies and non-string fields.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "error"] {
        if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
            if !message.is_empty() {
                return Some(message.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_nested_detail_field() {
        let body = r#"{"detail": "Latitude out of range"}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("Latitude out of range"));
    }

    #[test]
    fn falls_back_to_error_field() {
        let body = r#"{"error": "model not loaded"}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("model not loaded"));
    }

    #[test]
    fn prefers_detail_over_error() {
        let body = r#"{"detail": "detail wins", "error": "ignored"}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("detail wins"));
    }

    #[test]
    fn skips_empty_detail_string() {
        let body = r#"{"detail": "", "error": "used instead"}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("used instead"));
    }

    #[test]
    fn rejects_non_json_body() {
        assert_eq!(extract_detail("<html>502 Bad Gateway</html>"), None);
    }

    #[test]
    fn rejects_non_string_detail() {
        assert_eq!(extract_detail(r#"{"detail": {"code": 7}}"#), None);
    }
}
