use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative risk level reported by the hazard service.
///
/// The wire strings are exactly `"low"`, `"medium"` and `"high"`; anything
/// else is a deserialization error. Ordering follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Lowercase label, identical to the wire string.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// CSS class for styling hooks on hazard rows.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }

    /// Background color for the color-coded hazard row.
    pub fn background(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#E8F5E9",
            RiskLevel::Medium => "#FFF8E1",
            RiskLevel::High => "#FFEBEE",
        }
    }

    /// Text color paired with [`RiskLevel::background`].
    pub fn text_color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#2E7D32",
            RiskLevel::Medium => "#F9A825",
            RiskLevel::High => "#C62828",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        for (level, wire) in [
            (RiskLevel::Low, r#""low""#),
            (RiskLevel::Medium, r#""medium""#),
            (RiskLevel::High, r#""high""#),
        ] {
            assert_eq!(serde_json::to_string(&level).unwrap(), wire);
            assert_eq!(serde_json::from_str::<RiskLevel>(wire).unwrap(), level);
        }
    }

    #[test]
    fn unknown_risk_string_is_rejected() {
        let parsed = serde_json::from_str::<RiskLevel>(r#""severe""#);
        assert!(parsed.is_err(), "unexpected level should not deserialize");
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn each_level_has_a_distinct_css_class() {
        assert_eq!(RiskLevel::Low.css_class(), "risk-low");
        assert_eq!(RiskLevel::Medium.css_class(), "risk-medium");
        assert_eq!(RiskLevel::High.css_class(), "risk-high");
    }

    #[test]
    fn each_level_has_a_distinct_color_pair() {
        let pairs = [
            (RiskLevel::Low.background(), RiskLevel::Low.text_color()),
            (RiskLevel::Medium.background(), RiskLevel::Medium.text_color()),
            (RiskLevel::High.background(), RiskLevel::High.text_color()),
        ];
        for (i, a) in pairs.iter().enumerate() {
            for b in pairs.iter().skip(i + 1) {
                assert_ne!(a, b, "risk levels must not share colors");
            }
        }
    }
}
