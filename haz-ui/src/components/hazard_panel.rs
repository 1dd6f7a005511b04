//! Side panel content for a completed hazard analysis.

use dioxus::prelude::*;
use haz_core::report::HazardReport;

#[derive(Props, Clone, PartialEq)]
pub struct HazardPanelProps {
    pub report: HazardReport,
}

/// Renders the analyzed location echo and one color-coded row per hazard
/// category, ordered alphabetically by hazard name.
#[component]
pub fn HazardPanel(props: HazardPanelProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",
            div {
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 14px; color: #555;",
                    "Location"
                }
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "Lat: {props.report.location.display_latitude()}"
                }
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "Lng: {props.report.location.display_longitude()}"
                }
            }
            div {
                h3 {
                    style: "margin: 0 0 8px 0; font-size: 14px; color: #555;",
                    "Hazards"
                }
                if props.report.is_empty() {
                    p {
                        style: "margin: 0; font-size: 13px; color: #666;",
                        "No hazards reported for this location."
                    }
                } else {
                    div {
                        style: "display: flex; flex-direction: column; gap: 8px;",
                        for (name, risk) in props.report.hazards.iter() {
                            div {
                                key: "{name}",
                                class: "{risk.css_class()}",
                                style: "padding: 8px 12px; border-radius: 4px; font-size: 13px; background: {risk.background()}; color: {risk.text_color()};",
                                "{name}: {risk}"
                            }
                        }
                    }
                }
            }
        }
    }
}
