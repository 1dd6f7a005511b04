//! Hazard Analysis Map
//!
//! Map-based UI for point hazard analysis: a navigation bar with static
//! routes (Home, Thesis Paper, About) and a Leaflet map view. Clicking the
//! map sends the coordinates to the hazard service and renders the returned
//! risk categories color-coded by level.
//!
//! Data flow:
//! 1. Leaflet CSS/JS load from a CDN via head elements; the js_bridge polls
//!    until the `L` global exists, then evaluates the embedded glue.
//! 2. On Home mount the bridge creates the map (OSM tiles, centered on the
//!    Philippines) and registers the click callback.
//! 3. A click drops/moves the marker, stores the coordinates and POSTs them
//!    to the hazard service; the side panel renders a loading indicator, an
//!    error string, or the color-coded hazard list.

use dioxus::prelude::*;

use haz_core::geo::GeoPoint;
use haz_core::HazardClient;
use haz_ui::components::{ErrorDisplay, HazardPanel, LoadingSpinner, MapContainer, PageHeader};
use haz_ui::js_bridge;
use haz_ui::state::AppState;

/// Hazard service base URL (fixed local endpoint).
const API_BASE_URL: &str = "http://localhost:8000";

/// DOM element id Leaflet renders into.
const MAP_ID: &str = "hazard-analysis-map";

/// Initial map view: the Philippines.
const MAP_CENTER: [f64; 2] = [12.8797, 121.774];
const MAP_ZOOM: u32 = 6;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const NAV_LINK_STYLE: &str =
    "color: #555; text-decoration: none; font-weight: 500; font-size: 14px;";

const PAGE_STYLE: &str = "max-width: 1200px; margin: 0 auto; padding: 16px;";

const PANEL_CARD_STYLE: &str =
    "background: #FFFFFF; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hazard-map-root"))
        .launch(App);
}

/// Application routes. All pages share the navigation bar layout.
#[derive(Routable, Debug, Clone, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/thesis")]
    ThesisPaper {},
    #[route("/about")]
    About {},
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        document::Title { "Hazard Analysis Map" }
        document::Stylesheet { href: "{LEAFLET_CSS_URL}" }
        document::Script { src: "{LEAFLET_JS_URL}" }
        Router::<Route> {}
    }
}

/// Shared layout: navigation bar above the routed page body.
#[component]
fn Shell() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #F5F5F5; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            NavBar {}
            Outlet::<Route> {}
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 32px; background: #FFFFFF; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",
            span {
                style: "font-size: 18px; font-weight: bold; color: #333;",
                "Hazard Analysis"
            }
            div {
                style: "display: flex; gap: 24px;",
                Link { to: Route::Home {}, style: NAV_LINK_STYLE, "Home" }
                Link { to: Route::ThesisPaper {}, style: NAV_LINK_STYLE, "Thesis Paper" }
                Link { to: Route::About {}, style: NAV_LINK_STYLE, "About Us" }
            }
        }
    }
}

/// Map view: Leaflet map beside the hazard information panel.
#[component]
fn Home() -> Element {
    let state = use_context::<AppState>();

    // Create the map and register the click callback once per mount
    use_effect(move || {
        js_bridge::init_map();

        let config = serde_json::json!({
            "center": MAP_CENTER,
            "zoom": MAP_ZOOM,
            "tileUrl": TILE_URL,
            "attribution": TILE_ATTRIBUTION,
        });
        js_bridge::render_map(MAP_ID, &config.to_string());

        js_bridge::on_map_click(move |latitude, longitude| {
            analyze_location(state, GeoPoint::new(latitude, longitude));
        });
    });

    use_drop(move || js_bridge::destroy_map(MAP_ID));

    let selected = (state.selected)();
    let loading = (state.loading)();
    let error_msg = (state.error_msg)();
    let report = (state.report)();

    rsx! {
        div {
            style: PAGE_STYLE,

            PageHeader {
                title: "Hazard Analysis Map".to_string(),
                subtitle: "Click a location to analyze its hazard risk categories.".to_string(),
            }

            div {
                style: "display: flex; gap: 16px; align-items: flex-start;",

                div {
                    style: "flex: 2; overflow: hidden; {PANEL_CARD_STYLE}",
                    MapContainer {
                        id: MAP_ID.to_string(),
                        height: 600,
                    }
                }

                div {
                    style: "flex: 1; padding: 16px; {PANEL_CARD_STYLE}",
                    h2 {
                        style: "margin: 0 0 12px 0; font-size: 18px; color: #333;",
                        "Hazard Information"
                    }
                    if let Some(point) = selected {
                        p {
                            style: "margin: 0 0 12px 0; font-size: 12px; color: #888;",
                            "Selected: {point}"
                        }
                    }
                    if loading {
                        LoadingSpinner {}
                    } else if let Some(message) = error_msg {
                        ErrorDisplay { message }
                    } else if let Some(report) = report {
                        HazardPanel { report }
                    } else {
                        p {
                            style: "margin: 0; font-size: 13px; color: #666;",
                            "Click anywhere on the map to analyze hazards for that location."
                        }
                    }
                }
            }
        }
    }
}

/// Kick off one hazard request for a clicked point.
///
/// Requests are never cancelled: a rapid second click races the first and
/// whichever response resolves last is the one displayed.
fn analyze_location(mut state: AppState, point: GeoPoint) {
    log::info!("Analyzing hazards at {}", point);

    state.selected.set(Some(point));
    state.error_msg.set(None);
    state.loading.set(true);

    wasm_bindgen_futures::spawn_local(async move {
        let client = HazardClient::new(API_BASE_URL);
        match client.analyze(point).await {
            Ok(report) => {
                log::info!("Received {} hazard categories", report.hazards.len());
                state.error_msg.set(None);
                state.report.set(Some(report));
            }
            Err(message) => {
                log::error!("Hazard analysis failed: {}", message);
                state.report.set(None);
                state.error_msg.set(Some(message));
            }
        }
        state.loading.set(false);
    });
}

#[component]
fn ThesisPaper() -> Element {
    rsx! {
        div {
            style: PAGE_STYLE,
            PageHeader { title: "Thesis Paper".to_string() }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        div {
            style: PAGE_STYLE,
            PageHeader { title: "About Us".to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn paths_parse_to_the_matching_page() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
        assert_eq!(Route::from_str("/thesis").unwrap(), Route::ThesisPaper {});
        assert_eq!(Route::from_str("/about").unwrap(), Route::About {});
    }

    #[test]
    fn pages_display_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::ThesisPaper {}.to_string(), "/thesis");
        assert_eq!(Route::About {}.to_string(), "/about");
    }

    #[test]
    fn unknown_path_is_rejected() {
        assert!(Route::from_str("/nope").is_err());
    }
}
