//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! Everything here is ephemeral UI state: a click replaces `selected` and
//! eventually replaces exactly one of `report` / `error_msg`. Nothing
//! persists beyond the page session.

use dioxus::prelude::*;
use haz_core::geo::GeoPoint;
use haz_core::report::HazardReport;

/// Shared UI state for the hazard map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Last clicked coordinate (None until the first click)
    pub selected: Signal<Option<GeoPoint>>,
    /// Whether a hazard request is in flight
    pub loading: Signal<bool>,
    /// Error message if the last request failed
    pub error_msg: Signal<Option<String>>,
    /// Most recent successful hazard report
    pub report: Signal<Option<HazardReport>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            selected: Signal::new(None),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            report: Signal::new(None),
        }
    }
}
