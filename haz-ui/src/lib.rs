//! Shared Dioxus components and Leaflet bridge for the hazard map app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet glue via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (map container, hazard panel, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
