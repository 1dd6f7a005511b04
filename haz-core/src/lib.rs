//! Core types for the hazard analysis map.
//!
//! Everything here is target-agnostic; the `client` feature adds the
//! WASM fetch client used by the web app.

pub mod error;
pub mod geo;
pub mod report;
pub mod risk;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::HazardClient;
