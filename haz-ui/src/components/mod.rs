//! Reusable Dioxus RSX components for the hazard map app.

mod error_display;
mod hazard_panel;
mod loading_spinner;
mod map_container;
mod page_header;

pub use error_display::ErrorDisplay;
pub use hazard_panel::HazardPanel;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use page_header::PageHeader;
