//! Map container component.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (Leaflet will render into this)
    pub id: String,
    /// Height in pixels
    #[props(default = 600)]
    pub height: u32,
}

/// A container div for the Leaflet map.
///
/// Leaflet requires the container to have an explicit height before the
/// map is created.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "height: 100%; width: 100%;",
            }
        }
    }
}
