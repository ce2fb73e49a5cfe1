//! Fixed-height container Leaflet renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    pub id: String,
    #[props(default = 480)]
    pub height: u32,
}

#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "height: {}px; width: 100%; border-radius: 4px; border: 1px solid #E0E0E0;",
        props.height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
