//! Chart container component with an empty-series overlay.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Whether there is nothing to plot
    #[props(default = false)]
    pub empty: bool,
    /// Optional minimum height in pixels
    #[props(default = 360)]
    pub min_height: u32,
}

/// A container div for D3.js charts. Shows a hint when a search matched
/// but the series has no plottable samples.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.empty {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #9E9E9E; font-size: 13px;",
                    "No samples to plot"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
