//! Error banner component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Bold prefix before the message
    #[props(default = "Error".to_string())]
    pub label: String,
}

/// Displays an error message in a styled box. The rest of the page stays
/// usable underneath it.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{props.label}: " }
            "{props.message}"
        }
    }
}
