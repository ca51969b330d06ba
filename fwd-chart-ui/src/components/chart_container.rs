//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Hidden containers stay mounted so the chart survives a view toggle
    #[props(default = true)]
    pub visible: bool,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A container div for D3.js charts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let display = if props.visible { "block" } else { "none" };
    let style = format!(
        "display: {}; min-height: {}px; position: relative; width: 100%;",
        display, props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
