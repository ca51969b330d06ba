//! Labeled dropdown used for every explorer filter.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FilterSelectProps {
    /// DOM id of the `<select>`
    pub id: String,
    pub label: String,
    /// Option values, shown as-is and in this order
    pub options: Vec<String>,
    /// Currently selected value
    pub selected: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        label {
            style: "font-weight: bold; display: flex; flex-direction: column; gap: 2px; font-size: 12px;",
            r#for: "{props.id}",
            "{props.label}"
            select {
                id: "{props.id}",
                style: "min-width: 140px; padding: 4px;",
                onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
                for value in props.options.iter() {
                    option {
                        value: "{value}",
                        selected: *value == props.selected,
                        "{value}"
                    }
                }
            }
        }
    }
}
