//! Tooltip wrapper.

use dioxus::prelude::*;

use crate::context::use_settings;

/// Attaches a hover title to its children.
///
/// Honors the "show tooltips" preference: when it is off the children
/// render bare.
#[component]
pub fn Tooltip(title: String, children: Element) -> Element {
    let settings = use_settings();

    rsx! {
        if settings().show_tooltips {
            span { class: "tooltip-host", title: "{title}", {children.clone()} }
        } else {
            {children}
        }
    }
}
