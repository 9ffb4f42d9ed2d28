//! Rotate-your-device warning.
//!
//! Raised by the table when the viewport goes portrait. The grace delay
//! keeps the gesture that triggered the rotation from dismissing the
//! warning before it is seen.

use dioxus::prelude::*;

use spiretide_core::Screen;

use crate::components::Window;
use crate::context::use_translator;

/// Grace period before the warning can be waved away.
const EXITABLE_DELAY_MS: u64 = 1500;

#[component]
pub fn LandscapeWarningScreen() -> Element {
    let t = use_translator();
    let tr = move |key: &str| t.read().translate(key);

    rsx! {
        Window {
            screen: Screen::LandscapeWarning,
            darker_bg: true,
            exitable_delay: EXITABLE_DELAY_MS,

            div { class: "screen-body",
                h2 { class: "screen-title", {tr("Rotate your device")} }
                p { class: "notice-text", {tr("rotate-hint")} }
            }
        }
    }
}
