//! Connection-lost notice.

use dioxus::prelude::*;

use spiretide_core::Screen;

use crate::components::Window;
use crate::context::use_translator;

/// Long enough that a click racing the disconnect cannot eat the notice.
const EXITABLE_DELAY_MS: u64 = 1000;

#[component]
pub fn DisconnectNoticeScreen() -> Element {
    let t = use_translator();
    let tr = move |key: &str| t.read().translate(key);

    rsx! {
        Window {
            screen: Screen::DisconnectNotice,
            darker_bg: true,
            exitable_delay: EXITABLE_DELAY_MS,

            div { class: "screen-body",
                h2 { class: "screen-title", {tr("Connection lost")} }
                p { class: "notice-text", {tr("disconnect-hint")} }
            }
        }
    }
}
