//! How-to-play screen.

use dioxus::prelude::*;

use spiretide_core::Screen;

use crate::components::Window;
use crate::context::use_translator;

#[component]
pub fn HelpScreen() -> Element {
    let t = use_translator();
    let tr = move |key: &str| t.read().translate(key);

    rsx! {
        Window { screen: Screen::Help,
            div { class: "screen-body",
                h2 { class: "screen-title", {tr("How to play")} }
                p { class: "help-text", {tr("help-cards")} }
                p { class: "help-text", {tr("help-goal")} }
                p { class: "help-text", {tr("help-prefs")} }
            }
        }
    }
}
