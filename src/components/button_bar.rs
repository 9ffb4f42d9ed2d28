//! Corner button bar that raises the overlay screens.

use dioxus::prelude::*;

use spiretide_core::{dev, Screen, ScreenToggle};

use crate::components::Tooltip;
use crate::context::{use_screens, use_translator};

/// Preference, language, volume, and help buttons plus the source link.
#[component]
pub fn ButtonBar() -> Element {
    rsx! {
        div { class: "button-bar",
            ScreenButton { screen: Screen::Preferences, label: "Preferences", glyph: "⚙" }
            ScreenButton { screen: Screen::LanguagePref, label: "Language", glyph: "文" }
            ScreenButton { screen: Screen::VolumePref, label: "Volume", glyph: "♪" }
            ScreenButton { screen: Screen::Help, label: "Help", glyph: "?" }
            SourceButton {}
            if dev::DISCONNECT_NOTICE_DEMO {
                ScreenButton {
                    screen: Screen::DisconnectNotice,
                    label: "Simulate disconnect",
                    glyph: "⚡",
                }
            }
        }
    }
}

/// One bar button that shows its screen.
#[component]
fn ScreenButton(screen: Screen, label: String, glyph: String) -> Element {
    let mut screens = use_screens();
    let t = use_translator();
    let title = t.read().translate(&label);

    rsx! {
        Tooltip { title: title.clone(),
            button {
                class: "bar-button",
                "aria-label": title,
                onclick: move |_| screens.write().apply(ScreenToggle::show(screen)),
                "{glyph}"
            }
        }
    }
}

/// External link to the game's repository.
#[component]
fn SourceButton() -> Element {
    let t = use_translator();
    let title = t.read().translate("Source code");

    rsx! {
        Tooltip { title: title.clone(),
            a {
                class: "bar-button",
                href: dev::REPO_URL,
                target: "_blank",
                "aria-label": title,
                "</>"
            }
        }
    }
}
