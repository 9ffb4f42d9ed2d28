//! The card table - hosts the button bar and every overlay screen.

use dioxus::prelude::*;

use spiretide_core::{Screen, ScreenToggle};

use crate::components::screens::{
    DisconnectNoticeScreen, HelpScreen, LandscapeWarningScreen, LanguagePrefScreen,
    PreferencesScreen, VolumePrefScreen,
};
use crate::components::ButtonBar;
use crate::context::{use_game_size, use_screens, use_settings, use_translator};

#[component]
pub fn Table() -> Element {
    let mut screens = use_screens();
    let size = use_game_size();
    let settings = use_settings();
    let t = use_translator();
    let tr = move |key: &str| t.read().translate(key);

    // Raise the rotate warning when the viewport goes portrait. Only the
    // size is read reactively; the store and settings are peeked so this
    // effect does not re-run on its own dispatch.
    use_effect(move || {
        if size().portrait()
            && !settings.peek().suppress_rotate_warning
            && !screens.peek().is_shown(Screen::LandscapeWarning)
        {
            tracing::info!("viewport went portrait, raising rotate warning");
            screens.write().apply(ScreenToggle::show(Screen::LandscapeWarning));
        }
    });

    rsx! {
        main { class: "table",
            div { class: "table-felt",
                div { class: "spire spire-theirs" }
                div { class: "spire spire-ours" }
                p { class: "table-hint", {tr("tagline")} }
            }

            ButtonBar {}

            if screens().is_shown(Screen::Preferences) {
                PreferencesScreen {}
            }
            if screens().is_shown(Screen::LanguagePref) {
                LanguagePrefScreen {}
            }
            if screens().is_shown(Screen::VolumePref) {
                VolumePrefScreen {}
            }
            if screens().is_shown(Screen::Help) {
                HelpScreen {}
            }
            if screens().is_shown(Screen::LandscapeWarning) {
                LandscapeWarningScreen {}
            }
            if screens().is_shown(Screen::DisconnectNotice) {
                DisconnectNoticeScreen {}
            }
        }
    }
}
