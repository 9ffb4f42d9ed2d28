//! Language picker screen.
//!
//! Selecting a language applies it immediately so the user sees the change;
//! Save commits it to the settings file, while backing out of the screen
//! restores whatever was active when it opened.

use dioxus::prelude::*;

use spiretide_core::{Locale, Screen, ScreenToggle};

use crate::components::Window;
use crate::context::{persist_settings, use_screens, use_settings, use_translator};

#[component]
pub fn LanguagePrefScreen() -> Element {
    let mut screens = use_screens();
    let mut settings = use_settings();
    let mut translator = use_translator();
    let tr = move |key: &str| translator.read().translate(key);

    // Locale in effect when the screen opened, restored on cancel.
    let opened_with = use_hook(|| translator.peek().locale());

    rsx! {
        Window {
            screen: Screen::LanguagePref,
            on_cancel: move |_| translator.write().set_locale(opened_with),

            div { class: "screen-body",
                h2 { class: "screen-title", {tr("Language")} }

                div { class: "lang-options",
                    for locale in Locale::ALL {
                        button {
                            class: if translator().locale() == locale { "lang-option selected" } else { "lang-option" },
                            onclick: move |_| translator.write().set_locale(locale),
                            "{locale.native_name()}"
                        }
                    }
                }

                button {
                    class: "confirm",
                    onclick: move |_| {
                        let locale = translator.peek().locale();
                        settings.write().locale = locale;
                        persist_settings(settings());
                        screens.write().apply(ScreenToggle::hide(Screen::LanguagePref));
                    },
                    {tr("Save")}
                }
            }
        }
    }
}
