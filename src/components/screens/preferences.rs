//! General preferences screen.

use dioxus::prelude::*;

use spiretide_core::Screen;

use crate::components::Window;
use crate::context::{persist_settings, use_settings, use_translator};

#[component]
pub fn PreferencesScreen() -> Element {
    let mut settings = use_settings();
    let t = use_translator();
    let tr = move |key: &str| t.read().translate(key);

    rsx! {
        Window { screen: Screen::Preferences,
            div { class: "screen-body",
                h2 { class: "screen-title", {tr("Preferences")} }

                label { class: "pref-row",
                    input {
                        r#type: "checkbox",
                        checked: settings().show_tooltips,
                        onchange: move |e| {
                            settings.write().show_tooltips = e.checked();
                            persist_settings(settings());
                        },
                    }
                    {tr("Show tooltips")}
                }

                label { class: "pref-row",
                    input {
                        r#type: "checkbox",
                        checked: !settings().suppress_rotate_warning,
                        onchange: move |e| {
                            settings.write().suppress_rotate_warning = !e.checked();
                            persist_settings(settings());
                        },
                    }
                    {tr("Warn about portrait windows")}
                }
            }
        }
    }
}
