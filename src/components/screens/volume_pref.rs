//! Volume slider screen.
//!
//! The slider drives the settings signal live (the audio layer reads it
//! reactively); Save writes it to disk, cancel puts back the volume that
//! was set when the screen opened.

use dioxus::prelude::*;

use spiretide_core::{Screen, ScreenToggle};

use crate::components::Window;
use crate::context::{persist_settings, use_screens, use_settings, use_translator};

#[component]
pub fn VolumePrefScreen() -> Element {
    let mut screens = use_screens();
    let mut settings = use_settings();
    let t = use_translator();
    let tr = move |key: &str| t.read().translate(key);

    let opened_with = use_hook(|| settings.peek().volume);
    let volume = settings().volume;

    rsx! {
        Window {
            screen: Screen::VolumePref,
            on_cancel: move |_| settings.write().volume = opened_with,

            div { class: "screen-body",
                h2 { class: "screen-title", {tr("Volume")} }

                label { class: "volume-row",
                    {tr("Master volume")}
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{volume}",
                        oninput: move |e| {
                            if let Ok(volume) = e.value().parse::<u8>() {
                                settings.write().volume = volume;
                            }
                        },
                    }
                    span { class: "volume-value", "{volume}%" }
                }

                button {
                    class: "confirm",
                    onclick: move |_| {
                        persist_settings(settings());
                        screens.write().apply(ScreenToggle::hide(Screen::VolumePref));
                    },
                    {tr("Save")}
                }
            }
        }
    }
}
