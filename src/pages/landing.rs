//! Landing page - title card and the way into the duel.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_translator;

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let t = use_translator();
    let tr = move |key: &str| t.read().translate(key);

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "landing-title", {tr("Spiretide")} }
                p { class: "tagline", {tr("tagline")} }

                button {
                    class: "btn-play",
                    onclick: move |_| {
                        navigator.push(Route::Table {});
                    },
                    {tr("Play")}
                }
            }
        }
    }
}
