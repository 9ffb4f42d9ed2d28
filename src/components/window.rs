//! Overlay window chrome and dismissal lifecycle.
//!
//! Every overlay screen renders inside a `Window`: full-screen backdrop,
//! centered frame with the game logo, the screen's own content, and a
//! dismiss button. The window also owns the dismissal lifecycle - a grace
//! period after it appears during which no trigger can close it, then
//! outside clicks, Escape, and Home all dismiss it.

use std::time::Duration;

use dioxus::prelude::*;

use spiretide_core::{DismissGate, GameSize, Screen};

use crate::components::Tooltip;
use crate::context::{use_game_size, use_screens, use_translator};

/// Reusable modal overlay bound to one visibility-store slot.
///
/// Dismissal goes through a single cancel routine shared by the backdrop
/// click, the Escape and Home keys, and the dismiss button. The routine is
/// a no-op until the grace timer unlocks the gate; once it runs, the
/// caller's `on_cancel` fires first and then the window dispatches
/// `ScreenToggle::hide` for its own slot. That dispatch is the only action
/// this component ever sends to the store.
#[component]
pub fn Window(
    /// Which visibility-store slot this window governs
    screen: Screen,
    /// Content rendered inside the frame
    children: Element,
    /// Runs once per successful dismissal, before the hide is dispatched
    #[props(default)] on_cancel: Option<EventHandler<()>>,
    /// Darker backdrop, for blocking notices
    #[props(default = false)] darker_bg: bool,
    /// Milliseconds before dismissal triggers start working
    #[props(default = 0)] exitable_delay: u64,
) -> Element {
    let mut screens = use_screens();
    let t = use_translator();
    let size = use_game_size();

    // Shared mutable cell: the handlers below are registered once, but each
    // invocation must observe the gate's latest state, so they read through
    // the signal instead of capturing a snapshot.
    let mut gate = use_signal(DismissGate::new);

    // One-shot grace timer. The task belongs to this scope, so hiding the
    // window before the deadline drops it and the gate stays locked.
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(exitable_delay)).await;
            gate.write().unlock();
            tracing::debug!(screen = screen.tag(), "overlay exitable");
        });
    });

    // The one cancel routine behind every dismissal trigger.
    let run_cancel = move || {
        let current = *gate.read();
        current.dismiss(
            screen,
            on_cancel.map(|cb| move || cb.call(())),
            &mut screens.write(),
        );
    };

    let tr = move |key: &str| t.read().translate(key);

    rsx! {
        div {
            class: if darker_bg { "window-bg darkerbg" } else { "window-bg" },
            tabindex: "0",
            autofocus: true,
            onclick: move |_| run_cancel(),
            onkeydown: move |e: KeyboardEvent| {
                if is_dismiss_key(&e.key()) {
                    run_cancel();
                }
            },

            div { class: "window-outerwrapper",
                div {
                    class: "window-wrapper",
                    onclick: move |e: Event<MouseData>| e.stop_propagation(),

                    Tooltip { title: tr("Spiretide"),
                        div { class: logo_class(size(), screen), "Spiretide" }
                    }

                    {children}

                    Tooltip { title: tr("Cancel"),
                        button {
                            class: "cancel",
                            accesskey: "c",
                            "aria-label": tr("Cancel"),
                            onclick: move |_| run_cancel(),
                        }
                    }
                }
            }
        }
    }
}

/// Escape and Home both dismiss; everything else is left to the screen.
fn is_dismiss_key(key: &Key) -> bool {
    matches!(key, Key::Escape | Key::Home)
}

/// The logo disappears only on the general preferences screen on phone
/// widths, where its height is needed for the toggles.
fn logo_hidden(size: GameSize, screen: Screen) -> bool {
    size.narrow_mobile() && screen == Screen::Preferences
}

fn logo_class(size: GameSize, screen: Screen) -> &'static str {
    if logo_hidden(size, screen) {
        "window-logo hidden"
    } else {
        "window-logo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow() -> GameSize {
        GameSize::new(480.0, 800.0)
    }

    fn wide() -> GameSize {
        GameSize::new(1200.0, 720.0)
    }

    #[test]
    fn logo_hides_only_for_preferences_on_narrow_mobile() {
        for screen in Screen::ALL {
            assert_eq!(logo_hidden(narrow(), screen), screen == Screen::Preferences);
            assert!(!logo_hidden(wide(), screen), "{} hid on desktop", screen.tag());
        }
    }

    #[test]
    fn logo_class_reflects_the_hiding_rule() {
        assert_eq!(logo_class(narrow(), Screen::Preferences), "window-logo hidden");
        assert_eq!(logo_class(narrow(), Screen::Help), "window-logo");
        assert_eq!(logo_class(wide(), Screen::Preferences), "window-logo");
    }

    #[test]
    fn escape_and_home_are_the_only_dismiss_keys() {
        assert!(is_dismiss_key(&Key::Escape));
        assert!(is_dismiss_key(&Key::Home));
        assert!(!is_dismiss_key(&Key::Enter));
        assert!(!is_dismiss_key(&Key::End));
        assert!(!is_dismiss_key(&Key::Character("c".to_string())));
    }
}
