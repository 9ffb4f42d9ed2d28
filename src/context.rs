//! Context providers for the Spiretide UI.
//!
//! The screen visibility store, translator, size classifier, and settings
//! are provided to the component tree by `App` and reached through the
//! hooks below. Components never touch ambient globals; everything arrives
//! through context so the tree stays composable.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let mut screens = use_screens();
//! screens.write().apply(ScreenToggle::show(Screen::Help));
//! ```

use dioxus::prelude::*;
use spiretide_core::{GameSize, ScreenState, Settings, Translator};

/// Hook to access the screen visibility store.
///
/// All mutations go through `ScreenState::apply` on the signal's write
/// guard; the signal makes every dispatch visible to subscribed components.
pub fn use_screens() -> Signal<ScreenState> {
    use_context::<Signal<ScreenState>>()
}

/// Hook to access the localization service.
///
/// Reading through the signal at render time keeps labels current when the
/// locale changes.
pub fn use_translator() -> Signal<Translator> {
    use_context::<Signal<Translator>>()
}

/// Hook to access the current viewport classification.
pub fn use_game_size() -> Signal<GameSize> {
    use_context::<Signal<GameSize>>()
}

/// Hook to access the persisted preferences.
pub fn use_settings() -> Signal<Settings> {
    use_context::<Signal<Settings>>()
}

/// Write the given settings to the data directory off the render path.
///
/// Failures are logged and otherwise ignored; losing one save never takes
/// the UI down.
pub fn persist_settings(settings: Settings) {
    spawn(async move {
        let data_dir = crate::get_data_dir();
        if let Err(e) = settings.save(&data_dir) {
            tracing::warn!("failed to persist settings: {}", e);
        }
    });
}
