//! Visibility store for overlay screens.
//!
//! One boolean `shown` flag per [`Screen`], mutated only by applying
//! [`ScreenToggle`] actions. The desktop binary wraps this in a reactive
//! signal and passes it down the component tree; nothing here knows about
//! rendering.

use crate::screen::Screen;

/// Action toggling one screen's visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenToggle {
    pub screen: Screen,
    pub show: bool,
}

impl ScreenToggle {
    pub fn show(screen: Screen) -> Self {
        Self { screen, show: true }
    }

    pub fn hide(screen: Screen) -> Self {
        Self { screen, show: false }
    }
}

/// Visibility flags for every overlay screen. All hidden initially.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenState {
    shown: [bool; Screen::ALL.len()],
}

impl ScreenState {
    /// Apply a dispatched action. The only mutation path.
    pub fn apply(&mut self, action: ScreenToggle) {
        tracing::debug!(screen = action.screen.tag(), show = action.show, "screen toggle");
        self.shown[action.screen.index()] = action.show;
    }

    pub fn is_shown(&self, screen: Screen) -> bool {
        self.shown[screen.index()]
    }

    /// True if any overlay is currently up.
    pub fn any_shown(&self) -> bool {
        self.shown.iter().any(|s| *s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_hidden() {
        let state = ScreenState::default();
        for screen in Screen::ALL {
            assert!(!state.is_shown(screen));
        }
        assert!(!state.any_shown());
    }

    #[test]
    fn toggle_affects_only_its_slot() {
        let mut state = ScreenState::default();
        state.apply(ScreenToggle::show(Screen::Help));

        assert!(state.is_shown(Screen::Help));
        assert!(state.any_shown());
        for screen in Screen::ALL {
            if screen != Screen::Help {
                assert!(!state.is_shown(screen), "{} leaked", screen.tag());
            }
        }
    }

    #[test]
    fn hide_after_show_round_trips() {
        let mut state = ScreenState::default();
        state.apply(ScreenToggle::show(Screen::VolumePref));
        state.apply(ScreenToggle::hide(Screen::VolumePref));
        assert_eq!(state, ScreenState::default());
    }

    #[test]
    fn hiding_an_already_hidden_screen_is_harmless() {
        let mut state = ScreenState::default();
        state.apply(ScreenToggle::hide(Screen::Preferences));
        assert_eq!(state, ScreenState::default());
    }
}
