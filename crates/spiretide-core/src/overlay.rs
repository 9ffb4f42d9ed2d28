//! Dismissal gating for overlay windows.
//!
//! A freshly shown overlay must not be closed by the same gesture that
//! opened it, so each `Window` instance owns a [`DismissGate`] that starts
//! `Locked` and is unlocked once by a timer after the caller's delay.
//! Every dismissal trigger (outside click, Escape, Home) funnels into
//! [`DismissGate::dismiss`], which reads the current state and either does
//! nothing or runs the cancel callback and hides the screen.

use crate::screen::Screen;
use crate::store::{ScreenState, ScreenToggle};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Gate {
    #[default]
    Locked,
    Unlocked,
}

/// Locked/unlocked state machine guarding overlay dismissal.
///
/// `Locked` is the initial state; [`unlock`](Self::unlock) moves to
/// `Unlocked`, which is terminal for the instance's lifetime. A re-shown
/// overlay gets a fresh gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DismissGate {
    state: Gate,
}

impl DismissGate {
    /// A locked gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable dismissal. Idempotent; there is no way back to `Locked`.
    pub fn unlock(&mut self) {
        self.state = Gate::Unlocked;
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == Gate::Unlocked
    }

    /// The cancel routine shared by all dismissal triggers.
    ///
    /// While `Locked` this is a no-op. Once `Unlocked` it runs `on_cancel`
    /// (if supplied) and then applies `ScreenToggle::hide(screen)` to the
    /// store, synchronously, in that order. Returns whether the dismissal
    /// took effect.
    ///
    /// Near-simultaneous triggers are not deduplicated: each call while
    /// `Unlocked` runs the callback and re-applies the hide.
    pub fn dismiss<F>(&self, screen: Screen, on_cancel: Option<F>, state: &mut ScreenState) -> bool
    where
        F: FnOnce(),
    {
        if !self.is_unlocked() {
            tracing::debug!(screen = screen.tag(), "dismissal suppressed while locked");
            return false;
        }
        if let Some(cancel) = on_cancel {
            cancel();
        }
        state.apply(ScreenToggle::hide(screen));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn starts_locked() {
        assert!(!DismissGate::new().is_unlocked());
    }

    #[test]
    fn locked_dismiss_is_a_no_op() {
        let gate = DismissGate::new();
        let mut state = ScreenState::default();
        state.apply(ScreenToggle::show(Screen::Help));
        let called = Cell::new(false);

        let effect = gate.dismiss(Screen::Help, Some(|| called.set(true)), &mut state);

        assert!(!effect);
        assert!(!called.get());
        assert!(state.is_shown(Screen::Help));
    }

    #[test]
    fn unlocked_dismiss_runs_callback_then_hides() {
        let mut gate = DismissGate::new();
        gate.unlock();
        let mut state = ScreenState::default();
        state.apply(ScreenToggle::show(Screen::Help));
        let called = Cell::new(false);

        let effect = gate.dismiss(Screen::Help, Some(|| called.set(true)), &mut state);

        assert!(effect);
        assert!(called.get());
        assert!(!state.is_shown(Screen::Help));
    }

    #[test]
    fn dismiss_without_callback_still_hides() {
        let mut gate = DismissGate::new();
        gate.unlock();
        let mut state = ScreenState::default();
        state.apply(ScreenToggle::show(Screen::Preferences));

        assert!(gate.dismiss::<fn()>(Screen::Preferences, None, &mut state));
        assert!(!state.is_shown(Screen::Preferences));
    }

    #[test]
    fn unlock_is_idempotent_and_terminal() {
        let mut gate = DismissGate::new();
        gate.unlock();
        gate.unlock();
        assert!(gate.is_unlocked());
    }

    #[test]
    fn rapid_triggers_each_run_the_callback() {
        // Accepted edge case: no dedup of near-simultaneous triggers.
        let mut gate = DismissGate::new();
        gate.unlock();
        let mut state = ScreenState::default();
        state.apply(ScreenToggle::show(Screen::VolumePref));
        let calls = Cell::new(0u32);

        gate.dismiss(Screen::VolumePref, Some(|| calls.set(calls.get() + 1)), &mut state);
        gate.dismiss(Screen::VolumePref, Some(|| calls.set(calls.get() + 1)), &mut state);

        assert_eq!(calls.get(), 2);
        assert!(!state.is_shown(Screen::VolumePref));
    }

    #[test]
    fn dismiss_leaves_other_screens_alone() {
        let mut gate = DismissGate::new();
        gate.unlock();
        let mut state = ScreenState::default();
        state.apply(ScreenToggle::show(Screen::Help));
        state.apply(ScreenToggle::show(Screen::LandscapeWarning));

        gate.dismiss::<fn()>(Screen::Help, None, &mut state);

        assert!(state.is_shown(Screen::LandscapeWarning));
    }
}
