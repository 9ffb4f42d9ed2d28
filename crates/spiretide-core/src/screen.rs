//! Overlay screen identifiers.

/// The closed set of overlay screens tracked by [`ScreenState`].
///
/// Each variant names one slot in the visibility store. A `Window` instance
/// is bound to exactly one variant for its whole lifetime.
///
/// [`ScreenState`]: crate::store::ScreenState
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    /// General UI preferences
    Preferences,
    /// Language picker
    LanguagePref,
    /// Volume slider
    VolumePref,
    /// How-to-play text
    Help,
    /// Rotate-your-device notice
    LandscapeWarning,
    /// Connection-lost notice
    DisconnectNotice,
}

impl Screen {
    /// Every screen, in store order.
    pub const ALL: [Screen; 6] = [
        Screen::Preferences,
        Screen::LanguagePref,
        Screen::VolumePref,
        Screen::Help,
        Screen::LandscapeWarning,
        Screen::DisconnectNotice,
    ];

    /// Stable tag used in logs and action debugging.
    pub fn tag(&self) -> &'static str {
        match self {
            Screen::Preferences => "preferences",
            Screen::LanguagePref => "language-pref",
            Screen::VolumePref => "volume-pref",
            Screen::Help => "help",
            Screen::LandscapeWarning => "landscape-warning",
            Screen::DisconnectNotice => "disconnect-notice",
        }
    }

    /// Slot index into the visibility store.
    pub(crate) fn index(&self) -> usize {
        match self {
            Screen::Preferences => 0,
            Screen::LanguagePref => 1,
            Screen::VolumePref => 2,
            Screen::Help => 3,
            Screen::LandscapeWarning => 4,
            Screen::DisconnectNotice => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tags_are_unique() {
        let tags: HashSet<_> = Screen::ALL.iter().map(|s| s.tag()).collect();
        assert_eq!(tags.len(), Screen::ALL.len());
    }

    #[test]
    fn indices_cover_every_slot() {
        let mut seen = [false; 6];
        for screen in Screen::ALL {
            seen[screen.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
