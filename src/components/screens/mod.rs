//! Overlay screens, one per visibility-store slot, each framed by `Window`.

mod disconnect_notice;
mod help;
mod landscape_warning;
mod language_pref;
mod preferences;
mod volume_pref;

pub use disconnect_notice::DisconnectNoticeScreen;
pub use help::HelpScreen;
pub use landscape_warning::LandscapeWarningScreen;
pub use language_pref::LanguagePrefScreen;
pub use preferences::PreferencesScreen;
pub use volume_pref::VolumePrefScreen;
