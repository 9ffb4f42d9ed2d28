//! Spiretide Core Library
//!
//! UI-framework-free logic behind the Spiretide card table: which overlay
//! screens are visible, when an overlay may be dismissed, what language the
//! chrome speaks, how the viewport is classified, and which preferences
//! persist between sessions.
//!
//! ## Overview
//!
//! The desktop binary owns rendering; everything here is plain state that
//! the components drive and the tests exercise directly:
//!
//! - [`Screen`] - the closed set of overlay screens
//! - [`ScreenState`] - visibility flags, mutated only through
//!   [`ScreenToggle`] actions
//! - [`DismissGate`] - the locked/unlocked state machine that decides
//!   whether a dismissal trigger takes effect
//! - [`Translator`] - synchronous key lookup over bundled locale tables
//! - [`GameSize`] - viewport classification (narrow mobile, portrait)
//! - [`Settings`] - preferences saved as JSON in the data directory

pub mod dev;
pub mod error;
pub mod i18n;
pub mod overlay;
pub mod screen;
pub mod settings;
pub mod size;
pub mod store;

// Re-exports
pub use error::SettingsError;
pub use i18n::{Locale, Translator};
pub use overlay::DismissGate;
pub use screen::Screen;
pub use settings::Settings;
pub use size::GameSize;
pub use store::{ScreenState, ScreenToggle};
