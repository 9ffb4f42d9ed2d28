//! Development toggles.
//!
//! Everything here should ship with the values below; flip them locally
//! when poking at rarely-seen UI states.

/// Repository link opened by the source button in the button bar.
pub const REPO_URL: &str = "https://github.com/spiretide/spiretide";

/// Show a button-bar button that raises the disconnect notice on demand.
/// The notice is normally raised by the connection layer, which this build
/// does not ship.
pub const DISCONNECT_NOTICE_DEMO: bool = false;
