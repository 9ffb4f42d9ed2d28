//! Theme for the Spiretide chrome.

mod styles;

pub use styles::GLOBAL_STYLES;
