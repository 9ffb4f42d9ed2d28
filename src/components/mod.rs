//! UI components for the Spiretide chrome.

mod button_bar;
pub mod screens;
mod tooltip;
mod window;

pub use button_bar::ButtonBar;
pub use tooltip::Tooltip;
pub use window::Window;
