#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use spiretide_core::Locale;

/// Default launch window, logical pixels. Keep in step with
/// `GameSize::default()` in spiretide-core.
const WINDOW_WIDTH: f64 = 1200.0;
const WINDOW_HEIGHT: f64 = 720.0;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Locale forced from the command line, overriding saved settings
static LOCALE_OVERRIDE: OnceLock<Option<Locale>> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spiretide")
}

/// Get the locale forced via `--locale`, if any.
pub fn get_locale_override() -> Option<Locale> {
    LOCALE_OVERRIDE.get().copied().flatten()
}

/// Spiretide - a card duel of towers and storms
#[derive(Parser, Debug)]
#[command(name = "spiretide-desktop")]
#[command(about = "Spiretide - card duel desktop client")]
struct Args {
    /// Data directory for saved preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// UI language (en, zh), overriding the saved preference
    #[arg(short, long)]
    locale: Option<String>,

    /// Launch window width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Launch window height in logical pixels
    #[arg(long)]
    height: Option<f64>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());

    let locale = match args.locale.as_deref() {
        Some(tag) => match Locale::from_tag(tag) {
            Some(locale) => Some(locale),
            None => {
                tracing::warn!("unknown locale '{}', using saved preference", tag);
                None
            }
        },
        None => None,
    };
    let _ = LOCALE_OVERRIDE.set(locale);

    let window_width = args.width.unwrap_or(WINDOW_WIDTH);
    let window_height = args.height.unwrap_or(WINDOW_HEIGHT);

    tracing::info!("Starting Spiretide with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Spiretide")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
