use dioxus::desktop::tao::event::{Event as WryEvent, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;

use spiretide_core::{GameSize, ScreenState, Settings, Translator};

use crate::pages::{Landing, Table};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the play button
/// - `/table` - The card table with its button bar and overlay screens
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/table")]
    Table {},
}

/// Root application component.
///
/// Provides global styles, the screen visibility store, the translator,
/// the size classifier, and persisted settings to the whole tree.
#[component]
pub fn App() -> Element {
    let settings: Signal<Settings> = use_signal(|| {
        Settings::load(&crate::get_data_dir()).unwrap_or_else(|e| {
            tracing::warn!("could not read saved settings, using defaults: {}", e);
            Settings::default()
        })
    });
    let screens: Signal<ScreenState> = use_signal(ScreenState::default);
    let translator: Signal<Translator> = use_signal(|| {
        let locale = crate::get_locale_override().unwrap_or(settings.peek().locale);
        Translator::new(locale)
    });
    let mut size: Signal<GameSize> = use_signal(GameSize::default);

    use_context_provider(|| settings);
    use_context_provider(|| screens);
    use_context_provider(|| translator);
    use_context_provider(|| size);

    // Seed the size classifier from the real window, then follow resizes so
    // components depending on the classification re-render.
    let window = use_window();
    use_effect({
        let window = window.clone();
        move || {
            let logical = window.inner_size().to_logical::<f64>(window.scale_factor());
            size.set(GameSize::new(logical.width, logical.height));
        }
    });
    use_wry_event_handler(move |event, _| {
        if let WryEvent::WindowEvent {
            event: WindowEvent::Resized(physical),
            ..
        } = event
        {
            let logical = physical.to_logical::<f64>(window.scale_factor());
            size.set(GameSize::new(logical.width, logical.height));
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
